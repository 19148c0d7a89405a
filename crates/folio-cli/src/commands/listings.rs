//! Listings command: download the candidate universe.
//!
//! Fetch failures are logged, not propagated; this stage exits cleanly
//! either way so a flaky venue does not break scripted pipelines.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use folio_data::{HttpListings, ListingsSource};

use crate::output::print_success;

/// Arguments for the listings command.
#[derive(Args, Debug)]
pub struct ListingsArgs {
    /// Endpoint returning the universe as a JSON array of
    /// {"symbol": ..., "name": ...} objects
    #[arg(long, env = "FOLIO_LISTINGS_URL")]
    pub url: String,

    /// Output listings file
    #[arg(long, default_value = "listings.csv")]
    pub out: PathBuf,
}

/// Execute the listings command.
pub async fn execute(args: ListingsArgs) -> Result<()> {
    let source = HttpListings::new(&args.url)?;

    match source.listings().await {
        Ok(listings) => {
            folio_data::listings::store_listings(&args.out, &listings)?;
            print_success(&format!(
                "Saved {} listings to {}",
                listings.len(),
                args.out.display()
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch listings");
        }
    }

    Ok(())
}
