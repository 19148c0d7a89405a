//! Screen command: build the growth-ranked catalog from the universe.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use folio_core::catalog::store_catalog;
use folio_data::{build_catalog, CatalogOptions, YahooHistory};

use crate::output::{print_info, print_success};

/// Arguments for the screen command.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Input listings file
    #[arg(long, default_value = "listings.csv")]
    pub input: PathBuf,

    /// Output catalog file
    #[arg(long, default_value = "catalog.csv")]
    pub out: PathBuf,

    /// Lookback and compounding horizon in years
    #[arg(long, default_value = "20")]
    pub years: u32,

    /// Minimum valid closes required over the lookback
    #[arg(long, default_value = "3600")]
    pub min_points: usize,

    /// Keep only the top N symbols by growth rate
    #[arg(long, default_value = "100")]
    pub top: usize,

    /// Venue suffix appended to symbols for quote lookups (e.g. .JK)
    #[arg(long, default_value = "")]
    pub suffix: String,
}

/// Execute the screen command.
pub async fn execute(args: ScreenArgs) -> Result<()> {
    let listings = folio_data::listings::load_listings(&args.input)?;
    print_info(&format!(
        "Screening {} symbols over {} years",
        listings.len(),
        args.years
    ));

    let history = YahooHistory::new()?;
    let options = CatalogOptions {
        years: args.years,
        min_points: args.min_points,
        top_n: args.top,
        suffix: args.suffix,
    };

    let catalog = build_catalog(&listings, &history, &options).await?;

    store_catalog(&args.out, &catalog)?;
    print_success(&format!(
        "Saved {} catalog rows to {}",
        catalog.len(),
        args.out.display()
    ));

    Ok(())
}
