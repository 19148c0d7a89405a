//! Candidate universe listings.
//!
//! A listings source answers with the symbols that make up the candidate
//! universe for one market. The HTTP implementation expects a JSON array of
//! `{"symbol": ..., "name": ...}` objects; the file helpers persist the
//! universe as a two-column CSV so later stages can run offline.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DataResult;

/// One entry of the candidate universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Exchange symbol (bare, without venue suffix).
    pub symbol: String,

    /// Display name.
    pub name: String,
}

/// Source of the candidate universe.
#[async_trait]
pub trait ListingsSource {
    /// Returns all candidate listings for the configured market.
    async fn listings(&self) -> DataResult<Vec<Listing>>;
}

/// Listings source backed by an HTTP endpoint returning a JSON array.
pub struct HttpListings {
    client: reqwest::Client,
    url: String,
}

impl HttpListings {
    /// Creates a listings client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> DataResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ListingsSource for HttpListings {
    async fn listings(&self) -> DataResult<Vec<Listing>> {
        let listings = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Listing>>()
            .await?;

        tracing::info!(count = listings.len(), url = %self.url, "Fetched listings");
        Ok(listings)
    }
}

/// Loads a listings CSV (`symbol,name`, one header line).
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record fails to parse.
pub fn load_listings(path: impl AsRef<Path>) -> DataResult<Vec<Listing>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut listings = Vec::new();
    for result in reader.deserialize() {
        listings.push(result?);
    }

    Ok(listings)
}

/// Writes listings to a CSV file, header first.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn store_listings(path: impl AsRef<Path>, listings: &[Listing]) -> DataResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for listing in listings {
        writer.serialize(listing)?;
    }

    writer.flush()?;
    Ok(())
}
