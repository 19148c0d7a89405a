//! Price history and company profile sources.
//!
//! The [`HistorySource`] trait covers the two lookups the screening stage
//! needs per symbol: a time-ordered close series for the lookback window,
//! and descriptive metadata (name, sector, market cap). [`YahooHistory`]
//! implements both against the public Yahoo Finance v8 chart and v7 quote
//! endpoints.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::error::{DataError, DataResult};

/// Sector value used when the venue reports none. Screened out later.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// A closed lookback window in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    /// Window start, unix seconds.
    pub start: i64,
    /// Window end, unix seconds.
    pub end: i64,
}

impl HistoryWindow {
    /// A window ending now and starting the given number of years back.
    #[must_use]
    pub fn lookback_years(years: u32) -> Self {
        let end = Utc::now().timestamp();
        let start = end - i64::from(years) * 365 * 24 * 60 * 60;
        Self { start, end }
    }
}

/// A time-ordered series of valid closing prices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    /// Closing prices, oldest first. Nulls from the venue are dropped.
    pub closes: Vec<f64>,
}

impl PriceHistory {
    /// First valid close, if any.
    #[must_use]
    pub fn first_close(&self) -> Option<f64> {
        self.closes.first().copied()
    }

    /// Last valid close, if any.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}

/// Descriptive metadata for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    /// Display name.
    pub name: String,
    /// Industry/sector classification; [`UNKNOWN_SECTOR`] when missing.
    pub sector: String,
    /// Market capitalization in currency units. Zero when missing.
    pub market_cap: f64,
}

/// Source of per-symbol price history and metadata.
#[async_trait]
pub trait HistorySource {
    /// Returns the close series for the symbol over the window.
    async fn history(&self, symbol: &str, window: HistoryWindow) -> DataResult<PriceHistory>;

    /// Returns descriptive metadata for the symbol.
    async fn profile(&self, symbol: &str) -> DataResult<CompanyProfile>;
}

/// History source backed by the Yahoo Finance chart and quote endpoints.
pub struct YahooHistory {
    client: reqwest::Client,
    base_url: String,
}

impl YahooHistory {
    /// Default endpoint host.
    pub const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com";

    /// Creates a client against the default host.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> DataResult<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom host (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> DataResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl HistorySource for YahooHistory {
    async fn history(&self, symbol: &str, window: HistoryWindow) -> DataResult<PriceHistory> {
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, symbol, window.start, window.end
        );

        let payload: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let closes = extract_closes(&payload)
            .ok_or_else(|| DataError::payload("v8/finance/chart", "missing close series"))?;

        // Polite pause so batch screening does not trip venue throttling.
        tokio::time::sleep(Duration::from_millis(100)).await;

        Ok(PriceHistory { closes })
    }

    async fn profile(&self, symbol: &str) -> DataResult<CompanyProfile> {
        let url = format!("{}/v7/finance/quote?symbols={}", self.base_url, symbol);

        let payload: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_profile(&payload)
            .ok_or_else(|| DataError::payload("v7/finance/quote", "missing quote result"))
    }
}

/// Pulls the valid close series out of a chart response.
///
/// Path: `chart.result[0].indicators.quote[0].close`; null entries
/// (untraded days) are dropped.
fn extract_closes(payload: &Value) -> Option<Vec<f64>> {
    let result = payload["chart"]["result"].as_array()?.first()?;
    let quote = result["indicators"]["quote"].as_array()?.first()?;
    let closes = quote["close"].as_array()?;

    Some(closes.iter().filter_map(Value::as_f64).collect())
}

/// Pulls name, sector, and market cap out of a quote response.
fn extract_profile(payload: &Value) -> Option<CompanyProfile> {
    let result = payload["quoteResponse"]["result"].as_array()?.first()?;

    let name = result["shortName"]
        .as_str()
        .or_else(|| result["longName"].as_str())
        .unwrap_or("Unknown")
        .to_string();

    let sector = result["industry"]
        .as_str()
        .or_else(|| result["sector"].as_str())
        .unwrap_or(UNKNOWN_SECTOR)
        .to_string();

    let market_cap = result["marketCap"].as_f64().unwrap_or(0.0);

    Some(CompanyProfile {
        name,
        sector,
        market_cap,
    })
}
