//! Screening pipeline: raw universe in, ranked CAGR catalog out.
//!
//! Per-symbol failures are logged and skipped so one bad symbol never
//! sinks the whole catalog; the survivors are ranked by growth rate and
//! truncated to the configured size.

use folio_core::growth::cagr;
use folio_core::Asset;

use crate::error::DataResult;
use crate::history::{HistorySource, HistoryWindow, UNKNOWN_SECTOR};
use crate::listings::Listing;

/// Tuning knobs for the screening pipeline.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Lookback and compounding horizon in years.
    pub years: u32,

    /// Minimum number of valid closes required over the lookback.
    pub min_points: usize,

    /// Catalog size cap after ranking.
    pub top_n: usize,

    /// Venue suffix appended to symbols for quote lookups (e.g. `.JK`).
    /// The catalog keeps the bare symbol as the asset id.
    pub suffix: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            years: 20,
            min_points: 3600,
            top_n: 100,
            suffix: String::new(),
        }
    }
}

/// Builds a ranked catalog from listings, one symbol at a time.
///
/// Symbols with too little history, a non-positive growth rate, an unknown
/// sector, or any per-symbol fetch error are skipped with a warning. The
/// result is sorted by growth rate descending and truncated to
/// `opts.top_n`.
///
/// # Errors
///
/// Returns an error only when the listings themselves are unavailable;
/// per-symbol failures never abort the build.
pub async fn build_catalog<H: HistorySource>(
    listings: &[Listing],
    history: &H,
    opts: &CatalogOptions,
) -> DataResult<Vec<Asset>> {
    let window = HistoryWindow::lookback_years(opts.years);
    let mut assets = Vec::new();

    for listing in listings {
        match screen_symbol(listing, history, window, opts).await {
            Ok(Some(asset)) => assets.push(asset),
            Ok(None) => {
                tracing::debug!(symbol = %listing.symbol, "Screened out");
            }
            Err(e) => {
                tracing::warn!(symbol = %listing.symbol, error = %e, "Skipping symbol");
            }
        }
    }

    assets.sort_by(|a, b| b.growth_rate.total_cmp(&a.growth_rate));
    assets.truncate(opts.top_n);

    tracing::info!(
        screened = listings.len(),
        kept = assets.len(),
        "Catalog build complete"
    );

    Ok(assets)
}

/// Screens one listing. `Ok(None)` means cleanly filtered out.
async fn screen_symbol<H: HistorySource>(
    listing: &Listing,
    history: &H,
    window: HistoryWindow,
    opts: &CatalogOptions,
) -> DataResult<Option<Asset>> {
    let venue_symbol = format!("{}{}", listing.symbol, opts.suffix);

    let series = history.history(&venue_symbol, window).await?;
    if series.closes.len() < opts.min_points {
        return Ok(None);
    }

    let (Some(start), Some(end)) = (series.first_close(), series.last_close()) else {
        return Ok(None);
    };
    if start <= 0.0 {
        return Ok(None);
    }

    let growth = cagr(start, end, f64::from(opts.years))?;
    if growth <= 0.0 {
        return Ok(None);
    }

    let profile = history.profile(&venue_symbol).await?;
    if profile.sector == UNKNOWN_SECTOR {
        return Ok(None);
    }

    // The catalog format is flat CSV; keep the delimiter out of the field.
    let sector = profile.sector.replace(',', "-");

    let asset = Asset::new(
        listing.symbol.clone(),
        profile.name,
        end,
        growth,
        sector,
        profile.market_cap,
    )?;

    Ok(Some(asset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::history::{CompanyProfile, PriceHistory};
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubHistory {
        series: HashMap<String, Vec<f64>>,
        profiles: HashMap<String, CompanyProfile>,
    }

    #[async_trait]
    impl HistorySource for StubHistory {
        async fn history(&self, symbol: &str, _window: HistoryWindow) -> DataResult<PriceHistory> {
            self.series
                .get(symbol)
                .map(|closes| PriceHistory {
                    closes: closes.clone(),
                })
                .ok_or_else(|| DataError::history(symbol, "no fixture"))
        }

        async fn profile(&self, symbol: &str) -> DataResult<CompanyProfile> {
            self.profiles
                .get(symbol)
                .cloned()
                .ok_or_else(|| DataError::history(symbol, "no fixture"))
        }
    }

    fn profile(name: &str, sector: &str, market_cap: f64) -> CompanyProfile {
        CompanyProfile {
            name: name.into(),
            sector: sector.into(),
            market_cap,
        }
    }

    fn listing(symbol: &str) -> Listing {
        Listing {
            symbol: symbol.into(),
            name: symbol.into(),
        }
    }

    /// A close series long enough to pass the minimum-points screen.
    fn long_series(start: f64, end: f64, points: usize) -> Vec<f64> {
        let mut closes = vec![start; points - 1];
        closes.push(end);
        closes
    }

    fn opts() -> CatalogOptions {
        CatalogOptions {
            years: 20,
            min_points: 100,
            top_n: 100,
            suffix: String::new(),
        }
    }

    #[tokio::test]
    async fn test_build_ranks_by_growth() {
        let history = StubHistory {
            series: HashMap::from([
                ("SLOW".to_string(), long_series(100.0, 200.0, 100)),
                ("FAST".to_string(), long_series(100.0, 800.0, 100)),
            ]),
            profiles: HashMap::from([
                ("SLOW".to_string(), profile("Slow Co", "Telecom", 1.0e12)),
                ("FAST".to_string(), profile("Fast Co", "Banks", 2.0e12)),
            ]),
        };

        let catalog = build_catalog(&[listing("SLOW"), listing("FAST")], &history, &opts())
            .await
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "FAST");
        assert_eq!(catalog[1].id, "SLOW");
        assert!(catalog[0].growth_rate > catalog[1].growth_rate);
    }

    #[tokio::test]
    async fn test_screens_out_unusable_symbols() {
        let history = StubHistory {
            series: HashMap::from([
                // Too few closes.
                ("SHORT".to_string(), long_series(100.0, 200.0, 10)),
                // Declining: non-positive growth.
                ("DOWN".to_string(), long_series(200.0, 100.0, 100)),
                // No sector from the venue.
                ("NOSEC".to_string(), long_series(100.0, 200.0, 100)),
                ("GOOD".to_string(), long_series(100.0, 200.0, 100)),
            ]),
            profiles: HashMap::from([
                ("SHORT".to_string(), profile("Short", "Banks", 1.0e12)),
                ("DOWN".to_string(), profile("Down", "Banks", 1.0e12)),
                ("NOSEC".to_string(), profile("NoSec", UNKNOWN_SECTOR, 1.0e12)),
                ("GOOD".to_string(), profile("Good", "Banks", 1.0e12)),
            ]),
        };

        let universe = vec![
            listing("SHORT"),
            listing("DOWN"),
            listing("NOSEC"),
            listing("MISSING"), // fetch error: logged and skipped
            listing("GOOD"),
        ];

        let catalog = build_catalog(&universe, &history, &opts()).await.unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "GOOD");
    }

    #[tokio::test]
    async fn test_suffix_applies_to_lookup_not_id() {
        let history = StubHistory {
            series: HashMap::from([("BBCA.JK".to_string(), long_series(100.0, 200.0, 100))]),
            profiles: HashMap::from([(
                "BBCA.JK".to_string(),
                profile("Bank Central Asia", "Banks", 1.0e15),
            )]),
        };

        let mut options = opts();
        options.suffix = ".JK".to_string();

        let catalog = build_catalog(&[listing("BBCA")], &history, &options)
            .await
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "BBCA");
    }

    #[tokio::test]
    async fn test_sector_delimiter_is_sanitized() {
        let history = StubHistory {
            series: HashMap::from([("X".to_string(), long_series(100.0, 200.0, 100))]),
            profiles: HashMap::from([(
                "X".to_string(),
                profile("X Co", "Oil, Gas & Consumable Fuels", 1.0e12),
            )]),
        };

        let catalog = build_catalog(&[listing("X")], &history, &opts())
            .await
            .unwrap();

        assert_eq!(catalog[0].sector, "Oil- Gas & Consumable Fuels");
    }

    #[tokio::test]
    async fn test_top_n_truncation() {
        let mut series = HashMap::new();
        let mut profiles = HashMap::new();
        let mut universe = Vec::new();

        for i in 0..5 {
            let symbol = format!("S{i}");
            series.insert(symbol.clone(), long_series(100.0, 200.0 + f64::from(i), 100));
            profiles.insert(symbol.clone(), profile(&symbol, "Banks", 1.0e12));
            universe.push(listing(&symbol));
        }

        let mut options = opts();
        options.top_n = 3;

        let catalog = build_catalog(&universe, &StubHistory { series, profiles }, &options)
            .await
            .unwrap();

        assert_eq!(catalog.len(), 3);
        // The highest-growth symbols survive the cut.
        assert_eq!(catalog[0].id, "S4");
    }
}
