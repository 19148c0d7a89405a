//! Candidate asset records.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A candidate equity in the selection universe.
///
/// Immutable once constructed; the validating constructor is the only way
/// to build one, so `price > 0` holds for every live `Asset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique stable identifier (ticker), unique within a catalog.
    pub id: String,

    /// Display name. Not required to be unique.
    pub name: String,

    /// Price per single share, in currency units.
    pub price: f64,

    /// Projected return over the holding period, in percent.
    pub growth_rate: f64,

    /// Industry/sector classification; the diversification key.
    pub sector: String,

    /// Market capitalization in currency units.
    pub market_cap: f64,
}

impl Asset {
    /// Creates a validated asset record.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is not strictly positive, if the
    /// market cap is negative, or if any numeric field is not finite.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        growth_rate: f64,
        sector: impl Into<String>,
        market_cap: f64,
    ) -> CoreResult<Self> {
        let id = id.into();

        if !price.is_finite() || price <= 0.0 {
            return Err(CoreError::invalid_asset(&id, "price must be positive"));
        }
        if !growth_rate.is_finite() {
            return Err(CoreError::invalid_asset(&id, "growth_rate must be finite"));
        }
        if !market_cap.is_finite() || market_cap < 0.0 {
            return Err(CoreError::invalid_asset(
                &id,
                "market_cap must be non-negative",
            ));
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
            growth_rate,
            sector: sector.into(),
            market_cap,
        })
    }
}
