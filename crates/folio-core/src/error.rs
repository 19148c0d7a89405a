//! Error types for the Folio core library.
//!
//! This module defines the error types used throughout the core crate,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for catalog and selection operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Asset record failed a construction invariant.
    #[error("Invalid asset '{id}': {reason}")]
    InvalidAsset {
        /// Identifier of the offending asset.
        id: String,
        /// Description of the violated invariant.
        reason: String,
    },

    /// Two catalog records share the same identifier.
    #[error("Duplicate asset id '{id}' in catalog")]
    DuplicateAsset {
        /// The repeated identifier.
        id: String,
    },

    /// Invalid price value in a growth-rate computation.
    #[error("Invalid price: {value} - {reason}")]
    InvalidPrice {
        /// The invalid price value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid number of periods in a growth-rate computation.
    #[error("Invalid growth period: {periods} - must be positive")]
    InvalidPeriod {
        /// The invalid period count.
        periods: f64,
    },

    /// Catalog file could not be parsed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Creates an invalid asset error.
    #[must_use]
    pub fn invalid_asset(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value,
            reason: reason.into(),
        }
    }
}
