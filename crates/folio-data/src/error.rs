//! Error types for market data acquisition.

use thiserror::Error;

/// A specialized Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while acquiring market data.
#[derive(Error, Debug)]
pub enum DataError {
    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response decoded but did not have the expected shape.
    #[error("Unexpected payload from {endpoint}: {reason}")]
    Payload {
        /// The endpoint that answered.
        endpoint: String,
        /// What was missing or malformed.
        reason: String,
    },

    /// A symbol has no usable price history.
    #[error("No usable history for '{symbol}': {reason}")]
    History {
        /// The symbol in question.
        symbol: String,
        /// Why the history is unusable.
        reason: String,
    },

    /// Error bubbled up from the core crate (asset invariants, CAGR).
    #[error(transparent)]
    Core(#[from] folio_core::CoreError),

    /// Listings file could not be parsed.
    #[error("Listings error: {0}")]
    Listings(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Creates a payload error.
    #[must_use]
    pub fn payload(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Payload {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unusable-history error.
    #[must_use]
    pub fn history(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::History {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::history("XCID", "fewer than 3600 closes");
        assert!(err.to_string().contains("No usable history for 'XCID'"));
    }
}
