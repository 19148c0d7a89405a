//! # Folio Data
//!
//! Market data acquisition for the folio catalog.
//!
//! Two async source traits cover what the screening pipeline needs:
//! [`listings::ListingsSource`] for the candidate universe and
//! [`history::HistorySource`] for per-symbol close series and metadata.
//! HTTP implementations target the public Yahoo Finance endpoints; tests
//! swap in in-memory stubs.
//!
//! The failure policy is log-and-continue: a symbol that cannot be
//! screened is skipped with a warning so the catalog keeps as many usable
//! rows as possible.
//!
//! ## Module Overview
//!
//! - [`listings`] - candidate universe source and CSV persistence
//! - [`history`] - close series and company profile source
//! - [`universe`] - the screening pipeline producing a ranked catalog

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod history;
pub mod listings;
pub mod universe;

pub use error::{DataError, DataResult};
pub use history::{CompanyProfile, HistorySource, HistoryWindow, PriceHistory, YahooHistory};
pub use listings::{HttpListings, Listing, ListingsSource};
pub use universe::{build_catalog, CatalogOptions};
