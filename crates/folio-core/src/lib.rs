//! # Folio Core
//!
//! Catalog handling and constrained portfolio selection for equities.
//!
//! The crate turns a ranked catalog of candidate equities into the
//! portfolio with the highest projected end-of-period value, subject to a
//! cash budget, a per-asset concentration cap, a per-asset liquidity cap,
//! and a one-position-per-sector rule.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: selection is deterministic, synchronous, and free
//!   of I/O; the only file format here is the six-field CSV catalog
//! - **Validated construction**: an [`Asset`](types::Asset) cannot exist
//!   with a non-positive price
//! - **No partial catalogs**: a malformed record fails the whole load
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio_core::{catalog, select_portfolio};
//!
//! let assets = catalog::load_catalog("catalog.csv")?;
//! let selection = select_portfolio(&assets, 30.0, 500_000_000.0);
//! println!("projected: {}", selection.projected_value);
//! ```
//!
//! ## Module Overview
//!
//! - [`catalog`] - CSV catalog load/store
//! - [`growth`] - compound growth rate computation
//! - [`select`] - the backtracking selection search
//! - [`types`] - asset, position, and portfolio types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod error;
pub mod growth;
pub mod select;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use select::{select_portfolio, Selection};
pub use types::{Asset, Portfolio, Position, LIQUIDITY_CAP_FRACTION, SHARES_PER_LOT};
