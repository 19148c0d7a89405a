//! Core value types: assets, positions, portfolios.

mod asset;
mod portfolio;

pub use asset::Asset;
pub use portfolio::{Portfolio, Position, LIQUIDITY_CAP_FRACTION, SHARES_PER_LOT};
