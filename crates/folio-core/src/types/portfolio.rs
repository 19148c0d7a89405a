//! Portfolio positions and the position map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Asset;

/// Shares per trading lot in this market convention.
pub const SHARES_PER_LOT: f64 = 100.0;

/// Fraction of an asset's market cap that a single position may absorb.
pub const LIQUIDITY_CAP_FRACTION: f64 = 0.01;

/// A held asset with its purchased lot count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// The held asset.
    pub asset: Asset,

    /// Number of trading lots held. Always positive.
    pub lots: u32,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub fn new(asset: Asset, lots: u32) -> Self {
        Self { asset, lots }
    }

    /// Cash spent on this position (`lots * price * shares-per-lot`).
    #[must_use]
    pub fn cost(&self) -> f64 {
        f64::from(self.lots) * self.asset.price * SHARES_PER_LOT
    }

    /// Projected end-of-period value of this position.
    #[must_use]
    pub fn projected_value(&self) -> f64 {
        self.cost() * (1.0 + self.asset.growth_rate / 100.0)
    }
}

/// A set of positions keyed by asset id.
///
/// Iteration order is the id order, so reports and equality checks are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    positions: BTreeMap<String, Position>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the portfolio holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of held positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Inserts a position, keyed by its asset id.
    pub fn insert(&mut self, position: Position) {
        self.positions
            .insert(position.asset.id.clone(), position);
    }

    /// Removes the position for the given asset id.
    pub fn remove(&mut self, id: &str) -> Option<Position> {
        self.positions.remove(id)
    }

    /// Looks up a position by asset id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Position> {
        self.positions.get(id)
    }

    /// Iterates positions in id order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    /// Total cash spent across all positions.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.positions.values().map(Position::cost).sum()
    }

    /// Total projected end-of-period value across all positions.
    #[must_use]
    pub fn total_projected_value(&self) -> f64 {
        self.positions.values().map(Position::projected_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn asset(id: &str, price: f64, growth: f64, sector: &str) -> Asset {
        Asset::new(id, id, price, growth, sector, 1.0e12).unwrap()
    }

    #[test]
    fn test_position_cost() {
        let position = Position::new(asset("A", 100.0, 10.0, "tech"), 5);
        // 5 lots x 100 shares x 100.0 = 50,000
        assert_relative_eq!(position.cost(), 50_000.0);
        assert_relative_eq!(position.projected_value(), 55_000.0);
    }

    #[test]
    fn test_portfolio_totals() {
        let mut portfolio = Portfolio::new();
        portfolio.insert(Position::new(asset("A", 100.0, 10.0, "tech"), 1));
        portfolio.insert(Position::new(asset("B", 50.0, 20.0, "bank"), 2));

        assert_eq!(portfolio.len(), 2);
        assert_relative_eq!(portfolio.total_cost(), 20_000.0);
        assert_relative_eq!(portfolio.total_projected_value(), 11_000.0 + 12_000.0);
    }

    #[test]
    fn test_iteration_is_id_ordered() {
        let mut portfolio = Portfolio::new();
        portfolio.insert(Position::new(asset("ZZ", 10.0, 1.0, "a"), 1));
        portfolio.insert(Position::new(asset("AA", 10.0, 1.0, "b"), 1));

        let ids: Vec<&str> = portfolio.positions().map(|p| p.asset.id.as_str()).collect();
        assert_eq!(ids, vec!["AA", "ZZ"]);
    }
}
