//! Constrained portfolio selection.
//!
//! Exhaustive backtracking search over index-increasing subsequences of a
//! candidate list, maximizing projected end-of-period value under four
//! constraints:
//!
//! - total spend within the cash budget,
//! - per-position spend within `max_allocation_pct` percent of the budget
//!   (concentration cap),
//! - per-position spend within 1% of the asset's market cap
//!   (liquidity cap),
//! - at most one position per sector.
//!
//! A chosen asset is always bought at the maximum lot count feasible under
//! the three monetary caps; smaller quantities are never explored. The
//! search carries no admissible-bound pruning and no deadline, so worst-case
//! time is exponential in the number of feasible candidates. Callers that
//! need bounded latency must impose an external deadline.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Asset, Portfolio, Position, LIQUIDITY_CAP_FRACTION, SHARES_PER_LOT};

/// Outcome of a selection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// The best portfolio found. Empty when nothing was feasible.
    pub portfolio: Portfolio,

    /// Projected end-of-period value of the invested cash.
    pub projected_value: f64,
}

impl Selection {
    /// The empty selection: no positions, zero projected value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cash actually spent on positions.
    #[must_use]
    pub fn invested(&self) -> f64 {
        self.portfolio.total_cost()
    }

    /// Cash left unspent out of the given budget.
    #[must_use]
    pub fn residual_cash(&self, cash: f64) -> f64 {
        cash - self.invested()
    }

    /// Absolute projected gain on the invested portion.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.projected_value - self.invested()
    }

    /// Projected gain as a percentage of the given budget.
    ///
    /// Zero when the budget is not positive.
    #[must_use]
    pub fn gain_pct(&self, cash: f64) -> f64 {
        if cash > 0.0 {
            self.gain() / cash * 100.0
        } else {
            0.0
        }
    }
}

/// Selects the portfolio maximizing projected end-of-period value.
///
/// Candidates are explored in growth-rate-descending order; the ordering
/// only shapes the traversal, every index-increasing subsequence is visited
/// regardless. The input slice is not mutated.
///
/// Degenerate parameters (`cash <= 0`, `max_allocation_pct <= 0`, empty
/// candidate list) yield the empty selection; they are valid results, not
/// errors.
#[must_use]
pub fn select_portfolio(assets: &[Asset], max_allocation_pct: f64, cash: f64) -> Selection {
    if assets.is_empty() || cash <= 0.0 || max_allocation_pct <= 0.0 {
        return Selection::empty();
    }

    let mut ranked = assets.to_vec();
    // total_cmp keeps the sort deterministic for equal growth rates.
    ranked.sort_by(|a, b| b.growth_rate.total_cmp(&a.growth_rate));

    let mut search = Search {
        ranked: &ranked,
        max_allocation: cash * max_allocation_pct / 100.0,
        best: Portfolio::new(),
        best_value: 0.0,
    };

    let mut portfolio = Portfolio::new();
    let mut used_sectors = HashSet::new();
    search.explore(&mut portfolio, &mut used_sectors, cash, 0.0, 0);

    Selection {
        portfolio: search.best,
        projected_value: search.best_value,
    }
}

/// Search state owned by a single selection run.
struct Search<'a> {
    ranked: &'a [Asset],
    max_allocation: f64,
    best: Portfolio,
    best_value: f64,
}

impl Search<'_> {
    /// Recursive backtracking step.
    ///
    /// `portfolio` and `used_sectors` are the live working state; every
    /// mutation made before a recursive call is undone after it returns,
    /// so both are unchanged when this frame exits.
    fn explore(
        &mut self,
        portfolio: &mut Portfolio,
        used_sectors: &mut HashSet<String>,
        cash: f64,
        projected_value: f64,
        index: usize,
    ) {
        // Interior nodes compete too: a partial portfolio wins whenever its
        // value strictly beats the best seen on any branch so far. The
        // snapshot must be a copy, the live portfolio keeps mutating.
        if !portfolio.is_empty() && projected_value > self.best_value {
            self.best = portfolio.clone();
            self.best_value = projected_value;
        }

        for i in index..self.ranked.len() {
            let asset = &self.ranked[i];

            if asset.price > cash || used_sectors.contains(&asset.sector) {
                continue;
            }

            let lots = max_feasible_lots(asset, self.max_allocation, cash);
            if lots == 0 {
                continue;
            }

            let spend = f64::from(lots) * asset.price * SHARES_PER_LOT;

            portfolio.insert(Position::new(asset.clone(), lots));
            used_sectors.insert(asset.sector.clone());

            self.explore(
                portfolio,
                used_sectors,
                cash - spend,
                projected_value + spend * (1.0 + asset.growth_rate / 100.0),
                i + 1,
            );

            used_sectors.remove(&asset.sector);
            portfolio.remove(&asset.id);
        }
    }
}

/// Maximum purchasable lot count under the liquidity, concentration, and
/// affordability caps. Zero means the asset is infeasible at any size.
fn max_feasible_lots(asset: &Asset, max_allocation: f64, cash: f64) -> u32 {
    let lot_cost = asset.price * SHARES_PER_LOT;

    let liquidity = (asset.market_cap * LIQUIDITY_CAP_FRACTION / lot_cost).floor();
    let concentration = (max_allocation / lot_cost).floor();
    let affordable = (cash / lot_cost).floor();

    // `as` saturates, so the cast is safe for any non-negative float.
    liquidity.min(concentration).min(affordable).max(0.0) as u32
}
