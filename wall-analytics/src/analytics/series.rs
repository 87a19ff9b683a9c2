//! Chart-ready series construction.
//!
//! The one place where pair-mode and aggregate-mode walls become directly
//! comparable on a single visual axis: every level collapses to its midpoint
//! price, annotated with the signed percent distance from the current price.

use crate::{
    model::{LiquidityLevel, Side},
    normalize::NormalizedLevels,
};
use serde::{Deserialize, Serialize};

/// Default visible window: levels at most 10% away from the current price.
pub const DEFAULT_SCALE_PERCENT: f64 = 10.0;

/// One point of the merged chart series.
///
/// Exactly one of `buy_liquidity` / `sell_liquidity` is non-zero, mirroring
/// the side of the originating level.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct ChartPoint {
    /// Level midpoint price.
    pub price: f64,
    /// Signed distance from the current price, in percent.
    pub percent_from_current: f64,
    pub buy_liquidity: f64,
    pub sell_liquidity: f64,
}

/// Build the merged, windowed, percent-sorted chart series.
///
/// Buys are merged before sells, points outside
/// `|percent_from_current| <= scale_percent` are dropped, and the remainder
/// is stable-sorted ascending by `percent_from_current` - equal percents keep
/// merge order (buy before sell). Any positive `scale_percent` bound is
/// accepted.
///
/// A non-positive `current_price` leaves every percent distance undefined,
/// so the series is empty.
pub fn build(
    levels: &NormalizedLevels,
    current_price: f64,
    scale_percent: f64,
) -> Vec<ChartPoint> {
    if current_price <= 0.0 {
        tracing::debug!(current_price, "chart series skipped: non-positive current price");
        return Vec::new();
    }

    let mut series: Vec<ChartPoint> = levels
        .buys
        .iter()
        .chain(levels.sells.iter())
        .map(|level| point(level, current_price))
        .filter(|point| point.percent_from_current.abs() <= scale_percent)
        .collect();

    // Stable sort: merge order survives for equal percents.
    series.sort_by(|a, b| a.percent_from_current.total_cmp(&b.percent_from_current));
    series
}

fn point(level: &LiquidityLevel, current_price: f64) -> ChartPoint {
    let price = level.mid_price();
    let (buy_liquidity, sell_liquidity) = match level.side {
        Side::Buy => (level.liquidity_value, 0.0),
        Side::Sell => (0.0, level.liquidity_value),
    };

    ChartPoint {
        price,
        percent_from_current: (price - current_price) / current_price * 100.0,
        buy_liquidity,
        sell_liquidity,
    }
}
