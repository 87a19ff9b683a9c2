//! Summary statistics over normalised liquidity levels.

use crate::{error::AnalyticsError, model::LiquidityLevel, normalize::NormalizedLevels};
use serde::{Deserialize, Serialize};

/// Summary statistics for one analysis request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct WallStats {
    /// Sum of buy-side liquidity values, 0 when the side is empty.
    pub total_buy_liquidity: f64,
    /// Sum of sell-side liquidity values, 0 when the side is empty.
    pub total_sell_liquidity: f64,
    /// Buy level with the maximum liquidity value, if any.
    pub strongest_buy: Option<LiquidityLevel>,
    /// Sell level with the maximum liquidity value, if any.
    pub strongest_sell: Option<LiquidityLevel>,
}

impl WallStats {
    /// `total_buy / total_sell`, short-circuited to 0 when the sell side is
    /// empty.
    pub fn buy_sell_ratio(&self) -> f64 {
        guarded_div(self.total_buy_liquidity, self.total_sell_liquidity)
    }

    /// Buy-side share of combined liquidity in `[0, 1]`, 0 when both sides
    /// are empty.
    pub fn buy_share(&self) -> f64 {
        guarded_div(
            self.total_buy_liquidity,
            self.total_buy_liquidity + self.total_sell_liquidity,
        )
    }

    /// Sell-side share of combined liquidity in `[0, 1]`, 0 when both sides
    /// are empty.
    pub fn sell_share(&self) -> f64 {
        guarded_div(
            self.total_sell_liquidity,
            self.total_buy_liquidity + self.total_sell_liquidity,
        )
    }
}

/// Compute totals and strongest levels for both sides.
///
/// Correct on unsorted input: selection depends only on liquidity values and
/// input order, never on price ordering.
pub fn aggregate(levels: &NormalizedLevels) -> WallStats {
    WallStats {
        total_buy_liquidity: total(&levels.buys),
        total_sell_liquidity: total(&levels.sells),
        strongest_buy: strongest(&levels.buys).cloned(),
        strongest_sell: strongest(&levels.sells).cloned(),
    }
}

fn total(levels: &[LiquidityLevel]) -> f64 {
    levels.iter().map(|level| level.liquidity_value).sum()
}

/// Level with the maximum liquidity value; equal maxima resolve to the first
/// occurrence in input order so the selection is stable and deterministic.
fn strongest(levels: &[LiquidityLevel]) -> Option<&LiquidityLevel> {
    levels.iter().fold(None, |best: Option<&LiquidityLevel>, level| {
        match best {
            Some(best) if best.liquidity_value >= level.liquidity_value => Some(best),
            _ => Some(level),
        }
    })
}

/// Division with an explicit zero-denominator guard: resolves to 0 instead of
/// propagating NaN or infinity.
fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    match checked_div(numerator, denominator) {
        Ok(ratio) => ratio,
        Err(error) => {
            tracing::debug!(%error, "ratio short-circuited to 0");
            0.0
        }
    }
}

fn checked_div(numerator: f64, denominator: f64) -> Result<f64, AnalyticsError> {
    if denominator > 0.0 {
        Ok(numerator / denominator)
    } else {
        Err(AnalyticsError::DivisionGuard)
    }
}
