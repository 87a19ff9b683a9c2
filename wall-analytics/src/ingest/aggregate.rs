use crate::model::{LiquidityLevel, Side, SourceBreakdown, Token};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate-mode response: dual-sided price levels for one token, summed
/// across its major pairs.
///
/// Carries a single flat level sequence tagged per-record with `side`; there
/// is no alternative sell-level set, so the pricing-mode selector does not
/// apply to this shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AggregateSnapshot {
    pub token0: Token,
    pub token1: Token,
    /// Live market price, quote per base.
    pub current_price: f64,
    pub price_levels: Vec<RawPriceLevel>,
    pub timestamp: DateTime<Utc>,
}

/// One aggregate-mode record describing liquidity within
/// `[lower_price, upper_price]` for one side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawPriceLevel {
    pub side: Side,
    pub lower_price: f64,
    pub upper_price: f64,
    /// Liquidity denominated in the base token.
    pub token0_liquidity: f64,
    /// Liquidity denominated in the quote token.
    pub token1_liquidity: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<RawPriceLevel> for LiquidityLevel {
    fn from(level: RawPriceLevel) -> Self {
        Self {
            side: level.side,
            price_lower: level.lower_price,
            price_upper: level.upper_price,
            // Quote-denominated totals keep both upstream modes comparable
            // downstream.
            liquidity_value: level.token1_liquidity,
            // Aggregate-mode records report no per-venue detail.
            source_breakdown: SourceBreakdown::default(),
        }
    }
}
