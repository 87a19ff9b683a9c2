//! Canonical domain model shared by every pipeline stage.

use crate::error::AnalyticsError;
use derive_more::Constructor;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Venue identifier mapped to the quote-denominated liquidity it contributed.
pub type SourceBreakdown = FnvHashMap<SmolStr, f64>;

/// Token metadata supplied by the upstream data-fetching collaborator.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize, Constructor)]
pub struct Token {
    /// 20-byte hex address; treated as case-insensitive.
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub chain_id: u64,
}

impl Token {
    /// Case-insensitive address comparison, since upstream sources disagree
    /// on checksum casing.
    pub fn address_matches(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

/// Side of the book a liquidity level sits on.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize,
)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Side::Sell)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selects which of the two alternative pair-mode sell-level sets is
/// authoritative.
///
/// Aggregate-mode input carries a single level set; the selector is ignored
/// there. Threaded through the normalizer as an explicit argument so the
/// pipeline stays a pure function of its inputs.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Deserialize, Serialize,
)]
pub enum PricingMode {
    /// Sell ranges computed against the configured wall reference price.
    WallPrice,
    /// Sell ranges computed against the live market price.
    #[default]
    CurrentPrice,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::WallPrice => "wall_price",
            PricingMode::CurrentPrice => "current_price",
        }
    }
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical liquidity level produced by the normalizer.
///
/// Both upstream modes resolve to this shape so downstream consumers never
/// branch on the origin of a record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct LiquidityLevel {
    pub side: Side,
    pub price_lower: f64,
    pub price_upper: f64,
    /// Total liquidity within the range, denominated in the quote token.
    pub liquidity_value: f64,
    /// Per-venue contribution; empty when the upstream mode reports no
    /// per-venue detail. Values sum to at most `liquidity_value`.
    pub source_breakdown: SourceBreakdown,
}

impl LiquidityLevel {
    /// Representative price used on the chart axis.
    pub fn mid_price(&self) -> f64 {
        (self.price_lower + self.price_upper) / 2.0
    }

    /// Classify levels the aggregation must not consume.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.price_lower > self.price_upper || self.liquidity_value < 0.0 {
            return Err(AnalyticsError::MalformedLevel {
                price_lower: self.price_lower,
                price_upper: self.price_upper,
                liquidity_value: self.liquidity_value,
            });
        }

        Ok(())
    }
}
