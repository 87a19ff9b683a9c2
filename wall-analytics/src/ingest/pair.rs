use crate::model::{LiquidityLevel, Side, SourceBreakdown, Token};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pair-mode response: wall observations for one trading pair.
///
/// Carries two candidate sell-level sequences, one computed against the
/// configured wall reference price and one against the live market price.
/// Exactly one of them is selected downstream via
/// [`PricingMode`](crate::model::PricingMode); the buy-level sequence is
/// unconditional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PairSnapshot {
    pub token0: Token,
    pub token1: Token,
    /// Live market price, quote per base.
    pub price: f64,
    pub buy_walls: Vec<RawWall>,
    pub sell_walls_in_wall_price: Vec<RawWall>,
    pub sell_walls_in_current_price: Vec<RawWall>,
    pub timestamp: DateTime<Utc>,
}

/// One wall observation within a contiguous price range.
///
/// ### Raw Payload Example
/// ```json
/// {
///     "price_lower": 1500.0,
///     "price_upper": 1550.0,
///     "liquidity_value": 35000000.0,
///     "dex_sources": { "uniswap_v3": 20000000.0, "uniswap_v2": 15000000.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawWall {
    pub price_lower: f64,
    pub price_upper: f64,
    pub liquidity_value: f64,
    /// Venue breakdown of the wall's total; omitted by some upstream sources.
    #[serde(default)]
    pub dex_sources: SourceBreakdown,
}

impl From<(Side, RawWall)> for LiquidityLevel {
    fn from((side, wall): (Side, RawWall)) -> Self {
        Self {
            side,
            price_lower: wall.price_lower,
            price_upper: wall.price_upper,
            liquidity_value: wall.liquidity_value,
            source_breakdown: wall.dex_sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod de {
        use super::*;

        #[test]
        fn test_raw_wall() {
            struct TestCase {
                input: &'static str,
                expected: RawWall,
            }

            let tests = vec![
                // TC0: wall with venue breakdown
                TestCase {
                    input: r#"
                        {
                            "price_lower": 1500.0,
                            "price_upper": 1550.0,
                            "liquidity_value": 35000000.0,
                            "dex_sources": { "uniswap_v3": 20000000.0 }
                        }
                    "#,
                    expected: RawWall {
                        price_lower: 1500.0,
                        price_upper: 1550.0,
                        liquidity_value: 35_000_000.0,
                        dex_sources: SourceBreakdown::from_iter([(
                            "uniswap_v3".into(),
                            20_000_000.0,
                        )]),
                    },
                },
                // TC1: wall without venue breakdown defaults to empty
                TestCase {
                    input: r#"
                        {
                            "price_lower": 1650.0,
                            "price_upper": 1700.0,
                            "liquidity_value": 30000000.0
                        }
                    "#,
                    expected: RawWall {
                        price_lower: 1650.0,
                        price_upper: 1700.0,
                        liquidity_value: 30_000_000.0,
                        dex_sources: SourceBreakdown::default(),
                    },
                },
            ];

            for (index, test) in tests.into_iter().enumerate() {
                let actual = serde_json::from_str::<RawWall>(test.input).unwrap();
                assert_eq!(actual, test.expected, "TC{} failed", index);
            }
        }
    }

    #[test]
    fn test_raw_wall_into_liquidity_level_keeps_breakdown() {
        let wall = RawWall {
            price_lower: 1500.0,
            price_upper: 1550.0,
            liquidity_value: 35_000_000.0,
            dex_sources: SourceBreakdown::from_iter([
                ("uniswap_v3".into(), 20_000_000.0),
                ("uniswap_v2".into(), 15_000_000.0),
            ]),
        };

        let level = LiquidityLevel::from((Side::Buy, wall));

        assert_eq!(level.side, Side::Buy);
        assert_eq!(level.liquidity_value, 35_000_000.0);
        assert_eq!(level.source_breakdown.len(), 2);
        assert_eq!(level.source_breakdown["uniswap_v3"], 20_000_000.0);
    }
}
