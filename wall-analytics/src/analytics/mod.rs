//! Derived analytics over normalised liquidity levels: summary statistics,
//! the chart-ready series, and the [`analyze`] entry point composing the full
//! pipeline run.

pub mod series;
pub mod stats;

pub use series::{ChartPoint, DEFAULT_SCALE_PERCENT};
pub use stats::WallStats;

use crate::{
    error::AnalyticsError,
    ingest::WallsSnapshot,
    model::{PricingMode, Token},
    normalize,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full derived output for one analysis request.
///
/// Created fresh per request and discarded when a newer request supersedes
/// it; every field is a pure function of the raw response plus the selected
/// parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub token0: Token,
    pub token1: Token,
    /// Live market price, quote per base.
    pub current_price: f64,
    /// Upstream observation time, for freshness display.
    pub timestamp: DateTime<Utc>,
    pub stats: WallStats,
    /// Merged series, ascending by percent-from-current, within the window.
    pub chart_series: Vec<ChartPoint>,
}

/// Run the full pipeline: normalise the raw response, aggregate statistics,
/// and build the chart series.
///
/// Formatting stays on demand - the renderer calls [`crate::format`] directly
/// on whichever fields it displays.
pub fn analyze(
    snapshot: Option<&WallsSnapshot>,
    mode: PricingMode,
    scale_percent: f64,
) -> Result<AnalysisResult, AnalyticsError> {
    let snapshot = snapshot.ok_or(AnalyticsError::EmptyInput)?;
    let levels = normalize::from_snapshot(snapshot, mode);

    Ok(AnalysisResult {
        token0: snapshot.token0().clone(),
        token1: snapshot.token1().clone(),
        current_price: snapshot.current_price(),
        timestamp: snapshot.timestamp(),
        stats: stats::aggregate(&levels),
        chart_series: series::build(&levels, snapshot.current_price(), scale_percent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ingest::{AggregateSnapshot, PairSnapshot, RawPriceLevel, RawWall},
        model::{Side, SourceBreakdown},
    };
    use chrono::Utc;

    fn token(symbol: &str) -> Token {
        Token::new(
            format!("0x{:0>40}", symbol.len()),
            symbol.to_string(),
            symbol.to_string(),
            18,
            1,
        )
    }

    #[test]
    fn test_analyze_absent_snapshot_is_empty_input() {
        assert_eq!(
            analyze(None, PricingMode::CurrentPrice, DEFAULT_SCALE_PERCENT),
            Err(AnalyticsError::EmptyInput)
        );
    }

    /// Pair-mode scenario: one buy wall with a venue breakdown and, under
    /// current-price mode, one sell wall; current price 1625.75.
    #[test]
    fn test_analyze_pair_mode_scenario() {
        let snapshot = WallsSnapshot::Pair(PairSnapshot {
            token0: token("WETH"),
            token1: token("USDC"),
            price: 1625.75,
            buy_walls: vec![RawWall {
                price_lower: 1500.0,
                price_upper: 1550.0,
                liquidity_value: 35_000_000.0,
                dex_sources: SourceBreakdown::from_iter([
                    ("uniswap_v3".into(), 20_000_000.0),
                    ("uniswap_v2".into(), 15_000_000.0),
                ]),
            }],
            sell_walls_in_wall_price: vec![],
            sell_walls_in_current_price: vec![RawWall {
                price_lower: 1650.0,
                price_upper: 1700.0,
                liquidity_value: 30_000_000.0,
                dex_sources: SourceBreakdown::default(),
            }],
            timestamp: Utc::now(),
        });

        let result = analyze(
            Some(&snapshot),
            PricingMode::CurrentPrice,
            DEFAULT_SCALE_PERCENT,
        )
        .unwrap();

        assert_eq!(result.current_price, 1625.75);
        assert_eq!(result.stats.total_buy_liquidity, 35_000_000.0);
        assert_eq!(result.stats.total_sell_liquidity, 30_000_000.0);
        assert!((result.stats.buy_sell_ratio() - 1.1667).abs() < 0.0001);

        let strongest_buy = result.stats.strongest_buy.as_ref().unwrap();
        assert_eq!(strongest_buy.price_lower, 1500.0);
        assert_eq!(strongest_buy.source_breakdown.len(), 2);

        // Both points fall within the 10% window: buy midpoint 1525 sits at
        // ~-6.20%, sell midpoint 1675 at ~+3.03%, ordered buy then sell.
        assert_eq!(result.chart_series.len(), 2);
        assert_eq!(result.chart_series[0].price, 1525.0);
        assert!(result.chart_series[0].buy_liquidity > 0.0);
        assert!((result.chart_series[0].percent_from_current - (-6.1971)).abs() < 0.001);
        assert_eq!(result.chart_series[1].price, 1675.0);
        assert!(result.chart_series[1].sell_liquidity > 0.0);
        assert!((result.chart_series[1].percent_from_current - 3.0294).abs() < 0.001);
    }

    /// Aggregate-mode scenario: three Buy and two Sell levels in shuffled
    /// order; totals and strongest-level selection must match sums/maxima
    /// over the side partitions regardless of array order.
    #[test]
    fn test_analyze_aggregate_mode_scenario() {
        let level = |side: Side, lower: f64, quote: f64| RawPriceLevel {
            side,
            lower_price: lower,
            upper_price: lower + 20.0,
            token0_liquidity: 1.0,
            token1_liquidity: quote,
            timestamp: Utc::now(),
        };

        let snapshot = WallsSnapshot::Aggregate(AggregateSnapshot {
            token0: token("WETH"),
            token1: token("USDC"),
            current_price: 1600.0,
            price_levels: vec![
                level(Side::Sell, 1650.0, 12_000_000.0),
                level(Side::Buy, 1540.0, 8_000_000.0),
                level(Side::Buy, 1500.0, 25_000_000.0),
                level(Side::Sell, 1700.0, 9_000_000.0),
                level(Side::Buy, 1560.0, 2_000_000.0),
            ],
            timestamp: Utc::now(),
        });

        let result = analyze(Some(&snapshot), PricingMode::CurrentPrice, 10.0).unwrap();

        assert_eq!(result.stats.total_buy_liquidity, 35_000_000.0);
        assert_eq!(result.stats.total_sell_liquidity, 21_000_000.0);
        assert_eq!(
            result.stats.strongest_buy.as_ref().map(|l| l.liquidity_value),
            Some(25_000_000.0)
        );
        assert_eq!(
            result
                .stats
                .strongest_sell
                .as_ref()
                .map(|l| l.liquidity_value),
            Some(12_000_000.0)
        );

        // Midpoints: 1510, 1550, 1570, 1660, 1710 against 1600; 1710 sits at
        // +6.875%, all five are inside the 10% window, sorted ascending.
        assert_eq!(result.chart_series.len(), 5);
        for pair in result.chart_series.windows(2) {
            assert!(pair[0].percent_from_current <= pair[1].percent_from_current);
        }
    }

    /// The full JSON → analyze path used by callers wiring the pipeline to a
    /// fetch collaborator.
    #[test]
    fn test_analyze_from_deserialized_json() {
        let input = r#"
            {
                "token0": {
                    "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                    "symbol": "WETH",
                    "name": "Wrapped Ether",
                    "decimals": 18,
                    "chain_id": 1
                },
                "token1": {
                    "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                    "symbol": "USDC",
                    "name": "USD Coin",
                    "decimals": 6,
                    "chain_id": 1
                },
                "price": 1625.75,
                "buy_walls": [
                    {
                        "price_lower": 1500.0,
                        "price_upper": 1550.0,
                        "liquidity_value": 35000000.0,
                        "dex_sources": {}
                    }
                ],
                "sell_walls_in_wall_price": [],
                "sell_walls_in_current_price": [],
                "timestamp": "2024-05-01T12:00:00Z"
            }
        "#;

        let snapshot = serde_json::from_str::<WallsSnapshot>(input).unwrap();
        let result = analyze(
            Some(&snapshot),
            PricingMode::CurrentPrice,
            DEFAULT_SCALE_PERCENT,
        )
        .unwrap();

        assert_eq!(result.token0.symbol, "WETH");
        assert_eq!(result.stats.total_buy_liquidity, 35_000_000.0);
        assert_eq!(result.stats.total_sell_liquidity, 0.0);
        assert_eq!(result.stats.buy_sell_ratio(), 0.0);
        assert_eq!(result.chart_series.len(), 1);
    }
}
