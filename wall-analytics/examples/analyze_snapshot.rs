//! Run the full pipeline over a pair-mode JSON fixture and print the result
//! the way a rendering collaborator would.

use wall_analytics::{
    DEFAULT_SCALE_PERCENT, PricingMode, WallsSnapshot, analyze,
    format::{DEFAULT_QUANTITY_DECIMALS, format_price, format_quantity},
};

const SNAPSHOT: &str = r#"
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
                "dex_sources": { "uniswap_v3": 20000000.0, "uniswap_v2": 15000000.0 }
            }
        ],
        "sell_walls_in_wall_price": [],
        "sell_walls_in_current_price": [
            {
                "price_lower": 1650.0,
                "price_upper": 1700.0,
                "liquidity_value": 30000000.0,
                "dex_sources": {}
            }
        ],
        "timestamp": "2024-05-01T12:00:00Z"
    }
"#;

fn main() {
    tracing_subscriber::fmt::init();

    let snapshot = serde_json::from_str::<WallsSnapshot>(SNAPSHOT)
        .expect("fixture deserialises");

    let result = analyze(
        Some(&snapshot),
        PricingMode::CurrentPrice,
        DEFAULT_SCALE_PERCENT,
    )
    .expect("snapshot is present");

    println!(
        "{}/{} @ {}",
        result.token0.symbol,
        result.token1.symbol,
        format_price(result.current_price, &result.token1.symbol, None),
    );
    println!(
        "buy total : {}",
        format_quantity(
            result.stats.total_buy_liquidity,
            DEFAULT_QUANTITY_DECIMALS,
            Some("$")
        ),
    );
    println!(
        "sell total: {}",
        format_quantity(
            result.stats.total_sell_liquidity,
            DEFAULT_QUANTITY_DECIMALS,
            Some("$")
        ),
    );
    println!("buy/sell  : {:.4}", result.stats.buy_sell_ratio());

    for point in &result.chart_series {
        println!(
            "{:>8.2} ({:+.2}%) buy={} sell={}",
            point.price,
            point.percent_from_current,
            format_quantity(point.buy_liquidity, DEFAULT_QUANTITY_DECIMALS, Some("$")),
            format_quantity(point.sell_liquidity, DEFAULT_QUANTITY_DECIMALS, Some("$")),
        );
    }
}
