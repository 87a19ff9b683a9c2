//! Reconciles the two upstream record shapes into canonical
//! [`LiquidityLevel`] sets, one per side.
//!
//! This is the only place that branches on the origin of a record; downstream
//! consumers see one shape regardless of upstream mode.

use crate::{
    error::AnalyticsError,
    ingest::{PairSnapshot, WallsSnapshot},
    model::{LiquidityLevel, PricingMode, Side},
};
use itertools::{Either, Itertools};

/// Canonical per-side level sets.
///
/// Order mirrors the upstream response and is NOT yet sorted by price; the
/// chart series builder owns ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedLevels {
    pub buys: Vec<LiquidityLevel>,
    pub sells: Vec<LiquidityLevel>,
}

/// Normalise a raw response into per-side canonical level sets.
///
/// An absent response is the "no data yet" state and yields
/// [`AnalyticsError::EmptyInput`]; callers must treat it as pending data, not
/// a user-visible failure. Malformed levels are discarded with a warning and
/// never abort the rest of the response.
pub fn normalize(
    snapshot: Option<&WallsSnapshot>,
    mode: PricingMode,
) -> Result<NormalizedLevels, AnalyticsError> {
    snapshot
        .map(|snapshot| from_snapshot(snapshot, mode))
        .ok_or(AnalyticsError::EmptyInput)
}

/// Infallible normalisation of a present response.
pub fn from_snapshot(snapshot: &WallsSnapshot, mode: PricingMode) -> NormalizedLevels {
    match snapshot {
        WallsSnapshot::Pair(pair) => from_pair(pair, mode),
        WallsSnapshot::Aggregate(aggregate) => {
            let (buys, sells) = aggregate
                .price_levels
                .iter()
                .cloned()
                .map(LiquidityLevel::from)
                .partition_map(|level| match level.side {
                    Side::Buy => Either::Left(level),
                    Side::Sell => Either::Right(level),
                });

            NormalizedLevels {
                buys: retain_valid(buys),
                sells: retain_valid(sells),
            }
        }
    }
}

fn from_pair(pair: &PairSnapshot, mode: PricingMode) -> NormalizedLevels {
    // Exactly one of the two candidate sell sets is authoritative; the other
    // is discarded.
    let sell_walls = match mode {
        PricingMode::WallPrice => &pair.sell_walls_in_wall_price,
        PricingMode::CurrentPrice => &pair.sell_walls_in_current_price,
    };

    let buys = pair
        .buy_walls
        .iter()
        .cloned()
        .map(|wall| LiquidityLevel::from((Side::Buy, wall)))
        .collect();

    let sells = sell_walls
        .iter()
        .cloned()
        .map(|wall| LiquidityLevel::from((Side::Sell, wall)))
        .collect();

    NormalizedLevels {
        buys: retain_valid(buys),
        sells: retain_valid(sells),
    }
}

/// Drop levels the aggregation must not consume, warning per discard.
fn retain_valid(levels: Vec<LiquidityLevel>) -> Vec<LiquidityLevel> {
    levels
        .into_iter()
        .filter(|level| match level.validate() {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "discarding malformed liquidity level");
                false
            }
        })
        .collect()
}
