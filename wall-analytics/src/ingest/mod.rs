//! Raw record shapes consumed from the data-fetching collaborator.
//!
//! Upstream serves two incompatible JSON shapes: pair-mode walls for one
//! trading pair ([`pair::PairSnapshot`]) and aggregate-mode dual-sided price
//! levels for one token across its major pairs
//! ([`aggregate::AggregateSnapshot`]). [`WallsSnapshot`] unifies them into a
//! single tagged union so the normalizer is the only place that branches on
//! the origin of a record.

pub mod aggregate;
pub mod pair;

pub use aggregate::{AggregateSnapshot, RawPriceLevel};
pub use pair::{PairSnapshot, RawWall};

use crate::model::Token;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw response from the data-fetching collaborator, one variant per upstream
/// mode. Deserialized untagged: the two shapes share no field layout, so the
/// payload itself identifies the variant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WallsSnapshot {
    Pair(PairSnapshot),
    Aggregate(AggregateSnapshot),
}

impl WallsSnapshot {
    /// Live market price the chart series is centred on, quote per base.
    pub fn current_price(&self) -> f64 {
        match self {
            WallsSnapshot::Pair(pair) => pair.price,
            WallsSnapshot::Aggregate(aggregate) => aggregate.current_price,
        }
    }

    pub fn token0(&self) -> &Token {
        match self {
            WallsSnapshot::Pair(pair) => &pair.token0,
            WallsSnapshot::Aggregate(aggregate) => &aggregate.token0,
        }
    }

    pub fn token1(&self) -> &Token {
        match self {
            WallsSnapshot::Pair(pair) => &pair.token1,
            WallsSnapshot::Aggregate(aggregate) => &aggregate.token1,
        }
    }

    /// Upstream observation time, carried through for freshness display.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            WallsSnapshot::Pair(pair) => pair.timestamp,
            WallsSnapshot::Aggregate(aggregate) => aggregate.timestamp,
        }
    }
}
