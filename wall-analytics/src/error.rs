use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors generated in `wall-analytics`.
///
/// None of these is fatal to a caller: [`AnalyticsError::EmptyInput`] is the
/// "no data yet" state, while the other two variants are resolved inside the
/// pipeline (levels discarded with a warning, ratios short-circuited to 0) and
/// exist so the conditions are explicit values rather than control flow.
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize, Error)]
pub enum AnalyticsError {
    #[error("no liquidity snapshot received yet")]
    EmptyInput,

    #[error("ratio denominator is zero")]
    DivisionGuard,

    #[error(
        "malformed liquidity level: price_lower {price_lower} > price_upper {price_upper} \
         or negative liquidity_value {liquidity_value}"
    )]
    MalformedLevel {
        price_lower: f64,
        price_upper: f64,
        liquidity_value: f64,
    },
}
