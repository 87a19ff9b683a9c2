//! # Wall Analytics
//! Normalised liquidity-wall analytics for DEX trading pairs.
//!
//! The crate turns raw "liquidity wall" observations - fetched upstream for a
//! trading pair, or for a single token aggregated across its major pairs -
//! into summary statistics, a single ordered chart-ready series, and
//! human-readable price strings with magnitude-adaptive precision.
//!
//! The pipeline is pure and synchronous:
//! - [`ingest`] holds the two raw upstream record shapes and their
//!   [`WallsSnapshot`] union.
//! - [`mod@normalize`] reconciles either shape into canonical per-side
//!   [`LiquidityLevel`] sets.
//! - [`analytics`] derives totals, strongest levels and the windowed,
//!   percent-sorted chart series; [`analyze`] composes the whole run.
//! - [`format`] renders prices and quantities on demand for the renderer.
//!
//! Transport, retries and rendering are external collaborators: the crate
//! performs no I/O and retains no state between invocations. The only
//! temporal discipline a caller needs is last-write-wins result application,
//! supported by [`session::RequestSequence`].

pub mod analytics;
pub mod error;
pub mod format;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod session;

// Re-export the types a consumer touches on every analysis request.
pub use analytics::{AnalysisResult, analyze};
pub use analytics::series::{ChartPoint, DEFAULT_SCALE_PERCENT};
pub use analytics::stats::WallStats;
pub use error::AnalyticsError;
pub use ingest::WallsSnapshot;
pub use model::{LiquidityLevel, PricingMode, Side, Token};
pub use normalize::{NormalizedLevels, normalize};
