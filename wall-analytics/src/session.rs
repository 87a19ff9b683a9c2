//! Caller-side request supersession.
//!
//! The pipeline is pure and synchronous, so the only ordering discipline a
//! caller needs is last-write-wins at the point results are applied: when
//! parameters change faster than responses arrive, results computed for a
//! superseded request must be discarded, not applied. [`RequestSequence`]
//! issues monotonically increasing tokens to support exactly that check,
//! without shared mutable flags.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one analysis request.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RequestToken(u64);

/// Monotonically increasing request counter.
#[derive(Debug, Default)]
pub struct RequestSequence(AtomicU64);

impl RequestSequence {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Begin a new request, superseding all earlier ones.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True while `token` still belongs to the most recent request; a stale
    /// token means the computed result must be dropped.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.0.load(Ordering::Relaxed) == token.0
    }
}
