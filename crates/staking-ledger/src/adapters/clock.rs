//! Clock adapters.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::Timestamp;
use crate::ports::TimeSource;

/// System wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Manually advanced time source for deterministic tests and simulation.
///
/// Only moves forward, matching the monotonic non-decreasing clock the
/// ledger expects.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now_ms: AtomicU64,
}

impl ManualTimeSource {
    /// Creates a clock starting at `initial_ms`.
    pub fn new(initial_ms: Timestamp) -> Self {
        Self {
            now_ms: AtomicU64::new(initial_ms),
        }
    }

    /// Advances the clock by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jumps the clock forward to `at_ms`. Backward jumps are ignored.
    pub fn set(&self, at_ms: Timestamp) {
        self.now_ms.fetch_max(at_ms, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> Timestamp {
        self.now_ms.load(Ordering::SeqCst)
    }
}
