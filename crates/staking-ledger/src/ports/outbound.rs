//! Outbound (driven) ports for the staking ledger.
//!
//! The ledger's two external collaborators: a clock read at call time, and
//! an append-only sink for emitted notifications.

use crate::domain::Timestamp;
use crate::events::Notification;

/// External clock collaborator.
///
/// Supplies the current time per call, monotonic non-decreasing.
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Current time in milliseconds since UNIX epoch.
    fn now_ms(&self) -> Timestamp;
}

/// Append-only destination for emitted notifications.
///
/// The ledger publishes and forgets; delivery and retention are the
/// adapter's concern.
pub trait NotificationSink: Send + Sync {
    /// Records one notification.
    fn publish(&self, notification: Notification);
}
