//! In-memory audit log adapter.

use std::sync::RwLock;

use crate::events::Notification;
use crate::ports::NotificationSink;

/// Append-only, in-order retention of every published notification.
///
/// The reference sink for tests and embedded deployments; a production
/// deployment would put a durable sink behind the same port.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: RwLock<Vec<Notification>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications recorded so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the full log, in emission order.
    pub fn entries(&self) -> Vec<Notification> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Notification>> {
        // A poisoned log is still a valid append-only record.
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl NotificationSink for InMemoryAuditLog {
    fn publish(&self, notification: Notification) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
