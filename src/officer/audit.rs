//! Bounded, newest-first audit trail of officer actions.
//!
//! The on-screen log keeps only the most recent entries. Every entry is also
//! queued in `unsynced` so the main loop can hand it to the on-disk
//! [`AuditLogger`](crate::logging::AuditLogger), which keeps the full trail.

use chrono::Local;
use std::collections::VecDeque;

pub const DEFAULT_AUDIT_CAPACITY: usize = 20;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub timestamp: String,
    pub message: String,
}

#[derive(Debug)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    capacity: usize,
    unsynced: Vec<AuditEntry>,
}

impl AuditLog {
    /// Keep at most `capacity` entries on screen (at least one). Storage
    /// grows on demand, so a huge configured bound costs nothing up front.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_AUDIT_CAPACITY)),
            capacity,
            unsynced: Vec::new(),
        }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let entry = AuditEntry {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            message: message.into(),
        };
        tracing::info!(target: "audit", "{}", entry.message);
        self.unsynced.push(entry.clone());
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Take every entry recorded since the last drain, oldest first.
    pub fn drain_unsynced(&mut self) -> Vec<AuditEntry> {
        std::mem::take(&mut self.unsynced)
    }
}

#[cfg(test)]
impl AuditLog {
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.front()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(needle))
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = AuditLog::default();
        log.record("first");
        log.record("second");
        let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("second"));
    }

    #[test]
    fn test_bounded_drops_oldest() {
        let mut log = AuditLog::new(20);
        for i in 0..25 {
            log.record(format!("entry {}", i));
        }
        assert_eq!(log.len(), 20);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("entry 24"));
        assert!(!log.contains("entry 4"));
        assert!(log.contains("entry 5"));
    }

    #[test]
    fn test_drain_unsynced_keeps_everything() {
        let mut log = AuditLog::new(2);
        log.record("a");
        log.record("b");
        log.record("c");
        let drained: Vec<_> = log.drain_unsynced().into_iter().map(|e| e.message).collect();
        assert_eq!(drained, vec!["a", "b", "c"]);
        assert!(log.drain_unsynced().is_empty());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut log = AuditLog::new(usize::MAX);
        log.record("x");
        assert_eq!(log.len(), 1);
        assert!(log.entries.capacity() < 1024);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut log = AuditLog::new(0);
        log.record("a");
        log.record("b");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("b"));
    }

    #[test]
    fn test_timestamp_has_second_precision() {
        let mut log = AuditLog::default();
        log.record("x");
        let ts = &log.latest().map(|e| e.timestamp.clone()).unwrap_or_default();
        assert_eq!(ts.len(), "2024-01-01 00:00:00".len());
    }
}
