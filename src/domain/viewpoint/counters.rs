//! Monotonic observability counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime counters owned by one registry.
///
/// Increments are atomic, so a registry shared across conversations needs
/// no further locking. No control-flow decision reads these values.
#[derive(Debug, Default)]
pub struct ConversationCounters {
    topic_changes: AtomicU64,
    handoff_attempts: AtomicU64,
    handoff_successes: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    pub topic_changes: u64,
    pub handoff_attempts: u64,
    pub handoff_successes: u64,
}

impl ConversationCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments and returns the new value.
    pub fn record_topic_change(&self) -> u64 {
        self.topic_changes.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Increments and returns the new value.
    pub fn record_handoff_attempt(&self) -> u64 {
        self.handoff_attempts.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Increments and returns the new value.
    pub fn record_handoff_success(&self) -> u64 {
        self.handoff_successes.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            topic_changes: self.topic_changes.load(Ordering::Relaxed),
            handoff_attempts: self.handoff_attempts.load(Ordering::Relaxed),
            handoff_successes: self.handoff_successes.load(Ordering::Relaxed),
        }
    }
}
