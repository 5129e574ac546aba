//! In-memory metrics sink for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::Mutex;

use crate::domain::viewpoint::EventEnvelope;
use crate::ports::MetricsSink;

/// Captures every recorded event for assertions.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(InMemoryMetricsSink::new());
/// let registry = TurnHandlerRegistry::new(settings, sink.clone());
///
/// registry.handle(ConversationStep::CaptureTopic, &TurnRequest::message("AI"));
///
/// assert!(sink.has_event("topic_selected"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryMetricsSink {
    events: Mutex<Vec<EventEnvelope>>,
}

impl InMemoryMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded events.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn events(&self) -> Vec<EventEnvelope> {
        self.events
            .lock()
            .expect("InMemoryMetricsSink: lock poisoned")
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.events()
            .into_iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        !self.events_of_type(event_type).is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.events
            .lock()
            .expect("InMemoryMetricsSink: lock poisoned")
            .len()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .expect("InMemoryMetricsSink: lock poisoned")
            .clear();
    }
}

impl MetricsSink for InMemoryMetricsSink {
    fn record(&self, event: &EventEnvelope) {
        self.events
            .lock()
            .expect("InMemoryMetricsSink: lock poisoned")
            .push(event.clone());
    }
}
