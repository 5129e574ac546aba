//! Metrics sink that writes events to the `tracing` pipeline.
//!
//! Events land under the `conversation_event` target so a subscriber can
//! route them separately from ordinary diagnostics.

use crate::domain::viewpoint::EventEnvelope;
use crate::ports::MetricsSink;

/// Logs every event as one structured `info` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMetricsSink;

impl TracingMetricsSink {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSink for TracingMetricsSink {
    fn record(&self, event: &EventEnvelope) {
        match serde_json::to_string(event) {
            Ok(payload) => tracing::info!(
                target: "conversation_event",
                event_type = event.event_type(),
                event_id = %event.event_id,
                agent = %event.agent,
                payload = %payload,
                "Conversation event: {}",
                event.event_type()
            ),
            Err(e) => tracing::warn!(
                target: "conversation_event",
                event_type = event.event_type(),
                "Failed to serialize conversation event: {}",
                e
            ),
        }
    }
}
