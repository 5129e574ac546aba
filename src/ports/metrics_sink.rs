//! MetricsSink port - where conversation events are delivered.
//!
//! The turn handlers never perform I/O themselves. Whatever storage or
//! transport the host uses for metrics lives behind this trait.

use crate::domain::viewpoint::EventEnvelope;

/// Port for recording conversation events.
///
/// Recording is infallible from the caller's point of view: a sink that
/// cannot deliver an event must swallow (and may log) the failure.
pub trait MetricsSink: Send + Sync {
    /// Record a single event.
    fn record(&self, event: &EventEnvelope);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn MetricsSink) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn boxed_sink_is_send_sync() {
        assert_send_sync::<Box<dyn MetricsSink>>();
    }
}
