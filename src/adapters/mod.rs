//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `metrics` - Metrics sinks (tracing, in-memory)
//! - `host` - JSON wire format spoken with the conversation host

pub mod host;
pub mod metrics;

pub use host::{HostError, InboundTurn, JsonLineHost, OutboundHandoff, OutboundTurn};
pub use metrics::{InMemoryMetricsSink, TracingMetricsSink};
