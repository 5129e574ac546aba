//! Metrics sink adapters.

mod in_memory;
mod tracing_sink;

pub use in_memory::InMemoryMetricsSink;
pub use tracing_sink::TracingMetricsSink;
