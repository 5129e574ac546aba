//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MetricsSink` - Port for recording conversation events

mod metrics_sink;

pub use metrics_sink::MetricsSink;
