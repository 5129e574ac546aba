//! Viewpoint discovery turn handlers.
//!
//! [`TurnHandlerRegistry`] is the entry point; the per-step logic lives in
//! `steps` and is only reachable through the registry's failure envelope.

mod registry;
mod steps;

pub use registry::TurnHandlerRegistry;
