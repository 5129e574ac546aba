//! Application layer - turn handling.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::TurnHandlerRegistry;
