//! Application handlers.
//!
//! Handlers that orchestrate domain operations for one conversation turn.

pub mod viewpoint;

pub use viewpoint::TurnHandlerRegistry;
