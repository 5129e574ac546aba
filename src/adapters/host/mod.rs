//! Conversation host adapter.
//!
//! Wire shapes for the host's JSON turns and a JSON-lines driver that runs
//! them through the turn handler registry.

mod dto;
mod jsonl;

pub use dto::{InboundTurn, OutboundHandoff, OutboundTurn, WireMessage};
pub use jsonl::{HostError, JsonLineHost};
