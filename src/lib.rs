//! Viewpoint Discovery - Conversational turn handlers
//!
//! This crate implements a viewpoint discovery agent that runs behind a
//! conversation host. Each step of the scripted conversation is a stateless
//! handler that reads the host's context and answers with a sentence, a
//! context update and, optionally, a handoff request.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
