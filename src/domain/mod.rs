//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `viewpoint` - Conversation steps, typed context, perspective catalog,
//!   keyword classification and response templates
pub mod viewpoint;
