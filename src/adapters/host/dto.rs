//! Wire DTOs for the conversation host.
//!
//! These types decouple the host's JSON shapes from domain types. The host
//! sends context as a flat string map; only the keys the agent knows about
//! survive the conversion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::viewpoint::{
    ContextUpdate, ConversationContext, HandoffDirective, HandoffStatus, IncomingMessage,
    TurnOutcome, TurnRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Inbound
// ════════════════════════════════════════════════════════════════════════════════

/// One turn as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InboundTurn {
    /// Name of the step to run, e.g. `capture_topic`.
    pub step_name: String,
    /// The user message; may be null or omitted.
    #[serde(default)]
    pub message: Option<WireMessage>,
    /// Flat context map. Null values count as absent.
    #[serde(default)]
    pub context: HashMap<String, Option<String>>,
}

/// User message as sent by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WireMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl InboundTurn {
    /// Converts the wire turn into a typed request, dropping unknown keys.
    pub fn to_request(&self) -> TurnRequest {
        let message = self
            .message
            .as_ref()
            .map(|m| IncomingMessage { content: m.content.clone() });
        TurnRequest::new(message, context_from_wire(&self.context))
    }
}

fn context_from_wire(raw: &HashMap<String, Option<String>>) -> ConversationContext {
    let mut context = ConversationContext::new();
    let mut ignored: Vec<&str> = Vec::new();

    for (key, value) in raw {
        let Some(value) = value.clone() else {
            continue;
        };
        match key.as_str() {
            "topic" => context.topic = Some(value),
            "previous_topic" => context.previous_topic = Some(value),
            "viewpoint" => context.viewpoint = Some(value),
            "evidence" => context.evidence = Some(value),
            "new_fact" => context.new_fact = Some(value),
            "selected_perspective" => context.selected_perspective = Some(value),
            "handoff_status" => context.handoff_status = Some(HandoffStatus::parse(&value)),
            other => ignored.push(other),
        }
    }

    if !ignored.is_empty() {
        ignored.sort_unstable();
        debug!(keys = ?ignored, "Ignoring unknown context keys");
    }
    context
}

// ════════════════════════════════════════════════════════════════════════════════
// Outbound
// ════════════════════════════════════════════════════════════════════════════════

/// One turn's reply as sent back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundTurn {
    /// Response sentence; absent when the flow continues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// `true` when the host should carry on with its own flow.
    #[serde(rename = "continue", default, skip_serializing_if = "Option::is_none")]
    pub continue_flow: Option<bool>,
    /// Keys to merge into the stored context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_variables: Option<ContextUpdate>,
    /// Advisory transfer request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff: Option<OutboundHandoff>,
}

/// Handoff instruction, with the timeout in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundHandoff {
    pub agent: String,
    pub timeout: u64,
}

impl From<&HandoffDirective> for OutboundHandoff {
    fn from(directive: &HandoffDirective) -> Self {
        Self {
            agent: directive.agent.clone(),
            timeout: directive.timeout.as_secs(),
        }
    }
}

impl OutboundTurn {
    /// A reply carrying only a sentence.
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            ..Default::default()
        }
    }

    pub fn is_continue(&self) -> bool {
        self.continue_flow == Some(true)
    }
}

impl From<&TurnOutcome> for OutboundTurn {
    fn from(outcome: &TurnOutcome) -> Self {
        match outcome.response() {
            None => Self {
                continue_flow: Some(true),
                ..Default::default()
            },
            Some(reply) => Self {
                response: Some(reply.response.clone()),
                continue_flow: None,
                context_variables: (!reply.context_update.is_empty())
                    .then(|| reply.context_update.clone()),
                handoff: reply.handoff.as_ref().map(OutboundHandoff::from),
            },
        }
    }
}
