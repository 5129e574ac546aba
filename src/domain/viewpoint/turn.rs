//! Turn request and response values.

use std::time::Duration;

use super::context::{ContextUpdate, ConversationContext};

/// The user message delivered with a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingMessage {
    pub content: Option<String>,
}

impl IncomingMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// A message object whose content is null.
    pub fn without_content() -> Self {
        Self { content: None }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Everything a step handler may look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnRequest {
    pub message: Option<IncomingMessage>,
    pub context: ConversationContext,
}

impl TurnRequest {
    pub fn new(message: Option<IncomingMessage>, context: ConversationContext) -> Self {
        Self { message, context }
    }

    /// A request carrying only a message, with empty context.
    pub fn message(content: impl Into<String>) -> Self {
        Self::new(Some(IncomingMessage::new(content)), ConversationContext::new())
    }

    /// A request carrying only context, with no message object.
    pub fn context(context: ConversationContext) -> Self {
        Self::new(None, context)
    }

    pub fn with_context(mut self, context: ConversationContext) -> Self {
        self.context = context;
        self
    }
}

/// Advisory request for the host to transfer the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffDirective {
    pub agent: String,
    pub timeout: Duration,
}

impl HandoffDirective {
    pub fn new(agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: agent.into(),
            timeout,
        }
    }
}

/// A reply to the user, plus what the host should merge and execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResponse {
    pub response: String,
    pub context_update: ContextUpdate,
    pub handoff: Option<HandoffDirective>,
}

impl TurnResponse {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            context_update: ContextUpdate::default(),
            handoff: None,
        }
    }

    pub fn with_update(mut self, update: ContextUpdate) -> Self {
        self.context_update = update;
        self
    }

    pub fn with_handoff(mut self, handoff: HandoffDirective) -> Self {
        self.handoff = Some(handoff);
        self
    }
}

/// What a step produced for this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to say; the host moves on with its own flow.
    Continue,
    Reply(TurnResponse),
}

impl TurnOutcome {
    pub fn reply(response: impl Into<String>) -> Self {
        Self::Reply(TurnResponse::text(response))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// The reply, if this outcome carries one.
    pub fn response(&self) -> Option<&TurnResponse> {
        match self {
            Self::Continue => None,
            Self::Reply(response) => Some(response),
        }
    }

    pub fn response_text(&self) -> Option<&str> {
        self.response().map(|r| r.response.as_str())
    }

    /// The context update, empty for `Continue`.
    pub fn context_update(&self) -> ContextUpdate {
        self.response()
            .map(|r| r.context_update.clone())
            .unwrap_or_default()
    }
}

impl From<TurnResponse> for TurnOutcome {
    fn from(response: TurnResponse) -> Self {
        Self::Reply(response)
    }
}
