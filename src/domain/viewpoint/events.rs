//! Conversation events emitted for observability.
//!
//! Events are fire-and-forget. Nothing in the turn handlers reads them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keywords::{EvidenceKind, NextStepChoice};

/// Agent a handoff is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffTarget {
    Debate,
    Whiteboard,
}

/// Something worth recording that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ConversationEvent {
    TopicSelected {
        topic: String,
    },
    ViewpointCaptured {
        topic: String,
        viewpoint_length: usize,
    },
    TopicChanged {
        from: String,
        to: String,
        change_count: u64,
    },
    EvidenceProvided {
        kind: EvidenceKind,
        length: usize,
        contains_citations: bool,
    },
    PerspectiveSelected {
        perspective: String,
        custom: bool,
    },
    PerspectiveDeclined,
    SummaryGenerated {
        topic: String,
        has_perspective: bool,
        has_new_fact: bool,
    },
    NextStepSelected {
        choice: NextStepChoice,
    },
    HandoffAttempted {
        target: HandoffTarget,
        attempt_number: u64,
    },
    HandoffReturned {
        from_status: String,
        success_count: u64,
        topic: String,
    },
}

impl ConversationEvent {
    /// Stable event type name, matching the serialized tag.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TopicSelected { .. } => "topic_selected",
            Self::ViewpointCaptured { .. } => "viewpoint_captured",
            Self::TopicChanged { .. } => "topic_changed",
            Self::EvidenceProvided { .. } => "evidence_provided",
            Self::PerspectiveSelected { .. } => "perspective_selected",
            Self::PerspectiveDeclined => "perspective_declined",
            Self::SummaryGenerated { .. } => "summary_generated",
            Self::NextStepSelected { .. } => "next_step_selected",
            Self::HandoffAttempted { .. } => "handoff_attempted",
            Self::HandoffReturned { .. } => "handoff_returned",
        }
    }
}

/// Event plus identity and timing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: Uuid,
    pub agent: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: ConversationEvent,
}

impl EventEnvelope {
    pub fn new(agent: impl Into<String>, event: ConversationEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            agent: agent.into(),
            occurred_at: Utc::now(),
            event,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
