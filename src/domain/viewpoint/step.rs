//! Conversation steps of the viewpoint discovery script.
//!
//! The host platform owns the flow graph and tells us which step a turn
//! belongs to. Steps never infer their successor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named stage in the viewpoint discovery conversation.
///
/// Each step is bound to exactly one handler in the turn handler registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStep {
    /// Static greeting that opens the conversation.
    Introduction,

    /// Captures and validates the topic the user wants to explore.
    CaptureTopic,

    /// Records the user's first statement of their viewpoint.
    InitialViewpoint,

    /// Compares the current topic against the previous one.
    DetectTopicChange,

    /// Records the evidence backing the viewpoint.
    EvidenceQuestion,

    /// Lets the user pick an analytical perspective, or decline.
    PerspectiveExploration,

    /// Summarizes everything gathered so far.
    Summary,

    /// Offers deepening, a debate handoff, or a whiteboard handoff.
    NextSteps,

    /// Follow-up questions for users who chose to go deeper.
    DeeperQuestions,

    /// Farewell.
    Closing,

    /// Welcomes the user back after a handoff to another agent.
    HandleReturnFromHandoff,
}

impl ConversationStep {
    /// Every step, in script order.
    pub const ALL: [ConversationStep; 11] = [
        Self::Introduction,
        Self::CaptureTopic,
        Self::InitialViewpoint,
        Self::DetectTopicChange,
        Self::EvidenceQuestion,
        Self::PerspectiveExploration,
        Self::Summary,
        Self::NextSteps,
        Self::DeeperQuestions,
        Self::Closing,
        Self::HandleReturnFromHandoff,
    ];

    /// Returns the wire name the host platform uses for this step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::CaptureTopic => "capture_topic",
            Self::InitialViewpoint => "initial_viewpoint",
            Self::DetectTopicChange => "detect_topic_change",
            Self::EvidenceQuestion => "evidence_question",
            Self::PerspectiveExploration => "perspective_exploration",
            Self::Summary => "summary",
            Self::NextSteps => "next_steps",
            Self::DeeperQuestions => "deeper_questions",
            Self::Closing => "closing",
            Self::HandleReturnFromHandoff => "handle_return_from_handoff",
        }
    }

    /// Returns true if the handler reads the incoming user message.
    pub fn reads_message(&self) -> bool {
        matches!(
            self,
            Self::CaptureTopic
                | Self::InitialViewpoint
                | Self::EvidenceQuestion
                | Self::PerspectiveExploration
                | Self::NextSteps
        )
    }
}

impl fmt::Display for ConversationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a step name is not part of the script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown conversation step: {0}")]
pub struct UnknownStep(pub String);

impl FromStr for ConversationStep {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.name() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}
