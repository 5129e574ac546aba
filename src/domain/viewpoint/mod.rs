//! Viewpoint discovery domain module.
//!
//! Steps, typed context, the perspective catalog, keyword tables and the
//! templates the turn handlers answer with.

mod context;
mod counters;
mod errors;
mod events;
mod keywords;
mod perspective;
mod step;
mod summary;
pub mod templates;
mod topic;
mod turn;

pub use context::{ContextUpdate, ConversationContext, HandoffStatus};
pub(crate) use context::non_blank;
pub use counters::{ConversationCounters, CounterSnapshot};
pub use errors::{InputError, StepError, TopicError};
pub use events::{ConversationEvent, EventEnvelope, HandoffTarget};
pub use keywords::{
    EvidenceKind, KeywordTable, MatchMode, NextStepChoice, CITATION_MARKERS, DECLINE_PHRASES,
    NEW_INFORMATION_MARKERS,
};
pub use perspective::{normalize_perspective, Perspective, PerspectiveChoice};
pub use step::{ConversationStep, UnknownStep};
pub use summary::{SummaryElements, SummaryLimits};
pub use topic::{require_content, truncate_chars, TopicBounds};
pub use turn::{HandoffDirective, IncomingMessage, TurnOutcome, TurnRequest, TurnResponse};
