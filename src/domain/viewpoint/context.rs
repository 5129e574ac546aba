//! Step-scoped conversation context.
//!
//! The host platform carries the context between turns. Handlers only ever
//! read it and return a [`ContextUpdate`]; the host performs the merge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the conversation stands with respect to a handoff.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandoffStatus {
    None,
    InitiatingDebate,
    InitiatingWhiteboard,
    ReturningFromDebate,
    ReturningFromWhiteboard,
    /// A status value this agent does not recognise, kept verbatim.
    Other(String),
}

impl HandoffStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::InitiatingDebate => "initiating_debate",
            Self::InitiatingWhiteboard => "initiating_whiteboard",
            Self::ReturningFromDebate => "returning_from_debate",
            Self::ReturningFromWhiteboard => "returning_from_whiteboard",
            Self::Other(raw) => raw,
        }
    }

    /// Parses a raw status string. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "none" => Self::None,
            "initiating_debate" => Self::InitiatingDebate,
            "initiating_whiteboard" => Self::InitiatingWhiteboard,
            "returning_from_debate" => Self::ReturningFromDebate,
            "returning_from_whiteboard" => Self::ReturningFromWhiteboard,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for HandoffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HandoffStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HandoffStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// The record the host carries across turns.
///
/// No field is required. Readers fall back to a step-specific default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_fact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_perspective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff_status: Option<HandoffStatus>,
}

impl ConversationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for tests and host adapters.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_previous_topic(mut self, topic: impl Into<String>) -> Self {
        self.previous_topic = Some(topic.into());
        self
    }

    pub fn with_viewpoint(mut self, viewpoint: impl Into<String>) -> Self {
        self.viewpoint = Some(viewpoint.into());
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    pub fn with_new_fact(mut self, fact: impl Into<String>) -> Self {
        self.new_fact = Some(fact.into());
        self
    }

    pub fn with_selected_perspective(mut self, perspective: impl Into<String>) -> Self {
        self.selected_perspective = Some(perspective.into());
        self
    }

    pub fn with_handoff_status(mut self, status: HandoffStatus) -> Self {
        self.handoff_status = Some(status);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the topic, or `default` when absent or blank.
    pub fn topic_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_blank(self.topic.as_deref()).unwrap_or(default)
    }

    /// Merges an update into this context. Present fields overwrite.
    pub fn apply(&mut self, update: &ContextUpdate) {
        let ContextUpdate {
            topic,
            previous_topic,
            viewpoint,
            evidence,
            new_fact,
            selected_perspective,
            handoff_status,
        } = update;

        merge(&mut self.topic, topic);
        merge(&mut self.previous_topic, previous_topic);
        merge(&mut self.viewpoint, viewpoint);
        merge(&mut self.evidence, evidence);
        merge(&mut self.new_fact, new_fact);
        merge(&mut self.selected_perspective, selected_perspective);
        merge(&mut self.handoff_status, handoff_status);
    }
}

/// The partial context a handler asks the host to merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_fact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_perspective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff_status: Option<HandoffStatus>,
}

impl ContextUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the update writes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets `topic` and `previous_topic` to the same value.
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.previous_topic = Some(topic.clone());
        self.topic = Some(topic);
        self
    }

    pub fn viewpoint(mut self, viewpoint: impl Into<String>) -> Self {
        self.viewpoint = Some(viewpoint.into());
        self
    }

    pub fn evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    pub fn new_fact(mut self, fact: impl Into<String>) -> Self {
        self.new_fact = Some(fact.into());
        self
    }

    pub fn selected_perspective(mut self, perspective: impl Into<String>) -> Self {
        self.selected_perspective = Some(perspective.into());
        self
    }

    pub fn handoff_status(mut self, status: HandoffStatus) -> Self {
        self.handoff_status = Some(status);
        self
    }
}

fn merge<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if let Some(value) = source {
        *target = Some(value.clone());
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod handoff_status {
        use super::*;

        #[test]
        fn known_values_round_trip_through_parse() {
            for status in [
                HandoffStatus::None,
                HandoffStatus::InitiatingDebate,
                HandoffStatus::InitiatingWhiteboard,
                HandoffStatus::ReturningFromDebate,
                HandoffStatus::ReturningFromWhiteboard,
            ] {
                assert_eq!(HandoffStatus::parse(status.as_str()), status);
            }
        }

        #[test]
        fn unknown_value_is_kept_verbatim() {
            let status = HandoffStatus::parse("returning_from_podcast");
            assert_eq!(status, HandoffStatus::Other("returning_from_podcast".to_string()));
            assert_eq!(status.as_str(), "returning_from_podcast");
        }

        #[test]
        fn serializes_as_plain_string() {
            let json = serde_json::to_string(&HandoffStatus::InitiatingDebate).unwrap();
            assert_eq!(json, "\"initiating_debate\"");
        }

        #[test]
        fn deserializes_unknown_as_other() {
            let status: HandoffStatus = serde_json::from_str("\"weird\"").unwrap();
            assert_eq!(status, HandoffStatus::Other("weird".to_string()));
        }
    }

    mod conversation_context {
        use super::*;

        #[test]
        fn default_is_empty() {
            assert!(ConversationContext::new().is_empty());
        }

        #[test]
        fn any_field_makes_it_non_empty() {
            assert!(!ConversationContext::new().with_evidence("x").is_empty());
        }

        #[test]
        fn topic_or_falls_back_when_absent() {
            let context = ConversationContext::new();
            assert_eq!(context.topic_or("our topic"), "our topic");
        }

        #[test]
        fn topic_or_falls_back_when_blank() {
            let context = ConversationContext::new().with_topic("   ");
            assert_eq!(context.topic_or("our topic"), "our topic");
        }

        #[test]
        fn topic_or_returns_topic() {
            let context = ConversationContext::new().with_topic("AI Ethics");
            assert_eq!(context.topic_or("our topic"), "AI Ethics");
        }

        #[test]
        fn deserializes_missing_fields_as_none() {
            let context: ConversationContext = serde_json::from_str(r#"{"topic":"AI"}"#).unwrap();
            assert_eq!(context.topic.as_deref(), Some("AI"));
            assert!(context.viewpoint.is_none());
        }

        #[test]
        fn deserializes_null_fields_as_none() {
            let context: ConversationContext =
                serde_json::from_str(r#"{"topic":null,"viewpoint":"yes"}"#).unwrap();
            assert!(context.topic.is_none());
            assert_eq!(context.viewpoint.as_deref(), Some("yes"));
        }
    }

    mod merging {
        use super::*;

        #[test]
        fn apply_overwrites_present_fields() {
            let mut context = ConversationContext::new().with_topic("old");
            context.apply(&ContextUpdate::new().topic("new"));
            assert_eq!(context.topic.as_deref(), Some("new"));
            assert_eq!(context.previous_topic.as_deref(), Some("new"));
        }

        #[test]
        fn apply_keeps_fields_absent_from_update() {
            let mut context = ConversationContext::new().with_viewpoint("mine");
            context.apply(&ContextUpdate::new().evidence("data"));
            assert_eq!(context.viewpoint.as_deref(), Some("mine"));
            assert_eq!(context.evidence.as_deref(), Some("data"));
        }

        #[test]
        fn empty_update_is_a_no_op() {
            let original = ConversationContext::new().with_topic("AI").with_viewpoint("good");
            let mut context = original.clone();
            context.apply(&ContextUpdate::new());
            assert_eq!(context, original);
        }

        #[test]
        fn update_serializes_only_present_fields() {
            let update = ContextUpdate::new().handoff_status(HandoffStatus::None);
            let json = serde_json::to_value(&update).unwrap();
            assert_eq!(json, serde_json::json!({ "handoff_status": "none" }));
        }
    }
}
