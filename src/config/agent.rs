//! Agent behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::viewpoint::{SummaryLimits, TopicBounds};

/// Settings for the viewpoint discovery agent
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    /// Agent identifier reported in events
    #[serde(default = "default_name")]
    pub name: String,

    /// Agent identifier the debate handoff targets
    #[serde(default = "default_debate_agent")]
    pub debate_agent: String,

    /// Agent identifier the whiteboard handoff targets
    #[serde(default = "default_whiteboard_agent")]
    pub whiteboard_agent: String,

    /// Advisory handoff timeout in seconds
    #[serde(default = "default_handoff_timeout")]
    pub handoff_timeout_secs: u64,

    /// Shortest accepted topic, in characters
    #[serde(default = "default_topic_min")]
    pub topic_min_chars: usize,

    /// Longest accepted topic, in characters
    #[serde(default = "default_topic_max")]
    pub topic_max_chars: usize,

    /// Context values longer than this are cut in summaries
    #[serde(default = "default_context_value_max")]
    pub context_value_max_chars: usize,

    /// How much of a new fact a summary quotes
    #[serde(default = "default_new_fact_preview")]
    pub new_fact_preview_chars: usize,
}

impl AgentConfig {
    /// Get handoff timeout as Duration
    pub fn handoff_timeout(&self) -> Duration {
        Duration::from_secs(self.handoff_timeout_secs)
    }

    pub fn topic_bounds(&self) -> TopicBounds {
        TopicBounds::new(self.topic_min_chars, self.topic_max_chars)
    }

    pub fn summary_limits(&self) -> SummaryLimits {
        SummaryLimits {
            max_value_chars: self.context_value_max_chars,
            new_fact_preview_chars: self.new_fact_preview_chars,
        }
    }

    /// Validate agent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AGENT__NAME"));
        }
        if self.debate_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AGENT__DEBATE_AGENT"));
        }
        if self.whiteboard_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AGENT__WHITEBOARD_AGENT"));
        }
        if self.handoff_timeout_secs == 0 {
            return Err(ValidationError::InvalidHandoffTimeout);
        }
        if self.topic_min_chars == 0 {
            return Err(ValidationError::InvalidTopicMinimum);
        }
        if self.topic_min_chars > self.topic_max_chars {
            return Err(ValidationError::InvalidTopicBounds {
                min: self.topic_min_chars,
                max: self.topic_max_chars,
            });
        }
        if self.context_value_max_chars <= 3 {
            return Err(ValidationError::InvalidContextValueLimit);
        }
        if self.new_fact_preview_chars == 0 {
            return Err(ValidationError::InvalidNewFactPreview);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            debate_agent: default_debate_agent(),
            whiteboard_agent: default_whiteboard_agent(),
            handoff_timeout_secs: default_handoff_timeout(),
            topic_min_chars: default_topic_min(),
            topic_max_chars: default_topic_max(),
            context_value_max_chars: default_context_value_max(),
            new_fact_preview_chars: default_new_fact_preview(),
        }
    }
}

fn default_name() -> String {
    "viewpoint_discovery_agent".to_string()
}

fn default_debate_agent() -> String {
    "debate_agent".to_string()
}

fn default_whiteboard_agent() -> String {
    "whiteboard_agent".to_string()
}

fn default_handoff_timeout() -> u64 {
    60
}

fn default_topic_min() -> usize {
    2
}

fn default_topic_max() -> usize {
    100
}

fn default_context_value_max() -> usize {
    500
}

fn default_new_fact_preview() -> usize {
    100
}
