//! Viewpoint summary composition.

use super::context::{non_blank, ConversationContext};
use super::topic::truncate_chars;

const DEFAULT_TOPIC: &str = "the topic";
const DEFAULT_VIEWPOINT: &str = "your thoughts";
const DEFAULT_EVIDENCE: &str = "the points you've made";
const ELLIPSIS: &str = "...";

/// New facts at or under this many characters are left out of the summary.
const MIN_NEW_FACT_CHARS: usize = 10;

/// Limits applied while composing a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    /// Longer context values are cut and suffixed with an ellipsis.
    pub max_value_chars: usize,
    /// How much of `new_fact` is quoted.
    pub new_fact_preview_chars: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            max_value_chars: 500,
            new_fact_preview_chars: 100,
        }
    }
}

/// The context values that go into a summary, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryElements {
    pub topic: String,
    pub viewpoint: String,
    pub evidence: String,
    pub selected_perspective: Option<String>,
    pub new_fact: Option<String>,
}

impl SummaryElements {
    /// Extracts and validates the summary inputs from `context`.
    pub fn from_context(context: &ConversationContext, limits: SummaryLimits) -> Self {
        let validated = |value: &Option<String>, default: &str| {
            validated_value(value.as_deref(), default, limits.max_value_chars)
        };

        Self {
            topic: validated(&context.topic, DEFAULT_TOPIC),
            viewpoint: validated(&context.viewpoint, DEFAULT_VIEWPOINT),
            evidence: validated(&context.evidence, DEFAULT_EVIDENCE),
            selected_perspective: non_blank(context.selected_perspective.as_deref())
                .map(str::to_string),
            new_fact: non_blank(context.new_fact.as_deref()).map(str::to_string),
        }
    }

    /// False while topic or viewpoint are still at their defaults.
    pub fn is_sufficient(&self) -> bool {
        self.topic != DEFAULT_TOPIC && self.viewpoint != DEFAULT_VIEWPOINT
    }

    /// Renders the summary sentence asking the user to confirm it.
    pub fn render(&self, limits: SummaryLimits) -> String {
        let mut text = format!(
            "Let me summarize what I understand about your viewpoint so far: You believe that {} is important, and your perspective includes {}.",
            self.topic, self.viewpoint
        );

        match &self.selected_perspective {
            Some(perspective) => text.push_str(&format!(
                " When looking at this from the {} angle, you've supported this with {}.",
                perspective, self.evidence
            )),
            None => text.push_str(&format!(" You've supported this with {}.", self.evidence)),
        }

        if let Some(fact) = self
            .new_fact
            .as_deref()
            .filter(|fact| fact.chars().count() > MIN_NEW_FACT_CHARS)
        {
            text.push_str(&format!(
                " You've also shared new information: {}{}",
                truncate_chars(fact, limits.new_fact_preview_chars),
                ELLIPSIS
            ));
        }

        text.push_str(" Is this an accurate summary of your position?");
        text
    }
}

fn validated_value(value: Option<&str>, default: &str, max_chars: usize) -> String {
    let Some(value) = non_blank(value) else {
        return default.to_string();
    };

    if value.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(ELLIPSIS.len());
        return format!("{}{}", truncate_chars(value, keep), ELLIPSIS);
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_context() -> ConversationContext {
        ConversationContext::new()
            .with_topic("remote work")
            .with_viewpoint("it improves focus")
            .with_evidence("my own productivity")
    }

    mod extraction {
        use super::*;

        #[test]
        fn empty_context_uses_defaults() {
            let elements =
                SummaryElements::from_context(&ConversationContext::new(), SummaryLimits::default());
            assert_eq!(elements.topic, "the topic");
            assert_eq!(elements.viewpoint, "your thoughts");
            assert_eq!(elements.evidence, "the points you've made");
            assert!(elements.selected_perspective.is_none());
            assert!(elements.new_fact.is_none());
        }

        #[test]
        fn long_values_are_trimmed_to_limit() {
            let context = full_context().with_viewpoint("v".repeat(600));
            let elements = SummaryElements::from_context(&context, SummaryLimits::default());
            assert_eq!(elements.viewpoint.chars().count(), 500);
            assert!(elements.viewpoint.ends_with("..."));
        }

        #[test]
        fn blank_values_use_defaults() {
            let context = full_context().with_evidence("  ");
            let elements = SummaryElements::from_context(&context, SummaryLimits::default());
            assert_eq!(elements.evidence, "the points you've made");
        }
    }

    mod sufficiency {
        use super::*;

        #[test]
        fn literal_default_topic_counts_as_unset() {
            let context = ConversationContext::new().with_topic("the topic");
            let elements = SummaryElements::from_context(&context, SummaryLimits::default());
            assert!(!elements.is_sufficient());
        }

        #[test]
        fn missing_viewpoint_is_insufficient() {
            let context = ConversationContext::new().with_topic("remote work");
            let elements = SummaryElements::from_context(&context, SummaryLimits::default());
            assert!(!elements.is_sufficient());
        }

        #[test]
        fn topic_and_viewpoint_are_sufficient() {
            let elements = SummaryElements::from_context(&full_context(), SummaryLimits::default());
            assert!(elements.is_sufficient());
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn includes_core_elements() {
            let limits = SummaryLimits::default();
            let text = SummaryElements::from_context(&full_context(), limits).render(limits);
            assert!(text.contains("You believe that remote work is important"));
            assert!(text.contains("your perspective includes it improves focus."));
            assert!(text.contains("You've supported this with my own productivity."));
            assert!(text.ends_with("Is this an accurate summary of your position?"));
        }

        #[test]
        fn includes_perspective_clause_when_selected() {
            let limits = SummaryLimits::default();
            let context = full_context().with_selected_perspective("Economic Perspective");
            let text = SummaryElements::from_context(&context, limits).render(limits);
            assert!(text.contains("When looking at this from the Economic Perspective angle"));
        }

        #[test]
        fn truncates_new_fact_and_appends_ellipsis() {
            let limits = SummaryLimits::default();
            let fact = format!("A new study {}", "z".repeat(200));
            let context = full_context().with_new_fact(fact.clone());
            let text = SummaryElements::from_context(&context, limits).render(limits);
            let expected = format!("new information: {}...", &fact[..100]);
            assert!(text.contains(&expected));
        }

        #[test]
        fn short_new_fact_is_omitted() {
            let limits = SummaryLimits::default();
            let context = full_context().with_new_fact("tiny fact");
            let text = SummaryElements::from_context(&context, limits).render(limits);
            assert!(!text.contains("new information"));
        }
    }
}
