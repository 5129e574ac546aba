//! Response templates for every conversation step.
//!
//! Static sentences are constants; sentences that mention the topic or a
//! perspective are small formatting functions.

use super::perspective::PerspectiveChoice;
use super::step::ConversationStep;

// ============================================================================
// Introduction and topic capture
// ============================================================================

pub const INTRODUCTION: &str = "Hello! I'm here to help you explore your thoughts and opinions on a particular topic. What topic would you like to discuss today?";

pub const TOPIC_EMPTY: &str = "I didn't quite catch that. Could you please share what topic you'd like to explore?";

pub const TOPIC_TOO_SHORT: &str = "That topic seems a bit short. Could you please provide a more specific topic you'd like to discuss?";

pub const TOPIC_TOO_LONG: &str = "That's quite detailed! Could you provide a shorter, more focused topic for our discussion?";

pub fn topic_captured(topic: &str) -> String {
    format!("That's an interesting topic. What are your initial thoughts or viewpoints on {topic}?")
}

// ============================================================================
// Viewpoint, topic change, evidence
// ============================================================================

pub fn viewpoint_captured(topic: &str) -> String {
    format!(
        "Thank you for sharing your perspective. I'd like to understand more about your reasoning. What experiences, values, or information have shaped your viewpoint on {topic}?"
    )
}

pub fn topic_change_confirmation(current: &str, previous: &str) -> String {
    format!(
        "I notice you've moved to discussing {current} instead of {previous}. Would you like to continue with this new topic?"
    )
}

pub const EVIDENCE_NEW_INFORMATION: &str = "That's interesting information I wasn't aware of. I've noted this for our discussion. Would you be interested in exploring this topic from a specific perspective? This could help deepen your understanding.";

pub const EVIDENCE_STANDARD: &str = "Thank you for providing those examples. Would you be interested in exploring this topic from a specific perspective? This could help deepen your understanding.";

// ============================================================================
// Perspectives
// ============================================================================

pub const PERSPECTIVE_DECLINED: &str = "I appreciate you sharing those points. Have you considered any counterarguments or alternative perspectives on this topic? What might someone with a different viewpoint say?";

pub fn perspective_selected(choice: &PerspectiveChoice) -> String {
    format!(
        "Let's analyze the issue from {}. How might someone thinking primarily from that angle view this issue differently than you do?",
        choice.phrase()
    )
}

// ============================================================================
// Summary
// ============================================================================

pub const SUMMARY_MISSING_CONTEXT: &str = "I'd like to summarize your viewpoint, but I seem to be missing some context. Could you remind me what topic we're discussing and your main perspective on it?";

pub const SUMMARY_INSUFFICIENT: &str = "I'd like to summarize your viewpoint, but I don't have enough information yet. Could you tell me more about your perspective on this topic?";

// ============================================================================
// Next steps
// ============================================================================

pub const NEXT_STEPS_EMPTY: &str = "I didn't catch your preference. Would you like to: 1) Develop your perspective further, 2) See a debate on this topic, or 3) Use a whiteboard to map your viewpoint?";

pub const NEXT_STEPS_DEVELOP: &str = "Great! Let's explore your perspective in more depth. What specific aspects of this topic would you like to explore further?";

pub const NEXT_STEPS_DEBATE: &str = "I'll hand you off to our debate system, where you can see different agents discuss this topic from various perspectives. This should give you a more rounded view of the issue.";

pub const NEXT_STEPS_WHITEBOARD: &str = "I'll hand you off to our whiteboard system, where you can visually map out and develop your viewpoint.";

pub const NEXT_STEPS_MENU: &str = "I didn't quite understand your choice. Would you like to: 1) Develop your perspective further with more detailed questions, 2) See how different agents might debate this topic from various perspectives, or 3) Engage in a whiteboard session where we can visually map out and develop your viewpoint?";

// ============================================================================
// Deeper questions, closing, handoff return
// ============================================================================

pub fn deeper_questions(topic: &str) -> String {
    format!(
        "What are the core values or principles that underlie your viewpoint on {topic}? How do you think your perspective might evolve or change in the future, given new information or experiences?"
    )
}

pub fn closing(topic: &str) -> String {
    format!(
        "I appreciate you taking the time to explore your viewpoint on {topic}. Your thoughtful responses have helped create a clearer picture of your perspective. Feel free to return anytime you'd like to explore your thoughts on another topic."
    )
}

pub const RETURN_WITHOUT_CONTEXT: &str = "Welcome back! Would you like to continue our discussion?";

pub fn return_from_debate(topic: &str) -> String {
    format!(
        "Welcome back from the debate! Did seeing different perspectives on {topic} help clarify your own viewpoint? Would you like to continue exploring your thoughts on this topic or discuss something else?"
    )
}

pub fn return_from_whiteboard(topic: &str) -> String {
    format!(
        "Welcome back from the whiteboard session! Did visualizing your thoughts on {topic} help organize your ideas? Would you like to continue exploring this topic or discuss something new?"
    )
}

pub fn return_from_other(topic: &str) -> String {
    format!(
        "Welcome back! I hope your experience was helpful. Would you like to continue exploring your viewpoint on {topic} or discuss something else?"
    )
}

// ============================================================================
// Failure envelope
// ============================================================================

/// Sentence used when the host asks for a step we do not know.
pub const GENERIC_APOLOGY: &str = "I apologize, but I'm having trouble processing your request. Could we continue our discussion?";

/// Clarifying re-prompt for a step's input error.
pub fn input_reprompt(step: ConversationStep, topic: &str) -> String {
    match step {
        ConversationStep::CaptureTopic => {
            "I'm having trouble understanding your input. Could you please share what topic you'd like to explore?".to_string()
        }
        ConversationStep::InitialViewpoint => {
            format!("I didn't catch your viewpoint. What are your initial thoughts on {topic}?")
        }
        ConversationStep::EvidenceQuestion => {
            "I'm having trouble processing your examples. Could you try explaining your evidence in a different way?".to_string()
        }
        ConversationStep::PerspectiveExploration => {
            "I'm having trouble understanding your selection. Would you like to explore this topic from an economic, social, ethical, legal, or environmental perspective? Or would you prefer to continue with your own perspective?".to_string()
        }
        ConversationStep::Summary => {
            "I'm having trouble creating a summary of your viewpoint. Could you briefly restate your main position on this topic?".to_string()
        }
        ConversationStep::NextSteps => {
            "I'm having trouble understanding your choice. Could you select option 1, 2, or 3?".to_string()
        }
        ConversationStep::HandleReturnFromHandoff => {
            "Welcome back! Would you like to continue our previous discussion or start a new one?".to_string()
        }
        ConversationStep::Introduction
        | ConversationStep::DetectTopicChange
        | ConversationStep::DeeperQuestions
        | ConversationStep::Closing => GENERIC_APOLOGY.to_string(),
    }
}

/// Apologetic fallback for a step's unexpected failure.
pub fn unexpected_fallback(step: ConversationStep, topic: &str) -> String {
    match step {
        ConversationStep::Introduction => INTRODUCTION.to_string(),
        ConversationStep::CaptureTopic => {
            "I apologize, but I'm having trouble processing your request. Could you please share what topic you'd like to discuss today?".to_string()
        }
        ConversationStep::InitialViewpoint => {
            "Thank you for sharing that. Could you tell me more about why you hold this perspective?".to_string()
        }
        ConversationStep::DetectTopicChange => GENERIC_APOLOGY.to_string(),
        ConversationStep::EvidenceQuestion => {
            "I appreciate your input. Would you be interested in exploring this topic from different perspectives?".to_string()
        }
        ConversationStep::PerspectiveExploration => {
            "I apologize for the confusion. Would you like to continue with your own perspective on this topic or explore it from another angle?".to_string()
        }
        ConversationStep::Summary => {
            "Let me try to summarize what I understand so far. You've shared some interesting thoughts on this topic. Have I understood your position correctly?".to_string()
        }
        ConversationStep::NextSteps => {
            "I apologize, but I'm having trouble processing your choice. Would you like to continue exploring your perspective with me for now?".to_string()
        }
        ConversationStep::DeeperQuestions => deeper_questions(topic),
        ConversationStep::Closing => closing(topic),
        ConversationStep::HandleReturnFromHandoff => {
            "Welcome back! I apologize for any confusion. Would you like to continue our discussion?".to_string()
        }
    }
}
