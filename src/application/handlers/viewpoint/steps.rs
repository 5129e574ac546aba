//! Domain logic for each conversation step.
//!
//! Every function here is pure with respect to the request: it reads the
//! message and context and describes the reply. Side effects are limited to
//! counter increments and event emission through [`StepEnv`].

use tracing::{debug, info, warn};

use crate::config::AgentConfig;
use crate::domain::viewpoint::{
    non_blank, normalize_perspective, require_content, templates, ContextUpdate,
    ConversationCounters, ConversationEvent, ConversationStep, EventEnvelope, EvidenceKind,
    HandoffDirective, HandoffStatus, HandoffTarget, IncomingMessage, InputError, NextStepChoice,
    Perspective, StepError, SummaryElements, TopicError, TurnOutcome, TurnRequest, TurnResponse,
    CITATION_MARKERS, DECLINE_PHRASES,
};
use crate::ports::MetricsSink;

type StepResult = Result<TurnOutcome, StepError>;

/// What a step may touch besides its request.
pub(super) struct StepEnv<'a> {
    pub config: &'a AgentConfig,
    pub counters: &'a ConversationCounters,
    pub metrics: &'a dyn MetricsSink,
}

impl StepEnv<'_> {
    fn emit(&self, event: ConversationEvent) {
        self.metrics
            .record(&EventEnvelope::new(self.config.name.as_str(), event));
    }
}

/// Fallback topic wording used by a step when none is in context.
pub(super) fn default_topic(step: ConversationStep) -> &'static str {
    match step {
        ConversationStep::DeeperQuestions => "this topic",
        ConversationStep::Closing | ConversationStep::HandleReturnFromHandoff => "our topic",
        _ => "the topic",
    }
}

fn require_message(request: &TurnRequest) -> Result<&IncomingMessage, InputError> {
    request.message.as_ref().ok_or(InputError::MissingMessage)
}

pub(super) fn introduction() -> StepResult {
    Ok(TurnOutcome::reply(templates::INTRODUCTION))
}

pub(super) fn capture_topic(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let message = require_message(request)?;
    let raw = message.content().unwrap_or_default();

    match env.config.topic_bounds().validate(raw) {
        Ok(topic) => {
            info!(topic, "User selected topic");
            env.emit(ConversationEvent::TopicSelected {
                topic: topic.to_string(),
            });
            Ok(TurnResponse::text(templates::topic_captured(topic))
                .with_update(ContextUpdate::new().topic(topic))
                .into())
        }
        Err(TopicError::Empty) => {
            warn!("Empty topic provided");
            Ok(TurnOutcome::reply(templates::TOPIC_EMPTY))
        }
        Err(err @ TopicError::TooShort { .. }) => {
            warn!(topic = raw.trim(), "{}", err);
            Ok(TurnOutcome::reply(templates::TOPIC_TOO_SHORT))
        }
        Err(err @ TopicError::TooLong { .. }) => {
            warn!("Unusually long topic provided: {}", err);
            Ok(TurnOutcome::reply(templates::TOPIC_TOO_LONG))
        }
    }
}

pub(super) fn initial_viewpoint(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let message = require_message(request)?;
    let viewpoint = require_content(message.content())?;
    let topic = request
        .context
        .topic_or(default_topic(ConversationStep::InitialViewpoint));

    info!(topic, "Initial viewpoint captured");
    env.emit(ConversationEvent::ViewpointCaptured {
        topic: topic.to_string(),
        viewpoint_length: viewpoint.chars().count(),
    });

    Ok(TurnResponse::text(templates::viewpoint_captured(topic))
        .with_update(ContextUpdate::new().viewpoint(viewpoint))
        .into())
}

pub(super) fn detect_topic_change(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let context = &request.context;
    if context.is_empty() {
        warn!("Empty context in detect_topic_change");
        return Ok(TurnOutcome::Continue);
    }

    let current = non_blank(context.topic.as_deref());
    let previous = non_blank(context.previous_topic.as_deref());
    debug!(?current, ?previous, "Topic comparison");

    let (Some(current), Some(previous)) = (current, previous) else {
        warn!("Missing topic information in context");
        return Ok(TurnOutcome::Continue);
    };

    if current.to_lowercase() == previous.to_lowercase() {
        return Ok(TurnOutcome::Continue);
    }

    let change_count = env.counters.record_topic_change();
    info!(from = previous, to = current, change_count, "Topic change detected");
    env.emit(ConversationEvent::TopicChanged {
        from: previous.to_string(),
        to: current.to_string(),
        change_count,
    });

    Ok(TurnOutcome::reply(templates::topic_change_confirmation(
        current, previous,
    )))
}

pub(super) fn evidence_question(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let message = require_message(request)?;
    let evidence = require_content(message.content())?;
    let kind = EvidenceKind::classify(evidence);

    env.emit(ConversationEvent::EvidenceProvided {
        kind,
        length: evidence.chars().count(),
        contains_citations: CITATION_MARKERS.matches(evidence),
    });

    let update = ContextUpdate::new().evidence(evidence);
    let response = if kind.is_new_information() {
        info!("New information detected in user evidence");
        TurnResponse::text(templates::EVIDENCE_NEW_INFORMATION).with_update(update.new_fact(evidence))
    } else {
        TurnResponse::text(templates::EVIDENCE_STANDARD).with_update(update)
    };

    Ok(response.into())
}

pub(super) fn perspective_exploration(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let message = require_message(request)?;
    let selection = require_content(message.content()).inspect_err(|_| {
        warn!(
            available = %Perspective::catalog_listing(),
            "Empty perspective selection"
        );
    })?;

    if let Some(phrase) = DECLINE_PHRASES.first_match(selection) {
        info!(phrase, "User declined to explore alternative perspectives");
        env.emit(ConversationEvent::PerspectiveDeclined);
        return Ok(TurnOutcome::reply(templates::PERSPECTIVE_DECLINED));
    }

    let choice = normalize_perspective(selection);
    if choice.is_custom() {
        warn!(selection, "Unknown perspective selected, keeping as custom");
    }
    info!(perspective = choice.as_stored(), "User selected perspective");
    env.emit(ConversationEvent::PerspectiveSelected {
        perspective: choice.as_stored().to_string(),
        custom: choice.is_custom(),
    });

    Ok(TurnResponse::text(templates::perspective_selected(&choice))
        .with_update(ContextUpdate::new().selected_perspective(choice.as_stored()))
        .into())
}

pub(super) fn summary(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let context = &request.context;
    if context.is_empty() {
        warn!("Missing context in summary handler");
        return Ok(TurnOutcome::reply(templates::SUMMARY_MISSING_CONTEXT));
    }

    let limits = env.config.summary_limits();
    let elements = SummaryElements::from_context(context, limits);
    if !elements.is_sufficient() {
        warn!("Insufficient information for summary");
        return Ok(TurnOutcome::reply(templates::SUMMARY_INSUFFICIENT));
    }

    let text = elements.render(limits);
    env.emit(ConversationEvent::SummaryGenerated {
        topic: elements.topic.clone(),
        has_perspective: elements.selected_perspective.is_some(),
        has_new_fact: elements.new_fact.is_some(),
    });
    info!("Generated viewpoint summary");

    Ok(TurnOutcome::reply(text))
}

pub(super) fn next_steps(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let message = require_message(request)?;
    let choice = message.content().unwrap_or_default().trim();

    if choice.is_empty() {
        warn!("Empty choice in next_steps");
        return Ok(TurnOutcome::reply(templates::NEXT_STEPS_EMPTY));
    }

    match NextStepChoice::classify(choice) {
        Some(NextStepChoice::DevelopFurther) => {
            info!("User chose to develop perspective further");
            env.emit(ConversationEvent::NextStepSelected {
                choice: NextStepChoice::DevelopFurther,
            });
            Ok(TurnOutcome::reply(templates::NEXT_STEPS_DEVELOP))
        }
        Some(NextStepChoice::Debate) => Ok(handoff(env, HandoffTarget::Debate)),
        Some(NextStepChoice::Whiteboard) => Ok(handoff(env, HandoffTarget::Whiteboard)),
        None => {
            warn!(choice, "Ambiguous next step choice");
            Ok(TurnOutcome::reply(templates::NEXT_STEPS_MENU))
        }
    }
}

fn handoff(env: &StepEnv<'_>, target: HandoffTarget) -> TurnOutcome {
    let attempt_number = env.counters.record_handoff_attempt();
    env.emit(ConversationEvent::HandoffAttempted {
        target,
        attempt_number,
    });

    let (agent, status, text) = match target {
        HandoffTarget::Debate => (
            env.config.debate_agent.as_str(),
            HandoffStatus::InitiatingDebate,
            templates::NEXT_STEPS_DEBATE,
        ),
        HandoffTarget::Whiteboard => (
            env.config.whiteboard_agent.as_str(),
            HandoffStatus::InitiatingWhiteboard,
            templates::NEXT_STEPS_WHITEBOARD,
        ),
    };
    info!(agent, attempt_number, "Requesting handoff");

    TurnResponse::text(text)
        .with_update(ContextUpdate::new().handoff_status(status))
        .with_handoff(HandoffDirective::new(agent, env.config.handoff_timeout()))
        .into()
}

pub(super) fn deeper_questions(request: &TurnRequest) -> StepResult {
    let topic = request
        .context
        .topic_or(default_topic(ConversationStep::DeeperQuestions));
    Ok(TurnOutcome::reply(templates::deeper_questions(topic)))
}

pub(super) fn closing(request: &TurnRequest) -> StepResult {
    let topic = request.context.topic_or(default_topic(ConversationStep::Closing));
    Ok(TurnOutcome::reply(templates::closing(topic)))
}

pub(super) fn handle_return_from_handoff(env: &StepEnv<'_>, request: &TurnRequest) -> StepResult {
    let reset = ContextUpdate::new().handoff_status(HandoffStatus::None);
    let context = &request.context;

    if context.is_empty() {
        warn!("Missing context in handle_return_from_handoff");
        return Ok(TurnResponse::text(templates::RETURN_WITHOUT_CONTEXT)
            .with_update(reset)
            .into());
    }

    let topic = context.topic_or(default_topic(ConversationStep::HandleReturnFromHandoff));
    let status = context
        .handoff_status
        .clone()
        .unwrap_or_else(|| HandoffStatus::Other("unknown".to_string()));

    let success_count = env.counters.record_handoff_success();
    env.emit(ConversationEvent::HandoffReturned {
        from_status: status.to_string(),
        success_count,
        topic: topic.to_string(),
    });
    info!(status = %status, "User returned from handoff");

    let text = match status {
        HandoffStatus::ReturningFromDebate => templates::return_from_debate(topic),
        HandoffStatus::ReturningFromWhiteboard => templates::return_from_whiteboard(topic),
        _ => templates::return_from_other(topic),
    };

    Ok(TurnResponse::text(text).with_update(reset).into())
}
