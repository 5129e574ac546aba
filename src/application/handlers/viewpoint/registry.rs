//! Turn handler registry.
//!
//! Maps each [`ConversationStep`] to its handler and wraps every handler in
//! the same two-tier failure envelope: input errors become a clarifying
//! re-prompt, anything else (including a panic) becomes an apologetic
//! fallback. A turn always produces an outcome.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{error, info_span, warn};

use super::steps::{self, StepEnv};
use crate::config::AgentConfig;
use crate::domain::viewpoint::{
    templates, ContextUpdate, ConversationCounters, ConversationStep, CounterSnapshot,
    HandoffStatus, StepError, TurnOutcome, TurnRequest, TurnResponse,
};
use crate::ports::MetricsSink;

/// Registry of the viewpoint discovery step handlers.
///
/// `Send + Sync`: one registry may serve many conversations at once, since
/// all per-conversation state arrives with each [`TurnRequest`].
///
/// # Example
///
/// ```ignore
/// let registry = TurnHandlerRegistry::with_defaults(Arc::new(TracingMetricsSink::new()));
///
/// let outcome = registry.handle(ConversationStep::CaptureTopic, &TurnRequest::message("AI"));
/// assert!(outcome.response_text().is_some());
/// ```
pub struct TurnHandlerRegistry {
    config: AgentConfig,
    metrics: Arc<dyn MetricsSink>,
    counters: ConversationCounters,
}

impl TurnHandlerRegistry {
    /// Creates a registry with the given settings and metrics sink.
    pub fn new(config: AgentConfig, metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            config,
            metrics,
            counters: ConversationCounters::new(),
        }
    }

    /// Creates a registry with default agent settings.
    pub fn with_defaults(metrics: Arc<dyn MetricsSink>) -> Self {
        Self::new(AgentConfig::default(), metrics)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Current observability counters.
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// Runs one turn of `step`. Never fails.
    pub fn handle(&self, step: ConversationStep, request: &TurnRequest) -> TurnOutcome {
        let span = info_span!("turn", step = %step, agent = %self.config.name);
        let _enter = span.enter();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(step, request)))
            .unwrap_or_else(|payload| Err(StepError::internal(panic_message(payload.as_ref()))));

        match result {
            Ok(outcome) => outcome,
            Err(err) => self.recover(step, request, err),
        }
    }

    fn dispatch(&self, step: ConversationStep, request: &TurnRequest) -> Result<TurnOutcome, StepError> {
        let env = StepEnv {
            config: &self.config,
            counters: &self.counters,
            metrics: self.metrics.as_ref(),
        };

        match step {
            ConversationStep::Introduction => steps::introduction(),
            ConversationStep::CaptureTopic => steps::capture_topic(&env, request),
            ConversationStep::InitialViewpoint => steps::initial_viewpoint(&env, request),
            ConversationStep::DetectTopicChange => steps::detect_topic_change(&env, request),
            ConversationStep::EvidenceQuestion => steps::evidence_question(&env, request),
            ConversationStep::PerspectiveExploration => {
                steps::perspective_exploration(&env, request)
            }
            ConversationStep::Summary => steps::summary(&env, request),
            ConversationStep::NextSteps => steps::next_steps(&env, request),
            ConversationStep::DeeperQuestions => steps::deeper_questions(request),
            ConversationStep::Closing => steps::closing(request),
            ConversationStep::HandleReturnFromHandoff => {
                steps::handle_return_from_handoff(&env, request)
            }
        }
    }

    fn recover(&self, step: ConversationStep, request: &TurnRequest, err: StepError) -> TurnOutcome {
        // Topic-change detection degrades by letting the flow continue.
        if step == ConversationStep::DetectTopicChange {
            error!(error = %err, "Failure in {}, continuing", step);
            return TurnOutcome::Continue;
        }

        let topic = request.context.topic_or(steps::default_topic(step));
        let text = match &err {
            StepError::InvalidInput(reason) => {
                warn!(error = %reason, "Input error in {}", step);
                templates::input_reprompt(step, topic)
            }
            StepError::Internal(reason) => {
                error!(error = %reason, "Unexpected error in {}", step);
                templates::unexpected_fallback(step, topic)
            }
        };

        let mut response = TurnResponse::text(text);
        if step == ConversationStep::HandleReturnFromHandoff {
            response = response.with_update(ContextUpdate::new().handoff_status(HandoffStatus::None));
        }
        response.into()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
