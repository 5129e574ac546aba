//! Viewpoint discovery host process.
//!
//! Reads one JSON turn per stdin line and writes one JSON reply per stdout
//! line. Logs go to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use viewpoint_discovery::adapters::{JsonLineHost, TracingMetricsSink};
use viewpoint_discovery::application::TurnHandlerRegistry;
use viewpoint_discovery::config::{AppConfig, LogFormat, LoggingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        agent = %config.agent.name,
        debate_agent = %config.agent.debate_agent,
        whiteboard_agent = %config.agent.whiteboard_agent,
        "Starting viewpoint discovery host"
    );

    let registry = TurnHandlerRegistry::new(config.agent, Arc::new(TracingMetricsSink::new()));
    let host = JsonLineHost::new(registry);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    match host.run(stdin, tokio::io::stdout()).await {
        Ok(answered) => {
            let counters = host.registry().counters();
            info!(
                answered,
                topic_changes = counters.topic_changes,
                handoff_attempts = counters.handoff_attempts,
                handoff_successes = counters.handoff_successes,
                "Host input closed, shutting down"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("I/O error on host channel: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
