//! JSON-lines driver for the conversation host.
//!
//! One inbound turn per line in, one outbound turn per line out. A line that
//! cannot be understood still gets an answer.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::dto::{InboundTurn, OutboundTurn};
use crate::application::TurnHandlerRegistry;
use crate::domain::viewpoint::{templates, ConversationStep, UnknownStep};

/// Errors from decoding a host line. Never surfaced to the host itself.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Malformed turn: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownStep(#[from] UnknownStep),

    #[error("Turn is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Drives a [`TurnHandlerRegistry`] from JSON lines.
pub struct JsonLineHost {
    registry: TurnHandlerRegistry,
}

impl JsonLineHost {
    pub fn new(registry: TurnHandlerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TurnHandlerRegistry {
        &self.registry
    }

    /// Decodes and runs one turn.
    pub fn try_process(&self, line: &str) -> Result<OutboundTurn, HostError> {
        let inbound: InboundTurn = serde_json::from_str(line)?;
        let step: ConversationStep = inbound.step_name.parse()?;
        let outcome = self.registry.handle(step, &inbound.to_request());
        Ok(OutboundTurn::from(&outcome))
    }

    /// Runs one turn, degrading any decoding failure to the generic apology.
    pub fn process(&self, line: &str) -> OutboundTurn {
        self.try_process(line).unwrap_or_else(|err| {
            warn!(error = %err, "Could not handle host turn");
            OutboundTurn::text(templates::GENERIC_APOLOGY)
        })
    }

    /// Runs one turn and returns the serialized reply, without a newline.
    pub fn process_line(&self, line: &str) -> String {
        let outbound = self.process(line);
        serde_json::to_string(&outbound).unwrap_or_else(|err| {
            warn!(error = %err, "Failed to serialize outbound turn");
            fallback_line()
        })
    }

    /// Like [`process_line`](Self::process_line) for a raw line that may not
    /// be UTF-8. `None` for a blank line.
    pub fn process_raw_line(&self, raw: Vec<u8>) -> Option<String> {
        match String::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(self.process_line(&line)),
            Err(err) => {
                warn!(error = %HostError::from(err), "Could not handle host turn");
                Some(fallback_line())
            }
        }
    }

    /// Reads turns until EOF, writing one reply per non-blank line.
    ///
    /// Returns the number of turns answered.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<u64>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut answered = 0;

        while reader.read_until(b'\n', &mut buf).await? > 0 {
            let Some(reply) = self.process_raw_line(std::mem::take(&mut buf)) else {
                continue;
            };
            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
            answered += 1;
        }

        debug!(answered, "Host input closed");
        Ok(answered)
    }
}

fn fallback_line() -> String {
    serde_json::json!({ "response": templates::GENERIC_APOLOGY }).to_string()
}
