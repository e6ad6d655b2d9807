//! The three probe steps and how each summarizes its payload.

use crate::platform::Endpoint;
use crate::probe::report::{StepOutcome, StepReport};
use crate::probe::shortcuts::extract_shortcuts;
use serde::Serialize;
use serde_json::Value;

/// One independent diagnostic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStep {
    TokenCheck,
    AgentInfo,
    OnlineInfo,
}

impl ProbeStep {
    /// All steps in execution order.
    pub const ALL: [ProbeStep; 3] = [
        ProbeStep::TokenCheck,
        ProbeStep::AgentInfo,
        ProbeStep::OnlineInfo,
    ];

    pub fn endpoint(self, bot_id: &str) -> Endpoint {
        match self {
            ProbeStep::TokenCheck => Endpoint::ListAgents,
            ProbeStep::AgentInfo => Endpoint::AgentInfo {
                bot_id: bot_id.to_string(),
            },
            ProbeStep::OnlineInfo => Endpoint::OnlineInfo {
                bot_id: bot_id.to_string(),
            },
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ProbeStep::TokenCheck => "token_check",
            ProbeStep::AgentInfo => "agent_info",
            ProbeStep::OnlineInfo => "online_info",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ProbeStep::TokenCheck => "Token validity",
            ProbeStep::AgentInfo => "Agent info",
            ProbeStep::OnlineInfo => "Agent online info",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            ProbeStep::TokenCheck => "Token check failed",
            ProbeStep::AgentInfo => "Failed to fetch agent info",
            ProbeStep::OnlineInfo => "Failed to fetch online info",
        }
    }

    /// Build the report for a successfully parsed payload.
    pub fn summarize(self, payload: Value, duration_ms: u64) -> StepReport {
        let (outcome, lines, shortcuts) = match self {
            ProbeStep::TokenCheck => {
                if token_is_valid(&payload) {
                    (StepOutcome::Passed, vec!["Token check: valid".to_string()], Vec::new())
                } else {
                    (StepOutcome::Rejected, vec!["Token check: invalid".to_string()], Vec::new())
                }
            }
            ProbeStep::AgentInfo => (
                StepOutcome::Passed,
                vec![format!("Agent info: {}", pretty(&payload))],
                Vec::new(),
            ),
            ProbeStep::OnlineInfo => {
                let mut lines = vec![format!("Online info: {}", pretty(&payload))];
                match extract_shortcuts(&payload) {
                    Ok(shortcuts) => {
                        lines.extend(shortcuts.iter().map(|s| s.line()));
                        (StepOutcome::Passed, lines, shortcuts)
                    }
                    Err(e) => {
                        let message = e.to_string();
                        lines.push(format!("{}: {}", self.failure_prefix(), message));
                        (StepOutcome::Failed { message }, lines, Vec::new())
                    }
                }
            }
        };

        StepReport {
            step: self,
            outcome,
            lines,
            payload: Some(payload),
            shortcuts,
            duration_ms,
        }
    }

    /// Build the report for a step whose request or parse failed.
    pub fn failed(self, message: String, duration_ms: u64) -> StepReport {
        StepReport {
            step: self,
            lines: vec![format!("{}: {}", self.failure_prefix(), message)],
            outcome: StepOutcome::Failed { message },
            payload: None,
            shortcuts: Vec::new(),
            duration_ms,
        }
    }
}

/// The platform signals success with a numeric `code` of zero.
pub fn token_is_valid(payload: &Value) -> bool {
    payload
        .get("code")
        .and_then(Value::as_f64)
        .is_some_and(|code| code == 0.0)
}

/// Two-space indented JSON, keys in response order.
fn pretty(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}
