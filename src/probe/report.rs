use crate::probe::shortcuts::Shortcut;
use crate::probe::step::ProbeStep;
use serde_json::Value;

/// How a step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Response parsed and, for the token check, accepted.
    Passed,
    /// Response parsed but the platform rejected the token.
    Rejected,
    /// Request or parse failed; the message is what gets logged.
    Failed { message: String },
}

impl StepOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Passed => "passed",
            StepOutcome::Rejected => "rejected",
            StepOutcome::Failed { .. } => "failed",
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, StepOutcome::Passed)
    }
}

/// Result of one step: outcome plus the human-readable lines to print.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: ProbeStep,
    pub outcome: StepOutcome,
    pub lines: Vec<String>,
    pub payload: Option<Value>,
    pub shortcuts: Vec<Shortcut>,
    pub duration_ms: u64,
}

/// Results of a probe run in execution order.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub base_url: String,
    pub bot_id: String,
    /// RFC 3339 UTC.
    pub generated_at: String,
    pub steps: Vec<StepReport>,
}

impl DiagnosticReport {
    pub fn passed(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.len() - self.passed()
    }

    pub fn step(&self, step: ProbeStep) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }
}
