use crate::platform::AgentPlatform;
use crate::probe::report::{DiagnosticReport, StepOutcome, StepReport};
use crate::probe::step::ProbeStep;
use std::time::Instant;
use tracing::{info, warn};

/// Runs probe steps against a platform, one after another.
pub struct DiagnosticsService<'a, P: AgentPlatform + ?Sized> {
    platform: &'a P,
}

impl<'a, P: AgentPlatform + ?Sized> DiagnosticsService<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Run a single step. Never fails: faults are captured in the report.
    pub async fn run_step(&self, step: ProbeStep, bot_id: &str) -> StepReport {
        let endpoint = step.endpoint(bot_id);
        info!(step = step.slug(), endpoint = %endpoint, "Running probe step");

        let started = Instant::now();
        let result = self.platform.fetch(&endpoint).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let report = match result {
            Ok(payload) => step.summarize(payload, duration_ms),
            Err(e) => step.failed(e.to_string(), duration_ms),
        };

        match &report.outcome {
            StepOutcome::Passed => {
                info!(step = step.slug(), duration_ms, outcome = "passed", "Probe step finished")
            }
            StepOutcome::Rejected => {
                warn!(step = step.slug(), duration_ms, outcome = "rejected", "Platform rejected token")
            }
            StepOutcome::Failed { message } => {
                warn!(step = step.slug(), duration_ms, outcome = "failed", error = %message, "Probe step failed")
            }
        }

        report
    }

    /// Run `steps` in order; each completes before the next starts.
    pub async fn run(&self, base_url: &str, bot_id: &str, steps: &[ProbeStep]) -> DiagnosticReport {
        let mut reports = Vec::with_capacity(steps.len());
        for step in steps {
            reports.push(self.run_step(*step, bot_id).await);
        }

        let report = DiagnosticReport {
            base_url: base_url.to_string(),
            bot_id: bot_id.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            steps: reports,
        };
        info!(
            passed = report.passed(),
            failed = report.failed(),
            "Probe run complete"
        );
        report
    }
}
