//! Format a diagnostic report as console text or JSON.

use crate::error::ApiError;
use crate::probe::report::{DiagnosticReport, StepOutcome, StepReport};
use crate::probe::shortcuts::Shortcut;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use serde_json::Value;

/// Format a section heading with bold/underline when stdout supports it.
pub fn format_section_heading(title: &str) -> String {
    let style = Style::new().bold().underline();
    format!("{}", title.if_supports_color(Stream::Stdout, |t| t.style(style)))
}

/// Text block for one step: heading, then its lines.
pub fn format_step_text(step: &StepReport) -> String {
    let mut out = format_section_heading(&format!("=== {} ===", step.step.title()));
    out.push('\n');
    for line in &step.lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Human-readable report: one section per step and a closing outcome table.
pub fn format_report_text(report: &DiagnosticReport) -> String {
    let sections: Vec<String> = report.steps.iter().map(format_step_text).collect();
    let mut out = sections.join("\n");

    out.push('\n');
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Step", "Outcome", "Duration"]);
    for step in &report.steps {
        table.add_row(vec![
            step.step.title().to_string(),
            step.outcome.label().to_string(),
            format!("{}ms", step.duration_ms),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out.push_str(&format!(
        "{} passed, {} failed ({} agent {})\n",
        report.passed(),
        report.failed(),
        report.base_url,
        report.bot_id
    ));
    out
}

#[derive(Serialize)]
struct StepEntry<'a> {
    step: &'static str,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<&'a Value>,
    #[serde(skip_serializing_if = "<[Shortcut]>::is_empty")]
    shortcuts: &'a [Shortcut],
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    base_url: &'a str,
    bot_id: &'a str,
    generated_at: &'a str,
    steps: Vec<StepEntry<'a>>,
    passed: usize,
    failed: usize,
}

/// Machine-readable report.
pub fn format_report_json(report: &DiagnosticReport) -> Result<String, ApiError> {
    let steps = report
        .steps
        .iter()
        .map(|s| StepEntry {
            step: s.step.slug(),
            outcome: s.outcome.label(),
            message: match &s.outcome {
                StepOutcome::Failed { message } => Some(message.as_str()),
                _ => None,
            },
            duration_ms: s.duration_ms,
            payload: s.payload.as_ref(),
            shortcuts: &s.shortcuts,
        })
        .collect();

    let output = ReportOutput {
        base_url: &report.base_url,
        bot_id: &report.bot_id,
        generated_at: &report.generated_at,
        steps,
        passed: report.passed(),
        failed: report.failed(),
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| ApiError::RuntimeError(format!("Failed to render report: {}", e)))
}
