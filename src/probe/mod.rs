//! Platform Probe
//!
//! Three independent diagnostic steps against the agent platform: token
//! validity, agent metadata, and the agent's online configuration with its
//! shortcuts. Each step issues one request, parses JSON, and summarizes the
//! result as report lines. A failed step is recorded in its report and never
//! prevents the following steps from running.

pub mod format;
pub mod report;
pub mod service;
pub mod shortcuts;
pub mod step;

pub use format::{format_report_json, format_report_text};
pub use report::{DiagnosticReport, StepOutcome, StepReport};
pub use service::DiagnosticsService;
pub use shortcuts::{extract_shortcuts, Shortcut, ShortcutError};
pub use step::{token_is_valid, ProbeStep};
