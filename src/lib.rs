//! Botprobe: Agent Platform Diagnostics
//!
//! Checks a conversational-agent platform account from the command line: whether
//! the bearer token is accepted, what the platform reports about an agent, and
//! the agent's online configuration including its shortcuts.

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod probe;
pub mod tooling;
