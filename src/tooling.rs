//! Tooling & Integration Layer
//!
//! Command-line entry points over the probe.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
