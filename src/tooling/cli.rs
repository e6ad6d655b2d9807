//! CLI Tooling
//!
//! Command-line interface for botprobe. Every probe command runs its steps to
//! completion and returns the rendered report; step failures are part of the
//! report, not command errors.

use crate::config::{ConfigLoader, ConfigOverrides, ProbeConfig};
use crate::error::ApiError;
use crate::platform::HttpPlatformClient;
use crate::probe::{format_report_json, format_report_text, DiagnosticsService, ProbeStep};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Botprobe CLI - agent platform diagnostics
#[derive(Parser)]
#[command(name = "botprobe")]
#[command(about = "Check an agent platform token, agent metadata, and online configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Platform API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Agent identifier (bot_id)
    #[arg(long, global = true)]
    pub bot_id: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Subcommand to run; a bare invocation runs every step.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check {
            format: "text".to_string(),
        })
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            bot_id: self.bot_id.clone(),
            timeout_secs: self.timeout_secs,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            log_output: self.log_output.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run all steps: token check, agent info, online info
    Check {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Check that the token is accepted
    Token {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Fetch agent metadata
    Agent {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Fetch agent online configuration and list its shortcuts
    Online {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the effective configuration (token redacted)
    Config {
        /// Output format (text or toml)
        #[arg(long, default_value = "text", value_parser = ["text", "toml"])]
        format: String,
    },
}

/// CLI context holding the resolved configuration
pub struct CliContext {
    config: ProbeConfig,
    config_path: Option<PathBuf>,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from all sources
    pub fn new(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path, &overrides)?,
            None => ConfigLoader::load(&overrides)?,
        };
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Create a context from an already-built configuration
    pub fn from_config(config: ProbeConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            config,
            config_path: None,
        })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Check { format } => self.handle_probe(&ProbeStep::ALL, format),
            Commands::Token { format } => self.handle_probe(&[ProbeStep::TokenCheck], format),
            Commands::Agent { format } => self.handle_probe(&[ProbeStep::AgentInfo], format),
            Commands::Online { format } => self.handle_probe(&[ProbeStep::OnlineInfo], format),
            Commands::Config { format } => self.handle_config_show(format),
        }
    }

    /// Run the given steps on a current-thread runtime and render the report
    fn handle_probe(&self, steps: &[ProbeStep], format: &str) -> Result<String, ApiError> {
        let client = HttpPlatformClient::new(&self.config.api)?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::RuntimeError(format!("Failed to create runtime: {}", e)))?;

        info!(
            base_url = client.base_url(),
            bot_id = %self.config.api.bot_id,
            steps = steps.len(),
            "Starting probe"
        );
        let report = rt.block_on(DiagnosticsService::new(&client).run(
            client.base_url(),
            &self.config.api.bot_id,
            steps,
        ));

        match format {
            "json" => format_report_json(&report),
            _ => Ok(format_report_text(&report)),
        }
    }

    /// Handle config show command
    fn handle_config_show(&self, format: &str) -> Result<String, ApiError> {
        let redacted = self.config.redacted();
        if format == "toml" {
            return toml::to_string_pretty(&redacted)
                .map_err(|e| ApiError::RuntimeError(format!("Failed to render config: {}", e)));
        }

        let source = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "global config, environment, defaults".to_string(),
        };
        let timeout = redacted
            .api
            .timeout_secs
            .map(|t| format!("{}s", t))
            .unwrap_or_else(|| "none".to_string());
        let mut output = String::new();
        output.push_str(&format!("Source: {}\n", source));
        output.push_str(&format!("Base URL: {}\n", redacted.api.base_url));
        output.push_str(&format!("Token: {}\n", redacted.api.token));
        output.push_str(&format!("Agent id: {}\n", redacted.api.bot_id));
        output.push_str(&format!("Timeout: {}\n", timeout));
        output.push_str(&format!(
            "Logging: {} {} -> {}\n",
            redacted.logging.level, redacted.logging.format, redacted.logging.output
        ));
        Ok(output)
    }
}
