//! Configuration
//!
//! Layered configuration for botprobe: built-in defaults, the global config file
//! (or an explicit `--config` file), `BOTPROBE_*` environment variables, and
//! finally command-line overrides.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use merge::service::ConfigOverrides;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Default platform base URL (CN region).
pub const DEFAULT_BASE_URL: &str = "https://api.coze.cn";
/// Placeholder token used when nothing else is configured.
pub const DEFAULT_TOKEN: &str = "coze-token";
/// Placeholder agent id used when nothing else is configured.
pub const DEFAULT_BOT_ID: &str = "bot-id";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform access settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform API, without trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[serde(default = "default_token")]
    pub token: String,

    /// Agent identifier (`bot_id`) for the agent-scoped endpoints.
    #[serde(default = "default_bot_id")]
    pub bot_id: String,

    /// Per-request timeout in seconds; unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}

fn default_bot_id() -> String {
    DEFAULT_BOT_ID.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: default_token(),
            bot_id: default_bot_id(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slashes removed.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn base_url_is_valid(base_url: &str) -> bool {
        let base_url = base_url.trim();
        let Some(rest) = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
        else {
            return false;
        };

        if rest.is_empty() || rest.chars().any(char::is_whitespace) {
            return false;
        }

        let authority = rest.split('/').next().unwrap_or_default();
        let host_port = authority.rsplit('@').next().unwrap_or(authority);
        let host = if host_port.starts_with('[') {
            let Some(end_bracket) = host_port.find(']') else {
                return false;
            };
            &host_port[1..end_bracket]
        } else {
            host_port.split(':').next().unwrap_or_default()
        };

        if host.is_empty() {
            return false;
        }

        host == "localhost" || host.contains('.') || host.parse::<std::net::IpAddr>().is_ok()
    }

    /// Token masked for display: keeps a short prefix so the credential kind is recognizable.
    pub fn redacted_token(&self) -> String {
        let visible: String = self.token.chars().take(4).collect();
        if self.token.chars().count() > 8 {
            format!("{}****", visible)
        } else {
            "****".to_string()
        }
    }
}

impl ProbeConfig {
    /// Validate configuration before any request is issued.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !ApiConfig::base_url_is_valid(&self.api.base_url) {
            return Err(ApiError::ConfigError(format!(
                "Invalid base URL: {}",
                self.api.base_url
            )));
        }
        if self.api.token.trim().is_empty() {
            return Err(ApiError::ConfigError("API token cannot be empty".to_string()));
        }
        if self.api.bot_id.trim().is_empty() {
            return Err(ApiError::ConfigError("Agent id cannot be empty".to_string()));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(ApiError::ConfigError(
                "timeout_secs must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy of this configuration safe to print.
    pub fn redacted(&self) -> ProbeConfig {
        let mut copy = self.clone();
        copy.api.token = self.api.redacted_token();
        copy
    }
}
