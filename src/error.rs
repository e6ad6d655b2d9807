//! Error types for botprobe.

use thiserror::Error;

/// Errors surfaced by configuration, platform access, and command execution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid or unloadable configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The HTTP request could not be completed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Async runtime or output rendering failure.
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}
