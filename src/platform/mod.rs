//! Platform Access
//!
//! Authenticated JSON GETs against the conversational-agent platform. The
//! `AgentPlatform` trait is the seam between the probe steps and the network.

mod client;
mod endpoint;

pub use client::HttpPlatformClient;
pub use endpoint::Endpoint;

use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Source of platform responses.
#[async_trait]
pub trait AgentPlatform: Send + Sync {
    /// Issue the request for `endpoint` and return the parsed JSON body.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ApiError>;
}
