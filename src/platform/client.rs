use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::platform::{AgentPlatform, Endpoint};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// `AgentPlatform` over HTTPS with bearer-token auth.
pub struct HttpPlatformClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for HttpPlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPlatformClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl HttpPlatformClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("botprobe/{}", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: api.normalized_base_url().to_string(),
            token: api.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AgentPlatform for HttpPlatformClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut request = self.http.get(&url).bearer_auth(&self.token);
        let query = endpoint.query();
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await?;
        // The body is parsed whatever the status; error payloads are JSON too.
        let status = response.status();
        debug!(endpoint = %endpoint, status = status.as_u16(), "Platform responded");

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
