use botprobe::config::ApiConfig;
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "pat_integration_token";
pub const BOT_ID: &str = "7400000000000000001";

/// Closed local port: connecting fails immediately.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        token: TOKEN.to_string(),
        bot_id: BOT_ID.to_string(),
        timeout_secs: Some(5),
    }
}

pub async fn mount_token_check(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/bots"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_agent_info(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/bot/get"))
        .and(query_param("bot_id", BOT_ID))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_online_info(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/bot/get_online_info"))
        .and(query_param("bot_id", BOT_ID))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
