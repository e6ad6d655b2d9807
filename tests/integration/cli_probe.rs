use botprobe::config::ProbeConfig;
use botprobe::tooling::cli::{CliContext, Commands};
use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

use crate::support::{
    api_config, mount_agent_info, mount_online_info, mount_token_check, UNREACHABLE_BASE_URL,
};

/// The CLI drives its own runtime, so the mock server lives on a separate one.
fn start_platform() -> (tokio::runtime::Runtime, MockServer) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        mount_token_check(&server, json!({"code": 0})).await;
        mount_agent_info(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": {"name": "helper"}})),
        )
        .await;
        mount_online_info(
            &server,
            json!({"code": 0, "data": {"shortcuts": [{"id": "1", "name": "A"}, {"id": "2", "name": "B"}]}}),
        )
        .await;
        server
    });
    (rt, server)
}

fn context_for(base_url: &str) -> CliContext {
    let config = ProbeConfig {
        api: api_config(base_url),
        ..ProbeConfig::default()
    };
    CliContext::from_config(config).unwrap()
}

#[test]
fn check_text_reports_every_step() {
    let (_rt, server) = start_platform();
    let cli = context_for(&server.uri());

    let output = cli
        .execute(&Commands::Check {
            format: "text".to_string(),
        })
        .unwrap();

    assert!(output.contains("Token check: valid"));
    assert!(output.contains("Agent info: {"));
    assert!(output.contains("\"name\": \"helper\""));
    assert!(output.contains("Online info: {"));
    assert_eq!(output.matches("Shortcut id: ").count(), 2);
    assert!(output.contains("Shortcut id: 1, name: A"));
    assert!(output.contains("Shortcut id: 2, name: B"));
    assert!(output.contains("3 passed, 0 failed"));
}

#[test]
fn check_json_contract_has_required_fields() {
    let (_rt, server) = start_platform();
    let cli = context_for(&server.uri());

    let output = cli
        .execute(&Commands::Check {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["base_url"], Value::String(server.uri()));
    assert!(parsed.get("generated_at").and_then(|v| v.as_str()).is_some());
    assert_eq!(parsed["passed"], 3);
    let steps = parsed["steps"].as_array().expect("steps array should exist");
    let names: Vec<&str> = steps.iter().filter_map(|s| s["step"].as_str()).collect();
    assert_eq!(names, vec!["token_check", "agent_info", "online_info"]);
    assert_eq!(steps[2]["shortcuts"].as_array().unwrap().len(), 2);
}

#[test]
fn single_step_commands_run_one_step() {
    let (_rt, server) = start_platform();
    let cli = context_for(&server.uri());

    let output = cli
        .execute(&Commands::Online {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Shortcut id: 1, name: A"));
    assert!(!output.contains("Token check"));
    assert!(output.contains("1 passed, 0 failed"));

    let output = cli
        .execute(&Commands::Token {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["steps"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["steps"][0]["outcome"], "passed");
}

#[test]
fn unreachable_platform_still_returns_a_report() {
    let cli = context_for(UNREACHABLE_BASE_URL);

    let output = cli
        .execute(&Commands::Check {
            format: "text".to_string(),
        })
        .expect("step failures must not fail the command");

    assert!(output.contains("Token check failed: "));
    assert!(output.contains("Failed to fetch agent info: "));
    assert!(output.contains("Failed to fetch online info: "));
    assert!(output.contains("0 passed, 3 failed"));
}
