use std::fs;

use botprobe::config::{ConfigLoader, ConfigOverrides};
use serial_test::serial;
use tempfile::TempDir;

const ENV_KEYS: [&str; 4] = [
    "BOTPROBE_API__TOKEN",
    "BOTPROBE_API__BOT_ID",
    "BOTPROBE_API__BASE_URL",
    "BOTPROBE_API__TIMEOUT_SECS",
];

/// Run `f` with XDG_CONFIG_HOME pointed at `temp_dir` and no BOTPROBE_API__* vars set.
fn with_isolated_env<F: FnOnce()>(temp_dir: &TempDir, f: F) {
    let previous_xdg = std::env::var("XDG_CONFIG_HOME").ok();
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    match previous_xdg {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

fn write_global_config(temp_dir: &TempDir, content: &str) {
    let dir = temp_dir.path().join("botprobe");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
#[serial]
fn defaults_apply_without_any_source() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        let config = ConfigLoader::load(&ConfigOverrides::default()).unwrap();
        assert_eq!(config.api.base_url, "https://api.coze.cn");
        assert_eq!(config.api.token, "coze-token");
        assert_eq!(config.api.bot_id, "bot-id");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.logging.output, "stderr");
    });
}

#[test]
#[serial]
fn global_file_then_env_then_cli() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        write_global_config(
            &temp_dir,
            r#"
[api]
base_url = "https://api.coze.com"
token = "pat_from_file"
bot_id = "111"

[logging]
level = "debug"
"#,
        );

        let config = ConfigLoader::load(&ConfigOverrides::default()).unwrap();
        assert_eq!(config.api.base_url, "https://api.coze.com");
        assert_eq!(config.api.token, "pat_from_file");
        assert_eq!(config.logging.level, "debug");

        std::env::set_var("BOTPROBE_API__TOKEN", "pat_from_env");
        std::env::set_var("BOTPROBE_API__BOT_ID", "7400000000000000001");
        let config = ConfigLoader::load(&ConfigOverrides::default()).unwrap();
        assert_eq!(config.api.token, "pat_from_env");
        assert_eq!(config.api.bot_id, "7400000000000000001");
        assert_eq!(config.api.base_url, "https://api.coze.com");

        let overrides = ConfigOverrides {
            token: Some("pat_from_cli".to_string()),
            timeout_secs: Some(9),
            ..ConfigOverrides::default()
        };
        let config = ConfigLoader::load(&overrides).unwrap();
        assert_eq!(config.api.token, "pat_from_cli");
        assert_eq!(config.api.bot_id, "7400000000000000001");
        assert_eq!(config.api.timeout_secs, Some(9));
    });
}

#[test]
#[serial]
fn explicit_file_replaces_global_file() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        write_global_config(&temp_dir, "[api]\ntoken = \"pat_global\"\n");
        let explicit = temp_dir.path().join("probe.toml");
        fs::write(&explicit, "[api]\nbot_id = \"222\"\ntimeout_secs = 15\n").unwrap();

        let config = ConfigLoader::load_from_file(&explicit, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.api.bot_id, "222");
        assert_eq!(config.api.timeout_secs, Some(15));
        assert_eq!(config.api.token, "coze-token");
    });
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        let missing = temp_dir.path().join("absent.toml");
        assert!(ConfigLoader::load_from_file(&missing, &ConfigOverrides::default()).is_err());
    });
}

#[test]
#[serial]
fn invalid_base_url_is_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        let overrides = ConfigOverrides {
            base_url: Some("api.coze.cn".to_string()),
            ..ConfigOverrides::default()
        };
        let err = ConfigLoader::load(&overrides).unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    });
}

#[test]
#[serial]
fn env_timeout_is_parsed() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        std::env::set_var("BOTPROBE_API__TIMEOUT_SECS", "30");
        let config = ConfigLoader::load(&ConfigOverrides::default()).unwrap();
        assert_eq!(config.api.timeout_secs, Some(30));
    });
}

#[test]
#[serial]
fn log_file_flag_lands_in_logging_config() {
    let temp_dir = TempDir::new().unwrap();
    with_isolated_env(&temp_dir, || {
        let overrides = ConfigOverrides {
            log_output: Some("file".to_string()),
            log_file: Some(temp_dir.path().join("probe.log")),
            ..ConfigOverrides::default()
        };
        let config = ConfigLoader::load(&overrides).unwrap();
        assert_eq!(config.logging.output, "file");
        assert_eq!(config.logging.file, Some(temp_dir.path().join("probe.log")));
    });
}
