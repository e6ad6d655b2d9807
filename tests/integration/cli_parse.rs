use botprobe::tooling::cli::{Cli, Commands};
use clap::{CommandFactory, Parser};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["botprobe"],
        vec!["botprobe", "check"],
        vec!["botprobe", "check", "--format", "json"],
        vec!["botprobe", "token"],
        vec!["botprobe", "agent", "--format", "json"],
        vec!["botprobe", "online"],
        vec!["botprobe", "config", "--format", "toml"],
        vec!["botprobe", "--token", "pat_x", "--bot-id", "42", "check"],
        vec!["botprobe", "check", "--base-url", "https://api.coze.com"],
        vec!["botprobe", "online", "--timeout-secs", "10", "--log-level", "debug"],
        vec![
            "botprobe",
            "--config",
            "/tmp/probe.toml",
            "--log-output",
            "file",
            "--log-file",
            "/tmp/probe.log",
            "token",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_formats() {
    assert!(Cli::try_parse_from(["botprobe", "check", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["botprobe", "config", "--format", "json"]).is_err());
}

#[test]
fn parse_rejects_non_numeric_timeout() {
    assert!(Cli::try_parse_from(["botprobe", "--timeout-secs", "soon", "check"]).is_err());
}

#[test]
fn global_flags_after_subcommand_are_accepted() {
    let cli = Cli::try_parse_from(["botprobe", "agent", "--bot-id", "7400000000000000001"]).unwrap();
    assert_eq!(cli.bot_id.as_deref(), Some("7400000000000000001"));
    assert_eq!(
        cli.command_or_default(),
        Commands::Agent {
            format: "text".to_string()
        }
    );
}

#[test]
fn help_lists_every_subcommand() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for token in ["check", "token", "agent", "online", "config", "--bot-id", "--base-url"] {
        assert!(output.contains(token), "help should mention {token}");
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
