//! Tests for CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use patsyn::cli::args::{Cli, Commands};
use patsyn::cli::CliError;
use patsyn::application::ApplicationError;
use patsyn::config::Settings;
use patsyn::domain::WildcardPolicy;
use patsyn::exitcode;

#[test]
fn given_generate_flags_when_parsing_then_overrides_apply_to_settings() {
    let cli = Cli::try_parse_from([
        "patsyn",
        "-dd",
        "generate",
        "words.txt",
        "--wildcard",
        "never",
        "--raw",
        "-o",
        "out.txt",
    ])
    .unwrap();
    assert_eq!(cli.debug, 2);

    match cli.command {
        Some(Commands::Generate {
            input,
            output,
            stdout,
            synthesis,
        }) => {
            assert_eq!(input, Some(PathBuf::from("words.txt")));
            assert_eq!(output, Some(PathBuf::from("out.txt")));
            assert!(!stdout);

            let mut settings = Settings::default();
            synthesis.apply(&mut settings);
            assert_eq!(settings.wildcard, WildcardPolicy::Never);
            assert!(!settings.escape);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_stdout_and_output_when_parsing_then_conflict() {
    let result = Cli::try_parse_from(["patsyn", "generate", "--stdout", "-o", "x"]);
    assert!(result.is_err());
}

#[test]
fn given_unknown_policy_when_parsing_then_fails() {
    let result = Cli::try_parse_from(["patsyn", "audit", "--wildcard", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn given_no_subcommand_when_parsing_then_command_is_none() {
    let cli = Cli::try_parse_from(["patsyn"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn given_errors_when_mapping_exit_codes_then_follow_sysexits() {
    let input = CliError::from(ApplicationError::invalid_input("bad"));
    assert_eq!(input.exit_code(), exitcode::DATAERR);
    let config = CliError::from(ApplicationError::Config {
        message: "bad".into(),
    });
    assert_eq!(config.exit_code(), exitcode::CONFIG);
    assert_eq!(CliError::Usage("x".into()).exit_code(), exitcode::USAGE);
}
