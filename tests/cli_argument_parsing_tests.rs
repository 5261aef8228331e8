//! Tests for CLI argument parsing
//!
//! These tests verify that command line arguments are parsed and layered over
//! the configuration file and the built-in defaults.

use clap::Parser;
use reaction_time_simulator::types::config::{CliArgs, SimulationConfig};
use std::io::Write;

/// Parsing with no arguments keeps every override unset
#[test]
fn test_no_arguments() {
    let args = CliArgs::try_parse_from(vec!["test"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.seed.is_none());
    assert!(args.reference.is_none());
    assert!(!args.verbose);
    assert!(!args.dry_run);

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config, SimulationConfig::default());
}

/// Every override reaches the configuration
#[test]
fn test_overrides() {
    let args = CliArgs::try_parse_from(vec![
        "test",
        "--seed",
        "42",
        "--subject-count",
        "30",
        "--token-count",
        "10",
        "--trial-count",
        "5",
        "--phase-count",
        "3",
        "--substitution-threshold",
        "700",
        "--timeout",
        "2500",
        "--reference",
        "ref.csv",
        "-o",
        "out.csv",
        "--summary-output",
        "summary.json",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config.subject_count, 30);
    assert_eq!(config.token_count, 10);
    assert_eq!(config.trial_count, 5);
    assert_eq!(config.phase_count, 3);
    assert_eq!(config.substitution_threshold, 700.0);
    assert_eq!(config.timeout, 2500.0);
    assert_eq!(config.reference_path, "ref.csv");
    assert_eq!(config.output_path, "out.csv");
    assert_eq!(config.summary_output.as_deref(), Some("summary.json"));
    assert_eq!(config.total_records(), 30 * 3 * 10 * 5);
    config.validate().unwrap();
}

/// Logging and mode flags
#[test]
fn test_flags() {
    let args = CliArgs::try_parse_from(vec![
        "test",
        "-v",
        "--debug",
        "--dry-run",
        "--print-config",
        "--log-dir",
        "logs",
    ])
    .unwrap();
    assert!(args.verbose);
    assert!(args.debug);
    assert!(args.dry_run);
    assert!(args.print_config);
    assert_eq!(args.log_dir.as_deref(), Some("logs"));
}

/// Malformed values are rejected by the parser
#[test]
fn test_invalid_values() {
    assert!(CliArgs::try_parse_from(vec!["test", "--seed", "-1"]).is_err());
    assert!(CliArgs::try_parse_from(vec!["test", "--subject-count", "many"]).is_err());
    assert!(CliArgs::try_parse_from(vec!["test", "--unknown-flag"]).is_err());
}

/// Out-of-range values parse but fail validation
#[test]
fn test_validation_after_parsing() {
    let args = CliArgs::try_parse_from(vec!["test", "--subject-count", "0"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(vec!["test", "--substitution-threshold", "3000"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

/// CLI values win over the configuration file, file values win over defaults
#[test]
fn test_config_file_layering() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"seed": 7, "subject_count": 9, "age_min": 20.0}}"#).unwrap();
    let path = file.path().display().to_string();

    let args = CliArgs::try_parse_from(vec!["test", "--config", &path, "--seed", "99"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();

    assert_eq!(config.seed, 99);
    assert_eq!(config.subject_count, 9);
    assert_eq!(config.age_min, 20.0);
    assert_eq!(config.token_count, 20);
}

/// A missing configuration file is an error
#[test]
fn test_missing_config_file() {
    let args = CliArgs::try_parse_from(vec!["test", "--config", "does/not/exist.json"]).unwrap();
    assert!(SimulationConfig::from_cli_args(args).is_err());
}
