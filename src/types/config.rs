//! Configuration structures for the reaction-time dataset generator
//!
//! This module contains the generator configuration, its validation logic and
//! the command line / configuration file layers that produce it.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::identifiers::MAX_SUBJECT_COUNT;

/// Default values for every recognized configuration option
pub mod defaults {
    /// Seed of the pseudo-random stream
    pub const SEED: u64 = 2_340_875;

    /// Number of subjects in the study
    pub const SUBJECT_COUNT: usize = 102;

    /// Tokens presented to each subject per phase
    pub const TOKEN_COUNT: usize = 20;

    /// Trials run for each token
    pub const TRIAL_COUNT: usize = 20;

    /// Session phases per subject
    pub const PHASE_COUNT: usize = 2;

    /// Lower bound of the age distribution (inclusive)
    pub const AGE_MIN: f64 = 18.0;

    /// Upper bound of the age distribution (exclusive)
    pub const AGE_MAX: f64 = 52.0;

    /// Minimum attempts per record (inclusive)
    pub const ATTEMPTS_MIN: u32 = 1;

    /// Maximum attempts per record (inclusive)
    pub const ATTEMPTS_MAX: u32 = 15;

    /// Simulated reaction times above this are replaced by reference values
    pub const SUBSTITUTION_THRESHOLD: f64 = 600.0;

    /// Timeout ceiling in milliseconds; larger reaction times are clamped to it
    pub const TIMEOUT: f64 = 2200.0;

    /// Reference reaction-time sample
    pub const REFERENCE_PATH: &str = "data/reference_rt.csv";

    /// Exported dataset
    pub const OUTPUT_PATH: &str = "simulated_data.csv";
}

/// Parameters of the composite reaction-time model
///
/// A simulated reaction time is
/// `LogNormal(location, scale) + Uniform(min, max) + Normal(mean, sd) + offset`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReactionTimeModel {
    /// Location (mu) of the underlying normal of the log-normal term
    pub lognormal_location: f64,
    /// Scale (sigma) of the underlying normal of the log-normal term
    pub lognormal_scale: f64,
    /// Lower bound of the uniform term
    pub uniform_min: f64,
    /// Upper bound of the uniform term
    pub uniform_max: f64,
    /// Mean of the normal term
    pub normal_mean: f64,
    /// Standard deviation of the normal term
    pub normal_sd: f64,
    /// Constant added to every draw
    pub offset: f64,
}

impl Default for ReactionTimeModel {
    fn default() -> Self {
        Self {
            lognormal_location: 6.0,
            lognormal_scale: 0.5,
            uniform_min: 10.0,
            uniform_max: 100.0,
            normal_mean: 70.0,
            normal_sd: 15.0,
            offset: 5.0,
        }
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "reaction-time-simulator",
    version = "0.1.0",
    about = "Reaction Time Simulator - Generates a reproducible long-format experimental dataset",
    long_about = "Generates a simulated reaction-time experiment (subjects x tokens x trials x phases) with ages, groups, attempts, correctness and reaction times, replaces implausible reaction times with values drawn from a real reference sample, and exports the table as CSV.

EXAMPLES:
    # Run with default settings (seed 2340875, 102 subjects)
    reaction-time-simulator

    # Use a configuration file
    reaction-time-simulator --config config.json

    # Override specific settings
    reaction-time-simulator --seed 42 --reference data/absRT.csv --output out.csv

    # Generate configuration template
    reaction-time-simulator --print-config > my-config.json

    # Validate configuration and reference data without writing output
    reaction-time-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed (default: 2340875)")]
    pub seed: Option<u64>,

    /// Number of subjects to simulate
    #[arg(
        long,
        help = "Number of subjects",
        long_help = "Number of subjects in the study. Must be at least 3 so every group is populated. Default: 102"
    )]
    pub subject_count: Option<usize>,

    /// Tokens per phase
    #[arg(long, help = "Tokens per phase (default: 20)")]
    pub token_count: Option<usize>,

    /// Trials per token
    #[arg(long, help = "Trials per token (default: 20)")]
    pub trial_count: Option<usize>,

    /// Phases per subject
    #[arg(long, help = "Phases per subject (default: 2)")]
    pub phase_count: Option<usize>,

    /// Reaction times above this value are replaced from the reference sample
    #[arg(long, help = "Substitution threshold in ms (default: 600)")]
    pub substitution_threshold: Option<f64>,

    /// Timeout ceiling for reaction times
    #[arg(long, help = "Timeout ceiling in ms (default: 2200)")]
    pub timeout: Option<f64>,

    /// Reference reaction-time CSV with an `absRT` column
    #[arg(
        long,
        help = "Reference reaction-time CSV",
        long_help = "CSV file with a numeric absRT column used to replace implausible simulated reaction times. Default: data/reference_rt.csv"
    )]
    pub reference: Option<String>,

    /// Output CSV path
    #[arg(short, long, help = "Output CSV path (default: simulated_data.csv)")]
    pub output: Option<String>,

    /// Output path for the JSON run summary
    #[arg(long, help = "Write a JSON run summary to this path")]
    pub summary_output: Option<String>,

    /// Directory for JSON log files
    #[arg(long, help = "Also write JSON logs to a daily rolling file in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without generating data
    #[arg(long, help = "Validate configuration and reference data without writing output")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Random seed
    pub seed: Option<u64>,
    /// Number of subjects
    pub subject_count: Option<usize>,
    /// Tokens per phase
    pub token_count: Option<usize>,
    /// Trials per token
    pub trial_count: Option<usize>,
    /// Phases per subject
    pub phase_count: Option<usize>,
    /// Lower bound of the age distribution
    pub age_min: Option<f64>,
    /// Upper bound of the age distribution
    pub age_max: Option<f64>,
    /// Minimum attempts per record
    pub attempts_min: Option<u32>,
    /// Maximum attempts per record
    pub attempts_max: Option<u32>,
    /// Substitution threshold
    pub substitution_threshold: Option<f64>,
    /// Timeout ceiling
    pub timeout: Option<f64>,
    /// Reaction-time model parameters
    pub rt_model: Option<ReactionTimeModel>,
    /// Reference reaction-time CSV
    pub reference_path: Option<String>,
    /// Output CSV path
    pub output_path: Option<String>,
    /// JSON run summary path
    pub summary_output: Option<String>,
}

/// Configuration for one run of the dataset generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Seed of the pseudo-random stream
    pub seed: u64,

    /// Number of subjects
    pub subject_count: usize,

    /// Tokens per phase
    pub token_count: usize,

    /// Trials per token
    pub trial_count: usize,

    /// Phases per subject
    pub phase_count: usize,

    /// Lower bound of the age distribution (inclusive)
    pub age_min: f64,

    /// Upper bound of the age distribution (exclusive)
    pub age_max: f64,

    /// Minimum attempts per record (inclusive)
    pub attempts_min: u32,

    /// Maximum attempts per record (inclusive)
    pub attempts_max: u32,

    /// Simulated reaction times above this are replaced by reference values
    pub substitution_threshold: f64,

    /// Reaction times above this are clamped to it
    pub timeout: f64,

    /// Reaction-time model parameters
    pub rt_model: ReactionTimeModel,

    /// Reference reaction-time CSV
    pub reference_path: String,

    /// Output CSV path
    pub output_path: String,

    /// Optional JSON run summary path
    pub summary_output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A count is too small
    #[error("{field} must be at least {minimum}, got {value}")]
    InvalidCount {
        /// Name of the offending field
        field: String,
        /// The configured value
        value: usize,
        /// Smallest accepted value
        minimum: usize,
    },

    /// A count is too large
    #[error("{field} must be at most {maximum}, got {value}")]
    CountTooLarge {
        /// Name of the offending field
        field: String,
        /// The configured value
        value: usize,
        /// Largest accepted value
        maximum: usize,
    },

    /// Age range is empty or not finite
    #[error("Invalid age range: min ({0}) must be < max ({1})")]
    InvalidAgeRange(f64, f64),

    /// Attempts range is inverted
    #[error("Invalid attempts range: min ({0}) must be <= max ({1})")]
    InvalidAttemptsRange(u32, u32),

    /// Timeout is not a positive finite number
    #[error("Timeout must be a positive finite number, got {0}")]
    InvalidTimeout(f64),

    /// Substitution threshold is negative, not finite, or above the timeout
    #[error("Substitution threshold ({threshold}) must be between 0 and the timeout ({timeout})")]
    InvalidSubstitutionThreshold {
        /// The configured threshold
        threshold: f64,
        /// The configured timeout
        timeout: f64,
    },

    /// A reaction-time model parameter is out of its domain
    #[error("Invalid reaction-time model parameter {field}: {value}")]
    InvalidModelParameter {
        /// Name of the offending parameter
        field: String,
        /// The configured value
        value: f64,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: defaults::SEED,
            subject_count: defaults::SUBJECT_COUNT,
            token_count: defaults::TOKEN_COUNT,
            trial_count: defaults::TRIAL_COUNT,
            phase_count: defaults::PHASE_COUNT,
            age_min: defaults::AGE_MIN,
            age_max: defaults::AGE_MAX,
            attempts_min: defaults::ATTEMPTS_MIN,
            attempts_max: defaults::ATTEMPTS_MAX,
            substitution_threshold: defaults::SUBSTITUTION_THRESHOLD,
            timeout: defaults::TIMEOUT,
            rt_model: ReactionTimeModel::default(),
            reference_path: defaults::REFERENCE_PATH.to_string(),
            output_path: defaults::OUTPUT_PATH.to_string(),
            summary_output: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments and the optional config file
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_config_file(file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            seed: file.seed.unwrap_or(defaults.seed),
            subject_count: file.subject_count.unwrap_or(defaults.subject_count),
            token_count: file.token_count.unwrap_or(defaults.token_count),
            trial_count: file.trial_count.unwrap_or(defaults.trial_count),
            phase_count: file.phase_count.unwrap_or(defaults.phase_count),
            age_min: file.age_min.unwrap_or(defaults.age_min),
            age_max: file.age_max.unwrap_or(defaults.age_max),
            attempts_min: file.attempts_min.unwrap_or(defaults.attempts_min),
            attempts_max: file.attempts_max.unwrap_or(defaults.attempts_max),
            substitution_threshold: file
                .substitution_threshold
                .unwrap_or(defaults.substitution_threshold),
            timeout: file.timeout.unwrap_or(defaults.timeout),
            rt_model: file.rt_model.unwrap_or(defaults.rt_model),
            reference_path: file.reference_path.unwrap_or(defaults.reference_path),
            output_path: file.output_path.unwrap_or(defaults.output_path),
            summary_output: file.summary_output.or(defaults.summary_output),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.seed {
            config.seed = value;
        }
        if let Some(value) = args.subject_count {
            config.subject_count = value;
        }
        if let Some(value) = args.token_count {
            config.token_count = value;
        }
        if let Some(value) = args.trial_count {
            config.trial_count = value;
        }
        if let Some(value) = args.phase_count {
            config.phase_count = value;
        }
        if let Some(value) = args.substitution_threshold {
            config.substitution_threshold = value;
        }
        if let Some(value) = args.timeout {
            config.timeout = value;
        }
        if let Some(value) = args.reference {
            config.reference_path = value;
        }
        if let Some(value) = args.output {
            config.output_path = value;
        }
        if let Some(value) = args.summary_output {
            config.summary_output = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Every group band needs at least one subject
        Self::validate_count("subject_count", self.subject_count, 3)?;
        if self.subject_count > MAX_SUBJECT_COUNT {
            return Err(ConfigValidationError::CountTooLarge {
                field: "subject_count".to_string(),
                value: self.subject_count,
                maximum: MAX_SUBJECT_COUNT,
            });
        }
        Self::validate_count("token_count", self.token_count, 1)?;
        Self::validate_count("trial_count", self.trial_count, 1)?;
        Self::validate_count("phase_count", self.phase_count, 1)?;

        if !(self.age_min.is_finite() && self.age_max.is_finite() && self.age_min < self.age_max) {
            return Err(ConfigValidationError::InvalidAgeRange(self.age_min, self.age_max));
        }

        if self.attempts_min > self.attempts_max {
            return Err(ConfigValidationError::InvalidAttemptsRange(
                self.attempts_min,
                self.attempts_max,
            ));
        }

        if !(self.timeout.is_finite() && self.timeout > 0.0) {
            return Err(ConfigValidationError::InvalidTimeout(self.timeout));
        }

        if !(self.substitution_threshold.is_finite()
            && (0.0..=self.timeout).contains(&self.substitution_threshold))
        {
            return Err(ConfigValidationError::InvalidSubstitutionThreshold {
                threshold: self.substitution_threshold,
                timeout: self.timeout,
            });
        }

        self.validate_rt_model()
    }

    fn validate_count(field: &str, value: usize, minimum: usize) -> Result<(), ConfigValidationError> {
        if value < minimum {
            return Err(ConfigValidationError::InvalidCount {
                field: field.to_string(),
                value,
                minimum,
            });
        }
        Ok(())
    }

    fn validate_rt_model(&self) -> Result<(), ConfigValidationError> {
        let model = &self.rt_model;
        let invalid = |field: &str, value: f64| ConfigValidationError::InvalidModelParameter {
            field: field.to_string(),
            value,
        };

        let finite = [
            ("lognormal_location", model.lognormal_location),
            ("lognormal_scale", model.lognormal_scale),
            ("uniform_min", model.uniform_min),
            ("uniform_max", model.uniform_max),
            ("normal_mean", model.normal_mean),
            ("normal_sd", model.normal_sd),
            ("offset", model.offset),
        ];
        if let Some((field, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(*field, *value));
        }

        if model.lognormal_scale < 0.0 {
            return Err(invalid("lognormal_scale", model.lognormal_scale));
        }
        if model.normal_sd < 0.0 {
            return Err(invalid("normal_sd", model.normal_sd));
        }
        if model.uniform_min > model.uniform_max {
            return Err(invalid("uniform_max", model.uniform_max));
        }

        Ok(())
    }

    /// Records generated for each subject
    pub fn records_per_subject(&self) -> usize {
        self.phase_count * self.records_per_phase()
    }

    /// Records in one phase of a subject's block
    pub fn records_per_phase(&self) -> usize {
        self.token_count * self.trial_count
    }

    /// Total number of records in the dataset
    pub fn total_records(&self) -> usize {
        self.subject_count * self.records_per_subject()
    }
}
