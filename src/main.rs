// Reaction Time Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/reaction-time-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/reaction-time-simulator --seed 42 --reference data/reference_rt.csv --output out.csv --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use reaction_time_simulator::simulation::{DatasetPipeline, DatasetStatistics, LoggingConfig};
use reaction_time_simulator::types::config::CliArgs;
use reaction_time_simulator::types::SimulationConfig;
use std::process;
use tracing::{error, info, instrument};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = LoggingConfig::from_flags(args.verbose, args.debug, args.log_dir.as_deref()).init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Reaction Time Simulator");

    if let Err(e) = run(args) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Reaction Time Simulator completed successfully");
}

#[instrument(skip_all)]
fn run(args: CliArgs) -> Result<()> {
    let dry_run = args.dry_run;
    let config = SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    let pipeline = DatasetPipeline::new(config).context("Invalid configuration")?;

    if dry_run {
        let reference = pipeline
            .load_reference()
            .context("Reference data check failed")?;
        eprintln!("Configuration validation successful!");
        eprintln!(
            "Reference sample: {} values from {}",
            reference.len(),
            reference.source()
        );
        eprintln!("Dry run mode - no data will be written.");
        print_configuration_summary(pipeline.config());
        return Ok(());
    }

    print_startup_banner(pipeline.config());

    eprintln!("Loading reference sample...");
    let reference = pipeline.load_reference().context("Failed to load reference sample")?;

    eprintln!("Generating {} records...", pipeline.config().total_records());
    let run = pipeline.generate(&reference).context("Dataset generation failed")?;

    eprintln!("Writing {}...", pipeline.config().output_path);
    pipeline
        .export(&run)
        .with_context(|| format!("Failed to export to {}", pipeline.config().output_path))?;

    if let Some(summary_path) = &pipeline.config().summary_output {
        eprintln!("Run summary written to: {}", summary_path);
    }

    print_final_statistics(&run.statistics);
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Reaction Time Simulator");
    eprintln!("=======================");
    eprintln!("Synthetic long-format reaction-time data for a repeated-measures design");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    let model = &config.rt_model;

    eprintln!("Configuration:");
    eprintln!("  Random Seed: {}", config.seed);
    eprintln!("  Subjects: {}", config.subject_count);
    eprintln!(
        "  Design: {} phases x {} tokens x {} trials",
        config.phase_count, config.token_count, config.trial_count
    );
    eprintln!("  Age Range: {} - {}", config.age_min, config.age_max);
    eprintln!("  Attempts Range: {} - {}", config.attempts_min, config.attempts_max);
    eprintln!(
        "  RT Model: lognormal({}, {}) + uniform[{}, {}] + normal({}, {}) + {}",
        model.lognormal_location,
        model.lognormal_scale,
        model.uniform_min,
        model.uniform_max,
        model.normal_mean,
        model.normal_sd,
        model.offset
    );
    eprintln!("  Substitution Threshold: {} ms", config.substitution_threshold);
    eprintln!("  Timeout: {} ms", config.timeout);
    eprintln!("  Reference: {}", config.reference_path);
    eprintln!("  Output: {}", config.output_path);
    eprintln!("\nExpected Scale:");
    eprintln!("  Records per Subject: {}", config.records_per_subject());
    eprintln!("  Total Records: {}", config.total_records());
    eprintln!();
}

fn print_final_statistics(statistics: &DatasetStatistics) {
    eprintln!("{}", statistics.summary_report());
}
