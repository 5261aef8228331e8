//! Dataset generation pipeline
//!
//! Runs the stages in a fixed order on one seeded generator:
//! subject attributes, record draws, substitution and clamping, structural
//! expansion, invariant check. Export happens only after every stage succeeded.

use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::export::{CsvExporter, RunSummary};
use crate::sampling::{seeded_rng, SubjectGenerator, TrialSampler};
use crate::simulation::{DatasetStatistics, SimulationResult};
use crate::substitution::{ReferenceSample, RtSubstitution, SubstitutionReport};
use crate::table::{ExperimentTable, TableBuilder};
use crate::types::SimulationConfig;

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct DatasetRun {
    /// The generated table, in export order
    pub table: ExperimentTable,
    /// What the substitution stage changed
    pub report: SubstitutionReport,
    /// Statistics over the table
    pub statistics: DatasetStatistics,
}

/// Generates and exports one dataset for a validated configuration
#[derive(Debug, Clone)]
pub struct DatasetPipeline {
    config: SimulationConfig,
}

impl DatasetPipeline {
    /// Create a pipeline, validating the configuration
    #[instrument(skip(config), fields(seed = config.seed, subjects = config.subject_count))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        info!(
            "Pipeline configured for {} subjects, {} records",
            config.subject_count,
            config.total_records()
        );
        Ok(Self { config })
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Load the reference sample named by the configuration
    pub fn load_reference(&self) -> SimulationResult<ReferenceSample> {
        ReferenceSample::load(&self.config.reference_path)
    }

    /// Generate the table from `reference`
    ///
    /// Identical configuration and reference give an identical table.
    #[instrument(skip_all, fields(seed = self.config.seed))]
    pub fn generate(&self, reference: &ReferenceSample) -> SimulationResult<DatasetRun> {
        let start = Instant::now();
        let config = &self.config;
        let mut rng = seeded_rng(config.seed);

        let subjects = SubjectGenerator::new(config).generate(&mut rng)?;
        debug!("Sampled attributes for {} subjects", subjects.len());

        let mut draws = TrialSampler::new(config)?.sample(config.total_records(), &mut rng)?;
        debug!("Sampled {} record draws", draws.len());

        let substitution = RtSubstitution::new(config);
        let report = substitution.apply(&mut draws.reaction_time, reference, &mut rng);
        info!(
            "Replaced {} reaction times above {} ms, clamped {} to {} ms",
            report.substituted,
            substitution.threshold(),
            report.clamped,
            substitution.timeout()
        );

        let table = TableBuilder::new(config).expand(&subjects, &draws)?;
        table.check_invariants(config)?;

        let mut statistics = DatasetStatistics::from_table(&table, report);
        statistics.set_generation_duration(start.elapsed());
        info!("Generated dataset: {}", statistics);

        Ok(DatasetRun { table, report, statistics })
    }

    /// Write the table, and the run summary when one is configured
    #[instrument(skip_all, fields(output = %self.config.output_path))]
    pub fn export(&self, run: &DatasetRun) -> SimulationResult<usize> {
        let rows = CsvExporter::new().export(&run.table, &self.config.output_path)?;

        if let Some(summary_path) = &self.config.summary_output {
            RunSummary::new(self.config.clone(), run.statistics.clone()).write_to_file(summary_path)?;
        }

        Ok(rows)
    }

    /// Load the reference sample, generate, and export
    ///
    /// Reference problems abort before any output file is touched.
    pub fn run(&self) -> SimulationResult<DatasetRun> {
        let reference = self.load_reference()?;
        let run = self.generate(&reference)?;
        self.export(&run)?;
        Ok(run)
    }
}
