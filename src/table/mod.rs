//! Long-format experiment table
//!
//! One [`Record`] per subject × phase × token × trial. Subject-level
//! attributes (age, group) are replicated onto every row of the subject's
//! contiguous block; trial-level draws are attached by record index.
//!
//! # Usage Example
//!
//! ```rust
//! use reaction_time_simulator::sampling::{seeded_rng, SubjectGenerator, TrialSampler};
//! use reaction_time_simulator::table::TableBuilder;
//! use reaction_time_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig { subject_count: 3, token_count: 2, trial_count: 2, ..Default::default() };
//! let mut rng = seeded_rng(config.seed);
//!
//! let subjects = SubjectGenerator::new(&config).generate(&mut rng).unwrap();
//! let draws = TrialSampler::new(&config).unwrap().sample(config.total_records(), &mut rng).unwrap();
//! let table = TableBuilder::new(&config).expand(&subjects, &draws).unwrap();
//!
//! assert_eq!(table.len(), 24);
//! ```

pub mod builder;
pub mod record;

pub use builder::{RecordLayout, RecordPosition, TableBuilder};
pub use record::{Record, COLUMNS};

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{Group, SimulationConfig};

/// The generated dataset, in export order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentTable {
    records: Vec<Record>,
}

impl ExperimentTable {
    /// Wrap records that are already in export order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access for post-processing stages
    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in export order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Reaction times in record order
    pub fn reaction_times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.rt).collect()
    }

    /// Consume the table, returning its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Verify the structural and value invariants of a finished table
    ///
    /// Checks row count, block layout, per-subject constancy of age and
    /// group, and every value domain. Returns the first violation found.
    pub fn check_invariants(&self, config: &SimulationConfig) -> SimulationResult<()> {
        let expected = config.total_records();
        if self.records.len() != expected {
            return Err(SimulationError::table_invariant_error(format!(
                "expected {} records, found {}",
                expected,
                self.records.len()
            )));
        }

        let layout = RecordLayout::new(config);
        let block = layout.records_per_subject();

        for (index, record) in self.records.iter().enumerate() {
            let violation = |what: String| {
                SimulationError::table_invariant_error(format!("record {}: {}", index, what))
            };

            let position = layout.locate(index);
            if record.subject.index() != position.subject_index
                || record.token != position.token
                || record.trial != position.trial
                || record.phase != position.phase
            {
                return Err(violation(format!(
                    "found {} token {} trial {} phase {}, expected subject index {} token {} trial {} phase {}",
                    record.subject,
                    record.token,
                    record.trial,
                    record.phase,
                    position.subject_index,
                    position.token,
                    position.trial,
                    position.phase
                )));
            }

            let first = &self.records[position.subject_index * block];
            if record.age != first.age || record.group != first.group {
                return Err(violation(format!("attributes of {} vary within its block", record.subject)));
            }

            let group = Group::for_subject_index(position.subject_index, config.subject_count);
            if record.group != group {
                return Err(violation(format!("{} is in {}, expected {}", record.subject, record.group, group)));
            }

            if !(config.age_min..=config.age_max).contains(&record.age) {
                return Err(violation(format!("age {} out of range", record.age)));
            }
            if !(config.attempts_min..=config.attempts_max).contains(&record.attempts) {
                return Err(violation(format!("attempts {} out of range", record.attempts)));
            }
            if record.correct > 1 {
                return Err(violation(format!("correct flag {} is not 0 or 1", record.correct)));
            }
            if !(0.0..=config.timeout).contains(&record.rt) {
                return Err(violation(format!("reaction time {} outside [0, {}]", record.rt, config.timeout)));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a ExperimentTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
