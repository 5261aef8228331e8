//! Expansion of subject attributes and record draws into the long-format table
//!
//! Within a subject's block records are ordered phase-major, then by token,
//! then by trial: the trial number advances every record, the token every
//! `trial_count` records and the phase every `token_count * trial_count`
//! records. Blocks are laid out in subject order.

use tracing::{info, instrument};

use crate::sampling::{SubjectAttributes, TrialDraws};
use crate::simulation::{SimulationError, SimulationResult};
use crate::table::{ExperimentTable, Record};
use crate::types::SimulationConfig;

/// Structural coordinates of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordPosition {
    /// Zero-based subject index
    pub subject_index: usize,
    /// Token number, 1-based
    pub token: u32,
    /// Trial number, 1-based
    pub trial: u32,
    /// Phase number, 1-based
    pub phase: u32,
}

/// Mapping between record index and structural coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    trial_count: usize,
    records_per_phase: usize,
    records_per_subject: usize,
}

impl RecordLayout {
    /// Layout for the configured counts
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            trial_count: config.trial_count,
            records_per_phase: config.records_per_phase(),
            records_per_subject: config.records_per_subject(),
        }
    }

    /// Records in one subject's block
    pub fn records_per_subject(&self) -> usize {
        self.records_per_subject
    }

    /// Coordinates of the record at `index`
    pub fn locate(&self, index: usize) -> RecordPosition {
        let within_subject = index % self.records_per_subject;
        let within_phase = within_subject % self.records_per_phase;

        RecordPosition {
            subject_index: index / self.records_per_subject,
            token: (within_phase / self.trial_count + 1) as u32,
            trial: (within_phase % self.trial_count + 1) as u32,
            phase: (within_subject / self.records_per_phase + 1) as u32,
        }
    }
}

/// Builds the long-format table
#[derive(Debug, Clone)]
pub struct TableBuilder {
    layout: RecordLayout,
    subject_count: usize,
}

impl TableBuilder {
    /// Create a builder for the configured counts
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            layout: RecordLayout::new(config),
            subject_count: config.subject_count,
        }
    }

    /// Replicate subject attributes across every record and attach the draws
    #[instrument(skip_all, fields(subjects = subjects.len(), records = draws.len()))]
    pub fn expand(&self, subjects: &[SubjectAttributes], draws: &TrialDraws) -> SimulationResult<ExperimentTable> {
        if subjects.len() != self.subject_count {
            return Err(SimulationError::table_invariant_error(format!(
                "expected {} subjects, got {}",
                self.subject_count,
                subjects.len()
            )));
        }

        let expected = self.subject_count * self.layout.records_per_subject();
        if draws.len() != expected
            || draws.correct.len() != expected
            || draws.attempts.len() != expected
        {
            return Err(SimulationError::table_invariant_error(format!(
                "expected {} record draws, got {} reaction times, {} correct, {} attempts",
                expected,
                draws.reaction_time.len(),
                draws.correct.len(),
                draws.attempts.len()
            )));
        }

        let records: Vec<Record> = (0..expected)
            .map(|index| {
                let position = self.layout.locate(index);
                let subject = &subjects[position.subject_index];
                Record {
                    subject: subject.id,
                    age: subject.age,
                    group: subject.group,
                    token: position.token,
                    attempts: draws.attempts[index],
                    correct: draws.correct[index],
                    rt: draws.reaction_time[index],
                    trial: position.trial,
                    phase: position.phase,
                }
            })
            .collect();

        info!("Expanded {} subjects into {} records", subjects.len(), records.len());
        Ok(ExperimentTable::from_records(records))
    }
}
