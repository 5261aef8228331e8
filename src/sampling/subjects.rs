//! Subject-level attribute generation
//!
//! Each subject gets one age and one group; both stay constant across all of
//! that subject's records once the table is expanded.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{subject_ids, Group, SimulationConfig, SubjectId, MAX_SUBJECT_COUNT};

/// Attributes drawn once per subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAttributes {
    /// Subject identifier
    pub id: SubjectId,
    /// Age in years, uniform in `[age_min, age_max)`
    pub age: f64,
    /// Experimental group
    pub group: Group,
}

/// Generator for the ordered subject population
#[derive(Debug, Clone)]
pub struct SubjectGenerator {
    subject_count: usize,
    age_min: f64,
    age_max: f64,
}

impl SubjectGenerator {
    /// Create a generator from the run configuration
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            subject_count: config.subject_count,
            age_min: config.age_min,
            age_max: config.age_max,
        }
    }

    /// Generate `subj-1 ..= subj-<n>` with their ages and groups.
    ///
    /// Ages are drawn as one batch in subject order; groups are assigned by
    /// contiguous band and consume no randomness.
    #[instrument(skip(self, rng), fields(subject_count = self.subject_count))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationResult<Vec<SubjectAttributes>> {
        if self.subject_count > MAX_SUBJECT_COUNT {
            return Err(SimulationError::configuration_error(format!(
                "{} subjects cannot be numbered, the maximum is {}",
                self.subject_count, MAX_SUBJECT_COUNT
            )));
        }
        if !(self.age_min.is_finite() && self.age_max.is_finite() && self.age_min < self.age_max) {
            return Err(SimulationError::distribution_error(format!(
                "age range [{}, {}) is empty",
                self.age_min, self.age_max
            )));
        }

        let age_distribution = Uniform::new(self.age_min, self.age_max);
        let ages: Vec<f64> = (0..self.subject_count).map(|_| age_distribution.sample(rng)).collect();

        let subjects: Vec<SubjectAttributes> = subject_ids(self.subject_count)
            .into_iter()
            .zip(ages)
            .map(|(id, age)| SubjectAttributes {
                id,
                age,
                group: Group::for_subject_index(id.index(), self.subject_count),
            })
            .collect();

        debug!("Generated {} subjects", subjects.len());
        Ok(subjects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::seeded_rng;

    #[test]
    fn test_generates_ordered_population() {
        let config = SimulationConfig::default();
        let mut rng = seeded_rng(config.seed);
        let subjects = SubjectGenerator::new(&config).generate(&mut rng).unwrap();

        assert_eq!(subjects.len(), 102);
        for (index, subject) in subjects.iter().enumerate() {
            assert_eq!(subject.id.to_string(), format!("subj-{}", index + 1));
            assert!((18.0..52.0).contains(&subject.age));
        }
        assert_eq!(subjects[0].group, Group::Treatment1);
        assert_eq!(subjects[50].group, Group::Treatment2);
        assert_eq!(subjects[101].group, Group::Control);
    }

    #[test]
    fn test_same_seed_same_ages() {
        let config = SimulationConfig::default();
        let generator = SubjectGenerator::new(&config);
        let a = generator.generate(&mut seeded_rng(11)).unwrap();
        let b = generator.generate(&mut seeded_rng(11)).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_unnumberable_population_is_rejected() {
        let config = SimulationConfig { subject_count: MAX_SUBJECT_COUNT + 1, ..Default::default() };
        let result = SubjectGenerator::new(&config).generate(&mut seeded_rng(1));
        assert!(matches!(result, Err(SimulationError::ConfigurationError(_))));
    }

    #[test]
    fn test_empty_age_range_is_rejected() {
        let config = SimulationConfig { age_min: 30.0, age_max: 30.0, ..Default::default() };
        let result = SubjectGenerator::new(&config).generate(&mut seeded_rng(1));
        assert!(matches!(result, Err(SimulationError::DistributionError(_))));
    }
}
