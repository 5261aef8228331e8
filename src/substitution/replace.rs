//! Replacement of implausible reaction times and timeout clamping

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::substitution::ReferenceSample;
use crate::types::SimulationConfig;

/// How many reaction times each step changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionReport {
    /// Values above the substitution threshold replaced from the reference sample
    pub substituted: usize,
    /// Values above the timeout replaced with the timeout
    pub clamped: usize,
}

/// Substitution and clamping rules for simulated reaction times
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RtSubstitution {
    threshold: f64,
    timeout: f64,
}

impl RtSubstitution {
    /// Create the rules from the run configuration
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            threshold: config.substitution_threshold,
            timeout: config.timeout,
        }
    }

    /// Substitution threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Timeout ceiling, also the value clamped reaction times take
    pub fn timeout(&self) -> f64 {
        self.timeout
    }

    /// Replace every value above the threshold with a reference draw, then clamp
    #[instrument(skip_all, fields(records = reaction_times.len(), reference = reference.len()))]
    pub fn apply<R: Rng + ?Sized>(
        &self,
        reaction_times: &mut [f64],
        reference: &ReferenceSample,
        rng: &mut R,
    ) -> SubstitutionReport {
        let substituted = self.substitute(reaction_times, reference, rng);
        let clamped = self.clamp(reaction_times);

        debug!("Substituted {} and clamped {} reaction times", substituted, clamped);
        SubstitutionReport { substituted, clamped }
    }

    /// Replace values above the threshold, in record order, with draws from `reference`
    pub fn substitute<R: Rng + ?Sized>(
        &self,
        reaction_times: &mut [f64],
        reference: &ReferenceSample,
        rng: &mut R,
    ) -> usize {
        let mut substituted = 0;
        for rt in reaction_times.iter_mut().filter(|rt| **rt > self.threshold) {
            *rt = reference.draw(rng);
            substituted += 1;
        }
        substituted
    }

    /// Replace values above the timeout with the timeout
    pub fn clamp(&self, reaction_times: &mut [f64]) -> usize {
        let mut clamped = 0;
        for rt in reaction_times.iter_mut().filter(|rt| **rt > self.timeout) {
            *rt = self.timeout;
            clamped += 1;
        }
        clamped
    }
}
