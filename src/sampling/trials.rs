//! Record-level batch sampling
//!
//! Every quantity is drawn for the whole dataset at once, one batch after the
//! other: success probabilities, correctness, the three reaction-time terms,
//! then attempts. The order is fixed so a seed always yields the same values.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::{Bernoulli, LogNormal, Normal};
use tracing::{debug, instrument};

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{ReactionTimeModel, SimulationConfig};

/// Per-record values, indexed by record position in the expanded table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrialDraws {
    /// 1 for a correct response, 0 otherwise
    pub correct: Vec<u8>,
    /// Reaction time in milliseconds
    pub reaction_time: Vec<f64>,
    /// Number of attempts
    pub attempts: Vec<u32>,
}

impl TrialDraws {
    /// Number of records covered by these draws
    pub fn len(&self) -> usize {
        self.reaction_time.len()
    }

    /// Whether no records were drawn
    pub fn is_empty(&self) -> bool {
        self.reaction_time.is_empty()
    }
}

/// Batch sampler for correctness, reaction time and attempts
#[derive(Debug, Clone)]
pub struct TrialSampler {
    lognormal: LogNormal<f64>,
    uniform: Uniform<f64>,
    normal: Normal<f64>,
    offset: f64,
    attempts: Uniform<u32>,
}

impl TrialSampler {
    /// Build the distributions described by the configuration.
    ///
    /// Fails with [`SimulationError::DistributionError`] when a parameter is
    /// outside the domain of its distribution.
    pub fn new(config: &SimulationConfig) -> SimulationResult<Self> {
        let ReactionTimeModel {
            lognormal_location,
            lognormal_scale,
            uniform_min,
            uniform_max,
            normal_mean,
            normal_sd,
            offset,
        } = config.rt_model;

        // rand_distr only rejects non-finite spreads, so negative ones are caught here
        if lognormal_scale.is_nan() || lognormal_scale < 0.0 {
            return Err(SimulationError::distribution_error(format!(
                "log-normal scale must be non-negative, got {}",
                lognormal_scale
            )));
        }
        if normal_sd.is_nan() || normal_sd < 0.0 {
            return Err(SimulationError::distribution_error(format!(
                "normal standard deviation must be non-negative, got {}",
                normal_sd
            )));
        }
        if !(uniform_min.is_finite() && uniform_max.is_finite() && uniform_min <= uniform_max) {
            return Err(SimulationError::distribution_error(format!(
                "uniform reaction-time term [{}, {}] is empty",
                uniform_min, uniform_max
            )));
        }
        if config.attempts_min > config.attempts_max {
            return Err(SimulationError::distribution_error(format!(
                "attempts range [{}, {}] is empty",
                config.attempts_min, config.attempts_max
            )));
        }

        Ok(Self {
            lognormal: LogNormal::new(lognormal_location, lognormal_scale)?,
            uniform: Uniform::new_inclusive(uniform_min, uniform_max),
            normal: Normal::new(normal_mean, normal_sd)?,
            offset,
            attempts: Uniform::new_inclusive(config.attempts_min, config.attempts_max),
        })
    }

    /// Draw correctness, reaction time and attempts for `count` records
    #[instrument(skip(self, rng))]
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> SimulationResult<TrialDraws> {
        let correct = self.sample_correct(count, rng)?;
        let reaction_time = self.sample_reaction_times(count, rng);
        let attempts: Vec<u32> = (0..count).map(|_| self.attempts.sample(rng)).collect();

        debug!(
            "Drew {} records ({} correct)",
            count,
            correct.iter().filter(|&&c| c == 1).count()
        );

        Ok(TrialDraws { correct, reaction_time, attempts })
    }

    /// Draw a success probability per record, then a Bernoulli outcome with it
    pub fn sample_correct<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> SimulationResult<Vec<u8>> {
        let unit = Uniform::new(0.0, 1.0);
        let probabilities: Vec<f64> = (0..count).map(|_| unit.sample(rng)).collect();

        probabilities
            .into_iter()
            .map(|p| -> SimulationResult<u8> { Ok(u8::from(Bernoulli::new(p)?.sample(rng))) })
            .collect()
    }

    /// Draw composite reaction times, floored at zero
    pub fn sample_reaction_times<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f64> {
        let lognormal: Vec<f64> = (0..count).map(|_| self.lognormal.sample(rng)).collect();
        let uniform: Vec<f64> = (0..count).map(|_| self.uniform.sample(rng)).collect();
        let normal: Vec<f64> = (0..count).map(|_| self.normal.sample(rng)).collect();

        lognormal
            .iter()
            .zip(&uniform)
            .zip(&normal)
            .map(|((l, u), n)| (l + u + n + self.offset).max(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::seeded_rng;

    fn sampler() -> TrialSampler {
        TrialSampler::new(&SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_sample_lengths() {
        let draws = sampler().sample(1_000, &mut seeded_rng(3)).unwrap();
        assert_eq!(draws.len(), 1_000);
        assert_eq!(draws.correct.len(), 1_000);
        assert_eq!(draws.attempts.len(), 1_000);
        assert!(!draws.is_empty());
    }

    #[test]
    fn test_value_domains() {
        let draws = sampler().sample(20_000, &mut seeded_rng(5)).unwrap();
        assert!(draws.correct.iter().all(|&c| c == 0 || c == 1));
        assert!(draws.attempts.iter().all(|a| (1..=15).contains(a)));
        assert!(draws.reaction_time.iter().all(|rt| rt.is_finite() && *rt >= 0.0));

        // Both attempt bounds are reachable
        assert!(draws.attempts.contains(&1));
        assert!(draws.attempts.contains(&15));
    }

    #[test]
    fn test_reaction_time_distribution_shape() {
        let rts = sampler().sample_reaction_times(50_000, &mut seeded_rng(8));
        let mean = rts.iter().sum::<f64>() / rts.len() as f64;

        // E[LogNormal(6, 0.5)] = e^(6.125) ~ 457.1; plus 55 + 70 + 5
        assert!((mean - 587.1).abs() < 10.0, "mean was {}", mean);

        let below_threshold = rts.iter().filter(|&&rt| rt <= 600.0).count();
        assert!(below_threshold > 0 && below_threshold < rts.len());
    }

    #[test]
    fn test_correct_rate_is_near_one_half() {
        let correct = sampler().sample_correct(40_000, &mut seeded_rng(13)).unwrap();
        let rate = correct.iter().map(|&c| c as f64).sum::<f64>() / correct.len() as f64;
        assert!((rate - 0.5).abs() < 0.02, "rate was {}", rate);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let a = sampler().sample(500, &mut seeded_rng(21)).unwrap();
        let b = sampler().sample(500, &mut seeded_rng(21)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let mut config = SimulationConfig::default();
        config.rt_model.lognormal_scale = -0.5;
        assert!(matches!(
            TrialSampler::new(&config),
            Err(SimulationError::DistributionError(_))
        ));

        let mut config = SimulationConfig::default();
        config.rt_model.normal_sd = -15.0;
        assert!(matches!(
            TrialSampler::new(&config),
            Err(SimulationError::DistributionError(_))
        ));

        let mut config = SimulationConfig::default();
        config.rt_model.normal_sd = f64::NAN;
        assert!(TrialSampler::new(&config).is_err());

        let mut config = SimulationConfig::default();
        config.rt_model.uniform_min = 200.0;
        assert!(TrialSampler::new(&config).is_err());

        let config = SimulationConfig { attempts_min: 9, attempts_max: 2, ..Default::default() };
        assert!(TrialSampler::new(&config).is_err());
    }
}
