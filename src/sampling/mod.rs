//! Seeded random sampling of subject and record attributes
//!
//! All randomness in a run flows through one explicitly passed generator,
//! created by [`seeded_rng`] from the configured seed. Nothing in the crate
//! touches a thread-local or process-wide generator, so two pipelines in the
//! same process never interfere and a seed always reproduces the same table.
//!
//! # Overview
//!
//! - **SubjectGenerator**: identifiers, ages and group bands, one per subject
//! - **TrialSampler**: batch draws of correctness, reaction time and attempts
//!   for every record of the dataset
//!
//! # Usage Example
//!
//! ```rust
//! use reaction_time_simulator::sampling::*;
//! use reaction_time_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig { subject_count: 3, ..Default::default() };
//! let mut rng = seeded_rng(config.seed);
//!
//! let subjects = SubjectGenerator::new(&config).generate(&mut rng).unwrap();
//! assert_eq!(subjects.len(), 3);
//!
//! let draws = TrialSampler::new(&config).unwrap().sample(config.total_records(), &mut rng).unwrap();
//! assert_eq!(draws.len(), 3 * 800);
//! ```

pub mod subjects;
pub mod trials;

pub use subjects::{SubjectAttributes, SubjectGenerator};
pub use trials::{TrialDraws, TrialSampler};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create the deterministic generator for a run
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
