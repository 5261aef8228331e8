//! Real-data substitution of simulated reaction times
//!
//! Simulated reaction times above the substitution threshold are implausible
//! for the task, so each one is replaced by a value drawn (uniformly, with
//! replacement) from an empirical reference sample. Anything still above the
//! timeout afterwards is clamped to the timeout.
//!
//! # Usage Example
//!
//! ```rust
//! use reaction_time_simulator::sampling::seeded_rng;
//! use reaction_time_simulator::substitution::*;
//! use reaction_time_simulator::types::SimulationConfig;
//!
//! let reference = ReferenceSample::from_reader("absRT\n42.0\n".as_bytes(), "inline").unwrap();
//! let mut rts = vec![350.0, 812.0];
//!
//! let report = RtSubstitution::new(&SimulationConfig::default())
//!     .apply(&mut rts, &reference, &mut seeded_rng(1));
//! assert_eq!(rts, vec![350.0, 42.0]);
//! assert_eq!(report.substituted, 1);
//! ```

pub mod reference;
pub mod replace;

pub use reference::{ReferenceSample, REFERENCE_COLUMN};
pub use replace::{RtSubstitution, SubstitutionReport};
