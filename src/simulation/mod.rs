//! Pipeline orchestration and run support
//!
//! This module ties the stages together and holds what every stage shares.
//!
//! # Overview
//!
//! - **DatasetPipeline**: runs generation, invariant check and export for one configuration
//! - **DatasetStatistics**: summary of a generated table
//! - **LoggingConfig**: tracing subscriber setup for the binary and tests
//! - **SimulationError**: the error type every stage returns
//!
//! # Usage Example
//!
//! ```rust
//! use reaction_time_simulator::simulation::*;
//! use reaction_time_simulator::substitution::ReferenceSample;
//! use reaction_time_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig {
//!     subject_count: 3,
//!     token_count: 2,
//!     trial_count: 2,
//!     ..Default::default()
//! };
//!
//! let pipeline = DatasetPipeline::new(config).unwrap();
//! let reference = ReferenceSample::from_values("inline", vec![420.0]).unwrap();
//! let run = pipeline.generate(&reference).unwrap();
//!
//! assert_eq!(run.statistics.record_count, 24);
//! ```

pub mod error;
pub mod logging;
pub mod pipeline;
pub mod statistics;

pub use error::*;
pub use logging::*;
pub use pipeline::*;
pub use statistics::*;
