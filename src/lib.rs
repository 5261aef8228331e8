//! Reaction Time Simulator
//!
//! A seeded generator of synthetic long-format reaction-time datasets for a
//! repeated-measures experiment: subjects in three groups, each answering a
//! fixed number of trials per token across two session phases.
//!
//! # Overview
//!
//! Every run is a single batch pass. Given a configuration and an empirical
//! reference sample of reaction times, the library produces one table of
//! `subjects × phases × tokens × trials` records and writes it as CSV. The same
//! seed and reference sample always produce the same table.
//!
//! ## Key Features
//!
//! - **Explicit Randomness**: one seeded generator threaded through every draw, no global state
//! - **Batch Sampling**: every per-record quantity drawn in one pass over the record count
//! - **Real-Data Substitution**: implausible reaction times replaced from a reference sample, then clamped
//! - **Typed Records**: a fixed nine-column schema with labelled subjects and groups
//! - **Checked Output**: structural invariants verified before anything is written
//!
//! ## Quick Start
//!
//! ```rust
//! use reaction_time_simulator::*;
//!
//! let config = SimulationConfig {
//!     subject_count: 6,
//!     token_count: 4,
//!     trial_count: 5,
//!     ..Default::default()
//! };
//!
//! let pipeline = DatasetPipeline::new(config)?;
//! let reference = ReferenceSample::from_values("inline", vec![312.0, 455.5, 520.0])?;
//! let run = pipeline.generate(&reference)?;
//!
//! assert_eq!(run.table.len(), 6 * 2 * 4 * 5);
//! println!("{}", run.statistics);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, groups, and configuration
//! - [`sampling`]: Seeded generator, subject attributes, and record draws
//! - [`substitution`]: Reference sample loading, substitution, and clamping
//! - [`table`]: Record type, structural expansion, and invariant checks
//! - [`export`]: CSV writer and JSON run summary
//! - [`simulation`]: Pipeline, statistics, logging, and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌──────────────┐
//! │   Types     │    │  Sampling   │    │ Substitution │
//! │             │    │             │    │              │
//! │ Identifiers │◄───┤ Subjects    │◄───┤ Reference    │
//! │ Groups      │    │ Trials      │    │ Clamp        │
//! │ Config      │    │             │    │              │
//! └─────────────┘    └─────────────┘    └──────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌──────────────┐
//! │   Table     │    │   Export    │    │  Simulation  │
//! │             │    │             │    │              │
//! │ Records     │◄───┤ CSV         │◄───┤ Pipeline     │
//! │ Expansion   │    │ Summary     │    │ Statistics   │
//! │ Invariants  │    │             │    │              │
//! └─────────────┘    └─────────────┘    └──────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod export;
pub mod sampling;
pub mod simulation;
pub mod substitution;
pub mod table;
pub mod types;

// Core types and configuration
pub use types::{
    CliArgs, ConfigError, ConfigValidationError, Group, ReactionTimeModel, SimulationConfig,
    SubjectId,
};

// Pipeline stages
pub use sampling::{seeded_rng, SubjectAttributes, SubjectGenerator, TrialDraws, TrialSampler};
pub use substitution::{ReferenceSample, RtSubstitution, SubstitutionReport};
pub use table::{ExperimentTable, Record, TableBuilder};
pub use export::{CsvExporter, RunSummary};

// Orchestration
pub use simulation::{
    DatasetPipeline, DatasetRun, DatasetStatistics, LoggingConfig, SimulationError,
    SimulationResult,
};
