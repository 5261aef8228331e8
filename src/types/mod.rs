//! Core types and identifiers for the reaction-time dataset generator
//!
//! This module contains the fundamental types and configuration structures
//! used throughout the pipeline.
//!
//! # Overview
//!
//! - **Identifiers**: `SubjectId`, rendered as `subj-<n>`
//! - **Enums**: the experimental `Group` and its band assignment
//! - **Configuration**: generator configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use reaction_time_simulator::types::*;
//!
//! let ids = subject_ids(3);
//! assert_eq!(ids[0].to_string(), "subj-1");
//!
//! let group = Group::for_subject_index(0, 102);
//! assert_eq!(group, Group::Treatment1);
//!
//! let config = SimulationConfig {
//!     subject_count: 6,
//!     ..Default::default()
//! };
//! assert_eq!(config.total_records(), 6 * 800);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
