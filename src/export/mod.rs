//! Dataset export
//!
//! [`CsvExporter`] writes the long-format table; [`RunSummary`] records the
//! configuration and statistics of the run as JSON.
//!
//! # Usage Example
//!
//! ```rust
//! use reaction_time_simulator::export::CsvExporter;
//! use reaction_time_simulator::table::ExperimentTable;
//!
//! let mut buffer = Vec::new();
//! CsvExporter::new().write(&ExperimentTable::default(), &mut buffer).unwrap();
//! assert!(buffer.starts_with(b"Subject,Age,Group"));
//! ```

pub mod csv_writer;
pub mod summary;

pub use csv_writer::CsvExporter;
pub use summary::RunSummary;
