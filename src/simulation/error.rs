//! Error types and handling
//!
//! Every failure in the pipeline is fatal: stages run exactly once and the first
//! error aborts the run. [`ErrorKind`] classifies errors by when they can occur.

use thiserror::Error;

use crate::types::{ConfigError, ConfigValidationError};

/// Errors that can occur while generating the dataset
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// The reference reaction-time file is missing or unreadable
    #[error("Reference data error: {0}")]
    ReferenceDataError(String),

    /// The reference file has no column with the required name
    #[error("Reference file '{path}' has no '{column}' column")]
    MissingColumn {
        /// Path of the reference file
        path: String,
        /// Name of the required column
        column: String,
    },

    /// The reference sample has no values to draw from
    #[error("Reference sample '{0}' contains no values to draw from")]
    EmptyReferenceSample(String),

    /// A sampler was given parameters outside its domain
    #[error("Invalid distribution parameters: {0}")]
    DistributionError(String),

    /// The expanded table does not satisfy its structural invariants
    #[error("Table invariant violated: {0}")]
    TableInvariantError(String),

    /// Writing the exported table failed
    #[error("Export failed: {0}")]
    ExportError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV encoding error while writing the table
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<rand_distr::NormalError> for SimulationError {
    fn from(error: rand_distr::NormalError) -> Self {
        SimulationError::DistributionError(error.to_string())
    }
}

impl From<rand_distr::BernoulliError> for SimulationError {
    fn from(error: rand_distr::BernoulliError) -> Self {
        SimulationError::DistributionError(error.to_string())
    }
}

/// When in the run an error can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised before any output is written (configuration, reference data)
    Precondition,
    /// A sampler received invalid parameters
    Distribution,
    /// Raised while building or checking the in-memory table
    Table,
    /// Raised while writing output files
    Export,
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a reference data error
    pub fn reference_data_error(msg: impl Into<String>) -> Self {
        Self::ReferenceDataError(msg.into())
    }

    /// Create a distribution parameter error
    pub fn distribution_error(msg: impl Into<String>) -> Self {
        Self::DistributionError(msg.into())
    }

    /// Create a table invariant error
    pub fn table_invariant_error(msg: impl Into<String>) -> Self {
        Self::TableInvariantError(msg.into())
    }

    /// Create an export error
    pub fn export_error(msg: impl Into<String>) -> Self {
        Self::ExportError(msg.into())
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimulationError::ConfigurationError(_)
            | SimulationError::ReferenceDataError(_)
            | SimulationError::MissingColumn { .. }
            | SimulationError::EmptyReferenceSample(_) => ErrorKind::Precondition,
            SimulationError::DistributionError(_) => ErrorKind::Distribution,
            SimulationError::TableInvariantError(_) => ErrorKind::Table,
            SimulationError::ExportError(_)
            | SimulationError::IoError(_)
            | SimulationError::CsvError(_)
            | SimulationError::SerializationError(_) => ErrorKind::Export,
        }
    }

    /// Whether the run must abort; no stage retries, so this is always true
    pub fn is_fatal(&self) -> bool {
        true
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::ReferenceDataError(_) => "Reference Data",
            SimulationError::MissingColumn { .. } => "Reference Data",
            SimulationError::EmptyReferenceSample(_) => "Reference Data",
            SimulationError::DistributionError(_) => "Distribution",
            SimulationError::TableInvariantError(_) => "Table",
            SimulationError::ExportError(_) => "Export",
            SimulationError::IoError(_) => "IO",
            SimulationError::CsvError(_) => "CSV",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for pipeline operations
pub type SimulationResult<T> = Result<T, SimulationError>;
