//! JSON run manifest written next to the dataset

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::simulation::{DatasetStatistics, SimulationError, SimulationResult};
use crate::types::SimulationConfig;

/// Everything needed to say how a dataset was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// When the summary was created
    pub generated_at: DateTime<Utc>,
    /// Version of the generator
    pub generator_version: String,
    /// Configuration the dataset was generated with
    pub config: SimulationConfig,
    /// Statistics of the generated dataset
    pub statistics: DatasetStatistics,
}

impl RunSummary {
    /// Summary stamped with the current time
    pub fn new(config: SimulationConfig, statistics: DatasetStatistics) -> Self {
        Self {
            generated_at: Utc::now(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            statistics,
        }
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the summary as pretty JSON
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| {
            SimulationError::export_error(format!("cannot write summary '{}': {}", path.display(), e))
        })?;
        info!("Wrote run summary to {}", path.display());
        Ok(())
    }

    /// Read a summary written by [`RunSummary::write_to_file`]
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
