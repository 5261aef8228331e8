//! Reference reaction-time sample loading
//!
//! The reference file is a CSV with a header row and a numeric `absRT` column.
//! Other columns are ignored. Empty cells and `NA`/`NaN` markers count as
//! missing and are skipped; any other non-numeric cell is an error, as is a
//! negative or infinite reaction time.

use csv::ReaderBuilder;
use rand::Rng;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::simulation::{SimulationError, SimulationResult};

/// Column holding reference reaction times
pub const REFERENCE_COLUMN: &str = "absRT";

/// Empirical reaction times used to replace implausible simulated values
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSample {
    source: String,
    values: Vec<f64>,
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan")
}

fn is_valid_reaction_time(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl ReferenceSample {
    /// Build a sample from values already in memory
    ///
    /// Fails with [`SimulationError::EmptyReferenceSample`] when `values` is
    /// empty, and with [`SimulationError::ReferenceDataError`] when a value is
    /// negative or not finite.
    pub fn from_values(source: impl Into<String>, values: Vec<f64>) -> SimulationResult<Self> {
        let source = source.into();
        if values.is_empty() {
            return Err(SimulationError::EmptyReferenceSample(source));
        }
        if let Some(position) = values.iter().position(|&v| !is_valid_reaction_time(v)) {
            return Err(SimulationError::reference_data_error(format!(
                "{} value {}: reaction time {} is not a finite non-negative value",
                source,
                position + 1,
                values[position]
            )));
        }
        Ok(Self { source, values })
    }

    /// Load the `absRT` column of a CSV file
    #[instrument]
    pub fn load<P: AsRef<Path> + std::fmt::Debug>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SimulationError::reference_data_error(format!(
                "cannot open reference file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let sample = Self::from_reader(BufReader::new(file), path.display().to_string())?;
        info!("Loaded {} reference reaction times from {}", sample.len(), sample.source);
        Ok(sample)
    }

    /// Parse the `absRT` column from any CSV reader
    pub fn from_reader<R: Read>(reader: R, source: impl Into<String>) -> SimulationResult<Self> {
        let source = source.into();
        let mut csv_reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

        let column = csv_reader
            .headers()
            .map_err(|e| SimulationError::reference_data_error(format!("{}: {}", source, e)))?
            .iter()
            .position(|header| header.trim() == REFERENCE_COLUMN)
            .ok_or_else(|| SimulationError::MissingColumn {
                path: source.clone(),
                column: REFERENCE_COLUMN.to_string(),
            })?;

        let mut values = Vec::new();
        let mut skipped = 0usize;

        for (line_idx, result) in csv_reader.records().enumerate() {
            // +2 for the header and 0-indexing
            let line = line_idx + 2;
            let record = result.map_err(|e| {
                SimulationError::reference_data_error(format!("{} line {}: {}", source, line, e))
            })?;

            let cell = record.get(column).unwrap_or("").trim();
            if is_missing(cell) {
                skipped += 1;
                continue;
            }

            let value = cell.parse::<f64>().map_err(|_| {
                SimulationError::reference_data_error(format!(
                    "{} line {}: cannot parse '{}' as a reaction time",
                    source, line, cell
                ))
            })?;
            if !is_valid_reaction_time(value) {
                return Err(SimulationError::reference_data_error(format!(
                    "{} line {}: reaction time {} is not a finite non-negative value",
                    source, line, value
                )));
            }
            values.push(value);
        }

        if skipped > 0 {
            debug!("Skipped {} missing {} cells in {}", skipped, REFERENCE_COLUMN, source);
        }

        Self::from_values(source, values)
    }

    /// Where the sample came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The reference values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of reference values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; an empty sample cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draw one value uniformly, with replacement
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.values[rng.gen_range(0..self.values.len())]
    }
}
