//! CSV output of the experiment table
//!
//! - Header row in column order, no row-index column
//! - Subject and Group written as their labels
//! - Missing values would be written as empty cells; the generated table has none

use csv::WriterBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

use crate::simulation::{SimulationError, SimulationResult};
use crate::table::{ExperimentTable, COLUMNS};

/// Writes an [`ExperimentTable`] as delimited text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvExporter {
    delimiter: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvExporter {
    /// Comma-delimited exporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another single-byte delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write the header and every record to `writer`, returning the number of data rows
    pub fn write<W: Write>(&self, table: &ExperimentTable, writer: W) -> SimulationResult<usize> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        // Header written explicitly so an empty table still gets one
        csv_writer.write_record(COLUMNS)?;
        for record in table {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;

        Ok(table.len())
    }

    /// Write the table to a file, replacing any existing file
    ///
    /// Fails if the parent directory does not exist or is not writable.
    #[instrument(skip(self, table), fields(records = table.len()))]
    pub fn export<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        table: &ExperimentTable,
        path: P,
    ) -> SimulationResult<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            SimulationError::export_error(format!("cannot create '{}': {}", path.display(), e))
        })?;

        let rows = self.write(table, BufWriter::new(file))?;
        info!("Wrote {} records to {}", rows, path.display());
        Ok(rows)
    }
}
