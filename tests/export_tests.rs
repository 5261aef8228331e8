//! Tests for CSV export of generated tables

use reaction_time_simulator::export::CsvExporter;
use reaction_time_simulator::simulation::{DatasetPipeline, SimulationError};
use reaction_time_simulator::substitution::ReferenceSample;
use reaction_time_simulator::table::{ExperimentTable, COLUMNS};
use reaction_time_simulator::types::SimulationConfig;

fn generated_table() -> ExperimentTable {
    let config = SimulationConfig {
        subject_count: 9,
        token_count: 5,
        trial_count: 4,
        ..Default::default()
    };
    let reference = ReferenceSample::from_values("inline", vec![288.0, 401.5, 530.25]).unwrap();
    DatasetPipeline::new(config).unwrap().generate(&reference).unwrap().table
}

#[test]
fn test_exporting_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let table = generated_table();

    let exporter = CsvExporter::new();
    assert_eq!(exporter.export(&table, &first).unwrap(), table.len());
    assert_eq!(exporter.export(&table, &second).unwrap(), table.len());

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_header_and_column_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let table = generated_table();
    CsvExporter::new().export(&table, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), COLUMNS.join(","));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 9 * 2 * 5 * 4);
    assert!(rows.iter().all(|row| row.split(',').count() == 9));
    // No row-index column and no empty cells
    assert!(rows[0].starts_with("subj-1,"));
    assert!(rows.iter().all(|row| !row.split(',').any(str::is_empty)));
}

#[test]
fn test_export_reads_back_with_csv_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let table = generated_table();
    CsvExporter::new().export(&table, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS.to_vec());

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), table.len());
    for (written, record) in records.iter().zip(&table) {
        assert_eq!(&written[0], record.subject.to_string());
        assert_eq!(&written[2], record.group.label());
        assert_eq!(written[6].parse::<f64>().unwrap(), record.rt);
    }
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    std::fs::write(&path, "stale content that is longer than nothing\n".repeat(10_000)).unwrap();

    CsvExporter::new().export(&ExperimentTable::default(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("{}\n", COLUMNS.join(",")));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not").join("there").join("out.csv");

    let result = CsvExporter::new().export(&generated_table(), &path);
    assert!(matches!(result, Err(SimulationError::ExportError(_))));
    assert!(!path.exists());
}
