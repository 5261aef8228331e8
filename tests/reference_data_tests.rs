//! Tests for loading the reference reaction-time sample from disk

use reaction_time_simulator::simulation::{ErrorKind, SimulationError};
use reaction_time_simulator::substitution::{ReferenceSample, REFERENCE_COLUMN};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn reference_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_bundled_reference_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reference_rt.csv");
    let sample = ReferenceSample::load(&path).unwrap();

    assert!(sample.len() >= 50);
    assert!(sample.values().iter().all(|v| v.is_finite() && *v > 0.0));
}

#[test]
fn test_load_from_file() {
    let file = reference_file("id,absRT\n1,455.5\n2,NA\n3,612\n");
    let sample = ReferenceSample::load(file.path()).unwrap();
    assert_eq!(sample.values(), &[455.5, 612.0]);
    assert_eq!(sample.source(), file.path().display().to_string());
}

#[test]
fn test_column_position_does_not_matter() {
    let file = reference_file("absRT,rt,block\n300,1,a\n320,2,b\n");
    let sample = ReferenceSample::load(file.path()).unwrap();
    assert_eq!(sample.values(), &[300.0, 320.0]);
}

#[test]
fn test_missing_column_is_fatal() {
    let file = reference_file("id,rt\n1,455\n");
    match ReferenceSample::load(file.path()) {
        Err(SimulationError::MissingColumn { column, .. }) => assert_eq!(column, REFERENCE_COLUMN),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_header_only_is_fatal() {
    let file = reference_file("absRT\n");
    let result = ReferenceSample::load(file.path());
    assert!(matches!(result, Err(SimulationError::EmptyReferenceSample(_))));
}

#[test]
fn test_all_missing_is_fatal() {
    let file = reference_file("absRT\nNA\n\nNaN\n");
    let result = ReferenceSample::load(file.path());
    assert!(matches!(result, Err(SimulationError::EmptyReferenceSample(_))));
}

#[test]
fn test_missing_file_is_precondition_failure() {
    let error = ReferenceSample::load("definitely/not/here.csv").unwrap_err();
    assert!(matches!(error, SimulationError::ReferenceDataError(_)));
    assert!(error.is_fatal());
}

#[test]
fn test_negative_reference_value_fails_before_generation() {
    let file = reference_file("absRT\n455.0\n-5.0\n");
    let error = ReferenceSample::load(file.path()).unwrap_err();

    assert!(matches!(error, SimulationError::ReferenceDataError(_)));
    assert_eq!(error.kind(), ErrorKind::Precondition);
    assert!(error.to_string().contains("line 3"));
}
