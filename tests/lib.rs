// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use reaction_time_simulator::*;

mod cli_argument_parsing_tests;
mod export_tests;
mod reference_data_tests;

#[test]
fn test_subject_identifiers() {
    let ids = types::subject_ids(102);

    assert_eq!(ids.len(), 102);
    assert_eq!(ids[0].to_string(), "subj-1");
    assert_eq!(ids[101].to_string(), "subj-102");

    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 102);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let parsed: SubjectId = "subj-57".parse().unwrap();
    assert_eq!(parsed.number(), 57);
    assert!("subject-57".parse::<SubjectId>().is_err());
}

#[test]
fn test_group_labels() {
    for group in Group::ALL {
        assert!(!group.to_string().is_empty());
        assert_eq!(group.label().parse::<Group>().unwrap(), group);
    }

    assert_eq!(Group::Treatment1.to_string(), "treatment-1");
    assert_eq!(Group::Treatment2.to_string(), "treatment-2");
    assert_eq!(Group::Control.to_string(), "control");
}

#[test]
fn test_serialization_roundtrip() {
    let id = SubjectId::new(12).unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"subj-12\"");
    let deserialized: SubjectId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);

    let json = serde_json::to_string(&Group::Control).unwrap();
    assert_eq!(json, "\"control\"");
    let deserialized: Group = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, Group::Control);
}

#[test]
fn test_default_group_bands() {
    let counts = Group::ALL.map(|group| {
        (0..102)
            .filter(|&index| Group::for_subject_index(index, 102) == group)
            .count()
    });
    assert_eq!(counts, [34, 34, 34]);
    assert_eq!(Group::for_subject_index(0, 102), Group::Treatment1);
    assert_eq!(Group::for_subject_index(34, 102), Group::Treatment2);
    assert_eq!(Group::for_subject_index(68, 102), Group::Control);
}

#[test]
fn test_generation_with_test_logging() {
    // The only test in this binary that installs the global subscriber
    LoggingConfig::init_test().unwrap();

    let config = SimulationConfig {
        subject_count: 3,
        token_count: 2,
        trial_count: 2,
        ..Default::default()
    };
    let reference = ReferenceSample::from_values("inline", vec![410.0]).unwrap();
    let run = DatasetPipeline::new(config).unwrap().generate(&reference).unwrap();
    assert_eq!(run.table.len(), 24);

    // A second global subscriber is refused
    assert!(LoggingConfig::init_test().is_err());
}
