//! Enumeration types for the reaction-time dataset
//!
//! The only categorical column besides the subject identifier is the
//! experimental group. Labels are a bounded domain with no ordinal meaning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experimental group a subject is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// First treatment arm
    #[serde(rename = "treatment-1")]
    Treatment1,
    /// Second treatment arm
    #[serde(rename = "treatment-2")]
    Treatment2,
    /// Control arm
    #[serde(rename = "control")]
    Control,
}

impl Group {
    /// All groups in band order
    pub const ALL: [Group; 3] = [Group::Treatment1, Group::Treatment2, Group::Control];

    /// Assign the group for a zero-based subject index.
    ///
    /// Subjects are split into three contiguous bands in `ALL` order. For
    /// 102 subjects each band holds 34 subjects; otherwise band sizes
    /// differ by at most one.
    pub fn for_subject_index(index: usize, subject_count: usize) -> Group {
        debug_assert!(index < subject_count);
        let band = (index * Self::ALL.len()) / subject_count.max(1);
        Self::ALL[band.min(Self::ALL.len() - 1)]
    }

    /// Label written to the exported table
    pub fn label(&self) -> &'static str {
        match self {
            Group::Treatment1 => "treatment-1",
            Group::Treatment2 => "treatment-2",
            Group::Control => "control",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "treatment-1" | "treatment1" | "treatment 1" => Ok(Group::Treatment1),
            "treatment-2" | "treatment2" | "treatment 2" => Ok(Group::Treatment2),
            "control" => Ok(Group::Control),
            _ => Err(format!("Unknown group: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_display() {
        assert_eq!(format!("{}", Group::Treatment1), "treatment-1");
        assert_eq!(format!("{}", Group::Treatment2), "treatment-2");
        assert_eq!(format!("{}", Group::Control), "control");
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!("treatment-1".parse::<Group>().unwrap(), Group::Treatment1);
        assert_eq!("Treatment2".parse::<Group>().unwrap(), Group::Treatment2);
        assert_eq!("CONTROL".parse::<Group>().unwrap(), Group::Control);

        // Test error case
        assert!("placebo".parse::<Group>().is_err());
    }

    #[test]
    fn test_band_assignment_for_default_population() {
        let counts = (0..102).fold([0usize; 3], |mut acc, index| {
            match Group::for_subject_index(index, 102) {
                Group::Treatment1 => acc[0] += 1,
                Group::Treatment2 => acc[1] += 1,
                Group::Control => acc[2] += 1,
            }
            acc
        });
        assert_eq!(counts, [34, 34, 34]);

        assert_eq!(Group::for_subject_index(0, 102), Group::Treatment1);
        assert_eq!(Group::for_subject_index(33, 102), Group::Treatment1);
        assert_eq!(Group::for_subject_index(34, 102), Group::Treatment2);
        assert_eq!(Group::for_subject_index(68, 102), Group::Control);
        assert_eq!(Group::for_subject_index(101, 102), Group::Control);
    }

    #[test]
    fn test_band_assignment_is_contiguous_for_uneven_counts() {
        let groups: Vec<Group> = (0..10).map(|i| Group::for_subject_index(i, 10)).collect();
        let changes = groups.windows(2).filter(|pair| pair[0] != pair[1]).count();
        assert_eq!(changes, 2);
        assert_eq!(groups[0], Group::Treatment1);
        assert_eq!(groups[9], Group::Control);
    }

    #[test]
    fn test_group_serialization() {
        let json = serde_json::to_string(&Group::Treatment2).unwrap();
        assert_eq!(json, "\"treatment-2\"");
        let deserialized: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Group::Treatment2);
    }
}
