//! The exported row type

use serde::{Deserialize, Serialize};

use crate::types::{Group, SubjectId};

/// Exported column names, in file order
pub const COLUMNS: [&str; 9] = [
    "Subject", "Age", "Group", "Token", "Attempts", "Correct", "RT", "Trial", "Phase",
];

/// One observation of the long-format table
///
/// Field order is the column order of the exported CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Subject identifier
    #[serde(rename = "Subject")]
    pub subject: SubjectId,
    /// Subject age, constant per subject
    #[serde(rename = "Age")]
    pub age: f64,
    /// Subject group, constant per subject
    #[serde(rename = "Group")]
    pub group: Group,
    /// Token number, 1-based
    #[serde(rename = "Token")]
    pub token: u32,
    /// Attempts for this observation
    #[serde(rename = "Attempts")]
    pub attempts: u32,
    /// 1 for a correct response, 0 otherwise
    #[serde(rename = "Correct")]
    pub correct: u8,
    /// Reaction time in milliseconds
    #[serde(rename = "RT")]
    pub rt: f64,
    /// Trial number within the token, 1-based
    #[serde(rename = "Trial")]
    pub trial: u32,
    /// Session phase, 1-based
    #[serde(rename = "Phase")]
    pub phase: u32,
}
