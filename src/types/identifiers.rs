//! Subject identifier type for the reaction-time dataset
//!
//! Subjects are numbered from 1 and rendered as `subj-<n>`. Ordering follows
//! the numeric suffix, so `subj-2` sorts before `subj-10`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Prefix used when rendering subject identifiers
pub const SUBJECT_PREFIX: &str = "subj-";

/// Identifier for a single experimental subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(u32);

impl SubjectId {
    /// Create a subject identifier from its 1-based number
    ///
    /// Returns `None` for 0, which is not a valid subject number.
    pub fn new(number: u32) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(Self(number))
        }
    }

    /// The 1-based subject number
    pub fn number(&self) -> u32 {
        self.0
    }

    /// Zero-based position of this subject in the generated sequence
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SUBJECT_PREFIX, self.0)
    }
}

impl FromStr for SubjectId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .strip_prefix(SUBJECT_PREFIX)
            .ok_or_else(|| format!("Subject identifier must start with '{}': {}", SUBJECT_PREFIX, s))?
            .parse::<u32>()
            .map_err(|e| format!("Invalid subject number in '{}': {}", s, e))?;

        SubjectId::new(number).ok_or_else(|| format!("Subject numbers start at 1: {}", s))
    }
}

impl Serialize for SubjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SubjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Largest number of subjects an identifier can number
pub const MAX_SUBJECT_COUNT: usize = u32::MAX as usize;

/// Produce the ordered identifiers `subj-1 ..= subj-<count>`
///
/// `count` is capped at [`MAX_SUBJECT_COUNT`].
pub fn subject_ids(count: usize) -> Vec<SubjectId> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    (1..=count).map(SubjectId).collect()
}
