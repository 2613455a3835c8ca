use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of members currently supporting a candidate.
///
/// The counter never goes below zero: decrementing an empty tally leaves it at
/// zero and reports the floor hit to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(u32);

impl Tally {
    pub const ZERO: Self = Self(0);

    pub fn new(votes: u32) -> Self {
        Self(votes)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Removes one vote. Returns `false` when the tally was already zero.
    pub fn decrement(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(votes) => {
                self.0 = votes;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An option on the ballot, keyed by its case-sensitive common name.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Candidate {
    /// Primary key.
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
    #[serde(default)]
    pub votes: Tally,
}

impl Candidate {
    pub fn new(
        common_name: impl Into<String>,
        scientific_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            common_name: common_name.into(),
            scientific_name: scientific_name.into(),
            description: description.into(),
            votes: Tally::ZERO,
        }
    }

    /// Copy of this record with the tally reset, as stored on registration.
    pub fn unvoted(&self) -> Self {
        Self {
            votes: Tally::ZERO,
            ..self.clone()
        }
    }
}
