use serde::{Deserialize, Serialize};

/// Returns true when `key` is usable as an identifier (non-empty after trimming).
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// A registered voter.
///
/// The ballot refers to a candidate by common name. Tallies are never reached
/// through a member; they live in the candidate registry.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Member {
    /// Primary key.
    pub membership_id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub region: Option<String>,
    /// Common name of the candidate currently voted for.
    #[serde(default, skip_deserializing)]
    pub ballot: Option<String>,
}

impl Member {
    pub fn new(membership_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            membership_id: membership_id.into(),
            name: name.into(),
            age: None,
            region: None,
            ballot: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn has_voted_for(&self, common_name: &str) -> bool {
        self.ballot.as_deref() == Some(common_name)
    }
}
