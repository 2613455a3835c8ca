use super::candidate::{Candidate, Tally};
use serde::Serialize;

/// Authentication status of whoever is reading candidate data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    Administrator,
}

impl Viewer {
    pub fn from_authenticated(authenticated: bool) -> Self {
        if authenticated {
            Viewer::Administrator
        } else {
            Viewer::Anonymous
        }
    }

    pub fn sees_tallies(&self) -> bool {
        matches!(self, Viewer::Administrator)
    }
}

/// Full projection of a candidate, tally included.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct FullCandidate {
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
    pub votes: Tally,
}

/// Projection of a candidate with the tally omitted.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct RedactedCandidate {
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
}

impl From<&Candidate> for FullCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            common_name: candidate.common_name.clone(),
            scientific_name: candidate.scientific_name.clone(),
            description: candidate.description.clone(),
            votes: candidate.votes,
        }
    }
}

impl From<&Candidate> for RedactedCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            common_name: candidate.common_name.clone(),
            scientific_name: candidate.scientific_name.clone(),
            description: candidate.description.clone(),
        }
    }
}

/// What a viewer is allowed to see of one candidate.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum CandidateView {
    Full(FullCandidate),
    Redacted(RedactedCandidate),
}

impl CandidateView {
    pub fn common_name(&self) -> &str {
        match self {
            CandidateView::Full(c) => &c.common_name,
            CandidateView::Redacted(c) => &c.common_name,
        }
    }

    pub fn votes(&self) -> Option<Tally> {
        match self {
            CandidateView::Full(c) => Some(c.votes),
            CandidateView::Redacted(_) => None,
        }
    }
}

/// Projects a stored candidate for `viewer`. Never touches the stored record.
pub fn project(candidate: &Candidate, viewer: Viewer) -> CandidateView {
    if viewer.sees_tallies() {
        CandidateView::Full(candidate.into())
    } else {
        CandidateView::Redacted(candidate.into())
    }
}

pub fn project_all<'a, I>(candidates: I, viewer: Viewer) -> Vec<CandidateView>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .map(|candidate| project(candidate, viewer))
        .collect()
}
