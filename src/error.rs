use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("The candidate is invalid, check it is in the correct format.")]
    InvalidCandidate,
    #[error("Candidate '{0}' already exists.")]
    DuplicateCandidate(String),
    #[error("Candidate '{0}' does not exist.")]
    CandidateNotFound(String),
    #[error("The member is invalid, check it is in the correct format.")]
    InvalidMember,
    #[error("Member '{0}' does not exist, try voting to register.")]
    MemberNotFound(String),
    #[error("Member '{0}' has not registered a vote.")]
    NoCandidateVote(String),
    #[error("The poll is closed.")]
    PollClosed,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PollError>;
