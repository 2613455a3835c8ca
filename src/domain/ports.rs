use super::candidate::{Candidate, Tally};
use super::member::Member;
use crate::error::Result;
use async_trait::async_trait;

/// Registry of candidates keyed by common name.
///
/// Tallies are only ever changed through `transfer` and `decrement`, so an
/// update is applied to the stored record and never to a detached copy.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Inserts `candidate` with a zero tally.
    ///
    /// Fails with `InvalidCandidate` for a blank common name and with
    /// `DuplicateCandidate` when the name is taken.
    async fn add(&self, candidate: Candidate) -> Result<()>;
    async fn get(&self, common_name: &str) -> Result<Option<Candidate>>;
    /// Removes the candidate if present. Returns whether anything was removed.
    async fn remove(&self, common_name: &str) -> Result<bool>;
    async fn exists(&self, common_name: &str) -> Result<bool>;
    async fn all(&self) -> Result<Vec<Candidate>>;
    /// Moves one vote from `from` (if any) to `to` as a single update.
    ///
    /// Both candidates are checked before either tally changes, so a failure
    /// leaves every tally as it was. Returns the new tally of `to`.
    async fn transfer(&self, from: Option<&str>, to: &str) -> Result<Tally>;
    /// Saturates at zero.
    async fn decrement(&self, common_name: &str) -> Result<Tally>;
}

/// Registry of members keyed by membership id.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Inserts or overwrites.
    async fn store(&self, member: Member) -> Result<()>;
    async fn get(&self, membership_id: &str) -> Result<Option<Member>>;
    async fn exists(&self, membership_id: &str) -> Result<bool>;
    async fn all(&self) -> Result<Vec<Member>>;
}

pub type CandidateStoreBox = Box<dyn CandidateStore>;
pub type MemberStoreBox = Box<dyn MemberStore>;

pub type CandidateStoreFactory = Box<dyn Fn() -> CandidateStoreBox + Send + Sync>;
pub type MemberStoreFactory = Box<dyn Fn() -> MemberStoreBox + Send + Sync>;
