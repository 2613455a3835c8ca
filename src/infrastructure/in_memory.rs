use crate::domain::candidate::{Candidate, Tally};
use crate::domain::member::{Member, is_valid_key};
use crate::domain::ports::{CandidateStore, MemberStore};
use crate::error::{PollError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory registry of candidates.
///
/// Uses `Arc<RwLock<HashMap<String, Candidate>>>` so that every record update
/// happens under the write lock and readers never see a half-applied change.
#[derive(Default, Clone)]
pub struct InMemoryCandidateStore {
    candidates: Arc<RwLock<HashMap<String, Candidate>>>,
}

impl InMemoryCandidateStore {
    /// Creates a new, empty candidate registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn add(&self, candidate: Candidate) -> Result<()> {
        if !is_valid_key(&candidate.common_name) {
            return Err(PollError::InvalidCandidate);
        }
        let mut candidates = self.candidates.write().await;
        if candidates.contains_key(&candidate.common_name) {
            return Err(PollError::DuplicateCandidate(candidate.common_name));
        }
        candidates.insert(candidate.common_name.clone(), candidate.unvoted());
        Ok(())
    }

    async fn get(&self, common_name: &str) -> Result<Option<Candidate>> {
        let candidates = self.candidates.read().await;
        Ok(candidates.get(common_name).cloned())
    }

    async fn remove(&self, common_name: &str) -> Result<bool> {
        let mut candidates = self.candidates.write().await;
        Ok(candidates.remove(common_name).is_some())
    }

    async fn exists(&self, common_name: &str) -> Result<bool> {
        let candidates = self.candidates.read().await;
        Ok(candidates.contains_key(common_name))
    }

    async fn all(&self) -> Result<Vec<Candidate>> {
        let candidates = self.candidates.read().await;
        Ok(candidates.values().cloned().collect())
    }

    async fn transfer(&self, from: Option<&str>, to: &str) -> Result<Tally> {
        let mut candidates = self.candidates.write().await;
        for name in from.into_iter().chain([to]) {
            if !candidates.contains_key(name) {
                return Err(PollError::CandidateNotFound(name.to_string()));
            }
        }
        if let Some(from) = from
            && let Some(previous) = candidates.get_mut(from)
            && !previous.votes.decrement()
        {
            tracing::warn!(candidate = from, "tally already at zero, decrement ignored");
        }
        let candidate = candidates
            .get_mut(to)
            .ok_or_else(|| PollError::CandidateNotFound(to.to_string()))?;
        candidate.votes.increment();
        Ok(candidate.votes)
    }

    async fn decrement(&self, common_name: &str) -> Result<Tally> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates
            .get_mut(common_name)
            .ok_or_else(|| PollError::CandidateNotFound(common_name.to_string()))?;
        if !candidate.votes.decrement() {
            tracing::warn!(candidate = common_name, "tally already at zero, decrement ignored");
        }
        Ok(candidate.votes)
    }
}

/// A thread-safe in-memory registry of members.
#[derive(Default, Clone)]
pub struct InMemoryMemberStore {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl InMemoryMemberStore {
    /// Creates a new, empty member registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn store(&self, member: Member) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert(member.membership_id.clone(), member);
        Ok(())
    }

    async fn get(&self, membership_id: &str) -> Result<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.get(membership_id).cloned())
    }

    async fn exists(&self, membership_id: &str) -> Result<bool> {
        let members = self.members.read().await;
        Ok(members.contains_key(membership_id))
    }

    async fn all(&self) -> Result<Vec<Member>> {
        let members = self.members.read().await;
        Ok(members.values().cloned().collect())
    }
}
