use crate::domain::candidate::{Candidate, Tally};
use crate::domain::member::{Member, is_valid_key};
use crate::domain::ports::{CandidateStoreBox, MemberStoreBox};
use crate::domain::view::{CandidateView, RedactedCandidate, Viewer, project, project_all};
use crate::error::{PollError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Result of a successful `vote` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The ballot was cast or moved to a new candidate.
    Accepted,
    /// The member already voted for this candidate; nothing changed.
    NotModified,
}

/// Result of a successful `retract` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetractOutcome {
    /// The ballot was withdrawn.
    NoContent,
    /// The member had no ballot to withdraw.
    NotModified,
}

/// The ballot state machine.
///
/// `BallotEngine` owns both registries and the poll status. Mutating
/// operations hold the engine lock for writing across the whole "read current
/// ballot, move tally, set new ballot" sequence; reads hold it for reading.
/// A member's ballot and the tallies are therefore never observed out of step.
///
/// For every candidate `C`, `C.votes` equals the number of members whose
/// ballot names `C`, as seen by any reader at any time.
pub struct BallotEngine {
    candidates: CandidateStoreBox,
    members: MemberStoreBox,
    poll_open: AtomicBool,
    lock: RwLock<()>,
}

impl BallotEngine {
    /// Creates a new `BallotEngine` with the poll closed.
    ///
    /// # Arguments
    ///
    /// * `candidates` - The candidate registry.
    /// * `members` - The member registry.
    pub fn new(candidates: CandidateStoreBox, members: MemberStoreBox) -> Self {
        Self {
            candidates,
            members,
            poll_open: AtomicBool::new(false),
            lock: RwLock::new(()),
        }
    }

    pub fn is_poll_open(&self) -> bool {
        self.poll_open.load(Ordering::SeqCst)
    }

    /// Opens or closes the poll. Access control is left to the caller.
    pub fn set_poll_open(&self, open: bool) {
        let was_open = self.poll_open.swap(open, Ordering::SeqCst);
        if was_open != open {
            tracing::info!(open, "poll status changed");
        }
    }

    /// Registers a new candidate with a zero tally.
    pub async fn add_candidate(&self, candidate: Candidate) -> Result<()> {
        let _guard = self.lock.write().await;
        let common_name = candidate.common_name.clone();
        self.candidates.add(candidate).await?;
        tracing::info!(candidate = %common_name, "candidate added");
        Ok(())
    }

    pub async fn get_candidate(&self, common_name: &str) -> Result<Option<Candidate>> {
        let _guard = self.lock.read().await;
        self.candidates.get(common_name).await
    }

    pub async fn all_candidates(&self) -> Result<Vec<Candidate>> {
        let _guard = self.lock.read().await;
        self.candidates.all().await
    }

    /// Lists every candidate as `viewer` may see it, ordered by common name.
    pub async fn list_candidates(&self, viewer: Viewer) -> Result<Vec<CandidateView>> {
        let candidates = self.all_candidates().await?;
        let mut views = project_all(&candidates, viewer);
        views.sort_by(|a, b| a.common_name().cmp(b.common_name()));
        Ok(views)
    }

    pub async fn view_candidate(
        &self,
        common_name: &str,
        viewer: Viewer,
    ) -> Result<Option<CandidateView>> {
        Ok(self
            .get_candidate(common_name)
            .await?
            .map(|candidate| project(&candidate, viewer)))
    }

    pub async fn has_candidate(&self, common_name: &str) -> Result<bool> {
        let _guard = self.lock.read().await;
        self.candidates.exists(common_name).await
    }

    /// Current tally of one candidate.
    pub async fn candidate_votes(&self, common_name: &str) -> Result<Tally> {
        self.get_candidate(common_name)
            .await?
            .map(|candidate| candidate.votes)
            .ok_or_else(|| PollError::CandidateNotFound(common_name.to_string()))
    }

    /// Removes a candidate and clears every ballot that pointed at it.
    pub async fn remove_candidate(&self, common_name: &str) -> Result<()> {
        if !is_valid_key(common_name) {
            return Err(PollError::InvalidCandidate);
        }
        let _guard = self.lock.write().await;
        if !self.candidates.remove(common_name).await? {
            return Err(PollError::CandidateNotFound(common_name.to_string()));
        }

        let mut cleared = 0usize;
        for mut member in self.members.all().await? {
            if member.has_voted_for(common_name) {
                member.ballot = None;
                self.members.store(member).await?;
                cleared += 1;
            }
        }
        if cleared > 0 {
            tracing::warn!(
                candidate = common_name,
                cleared,
                "cleared ballots of removed candidate"
            );
        }
        tracing::info!(candidate = common_name, "candidate removed");
        Ok(())
    }

    pub async fn has_member(&self, membership_id: &str) -> Result<bool> {
        let _guard = self.lock.read().await;
        self.members.exists(membership_id).await
    }

    pub async fn get_member(&self, membership_id: &str) -> Result<Option<Member>> {
        let _guard = self.lock.read().await;
        self.members.get(membership_id).await
    }

    /// Casts or moves `voter`'s ballot to `common_name`.
    ///
    /// A voter unknown to the registry is registered from the supplied details
    /// first. Details of an already registered voter are left untouched.
    pub async fn vote(&self, voter: Member, common_name: &str) -> Result<VoteOutcome> {
        let _guard = self.lock.write().await;
        if !self.is_poll_open() {
            return Err(PollError::PollClosed);
        }
        if !is_valid_key(common_name) {
            return Err(PollError::InvalidCandidate);
        }
        if !is_valid_key(&voter.membership_id) {
            return Err(PollError::InvalidMember);
        }
        if !self.candidates.exists(common_name).await? {
            return Err(PollError::CandidateNotFound(common_name.to_string()));
        }

        let existing = self.members.get(&voter.membership_id).await?;
        let mut member = match existing {
            Some(member) => member,
            None => {
                let member = Member {
                    ballot: None,
                    ..voter
                };
                self.members.store(member.clone()).await?;
                tracing::debug!(member = %member.membership_id, "member registered");
                member
            }
        };

        if member.has_voted_for(common_name) {
            tracing::debug!(
                member = %member.membership_id,
                candidate = common_name,
                "vote unchanged"
            );
            return Ok(VoteOutcome::NotModified);
        }

        let previous = member.ballot.take();
        self.candidates
            .transfer(previous.as_deref(), common_name)
            .await?;
        member.ballot = Some(common_name.to_string());
        self.members.store(member.clone()).await?;

        tracing::debug!(
            member = %member.membership_id,
            from = previous.as_deref().unwrap_or("-"),
            to = common_name,
            "vote accepted"
        );
        Ok(VoteOutcome::Accepted)
    }

    /// Withdraws a member's ballot. Allowed whether or not the poll is open.
    pub async fn retract(&self, membership_id: &str) -> Result<RetractOutcome> {
        if !is_valid_key(membership_id) {
            return Err(PollError::InvalidMember);
        }
        let _guard = self.lock.write().await;
        let mut member = self
            .members
            .get(membership_id)
            .await?
            .ok_or_else(|| PollError::MemberNotFound(membership_id.to_string()))?;

        let Some(previous) = member.ballot.take() else {
            return Ok(RetractOutcome::NotModified);
        };
        self.candidates.decrement(&previous).await?;
        self.members.store(member).await?;

        tracing::debug!(member = membership_id, candidate = %previous, "vote retracted");
        Ok(RetractOutcome::NoContent)
    }

    /// The candidate a member currently votes for, always redacted.
    pub async fn get_vote(&self, membership_id: &str) -> Result<RedactedCandidate> {
        if !is_valid_key(membership_id) {
            return Err(PollError::InvalidMember);
        }
        let _guard = self.lock.read().await;
        let member = self
            .members
            .get(membership_id)
            .await?
            .ok_or_else(|| PollError::MemberNotFound(membership_id.to_string()))?;
        let common_name = member
            .ballot
            .ok_or_else(|| PollError::NoCandidateVote(membership_id.to_string()))?;
        let candidate = self.candidates.get(&common_name).await?;
        candidate
            .map(|candidate| RedactedCandidate::from(&candidate))
            .ok_or(PollError::CandidateNotFound(common_name))
    }
}
