use crate::application::engine::{BallotEngine, RetractOutcome, VoteOutcome};
use crate::domain::candidate::Candidate;
use crate::domain::member::Member;
use crate::domain::view::RedactedCandidate;
use crate::error::Result;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Open,
    Close,
    Add,
    Remove,
    Vote,
    Retract,
    Ballot,
}

/// One line of a poll script. Columns an action does not use may be empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub action: Action,
    pub member: Option<String>,
    pub candidate: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub region: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CommandOutcome {
    PollOpened,
    PollClosed,
    CandidateAdded(String),
    CandidateRemoved(String),
    Voted(VoteOutcome),
    Retracted(RetractOutcome),
    Ballot(RedactedCandidate),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::PollOpened => write!(f, "poll opened"),
            CommandOutcome::PollClosed => write!(f, "poll closed"),
            CommandOutcome::CandidateAdded(name) => write!(f, "added {name}"),
            CommandOutcome::CandidateRemoved(name) => write!(f, "removed {name}"),
            CommandOutcome::Voted(VoteOutcome::Accepted) => write!(f, "vote accepted"),
            CommandOutcome::Voted(VoteOutcome::NotModified) => write!(f, "vote not modified"),
            CommandOutcome::Retracted(RetractOutcome::NoContent) => write!(f, "vote retracted"),
            CommandOutcome::Retracted(RetractOutcome::NotModified) => {
                write!(f, "nothing to retract")
            }
            CommandOutcome::Ballot(candidate) => write!(f, "votes for {}", candidate.common_name),
        }
    }
}

impl Command {
    fn member_id(&self) -> &str {
        self.member.as_deref().unwrap_or_default()
    }

    fn candidate_name(&self) -> &str {
        self.candidate.as_deref().unwrap_or_default()
    }

    fn voter(&self) -> Member {
        Member {
            membership_id: self.member_id().to_string(),
            name: self.name.clone().unwrap_or_default(),
            age: self.age,
            region: self.region.clone(),
            ballot: None,
        }
    }

    /// Runs the command against `engine`.
    pub async fn execute(&self, engine: &BallotEngine) -> Result<CommandOutcome> {
        match self.action {
            Action::Open => {
                engine.set_poll_open(true);
                Ok(CommandOutcome::PollOpened)
            }
            Action::Close => {
                engine.set_poll_open(false);
                Ok(CommandOutcome::PollClosed)
            }
            Action::Add => {
                let candidate = Candidate::new(
                    self.candidate_name(),
                    self.scientific_name.clone().unwrap_or_default(),
                    self.description.clone().unwrap_or_default(),
                );
                engine.add_candidate(candidate).await?;
                Ok(CommandOutcome::CandidateAdded(self.candidate_name().to_string()))
            }
            Action::Remove => {
                engine.remove_candidate(self.candidate_name()).await?;
                Ok(CommandOutcome::CandidateRemoved(self.candidate_name().to_string()))
            }
            Action::Vote => engine
                .vote(self.voter(), self.candidate_name())
                .await
                .map(CommandOutcome::Voted),
            Action::Retract => engine
                .retract(self.member_id())
                .await
                .map(CommandOutcome::Retracted),
            Action::Ballot => engine
                .get_vote(self.member_id())
                .await
                .map(CommandOutcome::Ballot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::seed::{default_roster, seed};
    use crate::error::PollError;
    use crate::infrastructure::in_memory::{InMemoryCandidateStore, InMemoryMemberStore};

    fn command(action: Action, member: Option<&str>, candidate: Option<&str>) -> Command {
        Command {
            action,
            member: member.map(str::to_string),
            candidate: candidate.map(str::to_string),
            name: None,
            age: None,
            region: None,
            scientific_name: None,
            description: None,
        }
    }

    async fn seeded_engine() -> BallotEngine {
        let engine = BallotEngine::new(
            Box::new(InMemoryCandidateStore::new()),
            Box::new(InMemoryMemberStore::new()),
        );
        seed(&engine, default_roster()).await.unwrap();
        engine
    }

    #[tokio::test]
    async fn test_execute_vote_flow() {
        let engine = seeded_engine().await;

        let outcome = command(Action::Open, None, None).execute(&engine).await.unwrap();
        assert_eq!(outcome, CommandOutcome::PollOpened);

        let vote = command(Action::Vote, Some("M1"), Some("Osprey"));
        assert_eq!(
            vote.execute(&engine).await.unwrap(),
            CommandOutcome::Voted(VoteOutcome::Accepted)
        );
        assert_eq!(
            vote.execute(&engine).await.unwrap(),
            CommandOutcome::Voted(VoteOutcome::NotModified)
        );

        let ballot = command(Action::Ballot, Some("M1"), None)
            .execute(&engine)
            .await
            .unwrap();
        assert_eq!(ballot.to_string(), "votes for Osprey");

        let retract = command(Action::Retract, Some("M1"), None);
        assert_eq!(
            retract.execute(&engine).await.unwrap(),
            CommandOutcome::Retracted(RetractOutcome::NoContent)
        );
    }

    #[tokio::test]
    async fn test_execute_missing_columns() {
        let engine = seeded_engine().await;
        engine.set_poll_open(true);

        let no_member = command(Action::Vote, None, Some("Osprey")).execute(&engine).await;
        assert!(matches!(no_member, Err(PollError::InvalidMember)));

        let no_candidate = command(Action::Vote, Some("M1"), None).execute(&engine).await;
        assert!(matches!(no_candidate, Err(PollError::InvalidCandidate)));
    }

    #[tokio::test]
    async fn test_execute_add_and_remove() {
        let engine = seeded_engine().await;
        let mut add = command(Action::Add, None, Some("Hen Harrier"));
        add.scientific_name = Some("Circus cyaneus".to_string());

        let outcome = add.execute(&engine).await.unwrap();
        assert_eq!(outcome.to_string(), "added Hen Harrier");
        let stored = engine.get_candidate("Hen Harrier").await.unwrap().unwrap();
        assert_eq!(stored.scientific_name, "Circus cyaneus");

        command(Action::Remove, None, Some("Hen Harrier"))
            .execute(&engine)
            .await
            .unwrap();
        assert!(!engine.has_candidate("Hen Harrier").await.unwrap());
    }
}
