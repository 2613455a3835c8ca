#![allow(dead_code)]

use birdpoll::application::engine::BallotEngine;
use birdpoll::application::seed::{default_roster, seed};
use birdpoll::infrastructure::in_memory::{InMemoryCandidateStore, InMemoryMemberStore};
use std::collections::HashMap;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 8] = [
    "action",
    "member",
    "candidate",
    "name",
    "age",
    "region",
    "scientific_name",
    "description",
];

/// Engine seeded with the default roster, poll still closed.
pub async fn seeded_engine() -> BallotEngine {
    let engine = BallotEngine::new(
        Box::new(InMemoryCandidateStore::new()),
        Box::new(InMemoryMemberStore::new()),
    );
    seed(&engine, default_roster()).await.unwrap();
    engine
}

pub async fn open_engine() -> BallotEngine {
    let engine = seeded_engine().await;
    engine.set_poll_open(true);
    engine
}

/// Asserts that every tally equals the number of ballots naming its candidate.
pub async fn assert_tallies_match_ballots(engine: &BallotEngine, members: &[String]) {
    let mut ballots: HashMap<String, u32> = HashMap::new();
    for id in members {
        if let Some(member) = engine.get_member(id).await.unwrap()
            && let Some(ballot) = member.ballot
        {
            assert!(
                engine.has_candidate(&ballot).await.unwrap(),
                "member {id} holds a ballot for missing candidate {ballot}"
            );
            *ballots.entry(ballot).or_default() += 1;
        }
    }
    for candidate in engine.all_candidates().await.unwrap() {
        let expected = ballots.get(&candidate.common_name).copied().unwrap_or(0);
        assert_eq!(
            candidate.votes.value(),
            expected,
            "tally of {} does not match ballots",
            candidate.common_name
        );
    }
}

/// Writes a command script with the standard header.
pub fn write_script(path: &Path, rows: &[[&str; 8]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
