use super::engine::BallotEngine;
use crate::domain::candidate::Candidate;
use crate::error::Result;
use std::io::Read;

// (scientific name, common name, description)
const DEFAULT_ROSTER: [(&str, &str, &str); 3] = [
    (
        "Pandion haliaetus",
        "Osprey",
        "The osprey, also called sea hawk, river hawk, and fish hawk, is a diurnal, fish-eating bird of prey with a cosmopolitan range.",
    ),
    (
        "Elanus leucurus",
        "White-tailed Kite",
        "The white-tailed kite is a small raptor found in western North America and parts of South America.",
    ),
    (
        "Aquila chrysaetos",
        "Golden Eagle",
        "The golden eagle is a bird of prey living in the Northern Hemisphere.",
    ),
];

/// The candidates every poll starts with unless another roster is supplied.
pub fn default_roster() -> Vec<Candidate> {
    DEFAULT_ROSTER
        .iter()
        .map(|(scientific_name, common_name, description)| {
            Candidate::new(*common_name, *scientific_name, *description)
        })
        .collect()
}

/// Reads a roster from a JSON array of candidate records.
pub fn read_roster<R: Read>(source: R) -> Result<Vec<Candidate>> {
    Ok(serde_json::from_reader(source)?)
}

/// Adds every candidate of `roster` to the engine, stopping at the first failure.
pub async fn seed(engine: &BallotEngine, roster: Vec<Candidate>) -> Result<usize> {
    let count = roster.len();
    for candidate in roster {
        engine.add_candidate(candidate).await?;
    }
    tracing::info!(candidates = count, "roster seeded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PollError;
    use crate::infrastructure::in_memory::{InMemoryCandidateStore, InMemoryMemberStore};

    fn engine() -> BallotEngine {
        BallotEngine::new(
            Box::new(InMemoryCandidateStore::new()),
            Box::new(InMemoryMemberStore::new()),
        )
    }

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        let names: Vec<&str> = roster.iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, vec!["Osprey", "White-tailed Kite", "Golden Eagle"]);
        assert_eq!(roster[2].scientific_name, "Aquila chrysaetos");
    }

    #[test]
    fn test_read_roster() {
        let json = r#"[
            {"common_name": "Puffin", "scientific_name": "Fratercula arctica", "description": "Sea parrot."},
            {"common_name": "Gannet", "scientific_name": "Morus bassanus", "description": "Plunge diver.", "votes": 9}
        ]"#;
        let roster = read_roster(json.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].common_name, "Puffin");
    }

    #[test]
    fn test_read_roster_malformed() {
        let result = read_roster("[{\"common_name\": 3}]".as_bytes());
        assert!(matches!(result, Err(PollError::Json(_))));
    }

    #[tokio::test]
    async fn test_seed_default_roster() {
        let engine = engine();
        let count = seed(&engine, default_roster()).await.unwrap();
        assert_eq!(count, 3);
        assert!(engine.has_candidate("White-tailed Kite").await.unwrap());
        for candidate in engine.all_candidates().await.unwrap() {
            assert_eq!(candidate.votes.value(), 0);
        }
    }

    #[tokio::test]
    async fn test_seed_rejects_duplicates() {
        let engine = engine();
        let mut roster = default_roster();
        roster.push(roster[0].clone());
        let result = seed(&engine, roster).await;
        assert!(matches!(result, Err(PollError::DuplicateCandidate(name)) if name == "Osprey"));
    }
}
