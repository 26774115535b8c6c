//! Persisted game record
//!
//! A [`Snapshot`] is a plain, owned copy of the full game state. The same
//! record backs the undo history and the single save slot, so it carries no
//! derived fields and no history of its own.
//!
//! Field names are camelCase so that records written by earlier versions of
//! the scoreboard load unchanged.

use std::collections::HashSet;

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{player::Id, round::Round, settings::Settings};

/// One roster entry inside a [`Snapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// The player's identifier, preserved across save and load
    pub id: Id,
    /// The player's display name
    pub name: String,
    /// The player's score at the time of the snapshot
    pub score: i64,
}

/// An independent copy of everything needed to rebuild a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Roster in seating order
    #[garde(custom(unique_ids))]
    pub players: Vec<PlayerRecord>,
    /// Round being played
    #[garde(skip)]
    pub round: Round,
    /// Value register of the active clue, 0 when nothing is committed
    #[garde(skip)]
    pub current_clue_value: i64,
    /// Players already scored against the active clue, in scoring order
    #[garde(skip)]
    pub attempted_players: Vec<Id>,
    /// Session settings, defaulted when absent from older records
    #[serde(default)]
    #[garde(skip)]
    pub settings: Settings,
}

/// Errors that can occur when reading a persisted record
#[derive(Error, Debug)]
pub enum Error {
    /// The record is not valid JSON or does not have the expected shape
    #[error("snapshot could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The record parsed but breaks a structural invariant
    #[error("snapshot is invalid: {0}")]
    Invalid(#[from] garde::Report),
}

/// Rejects a roster in which two entries share an id
fn unique_ids(players: &[PlayerRecord], _ctx: &()) -> garde::Result {
    let mut seen = HashSet::with_capacity(players.len());
    match players.iter().find(|p| !seen.insert(p.id)) {
        Some(duplicate) => Err(garde::Error::new(format!(
            "duplicate player id {}",
            duplicate.id
        ))),
        None => Ok(()),
    }
}

impl Snapshot {
    /// Converts the snapshot to a JSON string for storage
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }

    /// Parses and validates a stored record
    ///
    /// # Errors
    ///
    /// * `Error::Parse` - The text is not a well-formed snapshot
    /// * `Error::Invalid` - The snapshot repeats a player id
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn record(name: &str, score: i64) -> PlayerRecord {
        PlayerRecord {
            id: Id::new(),
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let player = record("Alice", -200);
        let snapshot = Snapshot {
            players: vec![player.clone()],
            round: Round::Double,
            current_clue_value: 800,
            attempted_players: vec![player.id],
            settings: Settings { mercy_rule: false },
        };

        let json = snapshot.to_json();
        assert!(json.contains("\"currentClueValue\":800"));
        assert!(json.contains("\"attemptedPlayers\""));
        assert!(json.contains("\"mercyRule\":false"));
        assert!(json.contains("\"round\":\"Double\""));

        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_accepts_legacy_record() {
        let json = r#"{
            "players": [
                {"id": "6f1c1f8e-2a4b-4c3d-9e5f-0a1b2c3d4e5f", "name": "Ann", "score": 600}
            ],
            "round": "Jeopardy",
            "currentClueValue": 0,
            "attemptedPlayers": []
        }"#;

        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.round, Round::Standard);
        assert_eq!(snapshot.players[0].score, 600);
        assert_eq!(snapshot.settings, Settings::default());
    }

    #[test]
    fn test_snapshot_parse_error() {
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{"players": 3}"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Snapshot::from_json(
                r#"{"players": [], "round": "Bonus", "currentClueValue": 0, "attemptedPlayers": []}"#
            ),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_snapshot_duplicate_ids_invalid() {
        let player = record("Twin", 0);
        let snapshot = Snapshot {
            players: vec![player.clone(), player],
            round: Round::Standard,
            current_clue_value: 0,
            attempted_players: vec![],
            settings: Settings::default(),
        };

        assert!(snapshot.validate().is_err());
        assert!(matches!(
            Snapshot::from_json(&snapshot.to_json()),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_snapshot_stale_attempts_are_valid() {
        let snapshot = Snapshot {
            players: vec![record("Solo", 0)],
            round: Round::Standard,
            current_clue_value: 200,
            attempted_players: vec![Id::new()],
            settings: Settings::default(),
        };

        assert!(snapshot.validate().is_ok());
    }
}
