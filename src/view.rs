//! Read-only scoreboard view
//!
//! The presentation layer renders from a [`Scoreboard`] built by
//! [`Game::scoreboard`](crate::game::Game::scoreboard). It is derived on
//! demand and never fed back into the game.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{player::Id, round::Round};

/// One player's line on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    /// The player's identifier
    pub id: Id,
    /// The player's display name
    pub name: String,
    /// Current score, possibly negative
    pub score: i64,
    /// Whether the player was already scored against the active clue
    pub attempted: bool,
    /// Whether the player may be scored in the current round
    pub eligible: bool,
}

/// Everything the presentation layer needs to draw the game screen
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    /// Round being played
    pub round: Round,
    /// Highest fixed clue value of the round, 0 in the final round
    pub round_max: i64,
    /// Value buttons to offer, empty in the final round
    pub clue_values: Vec<i64>,
    /// Value register of the active clue
    pub current_clue_value: i64,
    /// Whether negative scores may play the final round
    pub mercy_rule: bool,
    /// Number of operations that can be undone
    pub history_len: usize,
    /// Roster rows in seating order
    pub players: Vec<PlayerRow>,
    /// Winning players once the final round is decided
    pub winners: Option<Vec<Id>>,
}

impl Scoreboard {
    /// Converts the scoreboard to a JSON string for the rendering layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::game::Game;

    #[test]
    fn test_scoreboard_message_omits_undecided_winners() {
        let mut game = Game::new();
        game.add_player("Alice");

        let message = game.scoreboard().to_message();

        assert!(message.contains("\"round\":\"Standard\""));
        assert!(message.contains("\"roundMax\":1000"));
        assert!(message.contains("\"clueValues\":[200,400,600,800,1000]"));
        assert!(message.contains("\"historyLen\":1"));
        assert!(message.contains("\"name\":\"Alice\""));
        assert!(!message.contains("winners"));
    }

    #[test]
    fn test_scoreboard_message_lists_winners() {
        let mut game = Game::new();
        let id = game.add_player("Solo").id();
        game.next_round();
        game.next_round();
        game.commit_pending_value(0);
        game.score(id, true);

        let message = game.scoreboard().to_message();

        assert!(message.contains(&format!("\"winners\":[\"{id}\"]")));
    }
}
