//! Core game logic and state management
//!
//! This module contains the [`Game`] struct, which owns the roster, the
//! round and clue state machines, the session settings and the undo
//! history. Every mutation goes through a named operation; operations that
//! record history capture a snapshot of the state immediately before their
//! own effect.
//!
//! The model is deliberately permissive. Unknown player ids, unknown setting
//! keys and an empty history are quiet no-ops rather than errors, and the
//! final round eligibility rule is exposed for the caller to apply instead
//! of being enforced on scoring.

use std::str::FromStr;

use itertools::Itertools;

use crate::{
    history::History,
    player::{Id, Player},
    round::Round,
    settings::{SettingKey, Settings},
    snapshot::{self, PlayerRecord, Snapshot},
    view::{PlayerRow, Scoreboard},
};

/// A scoring session
///
/// Fields are private: the presentation layer reads them through accessors
/// and changes them only through the operations below.
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// Roster in seating order
    players: Vec<Player>,
    /// Round being played
    round: Round,
    /// Value register of the active clue, doubling as the wager register
    current_clue_value: i64,
    /// Players scored against the active clue, in scoring order
    attempted: Vec<Id>,
    /// Session settings
    settings: Settings,
    /// Prior states for undo
    history: History,
}

// Accessors
impl Game {
    /// Creates an empty game in the standard round
    pub fn new() -> Self {
        Self::default()
    }

    /// The roster in seating order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a player by id
    pub fn player(&self, id: Id) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    fn player_mut(&mut self, id: Id) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// The round being played
    pub fn round(&self) -> Round {
        self.round
    }

    /// The value in effect for the active clue, 0 when none is committed
    pub fn current_clue_value(&self) -> i64 {
        self.current_clue_value
    }

    /// Session settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of operations that can currently be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Ids already scored against the active clue, in scoring order
    ///
    /// May contain ids of players removed after they were scored.
    pub fn attempted_players(&self) -> &[Id] {
        &self.attempted
    }

    /// Whether `player_id` was already scored against the active clue
    pub fn has_player_attempted(&self, player_id: Id) -> bool {
        self.attempted.contains(&player_id)
    }

    /// Highest fixed clue value of the current round
    pub fn round_max(&self) -> i64 {
        self.round.max()
    }

    /// The clue values offered on the board this round
    pub fn clue_values(&self) -> &'static [i64] {
        self.round.clue_values()
    }
}

// Undo
impl Game {
    /// Records the current state in the undo history
    fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
        log::trace!("saved undo snapshot, history length {}", self.history.len());
    }

    /// Replaces the live state with a snapshot, leaving history untouched
    fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            players,
            round,
            current_clue_value,
            attempted_players,
            settings,
        } = snapshot;

        self.players = players
            .into_iter()
            .map(|PlayerRecord { id, name, score }| Player::restored(id, name, score))
            .collect();
        self.round = round;
        self.current_clue_value = current_clue_value;
        self.attempted = attempted_players.into_iter().unique().collect();
        self.settings = settings;
    }

    /// Rolls back the most recent history-bearing operation
    ///
    /// # Returns
    ///
    /// `false` when there is nothing to undo, `true` otherwise. Repeated
    /// calls walk further back until the history is exhausted.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            log::debug!("undo requested with empty history");
            return false;
        };
        self.restore(snapshot);
        log::debug!("undo applied, {} step(s) remaining", self.history.len());
        true
    }
}

// Roster
impl Game {
    /// Appends a new player to the roster
    ///
    /// Records history. Names are not checked for uniqueness; trimming and
    /// rejecting blank names is the caller's job.
    ///
    /// # Returns
    ///
    /// A copy of the created player, including its fresh id
    pub fn add_player(&mut self, name: impl Into<String>) -> Player {
        self.save_state();
        let player = Player::new(name);
        log::debug!("added player {} ({})", player.name(), player.id());
        self.players.push(player.clone());
        player
    }

    /// Removes a player from the roster
    ///
    /// Records history even when no player has this id. The attempted set is
    /// left as is, so a removed player may linger there.
    pub fn remove_player(&mut self, player_id: Id) {
        self.save_state();
        let before = self.players.len();
        self.players.retain(|p| p.id() != player_id);
        if self.players.len() == before {
            log::debug!("remove_player: no player with id {player_id}");
        } else {
            log::debug!("removed player {player_id}");
        }
    }
}

// Clues and scoring
impl Game {
    /// Commits the value of the active clue
    ///
    /// Committing a value while no clue is active (register at 0) starts a
    /// new clue and clears the attempted set. Changing the value of an
    /// already active clue keeps it. Wager clues commit 0 at activation and
    /// receive the real wager per player just before scoring. Does not
    /// record history.
    pub fn set_clue_value(&mut self, value: i64) {
        if self.current_clue_value == 0 {
            self.attempted.clear();
        }
        self.current_clue_value = value;
    }

    /// Loads a single player's wager into the value register
    ///
    /// The register is shared, so wagers for several players must be
    /// committed and scored in pairs: commit for one player, score that
    /// player, then move on to the next. Unlike [`Game::set_clue_value`] the
    /// attempted set is kept, so players already scored on this wager clue
    /// stay recorded.
    pub fn commit_pending_value(&mut self, value: i64) {
        self.current_clue_value = value;
    }

    /// Scores a response against the value register
    ///
    /// Adds the register on a correct response and subtracts it otherwise,
    /// then marks the player as attempted. Records history. An unknown id is
    /// a silent no-op and records nothing.
    ///
    /// Eligibility is not checked here; see [`Game::is_eligible`].
    pub fn update_score(&mut self, player_id: Id, correct: bool) {
        if self.player(player_id).is_none() {
            log::debug!("update_score: no player with id {player_id}");
            return;
        }

        self.save_state();
        if !self.attempted.contains(&player_id) {
            self.attempted.push(player_id);
        }

        let (value, round) = (self.current_clue_value, self.round);
        if let Some(player) = self.player_mut(player_id) {
            if correct {
                player.add_score(value);
            } else {
                player.subtract_score(value);
            }
            log::debug!(
                "scored {} {} {value} in {} round, now {}",
                player.id(),
                if correct { "+" } else { "-" },
                round,
                player.score()
            );
        }
    }

    /// Scores the wager committed through [`Game::commit_pending_value`]
    pub fn score(&mut self, player_id: Id, correct: bool) {
        self.update_score(player_id, correct);
    }

    /// Empties the attempted set without touching scores or the clue value
    pub fn clear_attempts(&mut self) {
        self.attempted.clear();
    }
}

// Rounds
impl Game {
    fn change_round(&mut self, round: Round) {
        self.save_state();
        self.round = round;
        self.current_clue_value = 0;
        self.attempted.clear();
        log::debug!("round is now {}", self.round);
    }

    /// Advances to the next round, staying put in the final round
    ///
    /// Records history and always resets the clue value and attempted set.
    pub fn next_round(&mut self) {
        self.change_round(self.round.next());
    }

    /// Steps back one round, staying put in the standard round
    ///
    /// Records history and always resets the clue value and attempted set.
    pub fn previous_round(&mut self) {
        self.change_round(self.round.previous());
    }
}

// Settings
impl Game {
    /// Sets a setting by its persisted name
    ///
    /// Records history, then applies the value if the key names a known
    /// setting. Unknown keys are ignored.
    pub fn set_setting(&mut self, key: &str, value: bool) {
        self.save_state();
        match SettingKey::from_str(key) {
            Ok(key) => {
                self.settings.set(key, value);
                log::debug!("setting {key:?} = {value}");
            }
            Err(e) => log::debug!("set_setting ignored: {e}"),
        }
    }
}

// Final round
impl Game {
    /// Whether a player may be scored in the current round
    ///
    /// Only the final round restricts anyone: without the mercy rule a
    /// player below zero sits it out. Unknown ids are never eligible.
    pub fn is_eligible(&self, player_id: Id) -> bool {
        self.player(player_id)
            .is_some_and(|p| self.player_is_eligible(p))
    }

    fn player_is_eligible(&self, player: &Player) -> bool {
        !(self.round == Round::Final
            && player.score() < 0
            && !self.settings.get(SettingKey::MercyRule))
    }

    /// The winners of the game, once decided
    ///
    /// The game is decided when the final round is being played and every
    /// eligible player has been scored in it. Winners are every player tied
    /// for the highest score across the whole roster, ineligible players
    /// included.
    ///
    /// # Returns
    ///
    /// `None` while undecided or when the roster is empty
    pub fn winners(&self) -> Option<Vec<Id>> {
        if self.round != Round::Final {
            return None;
        }
        let all_answered = self
            .players
            .iter()
            .filter(|p| self.player_is_eligible(p))
            .all(|p| self.has_player_attempted(p.id()));
        if !all_answered {
            return None;
        }

        let best = self.players.iter().map(Player::score).max()?;
        Some(
            self.players
                .iter()
                .filter(|p| p.score() == best)
                .map(Player::id)
                .collect(),
        )
    }

    /// The largest wager a player may make in the current round
    ///
    /// In the final round a player may risk everything they have, and
    /// nothing when below zero. On a daily double they may risk their score
    /// or the round's top clue value, whichever is larger.
    pub fn max_wager(&self, player_id: Id) -> Option<i64> {
        let score = self.player(player_id)?.score();
        Some(match self.round {
            Round::Final => score.max(0),
            round => score.max(round.max()),
        })
    }
}

// Persistence
impl Game {
    /// Captures the full live state as an independent record
    ///
    /// The history itself is not part of the record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self
                .players
                .iter()
                .map(|p| PlayerRecord {
                    id: p.id(),
                    name: p.name().to_owned(),
                    score: p.score(),
                })
                .collect(),
            round: self.round,
            current_clue_value: self.current_clue_value,
            attempted_players: self.attempted.clone(),
            settings: self.settings,
        }
    }

    /// Rebuilds a game from a record, with an empty undo history
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut game = Self::new();
        game.restore(snapshot);
        game
    }

    /// Serializes the live state for storage
    pub fn to_json(&self) -> String {
        self.snapshot().to_json()
    }

    /// Loads a game from a stored record
    ///
    /// # Errors
    ///
    /// Returns a `snapshot::Error` if the record is malformed or breaks a
    /// structural invariant.
    pub fn from_json(json: &str) -> Result<Self, snapshot::Error> {
        Snapshot::from_json(json).map(Self::from_snapshot)
    }

    /// Builds the read-only scoreboard shown by the presentation layer
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            round: self.round,
            round_max: self.round_max(),
            clue_values: self.clue_values().to_vec(),
            current_clue_value: self.current_clue_value,
            mercy_rule: self.settings.mercy_rule,
            history_len: self.history.len(),
            players: self
                .players
                .iter()
                .map(|p| PlayerRow {
                    id: p.id(),
                    name: p.name().to_owned(),
                    score: p.score(),
                    attempted: self.has_player_attempted(p.id()),
                    eligible: self.player_is_eligible(p),
                })
                .collect(),
            winners: self.winners(),
        }
    }
}

impl From<Snapshot> for Game {
    fn from(snapshot: Snapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}
