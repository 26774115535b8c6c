//! Player identity and running score
//!
//! This module defines the identifier handed out to every contestant and
//! the `Player` entity itself. A player is a leaf in the game model: it
//! knows its own name and score and nothing about rounds or clues.

use std::{fmt::Display, str::FromStr};

use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;

/// Seat-independent handle for a contestant
///
/// Handed out once when a player joins the roster and written into every
/// snapshot, so scores, attempts and winners keep pointing at the same
/// contestant across undo and reload. Removing a player retires the id.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct Id(Uuid);

impl Id {
    /// Draws an id for a newly seated contestant
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    /// Same as [`Id::new`]
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Id {
    /// Hyphenated form, as stored in saves and attempted lists
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Id {
    type Err = uuid::Error;

    /// Reads an id back from a saved game
    ///
    /// # Errors
    ///
    /// Returns a `uuid::Error` when the saved text is not a UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A contestant and their running score
///
/// Scores are signed and only bounded by `i64`, where they saturate: an
/// incorrect response on a high value clue can push a player below zero,
/// which matters for final round eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: Id,
    name: String,
    score: i64,
}

impl Player {
    /// Creates a player with a fresh identifier and a score of zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            score: 0,
        }
    }

    /// Rebuilds a player with a known identity, used when restoring a snapshot
    pub(crate) fn restored(id: Id, name: String, score: i64) -> Self {
        Self { id, name, score }
    }

    /// The player's unique identifier
    pub fn id(&self) -> Id {
        self.id
    }

    /// The player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's current score, possibly negative
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Adds `amount` to the score, saturating at the `i64` bounds
    pub fn add_score(&mut self, amount: i64) {
        self.score = self.score.saturating_add(amount);
    }

    /// Subtracts `amount` from the score, saturating at the `i64` bounds
    pub fn subtract_score(&mut self, amount: i64) {
        self.score = self.score.saturating_sub(amount);
    }
}
