//! Pre-game roster drafting
//!
//! Before the first clue the host edits a list of name slots. Slots are
//! free text until the game starts; only then are blank slots dropped and
//! the remaining names turned into players.

use thiserror::Error;

use crate::{
    constants::{player::MAX_NAME_LENGTH, setup::DEFAULT_PLAYER_COUNT},
    game::Game,
    player::Player,
};

/// Errors that can occur while drafting the roster
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Every slot is blank
    #[error("at least one player needs a name")]
    NoPlayers,
    /// The last remaining slot cannot be removed
    #[error("cannot remove the last player slot")]
    LastSlot,
    /// A slot name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
}

/// Editable list of name slots shown before the game starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    slots: Vec<String>,
}

impl Default for Setup {
    /// Three placeholder slots named `Player 1` to `Player 3`
    fn default() -> Self {
        Self {
            slots: (1..=DEFAULT_PLAYER_COUNT)
                .map(|n| format!("Player {n}"))
                .collect(),
        }
    }
}

impl Setup {
    /// The slot texts as currently entered
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Appends a placeholder slot numbered after the current slot count
    pub fn add_slot(&mut self) {
        self.slots.push(format!("Player {}", self.slots.len() + 1));
    }

    /// Removes a slot
    ///
    /// An out-of-range index is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::LastSlot` if this is the only slot left.
    pub fn remove_slot(&mut self, index: usize) -> Result<(), Error> {
        if self.slots.len() <= 1 {
            return Err(Error::LastSlot);
        }
        if index < self.slots.len() {
            self.slots.remove(index);
        }
        Ok(())
    }

    /// Replaces a slot's text, ignoring an out-of-range index
    pub fn rename(&mut self, index: usize, name: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = name.into();
        }
    }

    /// The trimmed, non-blank slot names in order
    pub fn valid_names(&self) -> Vec<&str> {
        self.slots
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Adds every named slot to the game as a player, in slot order
    ///
    /// # Errors
    ///
    /// * `Error::NoPlayers` - Every slot is blank
    /// * `Error::TooLong` - A name exceeds 30 characters; nothing is added
    pub fn start(&self, game: &mut Game) -> Result<Vec<Player>, Error> {
        let names = self.valid_names();
        if names.is_empty() {
            return Err(Error::NoPlayers);
        }
        if names.iter().any(|n| n.chars().count() > MAX_NAME_LENGTH) {
            return Err(Error::TooLong);
        }
        log::debug!("starting game with {} player(s)", names.len());
        Ok(names.into_iter().map(|n| game.add_player(n)).collect())
    }
}
