//! Host console adjudication flow
//!
//! The host picks a clue value, picks the player who responded, and then
//! marks the response correct or incorrect. [`Console`] holds those two
//! selections between calls and drives the [`Game`] accordingly. It owns
//! no game state of its own; the game is borrowed for each action.

use crate::{game::Game, player::Id};

/// Selections made on the host's screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Console {
    selected_player: Option<Id>,
    selected_value: Option<i64>,
}

impl Console {
    /// The currently selected player, if any
    pub fn selected_player(&self) -> Option<Id> {
        self.selected_player
    }

    /// The currently selected clue value, if any
    pub fn selected_value(&self) -> Option<i64> {
        self.selected_value
    }

    /// Value buttons to offer for the current round
    pub fn value_choices(game: &Game) -> &'static [i64] {
        game.clue_values()
    }

    /// Activates a board clue with the chosen value
    ///
    /// Picking a value starts a fresh clue, so earlier attempts are cleared.
    ///
    /// # Returns
    ///
    /// `false` without touching the game in a wager-only round, where values
    /// come from [`Console::enter_wager`] instead
    pub fn select_value(&mut self, game: &mut Game, value: i64) -> bool {
        if game.round().is_wager_only() {
            return false;
        }
        self.selected_value = Some(value);
        game.clear_attempts();
        game.set_clue_value(value);
        true
    }

    /// Loads a wager for the selected player on a daily double or final clue
    ///
    /// # Returns
    ///
    /// `false` if no player is selected
    pub fn enter_wager(&mut self, game: &mut Game, wager: i64) -> bool {
        if self.selected_player.is_none() {
            return false;
        }
        self.selected_value = Some(wager);
        game.commit_pending_value(wager);
        true
    }

    /// Selects a player, or deselects them when already selected
    pub fn select_player(&mut self, player_id: Id) {
        self.selected_player = if self.selected_player == Some(player_id) {
            None
        } else {
            Some(player_id)
        };
    }

    /// Whether both a player and a non-zero value are selected
    pub fn can_score(&self) -> bool {
        self.selected_player.is_some() && self.selected_value.is_some_and(|v| v != 0)
    }

    /// Marks the selected player's response
    ///
    /// The player selection is always cleared afterwards. A correct
    /// response also ends the clue: the value selection is cleared and the
    /// game's clue value returns to 0.
    ///
    /// # Returns
    ///
    /// `false` without touching the game if [`Console::can_score`] is false
    pub fn score(&mut self, game: &mut Game, correct: bool) -> bool {
        let (Some(player_id), true) = (self.selected_player, self.can_score()) else {
            return false;
        };

        game.update_score(player_id, correct);
        self.selected_player = None;
        if correct {
            self.selected_value = None;
            game.set_clue_value(0);
        }
        true
    }

    /// Advances the round and clears both selections
    pub fn next_round(&mut self, game: &mut Game) {
        game.next_round();
        *self = Self::default();
    }

    /// Steps back a round and clears both selections
    pub fn previous_round(&mut self, game: &mut Game) {
        game.previous_round();
        *self = Self::default();
    }

    /// Removes a player, dropping the selection if it pointed at them
    pub fn remove_player(&mut self, game: &mut Game, player_id: Id) {
        game.remove_player(player_id);
        if self.selected_player == Some(player_id) {
            self.selected_player = None;
        }
    }

    /// Undoes the last operation and clears both selections
    pub fn undo(&mut self, game: &mut Game) -> bool {
        *self = Self::default();
        game.undo()
    }
}
