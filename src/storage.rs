//! Persistence boundary
//!
//! This module defines the trait for the durable key-value store that
//! holds the single saved game, plus helpers to save into it and to load
//! from it with a fallback to a fresh game. The store abstraction lets the
//! host application back it with browser storage, a file, or memory.

use std::collections::HashMap;

use crate::{constants::storage::SAVE_KEY, game::Game};

/// Trait for a durable string key-value store
pub trait Storage {
    /// Reads the value stored under `key`
    ///
    /// # Returns
    ///
    /// The stored text, or `None` if nothing is stored under `key`
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: String);

    /// Deletes whatever is stored under `key`
    fn remove(&mut self, key: &str);
}

/// In-memory store, useful for tests and for hosts without durable storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Writes the game's live state to the save slot
///
/// The undo history is not saved.
pub fn save<S: Storage>(storage: &mut S, game: &Game) {
    storage.write(SAVE_KEY, game.to_json());
}

/// Loads the saved game, or starts a fresh one
///
/// A missing save yields a fresh game. A save that fails to parse or
/// validate is deleted from the store and also yields a fresh game.
pub fn load_or_new<S: Storage>(storage: &mut S) -> Game {
    let Some(json) = storage.read(SAVE_KEY) else {
        return Game::new();
    };
    match Game::from_json(&json) {
        Ok(game) => {
            log::debug!("restored saved game with {} player(s)", game.players().len());
            game
        }
        Err(e) => {
            log::warn!("discarding saved game: {e}");
            storage.remove(SAVE_KEY);
            Game::new()
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::round::Round;

    #[test]
    fn test_load_without_save_starts_fresh() {
        let mut storage = MemoryStorage::default();
        let game = load_or_new(&mut storage);

        assert!(game.players().is_empty());
        assert_eq!(game.round(), Round::Standard);
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::default();
        let mut game = Game::new();
        let id = game.add_player("Alice").id();
        game.set_clue_value(400);
        game.update_score(id, true);
        game.next_round();

        save(&mut storage, &game);
        let loaded = load_or_new(&mut storage);

        assert_eq!(loaded.players(), game.players());
        assert_eq!(loaded.round(), Round::Double);
        assert_eq!(loaded.history_len(), 0);
        assert!(storage.read(SAVE_KEY).is_some());
    }

    #[test]
    fn test_malformed_save_is_discarded() {
        let mut storage = MemoryStorage::default();
        storage.write(SAVE_KEY, "{\"players\": \"nope\"}".to_string());

        let game = load_or_new(&mut storage);

        assert!(game.players().is_empty());
        assert!(storage.read(SAVE_KEY).is_none());
    }

    #[test]
    fn test_memory_storage_overwrite_and_remove() {
        let mut storage = MemoryStorage::default();
        storage.write("k", "1".to_string());
        storage.write("k", "2".to_string());
        assert_eq!(storage.read("k"), Some("2".to_string()));

        storage.remove("k");
        assert_eq!(storage.read("k"), None);
    }
}
