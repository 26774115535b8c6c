//! Bounded undo history
//!
//! The history is a capped queue of [`Snapshot`]s. Pushing past the cap
//! drops the oldest entry, and popping walks back one operation at a time.
//! There is no redo.

use std::collections::VecDeque;

use crate::{constants::history::CAPACITY, snapshot::Snapshot};

/// Undo log of prior game states, most recent last
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
}

impl History {
    /// Records a snapshot, evicting the oldest one when over capacity
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > CAPACITY {
            self.snapshots.pop_front();
            log::trace!("undo history full, evicted oldest snapshot");
        }
    }

    /// Removes and returns the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Number of snapshots currently held
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether there is nothing to undo
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{round::Round, settings::Settings};

    fn snapshot(value: i64) -> Snapshot {
        Snapshot {
            players: vec![],
            round: Round::Standard,
            current_clue_value: value,
            attempted_players: vec![],
            settings: Settings::default(),
        }
    }

    #[test]
    fn test_history_lifo() {
        let mut history = History::default();
        history.push(snapshot(1));
        history.push(snapshot(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.current_clue_value), Some(2));
        assert_eq!(history.pop().map(|s| s.current_clue_value), Some(1));
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = History::default();
        for value in 0..30 {
            history.push(snapshot(value));
        }

        assert_eq!(history.len(), CAPACITY);

        let mut remaining = Vec::new();
        while let Some(s) = history.pop() {
            remaining.push(s.current_clue_value);
        }
        assert_eq!(remaining.first(), Some(&29));
        assert_eq!(remaining.last(), Some(&10));
    }
}
