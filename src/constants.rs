//! Configuration constants for the scoring engine
//!
//! This module contains the fixed limits and board values used throughout
//! the game model, grouped by the component that owns them.

/// Undo history configuration constants
pub mod history {
    /// Maximum number of snapshots kept for undo, oldest evicted first
    pub const CAPACITY: usize = 20;
}

/// Round configuration constants
pub mod round {
    /// Clue values offered during the standard round
    pub const STANDARD_VALUES: [i64; 5] = [200, 400, 600, 800, 1000];
    /// Clue values offered during the double round
    pub const DOUBLE_VALUES: [i64; 5] = [400, 800, 1200, 1600, 2000];
    /// Highest clue value of the standard round
    pub const STANDARD_MAX: i64 = 1000;
    /// Highest clue value of the double round
    pub const DOUBLE_MAX: i64 = 2000;
    /// The final round has no ceiling, wagers are bounded by the player's score
    pub const FINAL_MAX: i64 = 0;
}

/// Player configuration constants
pub mod player {
    /// Maximum length of a player name in characters, enforced during setup
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Pre-game setup configuration constants
pub mod setup {
    /// Number of placeholder slots offered before the game starts
    pub const DEFAULT_PLAYER_COUNT: usize = 3;
}

/// Persistence configuration constants
pub mod storage {
    /// Key under which the serialized game is stored
    pub const SAVE_KEY: &str = "clueboard.game";
}
