//! Round progression
//!
//! A game moves through exactly three rounds in a fixed order. Transitions
//! happen one step at a time and clamp at both ends, so the round can never
//! leave its three-value domain.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::constants::round::{DOUBLE_MAX, DOUBLE_VALUES, FINAL_MAX, STANDARD_MAX, STANDARD_VALUES};

/// The round currently being played
///
/// Variants are declared in play order, so the derived ordering is the
/// progression order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Enum,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Round {
    /// Opening round with single clue values
    #[default]
    #[serde(alias = "Jeopardy")]
    Standard,
    /// Second round with doubled clue values
    Double,
    /// Terminal wager-only round
    Final,
}

impl Round {
    /// The round after this one, or `self` when already in the final round
    pub fn next(self) -> Self {
        match self {
            Self::Standard => Self::Double,
            Self::Double | Self::Final => Self::Final,
        }
    }

    /// The round before this one, or `self` when already in the standard round
    pub fn previous(self) -> Self {
        match self {
            Self::Standard | Self::Double => Self::Standard,
            Self::Final => Self::Double,
        }
    }

    /// Highest fixed clue value of the round
    ///
    /// The final round reports 0: it has no board, only wagers.
    pub fn max(self) -> i64 {
        match self {
            Self::Standard => STANDARD_MAX,
            Self::Double => DOUBLE_MAX,
            Self::Final => FINAL_MAX,
        }
    }

    /// The discrete clue values offered on the board for this round
    pub fn clue_values(self) -> &'static [i64] {
        board()[self]
    }

    /// Whether clues in this round are scored by wager only
    pub fn is_wager_only(self) -> bool {
        self == Self::Final
    }
}

fn board() -> EnumMap<Round, &'static [i64]> {
    enum_map! {
        Round::Standard => &STANDARD_VALUES[..],
        Round::Double => &DOUBLE_VALUES[..],
        Round::Final => &[][..],
    }
}
