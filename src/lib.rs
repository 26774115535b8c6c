//! # Clueboard Scoring Library
//!
//! This library provides the scoring engine for a three-round trivia
//! contest: the roster, the round and clue state machines, wager handling,
//! final round eligibility, a bounded undo history and the persisted game
//! record. Rendering and input handling live outside this crate and drive
//! the model through [`game::Game`]'s operations.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod console;
pub mod constants;
pub mod game;
pub mod history;
pub mod player;
pub mod round;
pub mod settings;
pub mod setup;
pub mod snapshot;
pub mod storage;
pub mod view;

pub use game::Game;
pub use player::{Id, Player};
pub use round::Round;
