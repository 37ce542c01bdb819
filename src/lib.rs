//! # rust-minimax
//!
//! Exact minimax search for two-player, perfect-information games with
//! deterministic moves.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: engines see a game only through the `Game` and
//!    `GameState` traits. Nothing about boards or pieces is hardcoded.
//!
//! 2. **Explicit State**: every search reads positions passed to it and
//!    never modifies the game it is asked about.
//!
//! 3. **Interchangeable Engines**: recursive and iterative search agree on
//!    every score; which optimal move comes back is a tie-break policy.
//!
//! ## Modules
//!
//! - `core`: players, scores, RNG, configuration, errors
//! - `rules`: the `Game` / `GameState` traits
//! - `minimax`: recursive and iterative engines, rough-outcome heuristic
//! - `games`: scripted game trees and Stonehenge
//! - `play`: match driver pitting two strategies against each other

pub mod core;
pub mod rules;
pub mod minimax;
pub mod games;
pub mod play;

// Re-export commonly used types
pub use crate::core::{GameError, PlayerId, Result, Score, SearchConfig, SearchRng};

pub use crate::rules::{Game, GameState, MoveOf};

pub use crate::minimax::{
    IterativeMinimax, RecursiveMinimax, RoughOutcome, rough_outcome,
    SearchStats, Strategy, TieBreak,
    FirstMaximal, LastMaximal, UniformRandom,
};

pub use crate::play::{play_match, MatchRecord, Ply};
