//! Error types for game collaborators and the match driver.
//!
//! The search engines themselves cannot fail: a finished root position
//! yields `None`, not an error.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by games, move parsing and match recording.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move '{mv}' in this position")]
    IllegalMove { mv: String },

    #[error("'{text}' does not name a move")]
    UnknownMove { text: String },

    #[error("invalid side length {side} (expected 1..={max})")]
    InvalidSideLength { side: usize, max: usize },

    #[error("{player} has no move in an unfinished game")]
    NoMove { player: PlayerId },

    #[error("failed to encode match record: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Convenient result alias.
pub type Result<T> = std::result::Result<T, GameError>;
