//! Core types: players, scores, RNG, configuration, errors.
//!
//! Everything here is game-agnostic. Games plug in through the traits in
//! `rules`.

pub mod player;
pub mod score;
pub mod rng;
pub mod config;
pub mod error;

pub use player::PlayerId;
pub use score::Score;
pub use rng::SearchRng;
pub use config::SearchConfig;
pub use error::{GameError, Result};
