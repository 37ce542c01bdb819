//! Capability traits implemented by games.
//!
//! Games implement `GameState` (one position) and `Game` (a current
//! position plus winner and move-text rules). The search engines call into
//! these traits but never interpret game-specific concepts directly.

pub mod engine;

pub use engine::{canonical_move_text, Game, GameState, MoveOf};
