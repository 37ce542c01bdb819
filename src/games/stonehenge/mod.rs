//! Stonehenge.
//!
//! A hexagonal board of lettered cells crossed by three families of
//! ley-lines:
//! - Players alternately claim one free cell
//! - Holding at least half the cells of a ley-line claims its marker,
//!   unless the other player got there first
//! - The first player holding at least half of all markers wins
//!
//! Side lengths 1 to 5 are supported.

mod game;
mod layout;
mod render;

pub use game::{CellLabel, StonehengeGame, StonehengeState};
pub use layout::{Family, LeyLine, Layout, MAX_SIDE};
