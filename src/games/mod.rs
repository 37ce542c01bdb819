//! Game implementations.
//!
//! - `stonehenge`: the ley-line claiming game the engines play in practice
//! - `scripted`: explicit hand-written trees for pinning down edge cases

pub mod scripted;
pub mod stonehenge;
