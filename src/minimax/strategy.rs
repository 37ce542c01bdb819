//! The move-chooser seam shared by every engine.

use crate::rules::{Game, MoveOf};

/// Something that picks a move for the player to act in `game`.
pub trait Strategy<G: Game> {
    /// Choose a move for the current position of `game`.
    ///
    /// Returns `None` when the current position is already finished.
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>>;

    /// Short name for logs and match records.
    fn name(&self) -> &'static str;
}
