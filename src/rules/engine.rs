//! Game and position traits consumed by the search engines.
//!
//! ## Implementation Notes
//!
//! - `legal_moves`: ordered, and empty exactly when `is_terminal` holds
//! - `apply`: must be pure; the receiver is never modified
//! - `Game::winner`: defaults to "the player not to move in a finished
//!   position", the rule for games where making the last move wins

use std::fmt::{Debug, Display};

use crate::core::{GameError, PlayerId, Result};

/// Move type of a game.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// One immutable position of a two-player game.
pub trait GameState: Clone + Debug {
    /// Opaque move token, e.g. a cell label.
    type Move: Clone + Eq + Debug + Display;

    /// The player to move in this position.
    fn current_player(&self) -> PlayerId;

    /// Whether the game has ended in this position.
    fn is_terminal(&self) -> bool;

    /// Legal moves in a stable order. Empty iff terminal.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Successor position after `mv`.
    ///
    /// `mv` must come from `legal_moves()`; implementations may panic
    /// otherwise. Use `try_apply` for untrusted moves.
    fn apply(&self, mv: &Self::Move) -> Self;

    /// Successor position after `mv`, checking legality first.
    fn try_apply(&self, mv: &Self::Move) -> Result<Self> {
        if self.legal_moves().contains(mv) {
            Ok(self.apply(mv))
        } else {
            Err(GameError::IllegalMove { mv: mv.to_string() })
        }
    }
}

/// A game in progress: a current position plus the rules that judge it.
pub trait Game {
    /// Position type.
    type State: GameState;

    /// The position the game is currently in.
    fn current_state(&self) -> &Self::State;

    /// Replace the current position.
    fn set_current_state(&mut self, state: Self::State);

    /// Turn external move text into a move of the current position.
    ///
    /// Text is canonicalized with `canonical_move_text` before lookup.
    fn parse_move(&self, text: &str) -> Result<MoveOf<Self>>;

    /// Whether the game is over in `state`.
    fn is_over(&self, state: &Self::State) -> bool {
        state.is_terminal()
    }

    /// Declared winner of `state`, `None` if unfinished or drawn.
    ///
    /// The default is the player who is *not* to move once the game is
    /// over.
    fn winner(&self, state: &Self::State) -> Option<PlayerId> {
        if self.is_over(state) {
            Some(state.current_player().other())
        } else {
            None
        }
    }

    /// Whether `player` has won in the current position.
    fn is_winner(&self, player: PlayerId) -> bool {
        self.winner(self.current_state()) == Some(player)
    }

    /// Apply a legal move to the current position.
    fn play(&mut self, mv: &MoveOf<Self>) -> Result<()> {
        let next = self.current_state().try_apply(mv)?;
        self.set_current_state(next);
        Ok(())
    }
}

/// Canonical form of external move text: trimmed and uppercased.
#[must_use]
pub fn canonical_move_text(text: &str) -> String {
    text.trim().to_uppercase()
}
