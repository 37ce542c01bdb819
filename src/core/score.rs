//! Game-theoretic scores.
//!
//! A `Score` is always relative to some reference player: the mover of a
//! position for the rough-outcome heuristic, or the fixed `this_player` of a
//! top-level minimax search.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Value of a position for a reference player.
///
/// Totally ordered: `Lose < Draw < Win`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// The reference player loses.
    Lose,
    /// Neither player wins.
    Draw,
    /// The reference player wins.
    Win,
}

impl Score {
    /// Score of a finished game for `player`, given its declared winner.
    #[must_use]
    pub fn from_winner(winner: Option<PlayerId>, player: PlayerId) -> Self {
        match winner {
            Some(w) if w == player => Score::Win,
            Some(_) => Score::Lose,
            None => Score::Draw,
        }
    }
}

/// Flip perspective: a win for one player is a loss for the other.
impl std::ops::Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Lose => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Lose,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Lose => write!(f, "LOSE"),
            Score::Draw => write!(f, "DRAW"),
            Score::Win => write!(f, "WIN"),
        }
    }
}
