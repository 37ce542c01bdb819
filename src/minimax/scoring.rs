//! Exact scoring rule shared by both minimax engines.
//!
//! Scores are relative to `this_player`, fixed once per top-level search:
//! a finished position is WIN/LOSE/DRAW by its declared winner, an
//! unfinished one is the max over its children when `this_player` moves
//! there and the min otherwise.

use crate::core::{PlayerId, Score};
use crate::rules::Game;

/// Score of a finished position for `this_player`.
pub fn terminal_score<G: Game>(game: &G, state: &G::State, this_player: PlayerId) -> Score {
    Score::from_winner(game.winner(state), this_player)
}

/// Combine child scores at a node.
///
/// Maximizing starts from `Lose`, minimizing from `Win`, so a node with no
/// children keeps the worst value for its mover.
pub fn fold(maximizing: bool, scores: impl IntoIterator<Item = Score>) -> Score {
    if maximizing {
        scores.into_iter().fold(Score::Lose, Score::max)
    } else {
        scores.into_iter().fold(Score::Win, Score::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_max_min() {
        let scores = [Score::Draw, Score::Lose, Score::Win];
        assert_eq!(fold(true, scores), Score::Win);
        assert_eq!(fold(false, scores), Score::Lose);
    }

    #[test]
    fn test_fold_empty_is_worst_for_mover() {
        assert_eq!(fold(true, []), Score::Lose);
        assert_eq!(fold(false, []), Score::Win);
    }

    #[test]
    fn test_fold_single() {
        assert_eq!(fold(true, [Score::Draw]), Score::Draw);
        assert_eq!(fold(false, [Score::Draw]), Score::Draw);
    }
}
