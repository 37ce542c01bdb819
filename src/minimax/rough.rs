//! Rough-outcome heuristic and the strategy built on it.
//!
//! Looks one or two plies ahead, never further:
//! - some move finishes the game in the mover's favour: WIN
//! - every move lets the opponent finish the game in their favour at once:
//!   LOSE
//! - anything else: DRAW (no certainty either way)
//!
//! The exact engines never call this.

use crate::core::Score;
use crate::rules::{Game, GameState, MoveOf};

use super::policy::{FirstMaximal, TieBreak};
use super::strategy::Strategy;

/// Shallow estimate of `state` for the player to move in it.
///
/// A finished `state` gets its exact score for its mover.
pub fn rough_outcome<G: Game>(game: &G, state: &G::State) -> Score {
    let mover = state.current_player();
    if game.is_over(state) {
        return Score::from_winner(game.winner(state), mover);
    }

    let won_by = |s: &G::State, player| game.is_over(s) && game.winner(s) == Some(player);

    let replies: Vec<G::State> = state.legal_moves().iter().map(|mv| state.apply(mv)).collect();
    if replies.iter().any(|next| won_by(next, mover)) {
        return Score::Win;
    }

    let opponent = mover.other();
    let always_punished = replies.iter().all(|next| {
        next.legal_moves()
            .iter()
            .any(|mv| won_by(&next.apply(mv), opponent))
    });

    if always_punished {
        Score::Lose
    } else {
        Score::Draw
    }
}

/// Picks the move whose successor looks worst for the opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcome;

impl RoughOutcome {
    /// Heuristic value of every move from the current position, for the
    /// player to move, in move order.
    pub fn evaluate<G: Game>(&self, game: &G) -> Vec<(MoveOf<G>, Score)> {
        let state = game.current_state();
        if game.is_over(state) {
            return Vec::new();
        }
        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let guess = -rough_outcome(game, &state.apply(&mv));
                (mv, guess)
            })
            .collect()
    }
}

impl<G: Game> Strategy<G> for RoughOutcome {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let scored = self.evaluate(game);
        let scores: Vec<Score> = scored.iter().map(|(_, s)| *s).collect();
        let idx = FirstMaximal.select(&scores)?;
        scored.into_iter().nth(idx).map(|(mv, _)| mv)
    }

    fn name(&self) -> &'static str {
        "rough-outcome"
    }
}
