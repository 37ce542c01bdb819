//! Recursive minimax engine.
//!
//! Depth-first exact evaluation. Each call scores every root move by full
//! backward induction and picks among the best with the tie-break policy
//! (uniform random by default). Only the active path is alive at once.

use std::time::Instant;

use log::{debug, trace};

use crate::core::{PlayerId, Score, SearchConfig};
use crate::rules::{Game, GameState, MoveOf};

use super::policy::{TieBreak, UniformRandom};
use super::scoring::{fold, terminal_score};
use super::stats::SearchStats;
use super::strategy::Strategy;

/// Depth-first minimax over explicit state arguments.
pub struct RecursiveMinimax {
    /// Search configuration.
    config: SearchConfig,

    /// Choice among equally scored root moves.
    tie_break: Box<dyn TieBreak>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl RecursiveMinimax {
    /// Create an engine with a uniform-random tie-break seeded from `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            tie_break: Box::new(UniformRandom::new(config.seed)),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom tie-break policy.
    pub fn with_tie_break<T: TieBreak + 'static>(mut self, tie_break: T) -> Self {
        self.tie_break = Box::new(tie_break);
        self
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Exact score of every root move, in move order, for the player to
    /// move at the root.
    ///
    /// Returns `None` if the current position is finished.
    pub fn evaluate<G: Game>(&mut self, game: &G) -> Option<Vec<(MoveOf<G>, Score)>> {
        let start = Instant::now();
        self.stats.reset();

        let root = game.current_state();
        if game.is_over(root) {
            return None;
        }
        let this_player = root.current_player();

        self.stats.record_visit(0);
        self.stats.record_frontier(1);
        let scored: Vec<_> = root
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let child = root.apply(&mv);
                let score = self.score(game, &child, this_player, 1);
                (mv, score)
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if self.config.log_stats {
            debug!("recursive minimax for {}: {}", this_player, self.stats);
        }
        Some(scored)
    }

    /// Exact score of `state` for `this_player`.
    fn score<G: Game>(&mut self, game: &G, state: &G::State, this_player: PlayerId, depth: u32) -> Score {
        self.stats.record_visit(depth);
        self.stats.record_frontier(depth as usize + 1);

        if game.is_over(state) {
            self.stats.terminal_nodes += 1;
            return terminal_score(game, state, this_player);
        }

        let maximizing = state.current_player() == this_player;
        let moves = state.legal_moves();
        fold(
            maximizing,
            moves
                .iter()
                .map(|mv| self.score(game, &state.apply(mv), this_player, depth + 1)),
        )
    }
}

impl Default for RecursiveMinimax {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let scored = self.evaluate(game)?;
        for (mv, score) in &scored {
            trace!("  {} -> {}", mv, score);
        }

        let scores: Vec<Score> = scored.iter().map(|(_, s)| *s).collect();
        let idx = self.tie_break.select(&scores)?;
        scored.into_iter().nth(idx).map(|(mv, _)| mv)
    }

    fn name(&self) -> &'static str {
        "minimax-recursive"
    }
}
