//! Tie-break policies for choosing among equally scored moves.
//!
//! Policies are trait-based so engines can be made reproducible in tests:
//! - `UniformRandom`: uniform among all maximal moves (recursive default)
//! - `LastMaximal`: last maximal move in move order (iterative default)
//! - `FirstMaximal`: first maximal move in move order (rough-outcome default)

use crate::core::{Score, SearchRng};

/// Policy for selecting one move among those with the best score.
pub trait TieBreak: Send {
    /// Select an index into `scores` attaining the maximum.
    ///
    /// Returns `None` only when `scores` is empty.
    fn select(&mut self, scores: &[Score]) -> Option<usize>;
}

/// Indices of all entries equal to the maximum score.
#[must_use]
pub fn maximal_indices(scores: &[Score]) -> Vec<usize> {
    let Some(&best) = scores.iter().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|(_, &s)| s == best)
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// Uniform Random
// =============================================================================

/// Uniform choice among every maximal move.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: SearchRng,
}

impl UniformRandom {
    /// Create a policy with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: SearchRng::new(seed) }
    }

    /// Create a policy drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: SearchRng) -> Self {
        Self { rng }
    }
}

impl TieBreak for UniformRandom {
    fn select(&mut self, scores: &[Score]) -> Option<usize> {
        let candidates = maximal_indices(scores);
        self.rng.choose(&candidates).copied()
    }
}

// =============================================================================
// Deterministic Policies
// =============================================================================

/// First maximal move in move order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMaximal;

impl TieBreak for FirstMaximal {
    fn select(&mut self, scores: &[Score]) -> Option<usize> {
        let mut best: Option<(usize, Score)> = None;
        for (i, &score) in scores.iter().enumerate() {
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((i, score));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Running best with `>=`: the last maximal move in move order wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastMaximal;

impl TieBreak for LastMaximal {
    fn select(&mut self, scores: &[Score]) -> Option<usize> {
        let (&first, rest) = scores.split_first()?;
        let mut best = (0, first);
        for (i, &score) in rest.iter().enumerate() {
            if score >= best.1 {
                best = (i + 1, score);
            }
        }
        Some(best.0)
    }
}
