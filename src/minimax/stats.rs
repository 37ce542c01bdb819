//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions scored (recursive) or nodes allocated (iterative).
    pub nodes_visited: u64,

    /// Finished positions reached.
    pub terminal_nodes: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Largest frontier held at once: the recursion depth for the
    /// recursive engine, the work-stack length for the iterative one.
    pub peak_frontier: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a visit to a position at `depth` plies below the root.
    pub fn record_visit(&mut self, depth: u32) {
        self.nodes_visited += 1;
        self.record_depth(depth);
    }

    /// Record that the search reached `depth` plies below the root.
    pub fn record_depth(&mut self, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record the current frontier size.
    pub fn record_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes ({} terminal), depth {}, frontier {}, {}us ({:.0} nodes/s)",
            self.nodes_visited,
            self.terminal_nodes,
            self.max_depth,
            self.peak_frontier,
            self.time_us,
            self.nodes_per_second()
        )
    }
}
