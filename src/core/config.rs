//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration shared by the minimax engines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seed for the random tie-break.
    /// Same seed produces the same choice among equally good moves.
    pub seed: u64,

    /// Initial node capacity of the iterative engine's arena.
    pub tree_capacity: usize,

    /// Emit a `debug` log record with search statistics after each search.
    pub log_stats: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tree_capacity: 1024,
            log_stats: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom arena capacity.
    pub fn with_tree_capacity(mut self, capacity: usize) -> Self {
        self.tree_capacity = capacity;
        self
    }

    /// Enable or disable the per-search statistics record.
    pub fn with_log_stats(mut self, enabled: bool) -> Self {
        self.log_stats = enabled;
        self
    }
}
