//! Iterative minimax engine.
//!
//! Simulates the recursive post-order walk with an explicit LIFO
//! work-stack over an arena tree:
//!
//! 1. Pop a node.
//! 2. `Unexpanded` and finished: resolve from the winner.
//! 3. `Unexpanded` and unfinished: allocate one child per legal move, push
//!    the node back beneath its children, then push the children.
//! 4. `AwaitingChildren`: every child is resolved, fold them (max/min).
//!
//! The whole tree stays materialized until the next search.

use std::time::Instant;

use log::{debug, trace};

use crate::core::{PlayerId, Score, SearchConfig};
use crate::rules::{Game, GameState, MoveOf};

use super::node::{Children, NodeId, NodeStatus, SearchNode};
use super::policy::{LastMaximal, TieBreak};
use super::scoring::{fold, terminal_score};
use super::stats::SearchStats;
use super::strategy::Strategy;
use super::tree::SearchTree;

/// Explicit-stack minimax over a materialized tree.
pub struct IterativeMinimax<S: GameState> {
    /// Search configuration.
    config: SearchConfig,

    /// Choice among equally scored root children.
    tie_break: Box<dyn TieBreak>,

    /// Tree of the last search.
    tree: SearchTree<S>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<S: GameState> IterativeMinimax<S> {
    /// Create an engine with the last-maximal tie-break.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            tree: SearchTree::with_capacity(config.tree_capacity),
            tie_break: Box::new(LastMaximal),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom tie-break policy.
    pub fn with_tie_break<T: TieBreak + 'static>(mut self, tie_break: T) -> Self {
        self.tie_break = Box::new(tie_break);
        self
    }

    /// The tree materialized by the last search.
    #[must_use]
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
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
    pub fn evaluate<G: Game<State = S>>(&mut self, game: &G) -> Option<Vec<(S::Move, Score)>> {
        let start = Instant::now();
        self.stats.reset();

        let root_state = game.current_state();
        if game.is_over(root_state) {
            return None;
        }
        let this_player = root_state.current_player();

        self.tree.reset(root_state.clone());
        self.run(game, this_player);

        let root = self.tree.get(self.tree.root());
        let scored = root
            .child_ids()
            .filter_map(|id| {
                let child = self.tree.get(id);
                Some((child.move_taken.clone()?, child.score()?))
            })
            .collect();

        self.stats.nodes_visited = self.tree.len() as u64;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        if self.config.log_stats {
            debug!(
                "iterative minimax for {}: {} ({:.2} children per node)",
                this_player,
                self.stats,
                self.tree.stats().branching_factor()
            );
        }
        Some(scored)
    }

    /// Drain the work-stack until every node is resolved.
    fn run<G: Game<State = S>>(&mut self, game: &G, this_player: PlayerId) {
        let mut stack = vec![self.tree.root()];

        while let Some(id) = stack.pop() {
            self.stats.record_frontier(stack.len() + 1);

            let status = self.tree.get(id).status;
            match status {
                NodeStatus::Unexpanded => {
                    let node = self.tree.get(id);
                    if game.is_over(&node.state) {
                        let score = terminal_score(game, &node.state, this_player);
                        self.stats.terminal_nodes += 1;
                        self.tree.get_mut(id).status = NodeStatus::Resolved(score);
                        continue;
                    }

                    let depth = node.depth + 1;
                    self.stats.record_depth(depth);
                    let successors: Vec<_> = node
                        .state
                        .legal_moves()
                        .into_iter()
                        .map(|mv| {
                            let next = node.state.apply(&mv);
                            (mv, next)
                        })
                        .collect();

                    let children: Children = successors
                        .into_iter()
                        .map(|(mv, next)| self.tree.alloc(SearchNode::new(next, Some(mv), id, depth)))
                        .collect();

                    stack.push(id);
                    stack.extend(children.iter().copied());

                    let node = self.tree.get_mut(id);
                    node.children = Some(children);
                    node.status = NodeStatus::AwaitingChildren;
                }
                NodeStatus::AwaitingChildren => {
                    let node = self.tree.get(id);
                    let maximizing = node.state.current_player() == this_player;
                    let score = fold(
                        maximizing,
                        node.child_ids().filter_map(|child| self.tree.get(child).score()),
                    );
                    self.tree.get_mut(id).status = NodeStatus::Resolved(score);
                }
                NodeStatus::Resolved(_) => {}
            }
        }
    }

    /// Root child picked by the tie-break, if the last search had any.
    fn select_root_child(&mut self) -> Option<NodeId> {
        let root = self.tree.root_node()?;
        let children: Vec<NodeId> = root.child_ids().collect();
        let scores: Vec<Score> = children
            .iter()
            .filter_map(|&id| self.tree.get(id).score())
            .collect();
        let idx = self.tie_break.select(&scores)?;
        children.get(idx).copied()
    }
}

impl<S: GameState> Default for IterativeMinimax<S> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax<G::State> {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let scored = self.evaluate(game)?;
        for (mv, score) in &scored {
            trace!("  {} -> {}", mv, score);
        }

        let chosen = self.select_root_child()?;
        self.tree.get(chosen).move_taken.clone()
    }

    fn name(&self) -> &'static str {
        "minimax-iterative"
    }
}
