//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The whole
//! tree of a search is alive at once, so its size is the size of the game
//! tree below the root.

use super::node::{NodeId, SearchNode};
use crate::rules::GameState;

/// Arena-based game tree materialized by the iterative engine.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    /// All nodes in the tree. Index 0 is the root once reset.
    nodes: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Create an empty tree with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, root_state: S) {
        self.nodes.clear();
        self.nodes.push(SearchNode::root(root_state));
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get the root node, if the tree has been reset at least once.
    #[must_use]
    pub fn root_node(&self) -> Option<&SearchNode<S>> {
        self.nodes.first()
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    ///
    /// Panics once the arena would hand out `NodeId::NONE`.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = arena_id(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (arena_id(i), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let expanded: Vec<_> = self.nodes.iter().filter_map(|n| n.children.as_ref()).collect();
        let total_children: usize = expanded.iter().map(|c| c.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            expanded_count: expanded.len(),
            total_children,
            resolved_count: self.nodes.iter().filter(|n| n.score().is_some()).count(),
        }
    }
}

/// Id of the node stored at `index`.
fn arena_id(index: usize) -> NodeId {
    match u32::try_from(index) {
        Ok(raw) if raw != NodeId::NONE.0 => NodeId::new(raw),
        _ => panic!("search tree outgrew NodeId: {index} nodes"),
    }
}

/// Statistics about the search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Nodes with a children list.
    pub expanded_count: usize,

    /// Sum of children over expanded nodes.
    pub total_children: usize,

    /// Nodes carrying a resolved score.
    pub resolved_count: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.expanded_count as f64
        }
    }
}
