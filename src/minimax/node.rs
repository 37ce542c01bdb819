//! Search tree nodes for the iterative engine.
//!
//! Uses arena-based allocation with index references (NodeId), so parents
//! and children refer to each other without ownership cycles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Score;
use crate::rules::GameState;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Child list. SmallVec covers the typical branching factor inline.
pub type Children = SmallVec<[NodeId; 8]>;

/// Where a node is in the post-order walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Not yet popped from the work-stack.
    Unexpanded,
    /// Children allocated and pushed; waiting for them to resolve.
    AwaitingChildren,
    /// Exact score known.
    Resolved(Score),
}

/// A node of the materialized game tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// Position at this node.
    pub state: S,

    /// Move that produced this node from its parent (None for root).
    pub move_taken: Option<S::Move>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Children, one per legal move in move order.
    /// `None` until expanded; terminal nodes are never expanded.
    pub children: Option<Children>,

    /// Post-order status.
    pub status: NodeStatus,
}

impl<S: GameState> SearchNode<S> {
    /// Create an unexpanded node.
    pub fn new(state: S, move_taken: Option<S::Move>, parent: NodeId, depth: u32) -> Self {
        Self {
            state,
            move_taken,
            parent,
            depth,
            children: None,
            status: NodeStatus::Unexpanded,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, NodeId::NONE, 0)
    }

    /// Resolved score, if any.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self.status {
            NodeStatus::Resolved(score) => Some(score),
            _ => None,
        }
    }

    /// Child IDs in move order (empty if unexpanded).
    pub fn child_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::scripted::{Script, ScriptedGame};
    use crate::rules::Game;

    fn state() -> crate::games::scripted::ScriptedState {
        ScriptedGame::new(Script::node([("A", Script::ends())]))
            .current_state()
            .clone()
    }

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id, NodeId(5));
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = SearchNode::root(state());

        assert!(node.parent.is_none());
        assert!(node.move_taken.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.status, NodeStatus::Unexpanded);
        assert!(node.children.is_none());
        assert_eq!(node.score(), None);
        assert_eq!(node.child_ids().count(), 0);
    }

    #[test]
    fn test_node_score_only_when_resolved() {
        let mut node = SearchNode::root(state());

        node.children = Some(Children::from_slice(&[NodeId::new(1)]));
        node.status = NodeStatus::AwaitingChildren;
        assert!(node.children.is_some());
        assert_eq!(node.score(), None);
        assert_eq!(node.child_ids().collect::<Vec<_>>(), vec![NodeId::new(1)]);

        node.status = NodeStatus::Resolved(Score::Draw);
        assert_eq!(node.score(), Some(Score::Draw));
    }

    #[test]
    fn test_status_serialization() {
        let status = NodeStatus::Resolved(Score::Win);
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: NodeStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
