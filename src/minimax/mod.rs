//! Exact minimax search for rust-minimax.
//!
//! ## Overview
//!
//! Two engines compute the same game-theoretic value for every root move:
//!
//! - **RecursiveMinimax**: depth-first recursion over explicit state
//!   arguments; holds only the active path.
//! - **IterativeMinimax**: explicit work-stack over an arena tree; the whole
//!   tree is materialized.
//!
//! They may differ in *which* optimal move they return (uniform random vs.
//! last maximal), never in its score. A third chooser, **RoughOutcome**,
//! uses a one or two ply heuristic instead of full search.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::core::SearchConfig;
//! use rust_minimax::games::scripted::{Script, ScriptedGame, ScriptedState};
//! use rust_minimax::minimax::{IterativeMinimax, RecursiveMinimax, Strategy};
//!
//! let game = ScriptedGame::new(Script::node([
//!     ("A", Script::draw()),
//!     ("B", Script::ends()),
//! ]));
//!
//! let mut recursive = RecursiveMinimax::new(SearchConfig::default());
//! let mut iterative = IterativeMinimax::<ScriptedState>::new(SearchConfig::default());
//!
//! assert_eq!(recursive.choose_move(&game).as_deref(), Some("B"));
//! assert_eq!(iterative.choose_move(&game).as_deref(), Some("B"));
//! ```
//!
//! ## Custom Tie-Breaks
//!
//! ```rust
//! use rust_minimax::core::SearchConfig;
//! use rust_minimax::games::scripted::{Script, ScriptedGame};
//! use rust_minimax::minimax::{FirstMaximal, RecursiveMinimax, Strategy};
//!
//! let game = ScriptedGame::new(Script::node([
//!     ("A", Script::draw()),
//!     ("B", Script::draw()),
//! ]));
//!
//! let mut engine = RecursiveMinimax::new(SearchConfig::default()).with_tie_break(FirstMaximal);
//! assert_eq!(engine.choose_move(&game).as_deref(), Some("A"));
//! ```

pub mod iterative;
pub mod node;
pub mod policy;
pub mod recursive;
pub mod rough;
pub mod scoring;
pub mod stats;
pub mod strategy;
pub mod tree;

// Re-export main types
pub use iterative::IterativeMinimax;
pub use node::{NodeId, NodeStatus, SearchNode};
pub use policy::{FirstMaximal, LastMaximal, TieBreak, UniformRandom};
pub use recursive::RecursiveMinimax;
pub use rough::{rough_outcome, RoughOutcome};
pub use stats::SearchStats;
pub use strategy::Strategy;
pub use tree::{SearchTree, TreeStats};
