//! Hand-written game trees.
//!
//! A `Script` spells out every position explicitly: inner nodes list their
//! labelled moves, leaves say how the game ended. The mover alternates
//! every ply, starting from the player given to `ScriptedGame::starting`.
//!
//! ```
//! use rust_minimax::core::PlayerId;
//! use rust_minimax::games::scripted::{Script, ScriptedGame};
//! use rust_minimax::rules::{Game, GameState};
//!
//! let game = ScriptedGame::new(Script::node([
//!     ("A", Script::ends()),
//!     ("B", Script::node([("C", Script::draw())])),
//! ]));
//!
//! let state = game.current_state();
//! assert_eq!(state.legal_moves(), vec!["A".to_string(), "B".to_string()]);
//!
//! let after_a = state.apply(&"A".to_string());
//! assert_eq!(game.winner(&after_a), Some(PlayerId::P1));
//! ```

use std::sync::Arc;

use crate::core::{GameError, PlayerId, Result};
use crate::rules::{canonical_move_text, Game, GameState};

/// How a leaf of a script ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The player who made the last move wins.
    LastMover,
    /// This player wins regardless of who moved last.
    Winner(PlayerId),
    /// Nobody wins.
    Draw,
}

/// A game tree written out by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Script {
    /// Finished position.
    Leaf(Ending),
    /// Unfinished position with labelled moves in order.
    Node(Vec<(String, Script)>),
}

impl Script {
    /// Unfinished position with the given moves.
    pub fn node<I, L>(branches: I) -> Self
    where
        I: IntoIterator<Item = (L, Script)>,
        L: Into<String>,
    {
        Script::Node(branches.into_iter().map(|(label, child)| (label.into(), child)).collect())
    }

    /// Finished position won by whoever moved last.
    pub fn ends() -> Self {
        Script::Leaf(Ending::LastMover)
    }

    /// Finished position won by `player`.
    pub fn win(player: PlayerId) -> Self {
        Script::Leaf(Ending::Winner(player))
    }

    /// Finished position with no winner.
    pub fn draw() -> Self {
        Script::Leaf(Ending::Draw)
    }

    /// Number of positions in the script.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Script::Leaf(_) => 1,
            Script::Node(branches) => 1 + branches.iter().map(|(_, c)| c.size()).sum::<usize>(),
        }
    }
}

/// Flattened position of a script.
#[derive(Debug)]
struct Position {
    ending: Ending,
    branches: Vec<(String, usize)>,
}

/// Flattened script shared by every state of one game.
#[derive(Debug)]
struct Positions(Vec<Position>);

impl Positions {
    fn flatten(script: &Script) -> Self {
        let mut positions = Vec::with_capacity(script.size());
        Self::push(script, &mut positions);
        Positions(positions)
    }

    fn push(script: &Script, out: &mut Vec<Position>) -> usize {
        let index = out.len();
        match script {
            Script::Leaf(ending) => out.push(Position {
                ending: *ending,
                branches: Vec::new(),
            }),
            Script::Node(branches) => {
                out.push(Position {
                    ending: Ending::LastMover,
                    branches: Vec::with_capacity(branches.len()),
                });
                for (label, child) in branches {
                    let child_index = Self::push(child, out);
                    out[index].branches.push((label.clone(), child_index));
                }
            }
        }
        index
    }
}

/// Position within a script.
#[derive(Clone)]
pub struct ScriptedState {
    positions: Arc<Positions>,
    index: usize,
    to_move: PlayerId,
}

impl ScriptedState {
    fn position(&self) -> &Position {
        &self.positions.0[self.index]
    }

    /// How this position ends, if it is finished.
    #[must_use]
    pub fn ending(&self) -> Option<Ending> {
        self.is_terminal().then(|| self.position().ending)
    }
}

impl std::fmt::Debug for ScriptedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedState")
            .field("index", &self.index)
            .field("to_move", &self.to_move)
            .finish()
    }
}

impl PartialEq for ScriptedState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.positions, &other.positions)
            && self.index == other.index
            && self.to_move == other.to_move
    }
}

impl Eq for ScriptedState {}

impl GameState for ScriptedState {
    type Move = String;

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.position().branches.is_empty()
    }

    fn legal_moves(&self) -> Vec<String> {
        self.position().branches.iter().map(|(label, _)| label.clone()).collect()
    }

    fn apply(&self, mv: &String) -> Self {
        let next = self
            .position()
            .branches
            .iter()
            .find(|(label, _)| label == mv)
            .map(|&(_, index)| index);
        match next {
            Some(index) => ScriptedState {
                positions: Arc::clone(&self.positions),
                index,
                to_move: self.to_move.other(),
            },
            None => panic!("illegal scripted move '{mv}'"),
        }
    }
}

/// A game played over a `Script`.
#[derive(Clone, Debug)]
pub struct ScriptedGame {
    current: ScriptedState,
}

impl ScriptedGame {
    /// Start `script` with P1 to move.
    pub fn new(script: Script) -> Self {
        Self::starting(PlayerId::P1, script)
    }

    /// Start `script` with `first` to move.
    pub fn starting(first: PlayerId, script: Script) -> Self {
        Self {
            current: ScriptedState {
                positions: Arc::new(Positions::flatten(&script)),
                index: 0,
                to_move: first,
            },
        }
    }
}

impl Game for ScriptedGame {
    type State = ScriptedState;

    fn current_state(&self) -> &ScriptedState {
        &self.current
    }

    fn set_current_state(&mut self, state: ScriptedState) {
        self.current = state;
    }

    fn parse_move(&self, text: &str) -> Result<String> {
        let canonical = canonical_move_text(text);
        if self.current.legal_moves().contains(&canonical) {
            Ok(canonical)
        } else {
            Err(GameError::UnknownMove { text: text.to_string() })
        }
    }

    fn winner(&self, state: &ScriptedState) -> Option<PlayerId> {
        match state.ending()? {
            Ending::LastMover => Some(state.current_player().other()),
            Ending::Winner(player) => Some(player),
            Ending::Draw => None,
        }
    }
}
