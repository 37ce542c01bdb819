//! Stonehenge positions and game.

use std::sync::Arc;

use im::Vector;

use crate::core::{GameError, PlayerId, Result};
use crate::rules::{canonical_move_text, Game, GameState};

use super::layout::{Family, Layout};

/// A cell label used as a move, e.g. `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellLabel(pub char);

impl std::fmt::Display for CellLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One Stonehenge position.
///
/// Cells and ley-line markers are persistent vectors, so a successor
/// shares all but the touched entries with its parent.
#[derive(Clone)]
pub struct StonehengeState {
    layout: Arc<Layout>,
    /// Owner of each cell.
    cells: Vector<Option<PlayerId>>,
    /// Owner of each ley-line marker, indexed like `Layout::lines`.
    claims: Vector<Option<PlayerId>>,
    to_move: PlayerId,
}

impl StonehengeState {
    /// Empty board of the given side with `first` to move.
    pub fn new(side: usize, first: PlayerId) -> Result<Self> {
        let layout = Layout::new(side)?;
        Ok(Self {
            cells: std::iter::repeat(None).take(layout.cell_count()).collect(),
            claims: std::iter::repeat(None).take(layout.line_count()).collect(),
            layout: Arc::new(layout),
            to_move: first,
        })
    }

    /// Board geometry.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.layout.side()
    }

    /// Owner of the cell at `index`.
    #[must_use]
    pub fn cell_owner(&self, index: usize) -> Option<PlayerId> {
        self.cells[index]
    }

    /// Owner of the cell labelled `label`, `None` if unclaimed or unknown.
    #[must_use]
    pub fn owner_of(&self, label: CellLabel) -> Option<PlayerId> {
        self.layout.cell(label.0).and_then(|cell| self.cells[cell])
    }

    /// Owner of a ley-line marker.
    #[must_use]
    pub fn line_owner(&self, family: Family, index: usize) -> Option<PlayerId> {
        self.claims[self.layout.line_id(family, index)]
    }

    /// Number of ley-lines `player` holds.
    #[must_use]
    pub fn lines_held(&self, player: PlayerId) -> usize {
        self.claims.iter().filter(|&&c| c == Some(player)).count()
    }

    fn holds_majority(&self, player: PlayerId) -> bool {
        2 * self.lines_held(player) >= self.layout.line_count()
    }

    /// Claim `cell` for the player to move and take any ley-line they now
    /// hold at least half of. Markers never change hands once taken.
    fn claim(&mut self, cell: usize) {
        let player = self.to_move;
        self.cells.set(cell, Some(player));

        for line_id in self.layout.lines_through(cell) {
            if self.claims[line_id].is_some() {
                continue;
            }
            let line = &self.layout.lines()[line_id];
            let held = line
                .cells
                .iter()
                .filter(|&&c| self.cells[c] == Some(player))
                .count();
            if 2 * held >= line.cells.len() {
                self.claims.set(line_id, Some(player));
            }
        }
    }
}

impl GameState for StonehengeState {
    type Move = CellLabel;

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        PlayerId::ALL.iter().any(|&p| self.holds_majority(p))
    }

    fn legal_moves(&self) -> Vec<CellLabel> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(cell, _)| CellLabel(self.layout.label(cell)))
            .collect()
    }

    fn apply(&self, mv: &CellLabel) -> Self {
        let cell = match self.layout.cell(mv.0) {
            Some(cell) if self.cells[cell].is_none() => cell,
            _ => panic!("illegal stonehenge move '{mv}'"),
        };

        let mut next = self.clone();
        next.claim(cell);
        next.to_move = self.to_move.other();
        next
    }
}

impl PartialEq for StonehengeState {
    fn eq(&self, other: &Self) -> bool {
        self.side() == other.side()
            && self.to_move == other.to_move
            && self.cells == other.cells
            && self.claims == other.claims
    }
}

impl Eq for StonehengeState {}

impl std::fmt::Debug for StonehengeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StonehengeState(side {}, {} to move, lines p1={} p2={})",
            self.side(),
            self.to_move,
            self.lines_held(PlayerId::P1),
            self.lines_held(PlayerId::P2)
        )
    }
}

/// A game of Stonehenge.
#[derive(Clone, Debug)]
pub struct StonehengeGame {
    current: StonehengeState,
}

impl StonehengeGame {
    /// New game on an empty board.
    pub fn new(side: usize, p1_starts: bool) -> Result<Self> {
        Ok(Self {
            current: StonehengeState::new(side, PlayerId::starting(p1_starts))?,
        })
    }

    /// Rules summary shown to human players.
    #[must_use]
    pub fn instructions(&self) -> &'static str {
        "Players take turns to claim cells. Holding at least half the cells \
         of a ley-line claims it; the first player to claim at least half of \
         all ley-lines wins."
    }
}

impl Game for StonehengeGame {
    type State = StonehengeState;

    fn current_state(&self) -> &StonehengeState {
        &self.current
    }

    fn set_current_state(&mut self, state: StonehengeState) {
        self.current = state;
    }

    fn parse_move(&self, text: &str) -> Result<CellLabel> {
        let canonical = canonical_move_text(text);
        let mut chars = canonical.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) if self.current.layout().cell(label).is_some() => Ok(CellLabel(label)),
            _ => Err(GameError::UnknownMove { text: text.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(moves: &[CellLabel]) -> String {
        moves.iter().map(|m| m.0).collect()
    }

    #[test]
    fn test_new_board() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap();

        assert_eq!(state.side(), 2);
        assert_eq!(state.current_player(), PlayerId::P1);
        assert!(!state.is_terminal());
        assert_eq!(labels(&state.legal_moves()), "ABCDEFG");
        assert_eq!(state.lines_held(PlayerId::P1), 0);
    }

    #[test]
    fn test_invalid_side() {
        assert!(matches!(
            StonehengeGame::new(6, true),
            Err(GameError::InvalidSideLength { side: 6, max: 5 })
        ));
    }

    #[test]
    fn test_side_one_any_move_wins() {
        let state = StonehengeState::new(1, PlayerId::P1).unwrap();
        assert_eq!(labels(&state.legal_moves()), "ABC");

        for mv in state.legal_moves() {
            let next = state.apply(&mv);
            assert!(next.is_terminal());
            assert!(next.legal_moves().is_empty());
            assert_eq!(next.lines_held(PlayerId::P1), 3);
        }
    }

    #[test]
    fn test_claiming_lines() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap();
        let next = state.apply(&CellLabel('A'));

        assert_eq!(next.current_player(), PlayerId::P2);
        assert_eq!(next.owner_of(CellLabel('A')), Some(PlayerId::P1));
        // AB, AC: one of two cells is half.
        assert_eq!(next.line_owner(Family::Horizontal, 0), Some(PlayerId::P1));
        assert_eq!(next.line_owner(Family::DownLeft, 0), Some(PlayerId::P1));
        // GDA: one of three is not.
        assert_eq!(next.line_owner(Family::UpLeft, 1), None);
        assert_eq!(labels(&next.legal_moves()), "BCDEFG");
    }

    #[test]
    fn test_markers_never_change_hands() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap();
        let state = state.apply(&CellLabel('A'));
        let state = state.apply(&CellLabel('B'));

        // P1 took AB with A; P2 now holds half of it too.
        assert_eq!(state.line_owner(Family::Horizontal, 0), Some(PlayerId::P1));
        // EB was still open, so B takes it.
        assert_eq!(state.line_owner(Family::UpLeft, 2), Some(PlayerId::P2));
        assert_eq!(state.lines_held(PlayerId::P1), 2);
        assert_eq!(state.lines_held(PlayerId::P2), 1);
    }

    #[test]
    fn test_apply_does_not_touch_parent() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap();
        let before = state.clone();
        let _ = state.apply(&CellLabel('D'));
        assert_eq!(state, before);
    }

    #[test]
    #[should_panic(expected = "illegal stonehenge move")]
    fn test_apply_claimed_cell_panics() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap();
        let _ = state.apply(&CellLabel('A')).apply(&CellLabel('A'));
    }

    #[test]
    fn test_parse_move() {
        let game = StonehengeGame::new(2, true).unwrap();
        assert_eq!(game.parse_move(" b\n").unwrap(), CellLabel('B'));
        assert!(matches!(game.parse_move("Z"), Err(GameError::UnknownMove { .. })));
        assert!(game.parse_move("AB").is_err());
        assert!(game.parse_move("").is_err());
    }

    #[test]
    fn test_play_and_winner() {
        let mut game = StonehengeGame::new(1, false).unwrap();
        assert_eq!(game.current_state().current_player(), PlayerId::P2);

        let mv = game.parse_move("c").unwrap();
        game.play(&mv).unwrap();

        assert!(game.is_over(game.current_state()));
        assert!(game.is_winner(PlayerId::P2));
        assert!(!game.is_winner(PlayerId::P1));
        assert!(matches!(game.play(&CellLabel('A')), Err(GameError::IllegalMove { .. })));
    }
}
