//! Text rendering of a Stonehenge board.
//!
//! Side 2, nothing claimed:
//!
//! ```text
//!        @   @
//!       /   /
//!  @ - A - B   @
//!     / \ / \ /
//! @ - C - D - E
//!      \ / \ / \
//!  @ - F - G   @
//!       \   \
//!        @   @
//! ```
//!
//! `@` is an unclaimed ley-line marker; claimed markers and cells show the
//! owner's mark (`1` or `2`).

use std::fmt;

use crate::core::PlayerId;

use super::game::StonehengeState;
use super::layout::Family;

/// Character grid that grows as it is written to.
#[derive(Default)]
struct Canvas {
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn put(&mut self, row: usize, col: usize, ch: char) {
        if self.lines.len() <= row {
            self.lines.resize_with(row + 1, Vec::new);
        }
        let line = &mut self.lines[row];
        if line.len() <= col {
            line.resize(col + 1, ' ');
        }
        line[col] = ch;
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i, ch);
        }
    }
}

fn marker(owner: Option<PlayerId>) -> char {
    owner.map_or('@', PlayerId::mark)
}

impl fmt::Display for StonehengeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout();
        let side = layout.side();
        let rows = layout.rows();

        // Column of the horizontal marker for each row.
        let indent = |r: usize| if r < side { side - 1 - r } else { 1 };
        let cell_x = |r: usize, k: usize| indent(r) + 4 + 4 * k;
        // Canvas row of board row r: two header lines, then a row and a
        // connector line per board row.
        let line_of = |r: usize| 2 + 2 * r;

        let mut canvas = Canvas::default();

        for k in 0..rows[0].len() {
            let x = cell_x(0, k);
            canvas.put(0, x + 2, marker(self.line_owner(Family::DownLeft, k)));
            canvas.put(1, x + 1, '/');
        }

        for (r, cells) in rows.iter().enumerate() {
            let y = line_of(r);
            canvas.put(y, indent(r), marker(self.line_owner(Family::Horizontal, r)));
            for (k, &cell) in cells.iter().enumerate() {
                let x = cell_x(r, k);
                let ch = self.cell_owner(cell).map_or(layout.label(cell), PlayerId::mark);
                canvas.put_str(y, x - 2, "- ");
                canvas.put(y, x, ch);
            }

            let last_x = cell_x(r, cells.len() - 1);
            if r + 2 <= side {
                canvas.put(y, last_x + 4, marker(self.line_owner(Family::DownLeft, r + 2)));
            }
            if r == side {
                canvas.put(y, last_x + 4, marker(self.line_owner(Family::UpLeft, side)));
                continue;
            }

            // Connector to the next row.
            let below = y + 1;
            if r + 1 < side {
                for k in 0..cells.len() {
                    let x = cell_x(r, k);
                    canvas.put(below, x - 1, '/');
                    canvas.put(below, x + 1, '\\');
                }
                canvas.put(below, last_x + 3, '/');
            } else {
                for k in 0..cells.len() {
                    let x = cell_x(r, k);
                    canvas.put(below, x + 1, '\\');
                    if k + 1 < cells.len() {
                        canvas.put(below, x + 3, '/');
                    }
                }
            }
        }

        let bottom = line_of(side) + 1;
        for k in 0..rows[side].len() {
            let x = cell_x(side, k);
            canvas.put(bottom, x + 1, '\\');
            canvas.put(bottom + 1, x + 2, marker(self.line_owner(Family::UpLeft, k)));
        }

        let text: Vec<String> = canvas
            .lines
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect();
        write!(f, "{}", text.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::PlayerId;
    use crate::games::stonehenge::{CellLabel, StonehengeState};
    use crate::rules::GameState;

    #[test]
    fn test_render_side_two() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap();
        let text = state.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "       @   @");
        assert_eq!(lines[2], " @ - A - B   @");
        assert_eq!(lines[3], "    / \\ / \\ /");
        assert_eq!(lines[4], "@ - C - D - E");
        assert_eq!(lines[6], " @ - F - G   @");
        assert_eq!(lines[8], "       @   @");
    }

    #[test]
    fn test_render_claims() {
        let state = StonehengeState::new(2, PlayerId::P1).unwrap().apply(&CellLabel('A'));
        let text = state.to_string();
        let lines: Vec<&str> = text.lines().collect();

        // A is P1's, and so are the AB and AC markers.
        assert_eq!(lines[0], "       1   @");
        assert_eq!(lines[2], " 1 - 1 - B   @");
    }

    #[test]
    fn test_render_every_label_once() {
        for side in 1..=5 {
            let state = StonehengeState::new(side, PlayerId::P1).unwrap();
            let text = state.to_string();
            for cell in 0..state.layout().cell_count() {
                let label = state.layout().label(cell);
                assert_eq!(text.matches(label).count(), 1, "side {side}, label {label}");
            }
            let markers = text.matches('@').count();
            assert_eq!(markers, state.layout().line_count());
        }
    }
}
