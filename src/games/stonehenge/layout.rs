//! Board geometry: cells, labels and ley-lines.
//!
//! A board of side `n` has `n + 1` rows. Row `r < n` holds `r + 2` cells,
//! the last row holds `n`. Cells are labelled `A`, `B`, ... row by row.
//!
//! Placing rows in an `(n + 1) x (n + 1)` grid, right-aligned for rows
//! `0..n` and left-aligned for the last row, gives each cell a column `c`:
//!
//! - horizontal ley-line `r`: the cells of row `r`
//! - down-left ley-line `r + c - (n - 1)`: cells on that anti-diagonal
//! - up-left ley-line `c`: cells in grid column `c`, bottom to top
//!
//! Each family has `n + 1` ley-lines.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Largest supported side length (labels run out after `Z`).
pub const MAX_SIDE: usize = 5;

/// Direction of a ley-line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Horizontal,
    DownLeft,
    UpLeft,
}

impl Family {
    /// All families in storage order.
    pub const ALL: [Family; 3] = [Family::Horizontal, Family::DownLeft, Family::UpLeft];

    const fn offset(self) -> usize {
        match self {
            Family::Horizontal => 0,
            Family::DownLeft => 1,
            Family::UpLeft => 2,
        }
    }
}

/// One ley-line: a set of cells claimed together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeyLine {
    pub family: Family,
    pub index: usize,
    /// Cell indices on this line.
    pub cells: Vec<usize>,
}

/// Static geometry of a board, shared by all its positions.
#[derive(Debug)]
pub struct Layout {
    side: usize,
    /// Cell indices of each row.
    rows: Vec<Vec<usize>>,
    labels: Vec<char>,
    by_label: FxHashMap<char, usize>,
    /// Horizontal lines, then down-left, then up-left.
    lines: Vec<LeyLine>,
    /// Line index per family for each cell.
    cell_lines: Vec<[usize; 3]>,
}

impl Layout {
    /// Build the geometry for a board of the given side length.
    pub fn new(side: usize) -> Result<Self> {
        if !(1..=MAX_SIDE).contains(&side) {
            return Err(GameError::InvalidSideLength { side, max: MAX_SIDE });
        }

        let per_family = side + 1;
        let mut rows = Vec::with_capacity(per_family);
        let mut coords = Vec::new();
        for r in 0..=side {
            let (len, shift) = if r < side { (r + 2, side - 1 - r) } else { (side, 0) };
            let start = coords.len();
            for k in 0..len {
                coords.push((r, k + shift));
            }
            rows.push((start..coords.len()).collect::<Vec<_>>());
        }

        let labels: Vec<char> = (0..coords.len()).map(|i| (b'A' + i as u8) as char).collect();
        let by_label = labels.iter().enumerate().map(|(i, &l)| (l, i)).collect();

        let mut lines: Vec<LeyLine> = Family::ALL
            .iter()
            .flat_map(|&family| {
                (0..per_family).map(move |index| LeyLine {
                    family,
                    index,
                    cells: Vec::new(),
                })
            })
            .collect();

        let mut cell_lines = Vec::with_capacity(coords.len());
        for (cell, &(r, c)) in coords.iter().enumerate() {
            let ids = [
                r,
                per_family + r + c + 1 - side,
                2 * per_family + c,
            ];
            for &id in &ids {
                lines[id].cells.push(cell);
            }
            cell_lines.push(ids);
        }

        // Up-left lines read bottom to top.
        for line in &mut lines[2 * per_family..] {
            line.cells.reverse();
        }

        Ok(Self {
            side,
            rows,
            labels,
            by_label,
            lines,
            cell_lines,
        })
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of ley-lines over all families.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cell indices of each row, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Label of a cell.
    #[must_use]
    pub fn label(&self, cell: usize) -> char {
        self.labels[cell]
    }

    /// Cell carrying `label`.
    #[must_use]
    pub fn cell(&self, label: char) -> Option<usize> {
        self.by_label.get(&label).copied()
    }

    /// All ley-lines.
    #[must_use]
    pub fn lines(&self) -> &[LeyLine] {
        &self.lines
    }

    /// Position of a ley-line in `lines()`.
    #[must_use]
    pub fn line_id(&self, family: Family, index: usize) -> usize {
        family.offset() * (self.side + 1) + index
    }

    /// The three ley-lines through a cell.
    #[must_use]
    pub fn lines_through(&self, cell: usize) -> [usize; 3] {
        self.cell_lines[cell]
    }
}
