//! 3x3 board representation and win detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Whose mark occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Player,
    Opponent,
}

impl Mark {
    /// The other side.
    #[must_use]
    pub fn other(self) -> Mark {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Immutable 9-cell board. `Copy`, so the search recurses over cheap
/// copies instead of mutating and undoing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at a cell index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Whether a cell index is on the board and unoccupied.
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        index < 9 && self.cells[index].is_none()
    }

    /// Copy of this board with one more mark placed.
    #[must_use]
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Board {
        self.cells[index] = Some(mark);
        self
    }

    /// The side holding a completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Indices of unoccupied cells, ascending.
    #[must_use]
    pub fn free_cells(&self) -> SmallVec<[usize; 9]> {
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// Number of cells holding the given mark.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// All 9 cells, row-major.
    #[must_use]
    pub fn cells(&self) -> [Option<Mark>; 9] {
        self.cells
    }
}
