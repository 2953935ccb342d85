//! Fixed 3×3 board snapshots.

use super::mark::{Cell, Mark, MarkSymbols};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// Immutable snapshot of the nine cells, in row-major order.
///
/// Index `i` lives at row `i / 3`, column `i % 3`. Placing a mark returns a
/// new board; snapshots stored in history are never mutated.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, Cell, Mark};
///
/// let empty = Board::empty();
/// let next = empty.with_mark(4, Mark::A).unwrap();
///
/// assert_eq!(empty.get(4), Some(Cell::Empty));
/// assert_eq!(next.get(4), Some(Cell::Marked(Mark::A)));
/// assert_eq!(next.get(9), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Board with `mark` placed at `index`.
    ///
    /// Returns `None` if the index is off the board. Occupancy is not checked
    /// here; move legality belongs to the session.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut cells = self.cells;
        *cells.get_mut(index)? = Cell::Marked(mark);
        Some(Self { cells })
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// True when no cell is empty.
    #[tracing::instrument(level = "trace")]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Indices at which `self` and `other` differ, ascending.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&i| self.cells[i] != other.cells[i])
            .collect()
    }

    /// Render three rows of symbols, empty cells as `.`.
    pub fn render(&self, symbols: &MarkSymbols) -> String {
        self.cells
            .chunks(SIDE)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.mark() {
                        Some(mark) => symbols.symbol(mark),
                        None => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_nine_empty_cells() {
        let board = Board::empty();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn with_mark_is_pure() {
        let board = Board::empty();
        let next = board.with_mark(0, Mark::A).unwrap();

        assert!(board.is_empty());
        assert_eq!(next[0], Cell::Marked(Mark::A));
        assert_eq!(next.diff(&board), vec![0]);
    }

    #[test]
    fn with_mark_rejects_off_board_index() {
        assert_eq!(Board::empty().with_mark(9, Mark::B), None);
    }

    #[test]
    fn count_tracks_each_mark() {
        let board = Board::empty()
            .with_mark(0, Mark::A)
            .and_then(|b| b.with_mark(4, Mark::B))
            .and_then(|b| b.with_mark(8, Mark::A))
            .unwrap();

        assert_eq!(board.count(Mark::A), 2);
        assert_eq!(board.count(Mark::B), 1);
        assert_eq!(board.empty_cells().len(), 6);
    }

    #[test]
    fn full_board_is_full() {
        let board = Board::from_cells([Cell::Marked(Mark::B); CELL_COUNT]);
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn render_draws_rows() {
        let board = Board::empty()
            .with_mark(0, Mark::A)
            .and_then(|b| b.with_mark(5, Mark::B))
            .unwrap();

        assert_eq!(board.render(&MarkSymbols::default()), "X..\n..O\n...");
        assert_eq!(board.render(&MarkSymbols::new('#', '@')), "#..\n..@\n...");
    }
}
