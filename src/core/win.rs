//! Win detection over the fixed set of eight lines.

use super::board::Board;
use super::mark::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines in evaluation order: rows, columns, then diagonals.
///
/// When a board holds more than one completed line, the earliest line in
/// this table is the one reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the mark that owns it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Win {
    pub winner: Mark,
    pub line: [usize; 3],
}

impl Win {
    /// True if `index` is one of the three winning cells.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Find the first completed line on `board`.
///
/// Total over every combination of cells, legal or not. Returns `None` for
/// the empty board and for drawn boards.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{detect, Board, Mark};
///
/// let board = [0, 1, 2]
///     .into_iter()
///     .try_fold(Board::empty(), |b, i| b.with_mark(i, Mark::A))
///     .unwrap();
///
/// let win = detect(&board).unwrap();
/// assert_eq!(win.winner, Mark::A);
/// assert_eq!(win.line, [0, 1, 2]);
/// assert!(detect(&Board::empty()).is_none());
/// ```
#[instrument(level = "trace")]
pub fn detect(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let winner = board[a].mark()?;
        (board[a] == board[b] && board[a] == board[c]).then_some(Win { winner, line })
    })
}
