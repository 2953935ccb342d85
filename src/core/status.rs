//! Game status derived from a board snapshot.

use super::board::Board;
use super::mark::{Mark, MarkSymbols};
use super::win::{detect, Win};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where a game stands on a given board.
///
/// Status is always recomputed from the board; it is never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    /// A line was completed.
    Won(Win),
    /// Every cell is filled and no line was completed.
    Draw,
    /// The game continues with `next` to move.
    InProgress { next: Mark },
}

impl Status {
    /// Check if no further moves can be made.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Won(win) => Some(win.winner),
            _ => None,
        }
    }

    /// Human-readable status line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_timeline::core::{Mark, MarkSymbols, Status};
    ///
    /// let status = Status::InProgress { next: Mark::B };
    /// assert_eq!(status.describe(&MarkSymbols::default()), "Next player: O");
    /// assert_eq!(Status::Draw.describe(&MarkSymbols::default()), "Draw!");
    /// ```
    pub fn describe(&self, symbols: &MarkSymbols) -> String {
        match self {
            Self::Won(win) => format!("Winner: {}", symbols.symbol(win.winner)),
            Self::Draw => "Draw!".to_string(),
            Self::InProgress { next } => format!("Next player: {}", symbols.symbol(*next)),
        }
    }
}

/// Derive the status of `board`, given the mark that would move next.
///
/// A win takes precedence over a full board.
#[instrument(level = "trace")]
pub fn status(board: &Board, next: Mark) -> Status {
    if let Some(win) = detect(board) {
        Status::Won(win)
    } else if board.is_full() {
        Status::Draw
    } else {
        Status::InProgress { next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mark::Cell;

    #[test]
    fn empty_board_is_in_progress() {
        let s = status(&Board::empty(), Mark::A);
        assert_eq!(s, Status::InProgress { next: Mark::A });
        assert!(!s.is_final());
        assert_eq!(s.winner(), None);
    }

    #[test]
    fn full_board_with_a_line_is_a_win_not_a_draw() {
        let board = Board::from_cells([Cell::Marked(Mark::B); 9]);
        let s = status(&board, Mark::A);

        assert_eq!(s.winner(), Some(Mark::B));
        assert!(s.is_final());
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X X O / O O X / X O X
        let cells = [
            Mark::A, Mark::A, Mark::B, Mark::B, Mark::B, Mark::A, Mark::A, Mark::B, Mark::A,
        ]
        .map(Cell::Marked);
        let s = status(&Board::from_cells(cells), Mark::B);

        assert_eq!(s, Status::Draw);
        assert!(s.is_final());
    }

    #[test]
    fn describe_uses_configured_symbols() {
        let symbols = MarkSymbols::new('+', '-');
        let won = Status::Won(Win {
            winner: Mark::A,
            line: [0, 1, 2],
        });

        assert_eq!(won.describe(&symbols), "Winner: +");
        assert_eq!(
            Status::InProgress { next: Mark::B }.describe(&symbols),
            "Next player: -"
        );
    }
}
