//! Guard predicates for move legality.
//!
//! Guards are pure checks evaluated before a move is recorded. They run in a
//! fixed order and the first one that fails decides the rejection.

use super::error::Rejected;
use crate::core::{detect, Board};

/// A single precondition on playing `cell` from `board`.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, Mark};
/// use tictactoe_timeline::session::{MoveGuard, Rejected};
///
/// let board = Board::empty().with_mark(4, Mark::A).unwrap();
///
/// assert!(MoveGuard::Vacant.check(&board, 0).is_ok());
/// assert_eq!(
///     MoveGuard::Vacant.check(&board, 4),
///     Err(Rejected::CellOccupied { index: 4 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveGuard {
    /// The board has no completed line.
    Unfinished,
    /// The cell index is on the board.
    OnBoard,
    /// The cell is empty.
    Vacant,
}

/// Guards in evaluation order.
pub const MOVE_GUARDS: [MoveGuard; 3] = [MoveGuard::Unfinished, MoveGuard::OnBoard, MoveGuard::Vacant];

impl MoveGuard {
    /// Check if this guard allows playing `cell` on `board`.
    pub fn check(&self, board: &Board, cell: usize) -> Result<(), Rejected> {
        let allowed = match self {
            Self::Unfinished => detect(board).is_none(),
            Self::OnBoard => board.get(cell).is_some(),
            Self::Vacant => board.get(cell).is_some_and(|c| c.is_empty()),
        };
        if allowed {
            Ok(())
        } else {
            Err(self.rejection(cell))
        }
    }

    fn rejection(&self, cell: usize) -> Rejected {
        match self {
            Self::Unfinished => Rejected::GameOver,
            Self::OnBoard => Rejected::InvalidCell { index: cell },
            Self::Vacant => Rejected::CellOccupied { index: cell },
        }
    }
}

/// Run every guard in order, stopping at the first rejection.
pub fn check_move(board: &Board, cell: usize) -> Result<(), Rejected> {
    MOVE_GUARDS
        .iter()
        .try_for_each(|guard| guard.check(board, cell))
}
