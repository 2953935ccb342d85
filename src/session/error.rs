//! Rejection reasons for session commands.

use thiserror::Error;

/// Why a `play_move` or `jump_to` command was refused.
///
/// Every rejection is local and recoverable: the session is left exactly as
/// it was before the command.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejected {
    #[error("Game is over: the current board already has a winner")]
    GameOver,

    #[error("Cell {index} is not on the board (expected 0-8)")]
    InvalidCell { index: usize },

    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("Move {index} is out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}
