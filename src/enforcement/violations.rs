//! Integrity violations found in a history.

use crate::core::Mark;
use thiserror::Error;

/// A broken history invariant.
///
/// `entry` always refers to the offending history index.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("History has no entries")]
    EmptyHistory,

    #[error("Cursor {cursor} is outside a history of {len} entries")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("Initial board is not empty")]
    InitialBoardNotEmpty,

    #[error("Initial entry records a move at cell {cell}")]
    InitialEntryHasMove { cell: usize },

    #[error("Entry {entry} does not record which cell was played")]
    MissingMove { entry: usize },

    #[error("Entry {entry} records cell {cell}, which is not on the board")]
    MoveOffBoard { entry: usize, cell: usize },

    #[error("Entry {entry} changes {changed} cells (expected exactly 1)")]
    NotSingleChange { entry: usize, changed: usize },

    #[error("Entry {entry} records cell {recorded} but changed cell {changed}")]
    ChangedWrongCell {
        entry: usize,
        recorded: usize,
        changed: usize,
    },

    #[error("Entry {entry} plays on cell {cell}, which was already occupied")]
    OverwroteCell { entry: usize, cell: usize },

    #[error("Entry {entry} should place {expected:?}, found {found:?}")]
    WrongMark {
        entry: usize,
        expected: Mark,
        found: Option<Mark>,
    },

    #[error("Entry {entry} follows a board that was already won")]
    PlayedAfterWin { entry: usize },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
