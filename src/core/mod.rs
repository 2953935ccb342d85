//! Core game types and logic.
//!
//! This module contains the pure core of the game:
//! - Marks, cells and the 3×3 board
//! - Win detection and derived status
//! - Immutable board history
//!
//! Nothing in this module holds mutable state or performs I/O.

mod board;
mod history;
mod mark;
mod status;
mod win;

pub use board::{Board, CELL_COUNT, SIDE};
pub use history::{History, HistoryEntry};
pub use mark::{Cell, Mark, MarkSymbols};
pub use status::{status, Status};
pub use win::{detect, Win, WINNING_LINES};
