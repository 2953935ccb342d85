//! Tictactoe Timeline: a pure tic-tac-toe core with time-travel history
//!
//! The crate is the logic behind a 3×3 tic-tac-toe board with a navigable
//! move history. Win detection is a pure function over a board snapshot; the
//! session is a history of snapshots plus a cursor, changed only through two
//! commands. Rendering and input handling belong to whatever view sits on top.
//!
//! # Core Concepts
//!
//! - **Board**: Immutable 9-cell snapshot, row-major
//! - **Win detection**: First completed line among eight, in a fixed order
//! - **Session**: History of boards with a cursor; playing from an earlier
//!   cursor discards the abandoned future
//!
//! # Example
//!
//! ```rust
//! use tictactoe_timeline::core::Mark;
//! use tictactoe_timeline::session::{GameSession, SortOrder};
//!
//! let mut game = GameSession::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     game.play_move(cell).unwrap();
//! }
//!
//! let win = game.status().winner();
//! assert_eq!(win, Some(Mark::A));
//! assert_eq!(game.status_line(), "Winner: X");
//!
//! game.jump_to(0).unwrap();
//! game.play_move(4).unwrap();
//! assert_eq!(game.history().len(), 2);
//!
//! let moves: Vec<String> = game
//!     .move_list(SortOrder::Ascending)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(moves, ["Go to game start", "You are at move #1 (2, 2)"]);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod enforcement;
pub mod session;

// Re-export commonly used types
pub use crate::builder::{BuildError, GameSessionBuilder};
pub use crate::core::{detect, Board, Cell, Mark, MarkSymbols, Status, Win};
pub use crate::session::{GameSession, MoveDescriptor, Rejected, SortOrder};
