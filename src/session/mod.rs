//! Stateful game session around the pure core.
//!
//! # Key Concepts
//!
//! - **Commands**: `play_move` and `jump_to` are the only ways to change a session
//! - **Guards**: move preconditions, evaluated in a fixed order
//! - **Queries**: board, status and move list, always derived from history and cursor

mod error;
mod game;
mod guard;
mod moves;

pub use error::Rejected;
pub use game::GameSession;
pub use guard::{check_move, MoveGuard, MOVE_GUARDS};
pub use moves::{MoveDescriptor, MoveListItem, SortOrder};
