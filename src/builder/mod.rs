//! Builder API for ergonomic session and board construction.
//!
//! This module provides a fluent builder for configuring sessions and a macro
//! for writing boards as pictures.

pub mod error;
pub mod macros;
pub mod session;

pub use error::BuildError;
pub use session::GameSessionBuilder;

use crate::session::GameSession;

/// Create a session with the given opening already played.
///
/// # Example
///
/// ```
/// use tictactoe_timeline::builder::from_opening;
/// use tictactoe_timeline::core::Mark;
///
/// let game = from_opening([0, 4, 1, 7, 2]).unwrap();
/// assert_eq!(game.status().winner(), Some(Mark::A));
/// ```
pub fn from_opening(cells: impl IntoIterator<Item = usize>) -> Result<GameSession, BuildError> {
    GameSessionBuilder::new().opening(cells).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_opening_builds() {
        let game = from_opening([8]).unwrap();
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn from_opening_propagates_errors() {
        assert!(from_opening([9]).is_err());
    }
}
