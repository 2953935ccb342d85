//! Builder for constructing game sessions.

use crate::builder::error::BuildError;
use crate::core::MarkSymbols;
use crate::session::GameSession;

/// Builder for configuring a game session with a fluent API.
///
/// # Example
///
/// ```
/// use tictactoe_timeline::builder::GameSessionBuilder;
/// use tictactoe_timeline::core::MarkSymbols;
///
/// let game = GameSessionBuilder::new()
///     .symbols(MarkSymbols::new('#', '@'))
///     .opening([4, 0])
///     .build()
///     .unwrap();
///
/// assert_eq!(game.cursor(), 2);
/// assert_eq!(game.status_line(), "Next player: #");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameSessionBuilder {
    symbols: MarkSymbols,
    opening: Vec<usize>,
}

impl GameSessionBuilder {
    /// Create a new builder with default symbols and no opening moves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display symbols for the two marks.
    pub fn symbols(mut self, symbols: MarkSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Moves to replay, in order, before the session is handed out.
    pub fn opening(mut self, cells: impl IntoIterator<Item = usize>) -> Self {
        self.opening.extend(cells);
        self
    }

    /// Build the session.
    ///
    /// Fails if the symbols cannot be told apart or an opening move is
    /// illegal.
    pub fn build(self) -> Result<GameSession, BuildError> {
        let MarkSymbols { a, b } = self.symbols;
        for symbol in [a, b] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(BuildError::BlankSymbol(symbol));
            }
        }
        if a == b {
            return Err(BuildError::IdenticalSymbols(a));
        }

        let mut game = GameSession::with_symbols(self.symbols);
        for (move_number, cell) in self.opening.into_iter().enumerate() {
            game.play_move(cell)
                .map_err(|source| BuildError::IllegalOpening {
                    move_number,
                    source,
                })?;
        }
        Ok(game)
    }
}

impl GameSession {
    /// Start configuring a new session.
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }
}
