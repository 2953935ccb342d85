//! Game session: a board history with a movable cursor.

use super::error::Rejected;
use super::guard::check_move;
use super::moves::{MoveDescriptor, MoveListItem, SortOrder};
use crate::core::{status, Board, History, HistoryEntry, Mark, MarkSymbols, Status};
use tracing::{debug, trace};

/// A single play session.
///
/// Holds the history of boards and a cursor into it. Commands (`play_move`,
/// `jump_to`) mutate the session; every other method is a query computed
/// from history and cursor on demand.
///
/// A session assumes one caller at a time. Share it behind a lock if several
/// callers need it.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::Mark;
/// use tictactoe_timeline::session::{GameSession, Rejected};
///
/// let mut game = GameSession::new();
/// for cell in [0, 4, 1, 7, 2] {
///     game.play_move(cell).unwrap();
/// }
///
/// assert_eq!(game.status().winner(), Some(Mark::A));
/// assert_eq!(game.play_move(3), Err(Rejected::GameOver));
///
/// // Going back in time reopens the game.
/// game.jump_to(4).unwrap();
/// game.play_move(3).unwrap();
/// assert_eq!(game.history().len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) symbols: MarkSymbols,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session holding only the empty board, with default symbols.
    pub fn new() -> Self {
        Self::with_symbols(MarkSymbols::default())
    }

    pub(crate) fn with_symbols(symbols: MarkSymbols) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            symbols,
        }
    }

    /// Play `cell` for whichever mark is to move at the cursor.
    ///
    /// Any entries after the cursor are discarded before the new board is
    /// appended, and the cursor moves onto it. On rejection the session is
    /// unchanged.
    pub fn play_move(&mut self, cell: usize) -> Result<(), Rejected> {
        let board = *self.current_board();
        if let Err(rejected) = check_move(&board, cell) {
            debug!(cell, cursor = self.cursor, %rejected, "move rejected");
            return Err(rejected);
        }

        let mark = self.next_mark();
        let next = board
            .with_mark(cell, mark)
            .ok_or(Rejected::InvalidCell { index: cell })?;

        let abandoned = self.history.len() - self.cursor - 1;
        if abandoned > 0 {
            trace!(abandoned, from = self.cursor, "discarding future entries");
        }

        self.history = self
            .history
            .branch(self.cursor, HistoryEntry::after_move(next, cell));
        self.cursor = self.history.len() - 1;

        debug!(cell, ?mark, move_number = self.cursor, "move played");
        Ok(())
    }

    /// Move the cursor to history entry `index`. History is left untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), Rejected> {
        let len = self.history.len();
        if index >= len {
            debug!(index, len, "jump rejected");
            return Err(Rejected::OutOfRange { index, len });
        }

        debug!(from = self.cursor, to = index, "jumped");
        self.cursor = index;
        Ok(())
    }

    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        // cursor < history.len(): set only by `play_move`, a checked
        // `jump_to`, or a checkpoint that passed the integrity rules.
        &self.history.entries()[self.cursor]
    }

    /// Mark to play at the cursor: A on even entries, B on odd ones.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.cursor)
    }

    pub fn status(&self) -> Status {
        status(self.current_board(), self.next_mark())
    }

    /// Status text rendered with this session's symbols.
    pub fn status_line(&self) -> String {
        self.status().describe(&self.symbols)
    }

    /// Position of the move that produced entry `index`.
    ///
    /// `None` for the initial entry and for indices past the end of history.
    pub fn move_descriptor(&self, index: usize) -> Option<MoveDescriptor> {
        self.history
            .get(index)?
            .last_move
            .map(MoveDescriptor::from_index)
    }

    /// One item per history entry, in the requested display order.
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveListItem> {
        let items = (0..self.history.len()).map(|move_number| MoveListItem {
            move_number,
            descriptor: self.move_descriptor(move_number),
            is_current: move_number == self.cursor,
        });
        match order {
            SortOrder::Ascending => items.collect(),
            SortOrder::Descending => items.rev().collect(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn symbols(&self) -> &MarkSymbols {
        &self.symbols
    }
}
