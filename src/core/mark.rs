//! Marks, cells and their display symbols.

use serde::{Deserialize, Serialize};

/// One of the two marks a player places on the board.
///
/// `A` always moves first: the mark to play is a pure function of how many
/// moves have already been made.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::Mark;
///
/// assert_eq!(Mark::for_move(0), Mark::A);
/// assert_eq!(Mark::for_move(1), Mark::B);
/// assert_eq!(Mark::A.opponent(), Mark::B);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Mark {
    A,
    B,
}

impl Mark {
    /// The mark that plays when `moves_made` moves are already on the board.
    pub fn for_move(moves_made: usize) -> Self {
        if moves_made % 2 == 0 {
            Self::A
        } else {
            Self::B
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Self::Marked(mark)
    }
}

/// Display symbols for the two marks.
///
/// Marks are opaque to the game logic; symbols only matter when a board,
/// status or move list is turned into text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MarkSymbols {
    pub a: char,
    pub b: char,
}

impl MarkSymbols {
    pub fn new(a: char, b: char) -> Self {
        Self { a, b }
    }

    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::A => self.a,
            Mark::B => self.b,
        }
    }
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self { a: 'X', b: 'O' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_move_counts_belong_to_a() {
        for moves in [0, 2, 4, 6, 8] {
            assert_eq!(Mark::for_move(moves), Mark::A);
        }
        for moves in [1, 3, 5, 7] {
            assert_eq!(Mark::for_move(moves), Mark::B);
        }
    }

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Mark::A.opponent().opponent(), Mark::A);
        assert_eq!(Mark::B.opponent(), Mark::A);
    }

    #[test]
    fn cell_reports_its_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::from(Mark::B).mark(), Some(Mark::B));
        assert!(!Cell::Marked(Mark::A).is_empty());
    }

    #[test]
    fn default_symbols_are_x_and_o() {
        let symbols = MarkSymbols::default();
        assert_eq!(symbols.symbol(Mark::A), 'X');
        assert_eq!(symbols.symbol(Mark::B), 'O');
    }

    #[test]
    fn cell_serializes_correctly() {
        let cell = Cell::Marked(Mark::A);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
