//! Move descriptors and the navigable move list.

use crate::core::SIDE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based row and column of a played cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub row: usize,
    pub col: usize,
}

impl MoveDescriptor {
    /// Describe cell `index` (0-8) by its 1-based position.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / SIDE + 1,
            col: index % SIDE + 1,
        }
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Display order of the move list. Never affects the session itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One row of the move list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History index this item jumps to
    pub move_number: usize,
    pub descriptor: Option<MoveDescriptor>,
    /// True for the entry under the cursor
    pub is_current: bool,
}

impl fmt::Display for MoveListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_current {
            write!(f, "You are at move #{}", self.move_number)?;
        } else if self.move_number == 0 {
            return write!(f, "Go to game start");
        } else {
            write!(f, "Go to move #{}", self.move_number)?;
        }
        match self.descriptor {
            Some(descriptor) => write!(f, " {descriptor}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_one_based() {
        assert_eq!(MoveDescriptor::from_index(0), MoveDescriptor { row: 1, col: 1 });
        assert_eq!(MoveDescriptor::from_index(5), MoveDescriptor { row: 2, col: 3 });
        assert_eq!(MoveDescriptor::from_index(7), MoveDescriptor { row: 3, col: 2 });
        assert_eq!(MoveDescriptor::from_index(4).to_string(), "(2, 2)");
    }

    #[test]
    fn toggle_flips_order_and_label() {
        let order = SortOrder::default();
        assert_eq!(order, SortOrder::Ascending);
        assert_eq!(order.toggle_label(), "Sort Descending");
        assert_eq!(order.toggle(), SortOrder::Descending);
        assert_eq!(order.toggle().toggle_label(), "Sort Ascending");
        assert_eq!(order.toggle().toggle(), order);
    }

    #[test]
    fn item_labels() {
        let start = MoveListItem {
            move_number: 0,
            descriptor: None,
            is_current: false,
        };
        assert_eq!(start.to_string(), "Go to game start");

        let at_start = MoveListItem {
            is_current: true,
            ..start
        };
        assert_eq!(at_start.to_string(), "You are at move #0");

        let third = MoveListItem {
            move_number: 3,
            descriptor: Some(MoveDescriptor::from_index(8)),
            is_current: false,
        };
        assert_eq!(third.to_string(), "Go to move #3 (3, 3)");
        assert_eq!(
            MoveListItem {
                is_current: true,
                ..third
            }
            .to_string(),
            "You are at move #3 (3, 3)"
        );
    }
}
