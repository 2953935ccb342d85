//! Board history tracking.
//!
//! Provides an ordered log of board snapshots. Recording a move returns a new
//! history; existing snapshots are never mutated.

use super::board::Board;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single point in the game.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, HistoryEntry, Mark};
///
/// let start = HistoryEntry::initial();
/// assert!(start.board.is_empty());
/// assert_eq!(start.last_move, None);
///
/// let board = start.board.with_mark(4, Mark::A).unwrap();
/// let entry = HistoryEntry::after_move(board, 4);
/// assert_eq!(entry.last_move, Some(4));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move was applied
    pub board: Board,
    /// Cell played to reach this board; `None` only for the initial entry
    pub last_move: Option<usize>,
    /// When the entry was recorded
    pub played_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// The empty-board entry every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::empty(),
            last_move: None,
            played_at: Utc::now(),
        }
    }

    pub fn after_move(board: Board, cell: usize) -> Self {
        Self {
            board,
            last_move: Some(cell),
            played_at: Utc::now(),
        }
    }
}

/// Entries are equal when they hold the same board reached by the same move;
/// `played_at` is bookkeeping and does not take part.
impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.last_move == other.last_move
    }
}

impl Eq for HistoryEntry {}

/// Ordered, never-empty history of board snapshots.
///
/// Entry `n` is the board after `n` moves. Branching from an earlier entry
/// drops everything after it, so the history is always a single line of play.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{History, HistoryEntry, Mark};
///
/// let history = History::new();
/// assert_eq!(history.len(), 1);
///
/// let board = history.latest().board.with_mark(0, Mark::A).unwrap();
/// let history = history.branch(0, HistoryEntry::after_move(board, 0));
///
/// let boards = history.boards();
/// assert_eq!(boards.len(), 2);
/// assert!(boards[0].is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the initial empty-board entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Wrap raw entries without checking any invariant.
    ///
    /// Used when restoring checkpoints; callers must run the integrity rules
    /// before handing the result to a session.
    pub(crate) fn from_entries_unchecked(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Record `entry` as the successor of entry `at`, returning a new history.
    ///
    /// Entries after `at` are abandoned. This is a pure function: `self` is
    /// left unchanged.
    pub fn branch(&self, at: usize, entry: HistoryEntry) -> Self {
        let keep = (at + 1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(entry);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for histories built through this type's constructors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Most recent entry.
    pub fn latest(&self) -> &HistoryEntry {
        // The public constructors never produce an empty history; restored
        // histories are validated before use.
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Boards in order, from the empty board to the latest move.
    pub fn boards(&self) -> Vec<&Board> {
        self.entries.iter().map(|e| &e.board).collect()
    }

    /// Time between the first and the last entry.
    ///
    /// Returns `None` if only the initial entry exists, or if the clock moved
    /// backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        if self.entries.len() < 2 {
            return None;
        }
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.played_at
            .signed_duration_since(first.played_at)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mark::Mark;

    fn entry(board: &Board, cell: usize, mark: Mark) -> HistoryEntry {
        HistoryEntry::after_move(board.with_mark(cell, mark).unwrap(), cell)
    }

    #[test]
    fn new_history_has_initial_entry() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert!(history.latest().board.is_empty());
        assert_eq!(history.latest().last_move, None);
        assert!(history.duration().is_none());
    }

    #[test]
    fn branch_appends_after_latest() {
        let history = History::new();
        let next = history.branch(0, entry(&history.latest().board, 4, Mark::A));

        assert_eq!(next.len(), 2);
        assert_eq!(next.latest().last_move, Some(4));
    }

    #[test]
    fn branch_is_pure() {
        let history = History::new();
        let next = history.branch(0, entry(&Board::empty(), 0, Mark::A));

        assert_eq!(history.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn branch_truncates_abandoned_future() {
        let mut history = History::new();
        for (n, cell) in [0, 4, 8].into_iter().enumerate() {
            let board = history.latest().board;
            history = history.branch(n, entry(&board, cell, Mark::for_move(n)));
        }
        assert_eq!(history.len(), 4);

        let from = history.get(1).unwrap().board;
        let branched = history.branch(1, entry(&from, 2, Mark::B));

        assert_eq!(branched.len(), 3);
        assert_eq!(branched.get(1), history.get(1));
        assert_eq!(branched.latest().last_move, Some(2));
    }

    #[test]
    fn boards_follow_entry_order() {
        let history = History::new();
        let history = history.branch(0, entry(&Board::empty(), 3, Mark::A));

        let boards = history.boards();
        assert!(boards[0].is_empty());
        assert_eq!(boards[1].count(Mark::A), 1);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = History::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let history = history.branch(0, entry(&Board::empty(), 0, Mark::A));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn entry_equality_ignores_timestamps() {
        let first = HistoryEntry::initial();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = HistoryEntry::initial();

        assert_ne!(first.played_at, second.played_at);
        assert_eq!(first, second);
        assert_ne!(first, entry(&Board::empty(), 0, Mark::A));
    }

    #[test]
    fn separately_built_histories_compare_by_content() {
        let one = History::new().branch(0, entry(&Board::empty(), 4, Mark::A));
        std::thread::sleep(std::time::Duration::from_millis(2));
        let two = History::new().branch(0, entry(&Board::empty(), 4, Mark::A));

        assert_eq!(one, two);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().branch(0, entry(&Board::empty(), 6, Mark::A));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
