//! Context provided to integrity checks.

use crate::core::History;

/// A history together with the cursor that points into it.
#[derive(Clone, Copy, Debug)]
pub struct HistoryContext<'a> {
    pub history: &'a History,
    pub cursor: usize,
}

impl<'a> HistoryContext<'a> {
    pub fn new(history: &'a History, cursor: usize) -> Self {
        Self { history, cursor }
    }

    /// Moves recorded after the initial entry (pure)
    pub fn moves_recorded(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}
