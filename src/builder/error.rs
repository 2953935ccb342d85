//! Build errors for the session builder.

use crate::session::Rejected;
use thiserror::Error;

/// Errors that can occur when building a game session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Both marks use the symbol '{0}'. Pick two distinct symbols")]
    IdenticalSymbols(char),

    #[error("Mark symbols must be visible characters, got {0:?}")]
    BlankSymbol(char),

    #[error("Opening move #{move_number} was rejected: {source}")]
    IllegalOpening {
        move_number: usize,
        #[source]
        source: Rejected,
    },
}
