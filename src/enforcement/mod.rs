//! Validation-based integrity checks for game histories.
//!
//! This module checks a history and cursor against every session invariant,
//! using Stillwater's `Validation` type to accumulate ALL violations instead
//! of stopping at the first one.
//!
//! Sessions built through `play_move` satisfy these rules by construction;
//! the rules matter for histories that come from outside, such as restored
//! checkpoints.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_timeline::enforcement::{HistoryContext, IntegrityRules};
//! use tictactoe_timeline::session::GameSession;
//!
//! let game = GameSession::new();
//! let rules = IntegrityRules::standard()
//!     .require_pred(|ctx| ctx.moves_recorded() < 9, "Board overflow".to_string());
//!
//! let context = HistoryContext::new(game.history(), game.cursor());
//! assert!(rules.enforce(&context).is_success());
//! ```

pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use context::HistoryContext;
pub use rules::{Checked, IntegrityCheck, IntegrityRules};
pub use violations::IntegrityViolation;
