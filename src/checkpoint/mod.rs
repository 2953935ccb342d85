//! Checkpoint and resume functionality for game sessions.
//!
//! A checkpoint is a self-contained, serializable snapshot of a session that
//! can be handed across the view boundary or kept for replay. This module
//! only encodes and decodes; where the bytes go is up to the caller.

use crate::core::{History, MarkSymbols};
use crate::enforcement::{HistoryContext, IntegrityRules};
use crate::session::GameSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Display symbols of the session
    pub symbols: MarkSymbols,

    /// Complete board history, including entries after the cursor
    pub history: History,

    /// Cursor position at capture time
    pub cursor: usize,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl GameSession {
    /// Capture the full session, future entries included.
    pub fn checkpoint(&self) -> Checkpoint {
        let checkpoint = Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            symbols: self.symbols,
            history: self.history.clone(),
            cursor: self.cursor,
        };
        debug!(id = %checkpoint.id, entries = checkpoint.history.len(), "checkpoint taken");
        checkpoint
    }

    /// Rebuild a session from a checkpoint using the standard integrity rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_timeline::checkpoint::Checkpoint;
    /// use tictactoe_timeline::session::GameSession;
    ///
    /// let mut game = GameSession::new();
    /// game.play_move(4).unwrap();
    /// game.play_move(0).unwrap();
    /// game.jump_to(1).unwrap();
    ///
    /// let json = game.checkpoint().to_json().unwrap();
    /// let restored = GameSession::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
    ///
    /// assert_eq!(restored.cursor(), 1);
    /// assert_eq!(restored.history().len(), 3);
    /// ```
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        Self::resume_with(checkpoint, &IntegrityRules::standard())
    }

    /// Rebuild a session from a checkpoint, enforcing `rules`.
    ///
    /// Every violation found is reported, not only the first.
    pub fn resume_with(
        checkpoint: Checkpoint,
        rules: &IntegrityRules,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let context = HistoryContext::new(&checkpoint.history, checkpoint.cursor);
        if let Validation::Failure(errors) = rules.enforce(&context) {
            let violations: Vec<_> = errors.iter().cloned().collect();
            debug!(id = %checkpoint.id, count = violations.len(), "checkpoint rejected");
            return Err(CheckpointError::ValidationFailed(violations));
        }

        debug!(id = %checkpoint.id, cursor = checkpoint.cursor, "session resumed");
        Ok(Self {
            history: checkpoint.history,
            cursor: checkpoint.cursor,
            symbols: checkpoint.symbols,
        })
    }
}
