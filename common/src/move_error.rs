use std::fmt;

use crate::SessionId;

/// Reasons a move event is ignored. Neither is fatal: the transport drops the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Index outside 0..=8 or the cell is already marked.
    IllegalMove { index: usize },
    /// No game is running for this session.
    NotFound { session_id: SessionId },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { index } => write!(f, "Cell {} is not playable", index),
            MoveError::NotFound { session_id } => {
                write!(f, "No active game for session {}", session_id)
            }
        }
    }
}

impl std::error::Error for MoveError {}
