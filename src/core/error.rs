//! Engine error taxonomy.
//!
//! Only genuinely exceptional conditions are errors. Gameplay
//! rejections (clicking an empty cell, picking two non-connectable
//! tiles, re-clicking a selection) are ordinary [`SelectionOutcome`]
//! values, never `Err`: rejection is normal play.
//!
//! Board/MatchIndex desync is a programmer error and panics; it is not
//! representable here.
//!
//! [`SelectionOutcome`]: crate::session::SelectionOutcome

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced across the engine boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// Board construction rejected: dimensions must be positive and
    /// cover an even number of cells (tiles exist only in pairs).
    #[error("invalid board dimensions {width}x{height}: need positive sides and an even cell count")]
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },

    /// Board construction rejected: at least one tile type is required.
    #[error("invalid tile type count {num_types}: need at least 1")]
    InvalidTypeCount {
        /// Requested number of tile types.
        num_types: u16,
    },

    /// A coordinate fell outside the current board.
    #[error("position ({row}, {col}) is outside the {width}x{height} board")]
    OutOfRange {
        /// Requested row.
        row: u16,
        /// Requested column.
        col: u16,
        /// Current board width.
        width: u16,
        /// Current board height.
        height: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::InvalidDimensions { width: 3, height: 3 };
        assert!(err.to_string().contains("3x3"));

        let err = EngineError::InvalidTypeCount { num_types: 0 };
        assert!(err.to_string().contains("at least 1"));

        let err = EngineError::OutOfRange {
            row: 9,
            col: 2,
            width: 4,
            height: 4,
        };
        assert!(err.to_string().contains("(9, 2)"));
        assert!(err.to_string().contains("4x4"));
    }

    #[test]
    fn test_serde_round_trip() {
        let err = EngineError::OutOfRange {
            row: 1,
            col: 2,
            width: 3,
            height: 4,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
