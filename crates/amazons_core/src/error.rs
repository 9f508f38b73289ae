//! Error types for the Amazons rules engine
//!
//! Everything here is a local validation failure: malformed text that does not
//! describe a square, move or board, or a well-formed move that the current
//! position does not allow.

use thiserror::Error;

use crate::types::{Color, Move};

/// Errors that can occur while parsing or playing moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmazonsError {
    /// Text that is not a column `a`-`j` followed by a row `1`-`9` or `0`
    #[error("invalid square `{0}`: expected a column a-j followed by a row 1-9 or 0")]
    InvalidSquare(String),

    /// Text that does not have the shape `d1-d7(g7)`
    #[error("malformed move `{0}`: expected <col><row>-<col><row>(<col><row>)")]
    MalformedMove(String),

    /// Well-formed move that the position does not allow
    #[error("illegal move {mv} with {turn} to move")]
    IllegalMove { mv: Move, turn: Color },

    /// Board diagram that cannot be read back into a position
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}

/// Result type alias for rules engine operations
pub type AmazonsResult<T> = Result<T, AmazonsError>;
