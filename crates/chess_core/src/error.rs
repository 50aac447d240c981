use thiserror::Error;

/// Failures reported by the rules engine. The search core never recovers
/// from these, it hands them back to its caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("illegal move {0}")]
    IllegalMove(String),
    #[error("no move to undo")]
    NothingToUndo,
    #[error("invalid move notation {0:?}")]
    InvalidNotation(String),
    #[error("move {notation:?} is not playable here: {reason}")]
    IllegalNotation { notation: String, reason: String },
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
