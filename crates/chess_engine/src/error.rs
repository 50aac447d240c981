use chess_core::RulesError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The rules engine said the node was still in play but offered no move.
    #[error("no legal moves in a position not reported as game over (depth {depth})")]
    NoLegalMoves { depth: u8 },
    /// A game ended before a single move was played, so it has no move timings.
    #[error("no moves were played, average move time is undefined")]
    EmptyGame,
    #[error(transparent)]
    Rules(#[from] RulesError),
}
