// Rules-side modules: the search core only sees these through `GameState`
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod position;
pub mod state;

// Re-export main types for convenience
pub use board::Board;
pub use error::RulesError;
pub use moves::{parse_game_string, Move};
pub use piece::{Color, Piece, PieceType};
pub use position::Position;
pub use state::{GameState, Termination};
