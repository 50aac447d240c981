pub mod analysis;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod search;

pub use analysis::{accuracy, accuracy_of_game, AccuracyReport, MoveAccuracy};
pub use config::SearchConfig;
pub use error::SearchError;
pub use evaluation::{piece_value, score_position, terminal_score, Evaluator, MaterialEvaluator, Score};
pub use game::{play_game, GameRecord, PlayedMove};
pub use search::{SearchAlgorithm, SearchEngine, SearchResult, SearchStats};
