use std::time::{Duration, Instant};

use chess_core::{Color, GameState, Termination};
use log::info;
use rand::Rng;

use crate::error::SearchError;
use crate::evaluation::{score_position, Evaluator, Score};
use crate::search::SearchEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub notation: String,
    pub elapsed: Duration,
    /// Search score of the move, from the mover's side.
    pub score: Score,
}

/// One finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<PlayedMove>,
    pub termination: Option<Termination>,
    /// Final position scored from White's side.
    pub final_score: Score,
    pub average_move_time: Duration,
}

impl GameRecord {
    /// Space separated move list, e.g. `e4 e5 Nf3`.
    pub fn notation(&self) -> String {
        self.moves
            .iter()
            .map(|played| played.notation.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn move_times(&self) -> Vec<Duration> {
        self.moves.iter().map(|played| played.elapsed).collect()
    }
}

/// Mean of the given durations. An empty list has no mean.
pub fn average_duration(times: &[Duration]) -> Result<Duration, SearchError> {
    if times.is_empty() {
        return Err(SearchError::EmptyGame);
    }
    let total: Duration = times.iter().sum();
    Ok(total / times.len() as u32)
}

/// Lets the engine play both sides from `state` until the game is over.
///
/// `state` is advanced in place and ends on the final position.
pub fn play_game<S, E, R>(
    engine: &mut SearchEngine<E, R>,
    state: &mut S,
    depth: u8,
) -> Result<GameRecord, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
    R: Rng,
{
    let mut moves = Vec::new();

    while !state.is_game_over() {
        let mover = state.side_to_move();
        let start_time = Instant::now();
        let result = engine
            .best_move(state, depth)?
            .ok_or(SearchError::NoLegalMoves { depth })?;
        let elapsed = start_time.elapsed();

        let notation = state.notation(result.best_move);
        info!("{}. {:?} plays {} (score {}, {:?})", moves.len() + 1, mover, notation, result.score, elapsed);
        state.apply(result.best_move)?;

        moves.push(PlayedMove {
            notation,
            elapsed,
            score: result.score,
        });
    }

    let termination = state.termination();
    let final_score = score_position(state, engine.evaluator(), Color::White);
    let average_move_time = average_duration(
        &moves.iter().map(|played| played.elapsed).collect::<Vec<_>>(),
    )?;

    info!(
        "game over after {} plies: {:?}, final score {}",
        moves.len(),
        termination,
        final_score
    );

    Ok(GameRecord {
        moves,
        termination,
        final_score,
        average_move_time,
    })
}
