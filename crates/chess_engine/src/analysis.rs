use chess_core::{parse_game_string, Color, GameState};
use log::debug;

use crate::error::SearchError;
use crate::evaluation::{Evaluator, Score, SCORE_INFINITY};

/// How one played move compares with the best static alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAccuracy {
    pub notation: String,
    pub played: Score,
    pub best: Score,
    pub deviation: Score,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccuracyReport {
    pub moves: Vec<MoveAccuracy>,
    pub total_deviation: Score,
}

impl AccuracyReport {
    /// Mean absolute deviation per move. An empty game scores 0.
    pub fn mean(&self) -> f64 {
        if self.moves.is_empty() {
            return 0.0;
        }
        f64::from(self.total_deviation) / self.moves.len() as f64
    }
}

/// Replays `moves` from `state` and measures each one against the best
/// one-ply alternative, both scored statically from the mover's side.
///
/// The state is left on the position after the last move.
pub fn accuracy<S, E>(state: &mut S, evaluator: &E, moves: &[&str]) -> Result<AccuracyReport, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut report = AccuracyReport::default();

    for &text in moves {
        let mover = state.side_to_move();
        let played_move = state.parse_notation(text)?;
        let played = score_after(state, evaluator, played_move, mover)?;

        let mut best = -SCORE_INFINITY;
        for mv in state.legal_moves() {
            best = best.max(score_after(state, evaluator, mv, mover)?);
        }

        let deviation = (best - played).abs();
        let notation = state.notation(played_move);
        debug!("{} scored {} against best {}", notation, played, best);

        report.total_deviation += deviation;
        report.moves.push(MoveAccuracy {
            notation,
            played,
            best,
            deviation,
        });
        state.apply(played_move)?;
    }

    Ok(report)
}

/// Same as [`accuracy`] on game text such as `1. e4 e5 2. Nf3`.
pub fn accuracy_of_game<S, E>(state: &mut S, evaluator: &E, game: &str) -> Result<AccuracyReport, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    accuracy(state, evaluator, &parse_game_string(game))
}

fn score_after<S, E>(state: &mut S, evaluator: &E, mv: S::Move, perspective: Color) -> Result<Score, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    state.apply(mv)?;
    let score = evaluator.evaluate(state, perspective);
    state.undo()?;
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::MaterialEvaluator;
    use chess_core::{Board, RulesError};

    #[test]
    fn empty_game_is_perfect() {
        let mut board = Board::new();
        let report = accuracy(&mut board, &MaterialEvaluator, &[]).unwrap();
        assert!(report.moves.is_empty());
        assert_eq!(report.mean(), 0.0);
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn optimal_moves_score_zero() {
        let mut board = Board::new();
        let report = accuracy(&mut board, &MaterialEvaluator, &["e4", "e5", "Nf3", "Nc6"]).unwrap();
        assert_eq!(report.total_deviation, 0);
        assert_eq!(report.mean(), 0.0);
        assert_eq!(board.ply_count(), 4);
    }

    #[test]
    fn missed_capture_for_white() {
        let mut board = Board::new();
        let report = accuracy(&mut board, &MaterialEvaluator, &["e4", "d5", "Nc3"]).unwrap();
        assert_eq!(report.total_deviation, 1);
        assert_eq!(
            report.moves[2],
            MoveAccuracy {
                notation: "Nc3".to_string(),
                played: 0,
                best: 1,
                deviation: 1,
            }
        );
        assert!((report.mean() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn missed_recapture_for_black() {
        let mut board = Board::new();
        let report = accuracy(&mut board, &MaterialEvaluator, &["e4", "d5", "exd5", "Nf6"]).unwrap();
        let last = &report.moves[3];
        assert_eq!((last.played, last.best, last.deviation), (-1, 0, 1));
        assert_eq!(report.moves[2].deviation, 0);
        assert_eq!(report.total_deviation, 1);
    }

    #[test]
    fn numbered_game_text() {
        let mut board = Board::new();
        let report = accuracy_of_game(&mut board, &MaterialEvaluator, "1. e4 d5 2. Nc3 *").unwrap();
        assert_eq!(report.moves.len(), 3);
        assert_eq!(report.total_deviation, 1);
    }

    #[test]
    fn bad_notation_propagates() {
        let mut board = Board::new();
        let err = accuracy(&mut board, &MaterialEvaluator, &["e4", "??"]).unwrap_err();
        assert_eq!(err, SearchError::Rules(RulesError::InvalidNotation("??".to_string())));

        let mut board = Board::new();
        let err = accuracy(&mut board, &MaterialEvaluator, &["e5"]).unwrap_err();
        assert!(matches!(err, SearchError::Rules(RulesError::IllegalNotation { .. })));
    }
}
