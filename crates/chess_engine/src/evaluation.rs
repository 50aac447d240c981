use chess_core::{piece::PieceType, Color, GameState, Termination};

/// Scores are whole pawns, positive favoring the perspective color.
pub type Score = i32;

pub const MATE_SCORE: Score = 1000;
pub const DRAW_SCORE: Score = 0;
/// Search window bound. `-SCORE_INFINITY` is representable.
pub const SCORE_INFINITY: Score = i32::MAX;

/// Material weight of a piece. The king is never captured so it weighs nothing.
pub const fn piece_value(piece_type: PieceType) -> Score {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 0,
    }
}

/// Static position scoring, from `perspective`'s point of view.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, perspective: Color) -> Score;
}

/// Material balance only: no mobility, king safety or pawn structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl<S: GameState> Evaluator<S> for MaterialEvaluator {
    fn evaluate(&self, state: &S, perspective: Color) -> Score {
        state
            .piece_map()
            .values()
            .map(|piece| {
                let value = piece_value(piece.piece_type);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

/// Score of a finished game, or `None` while the game is still in play.
///
/// A checkmated side to move has lost; draws of every kind score zero no
/// matter what material is left.
pub fn terminal_score<S: GameState>(state: &S, perspective: Color) -> Option<Score> {
    match state.termination()? {
        Termination::Checkmate => {
            if state.side_to_move() == perspective {
                Some(-MATE_SCORE)
            } else {
                Some(MATE_SCORE)
            }
        }
        Termination::Stalemate
        | Termination::InsufficientMaterial
        | Termination::SeventyFiveMoves
        | Termination::FivefoldRepetition => Some(DRAW_SCORE),
    }
}

/// Leaf score: the terminal score when the game is over, otherwise the static evaluation.
pub fn score_position<S, E>(state: &S, evaluator: &E, perspective: Color) -> Score
where
    S: GameState,
    E: Evaluator<S>,
{
    terminal_score(state, perspective).unwrap_or_else(|| evaluator.evaluate(state, perspective))
}
