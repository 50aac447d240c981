use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Color, Piece, Position, RulesError};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl Termination {
    pub fn is_draw(self) -> bool {
        !matches!(self, Termination::Checkmate)
    }
}

/// The narrow view of a game position the search works through.
///
/// `apply` and `undo` form a stack: every successful `apply` must be undone
/// before the caller that made it returns, and `undo` restores the exact
/// prior state.
pub trait GameState {
    type Move: Copy + Eq + Debug;

    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move) -> Result<(), RulesError>;

    fn undo(&mut self) -> Result<Self::Move, RulesError>;

    fn side_to_move(&self) -> Color;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    fn is_seventy_five_move_rule(&self) -> bool;

    fn is_fivefold_repetition(&self) -> bool;

    /// How the game ended, checked in order of precedence.
    fn termination(&self) -> Option<Termination> {
        if self.is_checkmate() {
            Some(Termination::Checkmate)
        } else if self.is_stalemate() {
            Some(Termination::Stalemate)
        } else if self.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.is_seventy_five_move_rule() {
            Some(Termination::SeventyFiveMoves)
        } else if self.is_fivefold_repetition() {
            Some(Termination::FivefoldRepetition)
        } else {
            None
        }
    }

    fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }

    /// Human readable text for a move legal in this position.
    fn notation(&self, mv: Self::Move) -> String;

    fn parse_notation(&self, text: &str) -> Result<Self::Move, RulesError>;

    /// Snapshot of the current piece placement.
    fn piece_map(&self) -> HashMap<Position, Piece>;
}
