use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::trace;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position as _};

use crate::{Color, GameState, Move, Piece, Position, RulesError};

// 75 full moves without a capture or pawn move
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
const FIVEFOLD: usize = 5;

#[derive(Debug, Clone)]
struct HistoryEntry {
    previous: Chess,
    mv: Move,
}

/// Standard chess position with an undo stack and repetition history.
#[derive(Debug, Clone)]
pub struct Board {
    position: Chess,
    history: Vec<HistoryEntry>,
    // Repetition keys of every position reached so far, current one last
    keys: Vec<u64>,
}

impl Board {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let fen = Fen::from_str(fen).map_err(|err| RulesError::InvalidFen(err.to_string()))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|err| RulesError::InvalidFen(err.to_string()))?;
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let mut board = Self {
            position,
            history: Vec::new(),
            keys: Vec::new(),
        };
        board.keys.push(board.repetition_key());
        board
    }

    pub fn to_fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    /// Number of moves applied since this board was set up.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    // Clocks are not part of the key, matching the FIDE notion of a repeated position
    fn repetition_key(&self) -> u64 {
        self.position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.position.is_legal(mv) {
            return Err(RulesError::IllegalMove(mv.to_string()));
        }

        let previous = self.position.clone();
        self.position.play_unchecked(mv);
        self.history.push(HistoryEntry { previous, mv });
        self.keys.push(self.repetition_key());
        Ok(())
    }

    fn undo(&mut self) -> Result<Move, RulesError> {
        let entry = self.history.pop().ok_or(RulesError::NothingToUndo)?;
        self.position = entry.previous;
        self.keys.pop();
        trace!("undo {}", entry.mv);
        Ok(entry.mv)
    }

    fn side_to_move(&self) -> Color {
        self.position.turn().into()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_seventy_five_move_rule(&self) -> bool {
        // A mate delivered on the 150th ply still counts as mate
        self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
            && !self.position.legal_moves().is_empty()
    }

    fn is_fivefold_repetition(&self) -> bool {
        match self.keys.last() {
            Some(current) => self.keys.iter().filter(|key| *key == current).count() >= FIVEFOLD,
            None => false,
        }
    }

    fn notation(&self, mv: Move) -> String {
        SanPlus::from_move(self.position.clone(), mv).to_string()
    }

    fn parse_notation(&self, text: &str) -> Result<Move, RulesError> {
        let san_plus =
            SanPlus::from_str(text).map_err(|_| RulesError::InvalidNotation(text.to_string()))?;
        san_plus
            .san
            .to_move(&self.position)
            .map_err(|err| RulesError::IllegalNotation {
                notation: text.to_string(),
                reason: err.to_string(),
            })
    }

    fn piece_map(&self) -> HashMap<Position, Piece> {
        self.position
            .board()
            .iter()
            .map(|(square, piece)| (Position::from(square), Piece::from(piece)))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pieces = self.piece_map();
        for rank in (1..=8).rev() {
            let row: Vec<String> = (1..=8)
                .map(|file| {
                    pieces
                        .get(&Position { file, rank })
                        .map_or('.', |piece| piece.char())
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
