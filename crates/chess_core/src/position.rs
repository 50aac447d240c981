use std::fmt;

/// A board square, both coordinates 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub rank: u8,  // 1-8
    pub file: u8,  // a-h (1-8)
}

impl Position {
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return None,
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            file: (file as u8) - b'a' + 1,
            rank: (rank as u8) - b'0',
        })
    }

    /// True for the dark squares (a1, c1, ...)
    pub fn is_dark(&self) -> bool {
        (self.file + self.rank) % 2 == 0
    }
}

impl From<shakmaty::Square> for Position {
    fn from(square: shakmaty::Square) -> Self {
        Self {
            file: square.file().to_u32() as u8 + 1,
            rank: square.rank().to_u32() as u8 + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_round_trip() {
        let pos = Position::from_algebraic("e4").unwrap();
        assert_eq!(pos, Position { file: 5, rank: 4 });
        assert_eq!(pos.to_string(), "e4");
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Position::from_algebraic("i1"), None);
        assert_eq!(Position::from_algebraic("a9"), None);
        assert_eq!(Position::from_algebraic("a10"), None);
        assert_eq!(Position::new(0, 3), None);
    }

    #[test]
    fn matches_shakmaty_squares() {
        assert_eq!(Position::from(shakmaty::Square::A1), Position { file: 1, rank: 1 });
        assert_eq!(Position::from(shakmaty::Square::H8), Position { file: 8, rank: 8 });
        assert!(Position::from(shakmaty::Square::A1).is_dark());
    }
}
