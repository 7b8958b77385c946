//! Error types for board operations.

use std::fmt;

/// Malformed FEN input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly six space-separated fields
    WrongFieldCount { found: usize },
    /// Placement must describe exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank's digits and letters do not add up to eight squares
    BadRankLength { rank: usize, squares: usize },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// The same castling right listed twice
    DuplicateCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not a base-10 integer
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not a base-10 integer
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::DuplicateCastling { char } => {
                write!(f, "Castling right '{char}' listed more than once")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid half-move clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid full-move number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0-63
    IndexOutOfBounds { index: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_rank_length() {
        let err = FenError::BadRankLength { rank: 3, squares: 9 };
        let text = err.to_string();
        assert!(text.contains('3'));
        assert!(text.contains('9'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_clock() {
        let err = FenError::InvalidHalfmoveClock {
            found: "x1".to_string(),
        };
        assert!(err.to_string().contains("x1"));
    }

    #[test]
    fn test_square_error_display() {
        assert!(SquareError::IndexOutOfBounds { index: 70 }
            .to_string()
            .contains("70"));
        assert!(SquareError::InvalidNotation {
            notation: "xyz".to_string()
        }
        .to_string()
        .contains("xyz"));
    }
}
