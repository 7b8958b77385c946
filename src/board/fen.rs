use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::state::FIFTY_MOVE_LIMIT;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a board position from a six-field FEN string.
    ///
    /// Every field is validated; a malformed string never yields a
    /// partially filled board.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parts[2].parse()?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            name => Some(
                name.parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: name.to_string(),
                    })?,
            ),
        };

        board.halfmove_clock =
            parse_counter(parts[4]).ok_or_else(|| FenError::InvalidHalfmoveClock {
                found: parts[4].to_string(),
            })?;
        board.fullmove_number =
            parse_counter(parts[5]).ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;
        board.fifty_move_draw = board.halfmove_clock >= FIFTY_MOVE_LIMIT;

        board.refresh_occupancy();
        Ok(board)
    }

    /// The placement field alone: ranks 8 to 1 separated by `/`.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        let mut empty = 0;
        for sq in Square::all() {
            if sq.file() == 0 && sq.row() > 0 {
                if empty > 0 {
                    out.push_str(&empty.to_string());
                    empty = 0;
                }
                out.push('/');
            }
            if !self.all_occupied.contains(sq) {
                empty += 1;
                continue;
            }
            let Some((color, piece)) = self.piece_at(sq) else {
                unreachable!("{sq} is occupied but no piece board owns it");
            };
            if empty > 0 {
                out.push_str(&empty.to_string());
                empty = 0;
            }
            out.push(piece.to_fen_char(color));
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        out
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} {} {}",
            self.placement(),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in (0u8..).zip(ranks) {
        let rank = usize::from(8 - row);
        let mut file = 0usize;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let (color, piece) =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankLength {
                            rank,
                            squares: file + 1,
                        });
                    }
                    board.put_piece(Square(file as u8 + row * 8), color, piece);
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank,
                squares: file,
            });
        }
    }
    Ok(())
}

/// A move counter: ASCII digits only, no sign.
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTING_FEN;

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(STARTING_FEN).unwrap();
        assert_eq!(board.to_fen(), STARTING_FEN);
        assert_eq!(Board::try_from_fen(&board.to_fen()).unwrap(), board);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some("e3".parse().unwrap()));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_placement_field() {
        let board = Board::new();
        assert_eq!(board.placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn test_digits_skip_squares() {
        let board = Board::try_from_fen("4k3/8/8/3Q4/8/8/8/4K3 w - - 12 40").unwrap();
        let d5: Square = "d5".parse().unwrap();
        assert_eq!(board.piece_at(d5), Some((Color::White, Piece::Queen)));
        assert_eq!(board.all_occupied().popcount(), 3);
        assert_eq!(board.halfmove_clock(), 12);
        assert_eq!(board.fullmove_number(), 40);
        assert!(board.castling_rights().is_empty());
    }

    #[test]
    fn test_castling_order_preserved() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w qKQ - 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.castling_rights().to_string(), "qKQ");
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fifty_move_flag_from_clock() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 50 80").unwrap();
        assert!(board.is_fifty_move_draw());
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 49 80").unwrap();
        assert!(!board.is_fifty_move_draw());
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert!(matches!(result, Err(FenError::WrongFieldCount { found: 4 })));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::WrongRankCount { found: 7 })));
    }

    #[test]
    fn test_fen_error_short_rank() {
        let result = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(
            result,
            Err(FenError::BadRankLength { rank: 7, squares: 7 })
        ));
    }

    #[test]
    fn test_fen_error_long_rank() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: '9' })));

        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1");
        assert!(matches!(
            result,
            Err(FenError::BadRankLength { rank: 1, squares: 9 })
        ));

        let result = Board::try_from_fen("rnbqkbnr/pppppppp/54/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(
            result,
            Err(FenError::BadRankLength { rank: 6, squares: 9 })
        ));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result = Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_castling() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQKq - 0 1");
        assert!(matches!(result, Err(FenError::DuplicateCastling { char: 'K' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_counters() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -3");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
    }

    #[test]
    fn test_fen_error_signed_counters() {
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - +5 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 5 +1");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 4294967296 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));

        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 05 1").unwrap();
        assert_eq!(board.halfmove_clock(), 5);
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.to_string(), STARTING_FEN);
    }
}
