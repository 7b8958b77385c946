//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square as a 0-63 index, a8 first
//! - `Bitboard` - 64-bit set of squares
//! - `CastlingRights` - ordered castling bookkeeping

mod bitboard;
mod castling;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastlingRight, CastlingRights};
pub use piece::{Color, Piece};
pub use square::Square;
