//! Move filtering.
//!
//! Narrows a raw table lookup to the squares a piece can actually reach in
//! the current position. Legality stops at occupancy: moves that leave the
//! mover's king attacked are not detected.

mod pawns;
mod sliders;

pub use pawns::filter_pawn;
pub use sliders::filter_sliding;

use super::attack_tables::{AttackTables, ATTACK_TABLES};
use super::{Bitboard, Board, Piece, Square};

/// A piece may never land on a square held by its own side.
#[inline]
#[must_use]
pub fn filter_own_occupancy(moves: Bitboard, own: Bitboard) -> Bitboard {
    moves & !own
}

/// True if `target` is one of `legal_moves`.
#[inline]
#[must_use]
pub fn can_make_move(target: Square, legal_moves: Bitboard) -> bool {
    legal_moves.contains(target)
}

impl Board {
    /// Filtered destinations for the piece on `sq`, whichever side owns it.
    /// Empty if the square is empty.
    #[must_use]
    pub fn possible_moves(&self, sq: Square) -> Bitboard {
        self.possible_moves_with(&ATTACK_TABLES, sq)
    }

    /// [`Board::possible_moves`] against an explicit set of tables.
    #[must_use]
    pub fn possible_moves_with(&self, tables: &AttackTables, sq: Square) -> Bitboard {
        let Some((color, piece)) = self.piece_at(sq) else {
            return Bitboard::EMPTY;
        };
        let pseudo = tables.moves(piece, color, sq);
        let shaped = match piece {
            Piece::Pawn => filter_pawn(
                sq,
                pseudo,
                color,
                self.all_occupied,
                self.occupied_by(color.opponent()),
            ),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                filter_sliding(tables, sq, pseudo, self.all_occupied)
            }
            Piece::Knight | Piece::King => pseudo,
        };
        filter_own_occupancy(shaped, self.occupied_by(color))
    }
}
