//! Precomputed move tables.
//!
//! Every table maps a square index to the set of squares a piece standing
//! there could reach on an empty board. Sliding rays stop at the board edge
//! but never at pieces; occupancy is applied afterwards by the move filter.
//!
//! The tables are built once, on first use, and shared read-only.

mod tables;

use once_cell::sync::Lazy;

use super::{Bitboard, Color, Piece, Square};

/// Process-wide tables, built on first access.
pub static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::new);

/// One-square steps in index space. Up is toward rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Direction::Up => -8,
            Direction::Down => 8,
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::UpLeft => -9,
            Direction::UpRight => -7,
            Direction::DownLeft => 7,
            Direction::DownRight => 9,
        }
    }

    /// Squares from which a step in this direction would wrap to the other
    /// side of the board.
    #[inline]
    #[must_use]
    pub const fn edge(self) -> Bitboard {
        match self {
            Direction::Left | Direction::UpLeft | Direction::DownLeft => Bitboard::FILE_A,
            Direction::Right | Direction::UpRight | Direction::DownRight => Bitboard::FILE_H,
            Direction::Up | Direction::Down => Bitboard::EMPTY,
        }
    }

    /// True when stepping increases the square index
    #[inline]
    #[must_use]
    pub const fn is_increasing(self) -> bool {
        self.delta() > 0
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::UpLeft => 4,
            Direction::UpRight => 5,
            Direction::DownLeft => 6,
            Direction::DownRight => 7,
        }
    }

    /// One step from `sq`, or `None` at a file edge or off the board
    #[inline]
    #[must_use]
    pub fn step(self, sq: Square) -> Option<Square> {
        if self.edge().contains(sq) {
            return None;
        }
        sq.offset(self.delta())
    }
}

/// The seven piece tables plus the per-direction rays they are built from.
#[derive(Clone, Debug)]
pub struct AttackTables {
    white_pawn: [Bitboard; 64],
    black_pawn: [Bitboard; 64],
    knight: [Bitboard; 64],
    bishop: [Bitboard; 64],
    rook: [Bitboard; 64],
    queen: [Bitboard; 64],
    king: [Bitboard; 64],
    rays: [[Bitboard; 64]; 8],
}

impl AttackTables {
    /// Build every table. Pure; prefer [`ATTACK_TABLES`] over calling this.
    #[must_use]
    pub fn new() -> Self {
        let rays = tables::generate_rays();
        let bishop = tables::combine_rays(&rays, &Direction::DIAGONAL);
        let rook = tables::combine_rays(&rays, &Direction::ORTHOGONAL);
        let queen = tables::combine_rays(&rays, &Direction::ALL);

        let tables = AttackTables {
            white_pawn: tables::generate_pawn_moves(Color::White),
            black_pawn: tables::generate_pawn_moves(Color::Black),
            knight: tables::generate_knight_moves(),
            bishop,
            rook,
            queen,
            king: tables::generate_king_moves(),
            rays,
        };
        log::debug!("attack tables built");
        tables
    }

    #[inline]
    #[must_use]
    pub fn white_pawn(&self, sq: Square) -> Bitboard {
        self.white_pawn[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn black_pawn(&self, sq: Square) -> Bitboard {
        self.black_pawn[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn knight(&self, sq: Square) -> Bitboard {
        self.knight[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn bishop(&self, sq: Square) -> Bitboard {
        self.bishop[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn rook(&self, sq: Square) -> Bitboard {
        self.rook[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn queen(&self, sq: Square) -> Bitboard {
        self.queen[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn king(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    /// Empty-board ray from `sq` in one direction, excluding `sq`
    #[inline]
    #[must_use]
    pub fn ray(&self, dir: Direction, sq: Square) -> Bitboard {
        self.rays[dir.index()][sq.index()]
    }

    /// Table lookup for any piece. Color only matters for pawns.
    #[must_use]
    pub fn moves(&self, piece: Piece, color: Color, sq: Square) -> Bitboard {
        match (piece, color) {
            (Piece::Pawn, Color::White) => self.white_pawn(sq),
            (Piece::Pawn, Color::Black) => self.black_pawn(sq),
            (Piece::Knight, _) => self.knight(sq),
            (Piece::Bishop, _) => self.bishop(sq),
            (Piece::Rook, _) => self.rook(sq),
            (Piece::Queen, _) => self.queen(sq),
            (Piece::King, _) => self.king(sq),
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}
