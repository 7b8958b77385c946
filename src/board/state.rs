use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Full game state: twelve piece bitboards, their composites and the FEN
/// metadata fields.
///
/// The piece boards are indexed `[color][piece]` and never share a bit.
/// `occupied` and `all_occupied` are derived from them by
/// [`Board::refresh_occupancy`] at the end of every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) fifty_move_draw: bool,
}

/// Composite boards for a set of piece boards: (per-color, all).
#[must_use]
pub(crate) fn composite_occupancy(pieces: &[[Bitboard; 6]; 2]) -> ([Bitboard; 2], Bitboard) {
    let white = pieces[0].iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb);
    let black = pieces[1].iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb);
    ([white, black], white | black)
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in (0u8..).zip(BACK_RANK) {
            board.put_piece(Square(file), Color::Black, piece);
            board.put_piece(Square(8 + file), Color::Black, Piece::Pawn);
            board.put_piece(Square(48 + file), Color::White, Piece::Pawn);
            board.put_piece(Square(56 + file), Color::White, piece);
        }
        board.castling_rights = CastlingRights::all();
        board.refresh_occupancy();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            fifty_move_draw: false,
        }
    }

    /// Set a bit on one piece board. Composites are left stale until
    /// `refresh_occupancy` runs.
    pub(crate) fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let board = &mut self.pieces[color.index()][piece.index()];
        *board = board.with(sq);
    }

    pub(crate) fn take_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let board = &mut self.pieces[color.index()][piece.index()];
        *board = board.without(sq);
    }

    /// Recompute the three composite boards from the twelve piece boards.
    pub(crate) fn refresh_occupancy(&mut self) {
        let (occupied, all) = composite_occupancy(&self.pieces);
        self.occupied = occupied;
        self.all_occupied = all;
    }

    /// Piece standing on `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[0].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()].contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.all_occupied
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Raised once the half-move clock reaches the fifty-move limit.
    #[inline]
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.fifty_move_draw
    }

    /// True if the side to move has a piece on `sq`
    #[inline]
    #[must_use]
    pub fn is_own_piece(&self, sq: Square) -> bool {
        self.occupied_by(self.side_to_move).contains(sq)
    }

    /// True if the side not to move has a piece on `sq`
    #[inline]
    #[must_use]
    pub fn is_opponent_piece(&self, sq: Square) -> bool {
        self.occupied_by(self.side_to_move.opponent()).contains(sq)
    }

    /// Check the bitboard invariants: piece boards pairwise disjoint and
    /// composites equal to the union of their piece boards.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces.iter().flatten() {
            if !(seen & *bb).is_empty() {
                return false;
            }
            seen |= *bb;
        }
        let (occupied, all) = composite_occupancy(&self.pieces);
        occupied == self.occupied && all == self.all_occupied && all == seen
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
