use super::state::FIFTY_MOVE_LIMIT;
use super::{Board, CastlingRight, Color, Piece, Square};

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// The half-move clock hit the fifty-move limit on this move
    pub fifty_move_draw: bool,
}

impl Board {
    /// Commit the move `from` -> `to` for the piece standing on `from`.
    ///
    /// Bitboards, composites, counters and side to move change together;
    /// there is no undo. The caller is responsible for having validated the
    /// target against [`Board::possible_moves`].
    ///
    /// # Panics
    /// Panics if `from` is empty or `to` holds a piece of the mover's color.
    pub fn execute_move(&mut self, from: Square, to: Square) -> MoveRecord {
        let Some((color, piece)) = self.piece_at(from) else {
            panic!("execute_move: no piece on {from}");
        };
        let captured = match self.piece_at(to) {
            Some((target_color, _)) if target_color == color => {
                panic!("execute_move: {to} holds a {color} piece");
            }
            Some((_, target)) => Some(target),
            None => None,
        };

        self.take_piece(from, color, piece);
        self.put_piece(to, color, piece);
        if let Some(target) = captured {
            self.take_piece(to, color.opponent(), target);
        }
        self.refresh_occupancy();

        self.update_castling_rights(from, to, color, piece);
        self.en_passant_target = if piece == Piece::Pawn && from.row().abs_diff(to.row()) == 2 {
            from.offset(color.pawn_push())
        } else {
            None
        };

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        let fifty_move_draw = self.halfmove_clock == FIFTY_MOVE_LIMIT;
        if fifty_move_draw {
            self.fifty_move_draw = true;
        }

        self.side_to_move = color.opponent();
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        debug_assert!(self.is_consistent(), "bitboards inconsistent after {from}{to}");
        log::debug!("{color} {piece:?} {from}->{to} captured={captured:?}");

        MoveRecord {
            from,
            to,
            color,
            piece,
            captured,
            fifty_move_draw,
        }
    }

    /// A king move drops both of its side's rights; anything leaving or
    /// landing on a rook's home corner drops that corner's right.
    fn update_castling_rights(&mut self, from: Square, to: Square, color: Color, piece: Piece) {
        if piece == Piece::King {
            self.castling_rights.revoke_color(color);
        }
        for right in CastlingRight::ALL {
            let corner = right.rook_square();
            if corner == from || corner == to {
                self.castling_rights.remove(right);
            }
        }
    }
}
