use crate::board::{Bitboard, Color, Square};

/// Shape a pawn's table entry to the position.
///
/// Diagonal targets survive only when an opponent piece stands on them.
/// Forward targets are blocked by any piece: if the square directly ahead
/// is occupied both advances go, if only the second one is occupied only
/// the double advance goes.
#[must_use]
pub fn filter_pawn(
    sq: Square,
    pseudo: Bitboard,
    color: Color,
    occupied: Bitboard,
    opponent: Bitboard,
) -> Bitboard {
    let file = Bitboard::file_mask(sq.file());
    let forward = pseudo & file;
    let diagonals = pseudo & !file;

    let mut moves = pseudo & !(diagonals & !opponent);

    let push = color.pawn_push();
    if let Some(single) = sq.offset(push) {
        if occupied.contains(single) {
            moves &= !forward;
        } else if let Some(double) = single.offset(push) {
            if occupied.contains(double) {
                moves = moves.without(double);
            }
        }
    }
    moves
}
