//! Table generators. Wraparound is rejected with file masks before a step
//! is taken; the 0..64 range is checked by `Square::offset`.

use super::Direction;
use crate::board::{Bitboard, Color, Square};

/// Knight jumps paired with the files they may not start from.
const KNIGHT_JUMPS: [(i8, Bitboard); 8] = [
    (-17, Bitboard::FILE_A),
    (-15, Bitboard::FILE_H),
    (-10, Bitboard(Bitboard::FILE_A.0 | Bitboard::FILE_B.0)),
    (-6, Bitboard(Bitboard::FILE_G.0 | Bitboard::FILE_H.0)),
    (6, Bitboard(Bitboard::FILE_A.0 | Bitboard::FILE_B.0)),
    (10, Bitboard(Bitboard::FILE_G.0 | Bitboard::FILE_H.0)),
    (15, Bitboard::FILE_A),
    (17, Bitboard::FILE_H),
];

/// Apply each offset whose starting-file mask does not contain `sq`.
fn leaper_moves(sq: Square, offsets: impl IntoIterator<Item = (i8, Bitboard)>) -> Bitboard {
    let origin = Bitboard::from_square(sq);
    offsets
        .into_iter()
        .filter(|(_, forbidden)| (origin & *forbidden).is_empty())
        .filter_map(|(delta, _)| sq.offset(delta))
        .collect()
}

pub(super) fn generate_knight_moves() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        table[sq.index()] = leaper_moves(sq, KNIGHT_JUMPS);
    }
    table
}

pub(super) fn generate_king_moves() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        let steps = Direction::ALL.iter().map(|dir| (dir.delta(), dir.edge()));
        table[sq.index()] = leaper_moves(sq, steps);
    }
    table
}

/// Pawn tables cover rows 1-6 only; pawns on the back ranks get nothing.
pub(super) fn generate_pawn_moves(color: Color) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let push = color.pawn_push();
    let captures = match color {
        Color::White => [Direction::UpLeft, Direction::UpRight],
        Color::Black => [Direction::DownLeft, Direction::DownRight],
    };

    for sq in Square::all().filter(|sq| (1..7).contains(&sq.row())) {
        let mut moves = Bitboard::EMPTY;
        if let Some(single) = sq.offset(push) {
            moves = moves.with(single);
            if sq.row() == color.pawn_home_row() {
                if let Some(double) = single.offset(push) {
                    moves = moves.with(double);
                }
            }
        }
        for dir in captures {
            if let Some(target) = dir.step(sq) {
                moves = moves.with(target);
            }
        }
        table[sq.index()] = moves;
    }
    table
}

/// Walk from `sq` one step at a time until the next step would leave the board.
fn walk_ray(sq: Square, dir: Direction) -> Bitboard {
    let mut ray = Bitboard::EMPTY;
    let mut current = sq;
    while let Some(next) = dir.step(current) {
        ray = ray.with(next);
        current = next;
    }
    ray
}

pub(super) fn generate_rays() -> [[Bitboard; 64]; 8] {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for dir in Direction::ALL {
        for sq in Square::all() {
            rays[dir.index()][sq.index()] = walk_ray(sq, dir);
        }
    }
    rays
}

pub(super) fn combine_rays(rays: &[[Bitboard; 64]; 8], dirs: &[Direction]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = dirs
            .iter()
            .fold(Bitboard::EMPTY, |acc, dir| acc | rays[dir.index()][i]);
    }
    table
}
