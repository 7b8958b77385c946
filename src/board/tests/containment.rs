use crate::board::{AttackTables, Bitboard, Color, Piece, Square, ATTACK_TABLES};

/// Largest file distance a single move of `piece` can cover.
fn max_file_step(piece: Piece) -> u8 {
    match piece {
        Piece::Pawn | Piece::King => 1,
        Piece::Knight => 2,
        Piece::Bishop | Piece::Rook | Piece::Queen => 7,
    }
}

#[test]
fn test_leapers_never_wrap() {
    let t = &*ATTACK_TABLES;
    for color in Color::BOTH {
        for piece in [Piece::Pawn, Piece::Knight, Piece::King] {
            for from in Square::all() {
                for to in t.moves(piece, color, from).iter() {
                    assert!(
                        from.file().abs_diff(to.file()) <= max_file_step(piece),
                        "{piece:?} {from}->{to}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_a_file_rook_never_reaches_h_file_of_other_rank() {
    let t = &*ATTACK_TABLES;
    for row in 0..8 {
        let a = Square::from_coords(0, row).unwrap();
        let rank = Bitboard::row_mask(row);
        assert!(t.rook(a).contains(Square::from_coords(7, row).unwrap()));
        // a leftward step from the A file would land on the H file one row up
        let h_file_elsewhere = Bitboard::FILE_H & !rank;
        assert!((t.rook(a) & h_file_elsewhere).is_empty(), "{a}");
    }
}

#[test]
fn test_h_file_pieces_never_reach_a_file_by_one_step() {
    let t = &*ATTACK_TABLES;
    for from in Bitboard::FILE_H.iter() {
        let reach = t.king(from) | t.white_pawn(from) | t.black_pawn(from);
        assert!((reach & Bitboard::FILE_A).is_empty(), "{from}");
        assert!((t.knight(from) & (Bitboard::FILE_A | Bitboard::FILE_B)).is_empty());
    }
}

#[test]
fn test_sliders_stay_on_lines() {
    let t = &*ATTACK_TABLES;
    for from in Square::all() {
        for to in t.queen(from).iter() {
            let df = from.file().abs_diff(to.file());
            let dr = from.row().abs_diff(to.row());
            assert!(df == 0 || dr == 0 || df == dr, "{from}->{to}");
        }
        for to in t.bishop(from).iter() {
            assert_eq!(
                from.file().abs_diff(to.file()),
                from.row().abs_diff(to.row()),
                "{from}->{to}"
            );
        }
    }
}

#[test]
fn test_fresh_tables_match_shared_tables() {
    let fresh = AttackTables::new();
    for sq in Square::all() {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                assert_eq!(fresh.moves(piece, color, sq), ATTACK_TABLES.moves(piece, color, sq));
            }
        }
    }
}
