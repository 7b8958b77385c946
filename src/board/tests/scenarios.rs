use super::{play, sq};
use crate::board::{Bitboard, Board, ClickOutcome, Color, Piece, Selection, STARTING_FEN};

#[test]
fn test_opening_sequence_fen() {
    let mut board = Board::new();
    let mut selection = Selection::Idle;
    play(&mut board, &mut selection, "e2", "e4");
    play(&mut board, &mut selection, "e7", "e5");
    play(&mut board, &mut selection, "g1", "f3");
    play(&mut board, &mut selection, "b8", "c6");
    play(&mut board, &mut selection, "f1", "b5");

    assert_eq!(
        board.to_fen(),
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"
    );
    assert_eq!(Board::try_from_fen(&board.to_fen()).unwrap(), board);
}

#[test]
fn test_round_trip_after_captures() {
    let mut board = Board::new();
    let mut selection = Selection::Idle;
    play(&mut board, &mut selection, "e2", "e4");
    play(&mut board, &mut selection, "d7", "d5");
    play(&mut board, &mut selection, "e4", "d5");
    play(&mut board, &mut selection, "d8", "d5");
    play(&mut board, &mut selection, "b1", "c3");
    play(&mut board, &mut selection, "d5", "a2");
    play(&mut board, &mut selection, "a1", "a2");

    let fen = board.to_fen();
    assert_eq!(
        fen,
        "rnb1kbnr/ppp1pppp/8/8/8/2N5/RPPP1PPP/2BQKBNR b Kkq - 0 4"
    );
    let decoded = Board::try_from_fen(&fen).unwrap();
    assert_eq!(decoded, board);
    assert_eq!(decoded.to_fen(), fen);
    assert!(board.pieces_of(Color::Black, Piece::Queen).is_empty());
}

#[test]
fn test_fifty_move_draw_by_knight_shuffle() {
    let mut board = Board::try_from_fen("4k1n1/8/8/8/8/8/8/4K1N1 w - - 0 1").unwrap();
    let mut selection = Selection::Idle;
    let white = [("g1", "f3"), ("f3", "g1")];
    let black = [("g8", "f6"), ("f6", "g8")];

    for half_move in 0..50u32 {
        assert!(!board.is_fifty_move_draw(), "drawn early at {half_move}");
        let (from, to) = if half_move % 2 == 0 {
            white[(half_move as usize / 2) % 2]
        } else {
            black[(half_move as usize / 2) % 2]
        };
        play(&mut board, &mut selection, from, to);
        if half_move == 48 {
            assert_eq!(board.halfmove_clock(), 49);
            assert!(!board.is_fifty_move_draw());
        }
    }
    assert_eq!(board.halfmove_clock(), 50);
    assert!(board.is_fifty_move_draw());
    assert_eq!(board.fullmove_number(), 26);
}

#[test]
fn test_pawn_move_resets_clock() {
    let mut board = Board::try_from_fen("4k3/p7/8/8/8/8/8/4K1N1 b - - 30 40").unwrap();
    let mut selection = Selection::Idle;
    play(&mut board, &mut selection, "a7", "a6");
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 41);
    play(&mut board, &mut selection, "g1", "f3");
    assert_eq!(board.halfmove_clock(), 1);
}

#[test]
fn test_illegal_target_leaves_bitboards_alone() {
    let mut board = Board::try_from_fen(STARTING_FEN).unwrap();
    let before = board.clone();
    let mut selection = Selection::Idle;
    selection.click(&mut board, Some(sq("g1")));
    for target in ["g3", "e2", "h1", "g4", "a8"] {
        let outcome = selection.click(&mut board, Some(sq(target)));
        if target == "e2" || target == "h1" {
            // own pieces take the focus instead
            assert!(matches!(outcome, ClickOutcome::FocusChanged(_)));
            selection.click(&mut board, Some(sq("g1")));
        } else {
            assert_eq!(outcome, ClickOutcome::Rejected(sq(target)));
        }
        assert_eq!(selection.focus(), Some(sq("g1")));
    }
    assert_eq!(board, before);
}

#[test]
fn test_blocked_pawn_keeps_captures() {
    // White pawn e2, black knight e3, black pawn d3
    let mut board = Board::try_from_fen("4k3/8/8/8/8/3pn3/4P3/4K3 w - - 0 1").unwrap();
    let moves = board.possible_moves(sq("e2"));
    assert!(!moves.contains(sq("e3")));
    assert!(!moves.contains(sq("e4")));
    assert!(moves.contains(sq("d3")));
    assert!(!moves.contains(sq("f3")));

    let mut selection = Selection::Idle;
    play(&mut board, &mut selection, "e2", "d3");
    assert_eq!(board.pieces_of(Color::White, Piece::Pawn), Bitboard::from_square(sq("d3")));
}

#[test]
fn test_composites_track_every_move() {
    let mut board = Board::new();
    let mut selection = Selection::Idle;
    for (from, to) in [("d2", "d4"), ("g8", "f6"), ("c1", "g5"), ("f6", "e4"), ("g5", "e7")] {
        play(&mut board, &mut selection, from, to);
        let union = Color::BOTH
            .iter()
            .flat_map(|c| Piece::ALL.iter().map(move |p| (*c, *p)))
            .fold(Bitboard::EMPTY, |acc, (c, p)| acc | board.pieces_of(c, p));
        assert_eq!(board.all_occupied(), union);
        assert_eq!(
            board.all_occupied(),
            board.occupied_by(Color::White) | board.occupied_by(Color::Black)
        );
    }
}
