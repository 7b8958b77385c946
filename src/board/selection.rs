//! Click-driven move selection.
//!
//! First click on an own piece selects it; a second click either moves
//! focus to another own piece, commits a move to a highlighted square, or
//! is discarded. Clicking off the board while a piece is selected clears
//! the selection.

use super::movegen::can_make_move;
use super::{Bitboard, Board, MoveRecord, Square};

/// Selection state between clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// An own piece is selected and `moves` holds its filtered destinations
    Selected { square: Square, moves: Bitboard },
}

/// Result of feeding one click to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Idle click off the board or on a square without an own piece
    Ignored,
    /// A piece was picked up
    Selected(Square),
    /// Another own piece took the focus
    FocusChanged(Square),
    /// Off-board click dropped the selection
    Deselected,
    /// The target is not a possible move; the selection is kept
    Rejected(Square),
    /// The move was committed and the machine is idle again
    Moved(MoveRecord),
}

impl Selection {
    /// 0 when idle, 1 while a piece is selected.
    #[must_use]
    pub fn click_count(&self) -> u8 {
        match self {
            Selection::Idle => 0,
            Selection::Selected { .. } => 1,
        }
    }

    /// The selected square, if any.
    #[must_use]
    pub fn focus(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    /// Highlighted destinations; empty when idle.
    #[must_use]
    pub fn moves(&self) -> Bitboard {
        match self {
            Selection::Idle => Bitboard::EMPTY,
            Selection::Selected { moves, .. } => *moves,
        }
    }

    pub fn reset(&mut self) {
        *self = Selection::Idle;
    }

    /// Advance by one click. `clicked` is `None` for clicks off the board.
    /// A committed move is executed on `board` before returning.
    pub fn click(&mut self, board: &mut Board, clicked: Option<Square>) -> ClickOutcome {
        match (*self, clicked) {
            (Selection::Idle, None) => ClickOutcome::Ignored,
            (Selection::Idle, Some(sq)) => {
                if !board.is_own_piece(sq) {
                    log::trace!("ignoring click on {sq}");
                    return ClickOutcome::Ignored;
                }
                self.select(board, sq);
                ClickOutcome::Selected(sq)
            }
            (Selection::Selected { .. }, None) => {
                self.reset();
                ClickOutcome::Deselected
            }
            (Selection::Selected { square, moves }, Some(sq)) => {
                if board.is_own_piece(sq) {
                    self.select(board, sq);
                    return ClickOutcome::FocusChanged(sq);
                }
                if !can_make_move(sq, moves) {
                    log::trace!("rejected {square}->{sq}");
                    return ClickOutcome::Rejected(sq);
                }
                let record = board.execute_move(square, sq);
                self.reset();
                ClickOutcome::Moved(record)
            }
        }
    }

    fn select(&mut self, board: &Board, sq: Square) {
        let moves = board.possible_moves(sq);
        log::debug!("selected {sq}, {} possible moves", moves.popcount());
        *self = Selection::Selected { square: sq, moves };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_idle_ignores_empty_and_opponent_squares() {
        let mut board = Board::new();
        let mut selection = Selection::Idle;
        assert_eq!(selection.click(&mut board, None), ClickOutcome::Ignored);
        assert_eq!(selection.click(&mut board, Some(sq("e4"))), ClickOutcome::Ignored);
        assert_eq!(selection.click(&mut board, Some(sq("e7"))), ClickOutcome::Ignored);
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn test_select_then_move() {
        let mut board = Board::new();
        let mut selection = Selection::Idle;
        assert_eq!(
            selection.click(&mut board, Some(sq("e2"))),
            ClickOutcome::Selected(sq("e2"))
        );
        assert_eq!(selection.click_count(), 1);
        assert_eq!(selection.focus(), Some(sq("e2")));
        assert_eq!(selection.moves(), board.possible_moves(sq("e2")));

        let outcome = selection.click(&mut board, Some(sq("e4")));
        assert!(matches!(outcome, ClickOutcome::Moved(MoveRecord { piece: Piece::Pawn, .. })));
        assert_eq!(selection, Selection::Idle);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_focus_change() {
        let mut board = Board::new();
        let mut selection = Selection::Idle;
        selection.click(&mut board, Some(sq("e2")));
        assert_eq!(
            selection.click(&mut board, Some(sq("g1"))),
            ClickOutcome::FocusChanged(sq("g1"))
        );
        assert_eq!(selection.focus(), Some(sq("g1")));
        assert_eq!(selection.moves(), board.possible_moves(sq("g1")));
    }

    #[test]
    fn test_off_board_click_deselects() {
        let mut board = Board::new();
        let mut selection = Selection::Idle;
        selection.click(&mut board, Some(sq("b1")));
        assert_eq!(selection.click(&mut board, None), ClickOutcome::Deselected);
        assert_eq!(selection, Selection::Idle);
        assert_eq!(selection.moves(), Bitboard::EMPTY);
    }

    #[test]
    fn test_illegal_knight_target_keeps_selection() {
        let mut board = Board::new();
        let before = board.clone();
        let mut selection = Selection::Idle;
        selection.click(&mut board, Some(sq("b1")));
        let selected = selection;

        assert_eq!(
            selection.click(&mut board, Some(sq("b3"))),
            ClickOutcome::Rejected(sq("b3"))
        );
        assert_eq!(selection, selected);
        assert_eq!(selection.focus(), Some(sq("b1")));
        assert_eq!(board, before);

        // the discarded click does not count toward the next one
        assert!(matches!(
            selection.click(&mut board, Some(sq("c3"))),
            ClickOutcome::Moved(_)
        ));
    }

    #[test]
    fn test_opponent_piece_cannot_be_captured_out_of_range() {
        let mut board = Board::new();
        let mut selection = Selection::Idle;
        selection.click(&mut board, Some(sq("d1")));
        assert_eq!(
            selection.click(&mut board, Some(sq("d8"))),
            ClickOutcome::Rejected(sq("d8"))
        );
        assert_eq!(board, Board::new());
    }
}
