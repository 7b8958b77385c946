//! Board module tests.
//!
//! - `scenarios.rs` - multi-move games driven through the selection machine
//! - `containment.rs` - no table entry wraps around a board edge
//! - `proptest.rs` - property-based tests over random play

mod containment;
mod scenarios;

use super::{Board, Color, Selection, Square};

/// Parse a square name, for test readability.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Click `from` then `to` and assert the move was committed.
pub(super) fn play(board: &mut Board, selection: &mut Selection, from: &str, to: &str) {
    let mover = board.side_to_move();
    selection.click(board, Some(sq(from)));
    let outcome = selection.click(board, Some(sq(to)));
    assert!(
        matches!(outcome, super::ClickOutcome::Moved(_)),
        "{from}{to} by {mover}: {outcome:?}"
    );
    assert_ne!(board.side_to_move(), mover);
    assert!(board.is_consistent());
}

/// Every square holding a piece of `color`.
pub(super) fn pieces_of_color(board: &Board, color: Color) -> Vec<Square> {
    board.occupied_by(color).iter().collect()
}
