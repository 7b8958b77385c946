//! Board representation and move handling for a two-player game.
//!
//! Twelve piece bitboards plus FEN metadata, precomputed move tables,
//! occupancy filtering, a move executor and the click selection machine.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(board.possible_moves(e2).contains(e4));
//! board.execute_move(e2, e4);
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod attack_tables;
mod error;
mod execute;
mod fen;
mod geometry;
mod movegen;
mod selection;
mod state;
mod types;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use attack_tables::{AttackTables, Direction, ATTACK_TABLES};
pub use error::{FenError, SquareError};
pub use execute::MoveRecord;
pub use geometry::BoardGeometry;
pub use movegen::{can_make_move, filter_own_occupancy, filter_pawn, filter_sliding};
pub use selection::{ClickOutcome, Selection};
pub use state::{Board, FIFTY_MOVE_LIMIT, STARTING_FEN};
pub use types::{Bitboard, BitboardIter, CastlingRight, CastlingRights, Color, Piece, Square};
