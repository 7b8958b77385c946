pub mod board;
pub mod driver;
pub mod render;
pub mod session;

pub use board::{Bitboard, Board, ClickOutcome, Color, Piece, Selection, Square};
pub use render::{Frame, Renderer, TextRenderer};
pub use session::Game;
