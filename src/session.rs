//! One game in progress: board, click selection and screen geometry.
//!
//! Events are handled to completion one at a time. Once the fifty-move
//! flag is raised the game is over and clicks are ignored until a new
//! position is loaded.

use crate::board::{
    Board, BoardGeometry, ClickOutcome, FenError, Selection, Square, STARTING_FEN,
};
use crate::render::Frame;

pub struct Game {
    board: Board,
    selection: Selection,
    geometry: BoardGeometry,
    starting_fen: String,
    /// Placement field of `board`, refreshed after every change
    placement: String,
}

impl Game {
    /// A game from the standard starting position with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Game::with_board(Board::new(), BoardGeometry::default())
    }

    /// A game starting from `fen`.
    ///
    /// # Errors
    /// Returns the decode error if `fen` is malformed.
    pub fn from_fen(fen: &str, geometry: BoardGeometry) -> Result<Self, FenError> {
        let board = Board::try_from_fen(fen)?;
        let mut game = Game::with_board(board, geometry);
        game.starting_fen = fen.to_string();
        Ok(game)
    }

    fn with_board(board: Board, geometry: BoardGeometry) -> Self {
        let placement = board.placement();
        Game {
            board,
            selection: Selection::Idle,
            geometry,
            starting_fen: STARTING_FEN.to_string(),
            placement,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_fifty_move_draw()
    }

    /// Feed a mouse click in window pixels.
    pub fn handle_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        let clicked = self.geometry.square_at(x, y);
        self.click_square(clicked)
    }

    /// Feed a click already mapped to a square (`None` = off the board).
    pub fn click_square(&mut self, clicked: Option<Square>) -> ClickOutcome {
        if self.is_game_over() {
            log::trace!("game over, ignoring click");
            return ClickOutcome::Ignored;
        }
        let outcome = self.selection.click(&mut self.board, clicked);
        if let ClickOutcome::Moved(record) = outcome {
            self.placement = self.board.placement();
            if record.fifty_move_draw {
                log::info!(
                    "draw by fifty-move rule after move {}",
                    self.board.fullmove_number()
                );
            }
        }
        outcome
    }

    /// Replace the position with `fen`. On error the current game is kept.
    ///
    /// # Errors
    /// Returns the decode error if `fen` is malformed.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let board = Board::try_from_fen(fen)?;
        log::info!("loaded position {fen}");
        self.board = board;
        self.selection.reset();
        self.placement = self.board.placement();
        self.starting_fen = fen.to_string();
        Ok(())
    }

    /// Go back to the position this game was started or last loaded from.
    pub fn reset(&mut self) {
        match Board::try_from_fen(&self.starting_fen) {
            Ok(board) => self.board = board,
            Err(e) => {
                log::debug!("stored start position unusable ({e}), using standard start");
                self.board = Board::new();
            }
        }
        log::info!("new game");
        self.selection.reset();
        self.placement = self.board.placement();
    }

    /// Snapshot for a renderer.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            placement: self.placement.clone(),
            selected: self.selection.focus(),
            highlights: self.selection.moves(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
