use super::Square;

/// Where the board sits on screen, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub square_size: i32,
}

impl BoardGeometry {
    /// Geometry for a board rectangle, with squares an eighth of its width.
    #[must_use]
    pub const fn from_board_rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        BoardGeometry {
            x,
            y,
            width,
            height,
            square_size: width / 8,
        }
    }

    /// Map a pixel to a square, `None` when the click misses the board.
    ///
    /// The right and bottom borders count as on the rectangle but land in
    /// a ninth column or row, so they are rejected by the square bounds.
    #[must_use]
    pub fn square_at(&self, px: i32, py: i32) -> Option<Square> {
        // widened so extreme origins and sizes cannot overflow
        let (px, py) = (i64::from(px), i64::from(py));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        if px < x
            || px > x + i64::from(self.width)
            || py < y
            || py > y + i64::from(self.height)
            || self.square_size <= 0
        {
            return None;
        }
        let size = i64::from(self.square_size);
        let file = (px - x) / size;
        let row = (py - y) / size;
        Square::from_coords(u8::try_from(file).ok()?, u8::try_from(row).ok()?)
    }

    /// Top-left pixel of a square
    #[must_use]
    pub fn square_origin(&self, sq: Square) -> (i32, i32) {
        (
            self.x
                .saturating_add(i32::from(sq.file()).saturating_mul(self.square_size)),
            self.y
                .saturating_add(i32::from(sq.row()).saturating_mul(self.square_size)),
        )
    }
}

impl Default for BoardGeometry {
    /// A 640 px board inset 20 px into a 680 px window.
    fn default() -> Self {
        BoardGeometry::from_board_rect(20, 20, 640, 640)
    }
}
