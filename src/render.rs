//! Drawing contract for a front end, plus a plain-text implementation.
//!
//! A renderer only ever sees a [`Frame`]: the FEN placement field, the
//! selected square and the highlighted destinations.

use std::io::{self, Write};

use crate::board::{Bitboard, Color, Piece, Square};

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// FEN placement field, rank 8 first
    pub placement: String,
    pub selected: Option<Square>,
    pub highlights: Bitboard,
}

impl Frame {
    /// 0 when nothing is selected, 1 otherwise.
    #[must_use]
    pub fn click_count(&self) -> u8 {
        u8::from(self.selected.is_some())
    }

    /// Selected square index, or -1 when nothing is selected.
    #[must_use]
    pub fn selected_index(&self) -> i32 {
        self.selected.map_or(-1, |sq| sq.index() as i32)
    }

    /// Expand the placement field into one entry per square, index 0 = a8.
    /// Characters that are not pieces or digits are skipped.
    #[must_use]
    pub fn squares(&self) -> [Option<(Color, Piece)>; 64] {
        let mut squares = [None; 64];
        let mut index = 0usize;
        for c in self.placement.chars() {
            if index >= 64 {
                break;
            }
            if let Some(run) = c.to_digit(10) {
                index += run as usize;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                squares[index] = Some(piece);
                index += 1;
            }
        }
        squares
    }
}

/// A front end able to present frames.
pub trait Renderer {
    /// Draw one frame.
    ///
    /// # Errors
    /// Returns any I/O error raised by the output device.
    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Writes an ASCII board: pieces as FEN letters, `*` on an empty
/// highlighted square, brackets around the selected square.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        let squares = frame.squares();
        for row in 0..8u8 {
            write!(self.out, "{} ", 8 - row)?;
            for file in 0..8u8 {
                let Some(sq) = Square::from_coords(file, row) else {
                    continue;
                };
                let glyph = match squares[sq.index()] {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None if frame.highlights.contains(sq) => '*',
                    None => '.',
                };
                if frame.selected == Some(sq) {
                    write!(self.out, "[{glyph}]")?;
                } else if frame.highlights.contains(sq) && squares[sq.index()].is_some() {
                    write!(self.out, "({glyph})")?;
                } else {
                    write!(self.out, " {glyph} ")?;
                }
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "   a  b  c  d  e  f  g  h")?;
        self.out.flush()
    }
}
