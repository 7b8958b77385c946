//! Castling rights bookkeeping.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use crate::board::error::FenError;
use super::square::Square;

/// One of the four castling rights, named by its FEN letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingRight {
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(CastlingRight::WhiteKingside),
            'Q' => Some(CastlingRight::WhiteQueenside),
            'k' => Some(CastlingRight::BlackKingside),
            'q' => Some(CastlingRight::BlackQueenside),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            CastlingRight::WhiteKingside | CastlingRight::WhiteQueenside => Color::White,
            CastlingRight::BlackKingside | CastlingRight::BlackQueenside => Color::Black,
        }
    }

    /// Home square of the rook this right belongs to
    #[must_use]
    pub const fn rook_square(self) -> Square {
        match self {
            CastlingRight::WhiteKingside => Square(63),
            CastlingRight::WhiteQueenside => Square(56),
            CastlingRight::BlackKingside => Square(7),
            CastlingRight::BlackQueenside => Square(0),
        }
    }
}

/// Castling rights in the order they were written in the FEN.
///
/// Slots are kept packed at the front; removing a right shifts the rest
/// down so equal sets in equal order compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CastlingRights([Option<CastlingRight>; 4]);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([None; 4])
    }

    /// `KQkq`
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights([
            Some(CastlingRight::WhiteKingside),
            Some(CastlingRight::WhiteQueenside),
            Some(CastlingRight::BlackKingside),
            Some(CastlingRight::BlackQueenside),
        ])
    }

    /// Append a right. Returns false if it was already present.
    pub fn push(&mut self, right: CastlingRight) -> bool {
        if self.has(right) {
            return false;
        }
        match self.0.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(right);
                true
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn has(&self, right: CastlingRight) -> bool {
        self.0.contains(&Some(right))
    }

    /// Remove a right, keeping the order of the others
    pub fn remove(&mut self, right: CastlingRight) {
        let kept: Vec<CastlingRight> = self.iter().filter(|r| *r != right).collect();
        self.0 = [None; 4];
        for (slot, r) in self.0.iter_mut().zip(kept) {
            *slot = Some(r);
        }
    }

    /// Remove both rights of one color
    pub fn revoke_color(&mut self, color: Color) {
        for right in CastlingRight::ALL {
            if right.color() == color {
                self.remove(right);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CastlingRight> + '_ {
        self.0.iter().map_while(|slot| *slot)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0[0].is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl fmt::Display for CastlingRights {
    /// FEN field: the letters in stored order, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for right in self.iter() {
            write!(f, "{}", right.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for CastlingRights {
    type Err = FenError;

    /// Parse the FEN castling field: `-` or distinct letters from `KQkq`.
    fn from_str(field: &str) -> Result<Self, Self::Err> {
        let mut rights = CastlingRights::none();
        if field == "-" {
            return Ok(rights);
        }
        for c in field.chars() {
            let right = CastlingRight::from_char(c).ok_or(FenError::InvalidCastling { char: c })?;
            if !rights.push(right) {
                return Err(FenError::DuplicateCastling { char: c });
            }
        }
        Ok(rights)
    }
}

impl TryFrom<String> for CastlingRights {
    type Error = FenError;

    fn try_from(field: String) -> Result<Self, Self::Error> {
        field.parse()
    }
}

impl From<CastlingRights> for String {
    fn from(rights: CastlingRights) -> String {
        rights.to_string()
    }
}
