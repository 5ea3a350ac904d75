// This file is part of the chessai library.
// Copyright (C) 2017-2026 Niklas Fiekas <niklas.fiekas@backscattering.de>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use core::fmt;

use crate::{color::Color, role::Role, square::Square};

/// A piece on the board: its [`Role`], [`Color`], location and whether it
/// has moved yet.
///
/// The `has_moved` flag gates castling and the pawn double step. It turns
/// true the first time the piece moves and only an
/// [`undo`](crate::Board::undo) turns it back.
///
/// Pieces are values. The board hands out copies, so a piece obtained
/// before a move does not follow the piece on the board afterwards.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub const fn new(role: Role, color: Color, square: Square) -> Piece {
        Piece {
            role,
            color,
            square,
            has_moved: false,
        }
    }

    /// Parses a two-character layout tag like `wk` or `bp` into a piece
    /// on `square`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Color, Piece, Role, Square};
    ///
    /// let piece = Piece::from_tag("bq", Square::D8).expect("valid tag");
    /// assert_eq!(piece.role, Role::Queen);
    /// assert_eq!(piece.color, Color::Black);
    /// assert!(Piece::from_tag("xq", Square::D8).is_none());
    /// ```
    pub fn from_tag(tag: &str, square: Square) -> Option<Piece> {
        let mut chars = tag.chars();
        let color = chars.next().and_then(Color::from_char)?;
        let role = chars.next().and_then(Role::from_char)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece::new(role, color, square))
    }

    /// The one-letter abbreviation of the piece type.
    pub const fn abbr(self) -> char {
        self.role.upper_char()
    }

    /// Unicode glyph for this piece.
    pub const fn symbol(self) -> char {
        self.role.symbol(self.color)
    }

    /// Letter in FEN convention: uppercase for white, lowercase for black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// The piece after moving to `to`.
    #[must_use]
    pub(crate) const fn moved_to(self, to: Square) -> Piece {
        Piece {
            square: to,
            has_moved: true,
            ..self
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.color.char(), self.role.char(), self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        let piece = Piece::from_tag("wn", Square::B1).expect("knight");
        assert_eq!(piece, Piece::new(Role::Knight, Color::White, Square::B1));
        assert!(!piece.has_moved);
        assert_eq!(piece.abbr(), 'N');
        assert_eq!(piece.char(), 'N');
        assert_eq!(piece.to_string(), "wnb1");

        assert!(Piece::from_tag("", Square::A1).is_none());
        assert!(Piece::from_tag("w", Square::A1).is_none());
        assert!(Piece::from_tag("wx", Square::A1).is_none());
        assert!(Piece::from_tag("wkk", Square::A1).is_none());
    }

    #[test]
    fn test_moved_to() {
        let pawn = Piece::new(Role::Pawn, Color::Black, Square::E7);
        let moved = pawn.moved_to(Square::E5);
        assert_eq!(moved.square, Square::E5);
        assert!(moved.has_moved);
        assert_eq!(moved.role, Role::Pawn);
        assert_eq!(moved.symbol(), '♟');
        assert_eq!(moved.char(), 'p');
    }
}
