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

use core::{error::Error, fmt, str::FromStr};

use arrayvec::ArrayVec;

use crate::{
    catalog,
    role::Role,
    square::{Direction, Square},
};

/// Error when parsing a move in `e2-e4` notation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseMoveError {
    /// The text is not of the form `<square>-<square>`.
    Syntax,
    /// The squares are well formed, but no piece could ever move between
    /// them.
    Impossible,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseMoveError::Syntax => "invalid move notation",
            ParseMoveError::Impossible => "no piece can move between these squares",
        })
    }
}

impl Error for ParseMoveError {}

/// A move from one square to another.
///
/// A move is identified by its origin, destination, the role of the
/// captured piece (if any) and whether it is a castle. Every value comes
/// from the [move catalog](crate::catalog), so two moves with the same key
/// are always equal and a move always connects squares that some piece
/// could travel between.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) as `e2-e4`. The capture
/// tag and castle flag are not shown.
///
/// # Examples
///
/// ```
/// use chessai::{Move, Role, Square};
///
/// let m: Move = "a1-a2".parse()?;
/// assert_eq!(m.from(), Square::A1);
/// assert_eq!(m.capture(), None);
///
/// let capture = m.with_capture(Some(Role::Knight));
/// assert_eq!(capture, Move::new(Square::A1, Square::A2, Some(Role::Knight)).unwrap());
/// assert_ne!(capture, m);
/// # Ok::<_, chessai::ParseMoveError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    from: Square,
    to: Square,
    capture: Option<Role>,
    castle: bool,
}

impl Move {
    /// Looks up the catalog move from `from` to `to` capturing `capture`.
    ///
    /// Returns `None` if no piece could ever move between the squares.
    pub fn new(from: Square, to: Square, capture: Option<Role>) -> Option<Move> {
        catalog::lookup(from, to, capture)
    }

    /// Looks up the castle move of a king from `from` to `to`, one of
    /// e1-c1, e1-g1, e8-c8 and e8-g8.
    pub fn castle(from: Square, to: Square) -> Option<Move> {
        catalog::castle(from, to)
    }

    /// Builds a catalog entry. Only the catalog itself may call this.
    pub(crate) const fn from_parts(
        from: Square,
        to: Square,
        capture: Option<Role>,
        castle: bool,
    ) -> Move {
        Move {
            from,
            to,
            capture,
            castle,
        }
    }

    /// Parses `e2-e4` notation.
    ///
    /// Text after the destination square is ignored if it starts with a
    /// character that cannot continue a word, so `"e7-e8=Q"` and
    /// `"e2-e4 !?"` parse, but `"e2-e4x"` does not. Leading and trailing
    /// whitespace is trimmed. The result is never a castle and never a
    /// capture; see [`Board::parse_move`](crate::Board::parse_move) to
    /// resolve those against a position.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoveError`] for malformed notation or squares that
    /// no piece could move between.
    pub fn from_ascii(s: &[u8]) -> Result<Move, ParseMoveError> {
        let s = s.trim_ascii();
        if s.len() < 5 || s[2] != b'-' {
            return Err(ParseMoveError::Syntax);
        }
        if let Some(&next) = s.get(5) {
            if next.is_ascii_alphanumeric() || next == b'_' {
                return Err(ParseMoveError::Syntax);
            }
        }
        let from = Square::from_ascii(&s[0..2]).map_err(|_| ParseMoveError::Syntax)?;
        let to = Square::from_ascii(&s[3..5]).map_err(|_| ParseMoveError::Syntax)?;
        Move::new(from, to, None).ok_or(ParseMoveError::Impossible)
    }

    /// Gets the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Gets the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Gets the role of the captured piece or `None`.
    #[inline]
    pub const fn capture(self) -> Option<Role> {
        self.capture
    }

    /// Checks if the move is tagged as a capture.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }

    /// Checks if the move is a castle.
    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castle
    }

    /// Checks if the move could take a pawn to its last rank: same file,
    /// from the seventh to the eighth rank or from the second to the
    /// first.
    pub const fn is_possible_promotion(self) -> bool {
        self.from.col() == self.to.col()
            && ((self.from.row() == 6 && self.to.row() == 7)
                || (self.from.row() == 1 && self.to.row() == 0))
    }

    /// Chebyshev distance between origin and destination.
    #[inline]
    pub const fn distance(self) -> u32 {
        self.from.distance(self.to)
    }

    /// Direction from origin to destination, or `None` for knight jumps.
    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        self.from.direction(self.to)
    }

    /// The same move with a different capture tag.
    ///
    /// Castles never capture and are returned unchanged.
    #[must_use]
    pub fn with_capture(self, capture: Option<Role>) -> Move {
        if self.castle {
            self
        } else {
            Move { capture, ..self }
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is enough for the pseudo-legal moves of one side with at
/// most 16 pieces, which every [`Board`](crate::Board) guarantees.
pub type MoveList = ArrayVec<Move, 512>;

#[cfg(test)]
mod tests {
    use core::mem;

    use super::*;

    #[test]
    fn test_move_size() {
        assert!(mem::size_of::<Move>() <= 4);
    }

    #[test]
    fn test_parse() {
        let m: Move = "e2-e4".parse().expect("valid");
        assert_eq!(m.from(), Square::E2);
        assert_eq!(m.to(), Square::E4);
        assert!(!m.is_capture());
        assert!(!m.is_castle());
        assert_eq!(m.to_string(), "e2-e4");

        assert!("  g1-f3  ".parse::<Move>().is_ok());
        assert!("e7-e8=Q".parse::<Move>().is_ok());
        assert!("e2-e4 check".parse::<Move>().is_ok());
        assert_eq!("e2-e4q".parse::<Move>(), Err(ParseMoveError::Syntax));
        assert_eq!("e2e4".parse::<Move>(), Err(ParseMoveError::Syntax));
        assert_eq!("e2-i4".parse::<Move>(), Err(ParseMoveError::Syntax));
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Syntax));
        assert_eq!("a1-c4".parse::<Move>(), Err(ParseMoveError::Impossible));
        assert_eq!("a1-a1".parse::<Move>(), Err(ParseMoveError::Impossible));
    }

    #[test]
    fn test_identity() {
        let a = Move::new(Square::A1, Square::A2, Some(Role::Knight));
        let b = "a1-a2"
            .parse::<Move>()
            .map(|m| m.with_capture(Some(Role::Knight)))
            .ok();
        assert!(a.is_some());
        assert_eq!(a, b);
        assert_ne!(a, Move::new(Square::A1, Square::A2, Some(Role::Bishop)));
        assert_ne!(a, Move::new(Square::A1, Square::A3, Some(Role::Knight)));
    }

    #[test]
    fn test_possible_promotion() {
        let promotion = |s: &str| s.parse::<Move>().expect("valid").is_possible_promotion();
        assert!(promotion("e7-e8"));
        assert!(promotion("a2-a1"));
        assert!(!promotion("e6-e7"));
        assert!(!promotion("d7-e8"));
        assert!(promotion("e2-e1"));
        assert!(!promotion("e8-e7"));
    }

    #[test]
    fn test_castle_with_capture() {
        let castle = Move::castle(Square::E1, Square::G1).expect("castle");
        assert_eq!(castle.with_capture(Some(Role::Rook)), castle);
        assert_ne!(castle, Move::new(Square::E1, Square::G1, None).expect("rank move"));
    }
}
