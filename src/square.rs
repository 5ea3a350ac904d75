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

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// One of the eight compass directions, numbered clockwise from north.
///
/// North points toward increasing rows (from white's side of the board to
/// black's), east toward increasing columns.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// Gets the direction with the given number, modulo 8.
    pub const fn new(index: u32) -> Direction {
        match index % 8 {
            0 => Direction::North,
            1 => Direction::NorthEast,
            2 => Direction::East,
            3 => Direction::SouthEast,
            4 => Direction::South,
            5 => Direction::SouthWest,
            6 => Direction::West,
            _ => Direction::NorthWest,
        }
    }

    /// Step as `(column delta, row delta)`.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        Direction::new(self as u32 + 4)
    }

    /// All directions, clockwise from `North`.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `North`, `East`, `South`, `West`.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `NorthEast`, `SouthEast`, `SouthWest`, `NorthWest`.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];
}

/// A square of the chessboard.
///
/// There are exactly 64 distinct values, indexed `row * 8 + col` from
/// `A1` (0) to `H8` (63). Squares are plain values, so two squares with
/// the same coordinates are always equal and interchangeable.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=63`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 64);
        Square(index as u8)
    }

    /// Gets the square with the given index, or `None` if it is out of range.
    #[inline]
    pub const fn try_new(index: u32) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Gets the square at the given column and row, or `None` if either is
    /// off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::Square;
    ///
    /// assert_eq!(Square::from_coords(4, 3), Some(Square::E4));
    /// assert_eq!(Square::from_coords(8, 0), None);
    /// assert_eq!(Square::from_coords(0, -1), None);
    /// ```
    #[inline]
    pub const fn from_coords(col: i32, row: i32) -> Option<Square> {
        if 0 <= col && col < 8 && 0 <= row && row < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Parses a square name like `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not exactly a file
    /// letter `a`-`h` followed by a rank digit `1`-`8`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square::new(u32::from(rank - b'1') * 8 + u32::from(file - b'a')))
            }
            _ => Err(ParseSquareError),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, where 0 is the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    /// Row, where 0 is white's back rank.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    pub const fn rank_char(self) -> char {
        (b'1' + self.row()) as char
    }

    /// Projects `steps` squares in `direction`, returning `None` if that
    /// leaves the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Direction, Square};
    ///
    /// assert_eq!(Square::E2.offset(Direction::North, 2), Some(Square::E4));
    /// assert_eq!(Square::H1.offset(Direction::NorthEast, 1), None);
    /// ```
    #[inline]
    pub const fn offset(self, direction: Direction, steps: i32) -> Option<Square> {
        if steps.unsigned_abs() > 7 {
            return None;
        }
        let (dc, dr) = direction.delta();
        Square::from_coords(
            self.col() as i32 + dc as i32 * steps,
            self.row() as i32 + dr as i32 * steps,
        )
    }

    /// Direction in which `to` lies from `self`, or `None` if the squares
    /// do not share a rank, file or diagonal, or are the same square.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Direction, Square};
    ///
    /// assert_eq!(Square::A1.direction(Square::H8), Some(Direction::NorthEast));
    /// assert_eq!(Square::D4.direction(Square::D1), Some(Direction::South));
    /// assert_eq!(Square::A1.direction(Square::B3), None);
    /// ```
    pub const fn direction(self, to: Square) -> Option<Direction> {
        let dc = to.col() as i32 - self.col() as i32;
        let dr = to.row() as i32 - self.row() as i32;
        if dc == 0 && dr == 0 {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        Some(match (dc.signum(), dr.signum()) {
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            _ => Direction::NorthWest,
        })
    }

    /// Chebyshev distance, the number of king steps between the squares.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::Square;
    ///
    /// assert_eq!(Square::D2.distance(Square::G3), 3);
    /// assert_eq!(Square::A1.distance(Square::A1), 0);
    /// ```
    pub const fn distance(self, other: Square) -> u32 {
        let dc = self.col().abs_diff(other.col());
        let dr = self.row().abs_diff(other.row());
        (if dc > dr { dc } else { dr }) as u32
    }

    /// Tests if the squares are a knight's jump apart.
    pub const fn is_knight_offset(self, other: Square) -> bool {
        let dc = self.col().abs_diff(other.col());
        let dr = self.row().abs_diff(other.row());
        (dc == 1 && dr == 2) || (dc == 2 && dr == 1)
    }

    /// Returns `false` iff no piece could ever move from `self` to `other`,
    /// judging by geometry alone: the squares must share a rank, file or
    /// diagonal, or be a knight's jump apart.
    ///
    /// The relation is symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::Square;
    ///
    /// assert!(Square::A1.is_possible_move(Square::H8));
    /// assert!(Square::D4.is_possible_move(Square::E6));
    /// assert!(!Square::A1.is_possible_move(Square::C4));
    /// assert!(!Square::A1.is_possible_move(Square::A1));
    /// ```
    pub const fn is_possible_move(self, other: Square) -> bool {
        self.direction(other).is_some() || self.is_knight_offset(other)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

impl From<Square> for usize {
    #[inline]
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl From<Square> for u32 {
    #[inline]
    fn from(sq: Square) -> u32 {
        u32::from(sq.0)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file_char().to_ascii_uppercase(),
            self.rank_char()
        )
    }
}

#[rustfmt::skip]
#[allow(missing_docs)]
impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    #[test]
    fn test_coords() {
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::from_coords(col, row).expect("on board");
                assert_eq!(i32::from(square.col()), col);
                assert_eq!(i32::from(square.row()), row);
                assert_eq!(square.index(), (row * 8 + col) as usize);
                assert_eq!(Square::from_coords(col, row), Some(square));
            }
        }
        assert_eq!(Square::all().len(), 64);
    }

    #[test]
    fn test_unique() {
        for a in Square::all() {
            for b in Square::all() {
                assert_eq!(a == b, a.index() == b.index());
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(sq("a1"), Square::A1);
        assert_eq!(sq("h8"), Square::H8);
        assert_eq!(sq("e4").to_string(), "e4");
        assert_eq!(format!("{:?}", Square::E4), "E4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
        assert!("A1".parse::<Square>().is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(Square::D2.distance(Square::G3), 3);
        assert_eq!(Square::A1.distance(Square::H8), 7);
        assert_eq!(Square::E4.distance(Square::F5), 1);
    }

    #[test]
    fn test_direction() {
        let d4 = Square::D4;
        assert_eq!(d4.direction(sq("d5")), Some(Direction::North));
        assert_eq!(d4.direction(sq("e5")), Some(Direction::NorthEast));
        assert_eq!(d4.direction(sq("h4")), Some(Direction::East));
        assert_eq!(d4.direction(sq("g1")), Some(Direction::SouthEast));
        assert_eq!(d4.direction(sq("d1")), Some(Direction::South));
        assert_eq!(d4.direction(sq("a1")), Some(Direction::SouthWest));
        assert_eq!(d4.direction(sq("a4")), Some(Direction::West));
        assert_eq!(d4.direction(sq("a7")), Some(Direction::NorthWest));
        assert_eq!(d4.direction(sq("e6")), None);
        assert_eq!(d4.direction(d4), None);

        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir as usize, i);
            assert_eq!(Direction::new(i as u32), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_offset_roundtrip() {
        for from in Square::all() {
            for dir in Direction::ALL {
                for steps in 1..8 {
                    if let Some(to) = from.offset(dir, steps) {
                        assert_eq!(from.direction(to), Some(dir));
                        assert_eq!(from.distance(to), steps as u32);
                        assert_eq!(to.offset(dir.opposite(), steps), Some(from));
                    }
                }
            }
        }
        assert_eq!(Square::A8.offset(Direction::North, 1), None);
        assert_eq!(Square::A1.offset(Direction::West, 1), None);
    }

    #[test]
    fn test_offset_far() {
        for dir in Direction::ALL {
            for steps in [8, -8, 100, i32::MAX, i32::MIN, i32::MIN + 1] {
                assert_eq!(Square::H8.offset(dir, steps), None);
                assert_eq!(Square::A1.offset(dir, steps), None);
                assert_eq!(Square::D4.offset(dir, steps), None);
            }
        }
        assert_eq!(Square::A1.offset(Direction::NorthEast, 7), Some(Square::H8));
        assert_eq!(Square::H8.offset(Direction::NorthEast, -7), Some(Square::A1));
    }

    #[test]
    fn test_possible_move() {
        let d4 = Square::D4;
        for name in ["d5", "e5", "e4", "e3", "d3", "c3", "c4", "c5"] {
            assert!(d4.is_possible_move(sq(name)), "d4-{name}");
        }
        for name in ["e6", "f5", "f3", "e2", "c2", "b3", "b5", "c6"] {
            assert!(d4.is_possible_move(sq(name)), "d4-{name}");
        }
        assert!(sq("a1").is_possible_move(sq("a8")));
        assert!(sq("a1").is_possible_move(sq("h8")));
        assert!(sq("a1").is_possible_move(sq("h1")));
        assert!(sq("h8").is_possible_move(sq("a8")));
        assert!(sq("h8").is_possible_move(sq("a1")));
        assert!(sq("h8").is_possible_move(sq("h1")));
        assert!(sq("h1").is_possible_move(sq("a8")));
        assert!(sq("a8").is_possible_move(sq("h1")));

        assert!(!sq("a1").is_possible_move(sq("c4")));
        assert!(!sq("d3").is_possible_move(sq("a2")));
    }

    #[test]
    fn test_possible_move_symmetric() {
        for a in Square::all() {
            for b in Square::all() {
                assert_eq!(a.is_possible_move(b), b.is_possible_move(a));
            }
        }
    }
}
