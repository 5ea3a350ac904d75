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

//! The move catalog.
//!
//! The catalog holds one [`Move`] for every pair of squares that some
//! piece could connect ([`Square::is_possible_move`]) and every capture
//! tag, plus the four castles. It is backed by a table computed at
//! compile time, so it is immutable and shared by all boards without any
//! hidden state.
//!
//! # Examples
//!
//! ```
//! use chessai::{catalog, Role, Square};
//!
//! assert_eq!(catalog::moves().count(), catalog::LEN);
//!
//! let m = catalog::lookup(Square::D1, Square::H5, Some(Role::Pawn)).expect("diagonal");
//! assert!(m.is_capture());
//! assert!(catalog::lookup(Square::D1, Square::H6, None).is_none());
//! ```

use crate::{attacks, m::Move, role::Role, square::Square};

/// Capture tags in catalog order: no capture first, then `K`, `Q`, `R`,
/// `B`, `N`, `P`.
pub const CAPTURE_TAGS: [Option<Role>; 7] = [
    None,
    Some(Role::King),
    Some(Role::Queen),
    Some(Role::Rook),
    Some(Role::Bishop),
    Some(Role::Knight),
    Some(Role::Pawn),
];

/// The four castles: e1-c1, e1-g1, e8-c8, e8-g8.
pub const CASTLES: [Move; 4] = [
    Move::from_parts(Square::E1, Square::C1, None, true),
    Move::from_parts(Square::E1, Square::G1, None, true),
    Move::from_parts(Square::E8, Square::C8, None, true),
    Move::from_parts(Square::E8, Square::G8, None, true),
];

/// Number of ordered square pairs that some piece could connect.
pub const PAIRS: usize = 1792;

/// Number of moves in the catalog.
pub const LEN: usize = PAIRS * CAPTURE_TAGS.len() + CASTLES.len();

/// Finds the non-castle move from `from` to `to` with the given capture
/// tag, or `None` if no piece could ever make it.
#[inline]
pub fn lookup(from: Square, to: Square, capture: Option<Role>) -> Option<Move> {
    attacks::plausible(from)
        .contains(to)
        .then(|| Move::from_parts(from, to, capture, false))
}

/// Finds the castle from `from` to `to`.
pub fn castle(from: Square, to: Square) -> Option<Move> {
    CASTLES
        .into_iter()
        .find(|m| m.from() == from && m.to() == to)
}

/// The square of the rook that takes part in a castle, derived from the
/// king's destination: c1 → a1, g1 → h1, c8 → a8, g8 → h8.
///
/// Returns `None` for moves that are not castles.
pub fn castle_rook(m: Move) -> Option<(Square, Square)> {
    if !m.is_castle() {
        return None;
    }
    Some(match m.to() {
        Square::C1 => (Square::A1, Square::D1),
        Square::G1 => (Square::H1, Square::F1),
        Square::C8 => (Square::A8, Square::D8),
        _ => (Square::H8, Square::F8),
    })
}

/// Iterates over every move in the catalog, ordered by origin, then
/// destination, then capture tag, with the castles last.
pub fn moves() -> impl Iterator<Item = Move> {
    Square::all()
        .flat_map(|from| {
            attacks::plausible(from).into_iter().flat_map(move |to| {
                CAPTURE_TAGS
                    .into_iter()
                    .map(move |capture| Move::from_parts(from, to, capture, false))
            })
        })
        .chain(CASTLES)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_len() {
        let pairs: usize = Square::all().map(|sq| attacks::plausible(sq).count()).sum();
        assert_eq!(pairs, PAIRS);
        assert_eq!(LEN, 12548);
    }

    #[test]
    fn test_unique() {
        let all: HashSet<Move> = moves().collect();
        assert_eq!(all.len(), LEN);
    }

    #[test]
    fn test_lookup() {
        for m in moves() {
            if m.is_castle() {
                assert_eq!(castle(m.from(), m.to()), Some(m));
            } else {
                assert_eq!(lookup(m.from(), m.to(), m.capture()), Some(m));
            }
        }
        assert_eq!(castle(Square::E1, Square::D1), None);
        assert_eq!(lookup(Square::A1, Square::A1, None), None);
    }

    #[test]
    fn test_castle_rook() {
        for m in CASTLES {
            let (rook_from, rook_to) = castle_rook(m).expect("castle");
            assert_eq!(rook_from.row(), m.from().row());
            assert_eq!(rook_from.direction(rook_to), m.to().direction(m.from()));
            assert_eq!(m.to().distance(rook_to), 1);
        }
        let normal = lookup(Square::E1, Square::G1, None).expect("rank move");
        assert_eq!(castle_rook(normal), None);
    }
}
