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

//! Raw attack patterns.
//!
//! These functions answer which squares a piece covers given only its
//! square and the board occupancy. They never look at whose turn it is,
//! at the color of blockers or at king safety, so check detection can use
//! them without recursing into move legality.
//!
//! # Examples
//!
//! ```
//! use chessai::{attacks, Bitboard, Square};
//!
//! let occupied = Bitboard::row(5); // blocking pieces
//! let attacks = attacks::bishop_attacks(Square::C2, occupied);
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . 1 .
//! // . . . . . 1 . .
//! // 1 . . . 1 . . .
//! // . 1 . 1 . . . .
//! // . . . . . . . .
//! // . 1 . 1 . . . .
//!
//! assert!(attacks.contains(Square::G6));
//! assert!(!attacks.contains(Square::H7));
//! ```

use crate::{
    bitboard::Bitboard,
    bootstrap::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, PLAUSIBLE},
    color::Color,
    role::Role,
    square::{Direction, Square},
};

/// Looks up attacks for a pawn of `color` on `sq`. Only the two forward
/// diagonals are attacked, whether or not they are occupied.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS.get(color)[sq.index()])
}

/// Looks up attacks for a knight on `sq`.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

/// Looks up attacks for a king on `sq`.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

/// Squares along a single ray from `sq`, up to and including the first
/// occupied square.
pub fn ray_attacks(sq: Square, direction: Direction, occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let mut current = sq;
    while let Some(next) = current.offset(direction, 1) {
        attacks.add(next);
        if occupied.contains(next) {
            break;
        }
        current = next;
    }
    attacks
}

fn sliding_attacks(sq: Square, occupied: Bitboard, directions: &[Direction]) -> Bitboard {
    directions
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, dir, occupied))
}

/// Calculates bishop attacks from `sq` with `occupied` as blockers.
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, occupied, &Direction::DIAGONAL)
}

/// Calculates rook attacks from `sq` with `occupied` as blockers.
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, occupied, &Direction::ORTHOGONAL)
}

/// Calculates queen attacks from `sq` with `occupied` as blockers.
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, occupied, &Direction::ALL)
}

/// Attacks for a piece of `role` and `color` on `sq` with `occupied` as
/// blockers.
///
/// Squares occupied by either color are included; callers mask out their
/// own pieces when turning attacks into moves.
pub fn attacks(sq: Square, role: Role, color: Color, occupied: Bitboard) -> Bitboard {
    match role {
        Role::Pawn => pawn_attacks(color, sq),
        Role::Knight => knight_attacks(sq),
        Role::Bishop => bishop_attacks(sq, occupied),
        Role::Rook => rook_attacks(sq, occupied),
        Role::Queen => queen_attacks(sq, occupied),
        Role::King => king_attacks(sq),
    }
}

/// Squares strictly between `a` and `b`, or the empty set if they are not
/// on a common rank, file or diagonal.
///
/// # Examples
///
/// ```
/// use chessai::{attacks, Square};
///
/// let between = attacks::between(Square::E1, Square::A1);
/// assert_eq!(between.count(), 3);
/// assert!(between.contains(Square::B1));
/// assert!(attacks::between(Square::E1, Square::F3).is_empty());
/// ```
pub fn between(a: Square, b: Square) -> Bitboard {
    let Some(direction) = a.direction(b) else {
        return Bitboard::EMPTY;
    };
    let mut result = Bitboard::EMPTY;
    let mut current = a;
    while let Some(next) = current.offset(direction, 1) {
        if next == b {
            break;
        }
        result.add(next);
        current = next;
    }
    result
}

/// Every destination that the move catalog holds for moves from `sq`.
///
/// These are the squares for which [`Square::is_possible_move`] holds.
#[inline]
pub fn plausible(sq: Square) -> Bitboard {
    Bitboard(PLAUSIBLE[sq.index()])
}
