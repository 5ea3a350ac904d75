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

// Move validation, generation and check detection.
//
// Everything here is built on raw attacks, which never consult move
// legality, so king moves and check detection cannot recurse into each
// other.

use crate::{
    attacks,
    bitboard::Bitboard,
    board::Board,
    catalog,
    color::Color,
    m::{Move, MoveList},
    role::Role,
    square::{Direction, Square},
    types::Piece,
};

impl Board {
    /// Tests if `m` is pseudo-legal: it follows the movement rules of the
    /// piece on its origin, whoever's turn it is. The move may leave the
    /// mover's own king attacked.
    ///
    /// A move without a capture tag is accepted for an occupied
    /// destination. A move with a capture tag must name the role of the
    /// piece it captures.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Board, Move};
    ///
    /// let board = Board::new();
    /// assert!(board.is_possible("e7-e5".parse()?));
    /// assert!(!board.is_possible("e2-e5".parse()?));
    /// # Ok::<_, chessai::ParseMoveError>(())
    /// ```
    pub fn is_possible(&self, m: Move) -> bool {
        let Some(piece) = self.get(m.from()) else {
            return false;
        };
        let occupant = self.role_at(m.to());
        if m.capture().is_some() && m.capture() != occupant {
            return false;
        }
        let m = m.with_capture(occupant);

        if let Some(moves) = self.fresh_moves(piece.color) {
            return moves.contains(&m);
        }

        if m.is_castle() {
            piece.role == Role::King && self.is_possible_castle(m)
        } else {
            self.destinations(piece).contains(m.to())
        }
    }

    /// Tests if `m` is [possible](Board::is_possible) and moves a piece of
    /// the side to move.
    ///
    /// Like [`Board::is_possible`], this does not check whether the move
    /// leaves the mover's king attacked. See [`Board::is_safe`].
    pub fn is_legal(&self, m: Move) -> bool {
        self.color_at(m.from()) == Some(self.turn()) && self.is_possible(m)
    }

    /// Gets all pseudo-legal moves of `color`, with capture tags filled in.
    ///
    /// The list is computed on first use and cached until the board
    /// changes.
    pub fn possible_moves(&self, color: Color) -> &MoveList {
        self.cached_moves(color, || self.gen_moves(color))
    }

    /// Tests if playing the [possible](Board::is_possible) move `m` keeps
    /// the mover's own king out of check. The board is not modified.
    ///
    /// A side without a king is always safe.
    pub fn is_safe(&self, m: Move) -> bool {
        let Some(piece) = self.get(m.from()) else {
            return false;
        };
        let king = if piece.role == Role::King {
            m.to()
        } else {
            match self.king_of(piece.color) {
                Some(king) => king,
                None => return true,
            }
        };

        let mut occupied = self.occupied().without(m.from()).with(m.to());
        if let Some((rook_from, rook_to)) = catalog::castle_rook(m) {
            occupied = occupied.without(rook_from).with(rook_to);
        }
        let enemies = self.by_color(!piece.color).without(m.to());

        self.attackers_among(king, enemies, occupied).is_empty()
    }

    /// Gets the moves of the side to move that are legal and
    /// [safe](Board::is_safe).
    pub fn legal_moves(&self) -> MoveList {
        self.possible_moves(self.turn())
            .iter()
            .copied()
            .filter(|&m| self.is_safe(m))
            .collect()
    }

    /// Squares of the pieces of `attacker` that attack `sq`.
    ///
    /// Only geometry and occupancy count. Pinned pieces still attack,
    /// and a square holding a piece of `attacker` itself can be attacked
    /// by its neighbours, so defended pieces show up as attacked.
    pub fn attackers(&self, sq: Square, attacker: Color) -> Bitboard {
        self.attackers_among(sq, self.by_color(attacker), self.occupied())
    }

    /// Tests if `sq` is attacked by a piece of the opponent of `color`.
    pub fn in_check_at(&self, sq: Square, color: Color) -> bool {
        self.attackers(sq, !color).any()
    }

    /// Tests if the king of `color` is attacked. A side without a king is
    /// never in check.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Board, Color};
    ///
    /// let mut layout = vec![Vec::new(); 8];
    /// layout[0] = vec!["wk"];
    /// layout[7] = vec!["br", "", "", "", "", "", "", "bk"];
    ///
    /// let board = Board::from_layout(&layout, Color::White)?;
    /// assert!(board.in_check(Color::White));
    /// assert!(!board.in_check(Color::Black));
    /// # Ok::<_, chessai::LayoutError>(())
    /// ```
    pub fn in_check(&self, color: Color) -> bool {
        self.king_of(color)
            .is_some_and(|king| self.in_check_at(king, color))
    }

    /// Tests if the side to move is in check and has no safe move.
    pub fn checkmate(&self) -> bool {
        self.in_check(self.turn()) && self.legal_moves().is_empty()
    }

    /// Tests if the side to move is not in check but has no safe move.
    pub fn stalemate(&self) -> bool {
        !self.in_check(self.turn()) && self.legal_moves().is_empty()
    }

    fn attackers_among(&self, sq: Square, candidates: Bitboard, occupied: Bitboard) -> Bitboard {
        candidates
            .into_iter()
            .filter(|&from| {
                self.get(from).is_some_and(|piece| {
                    attacks::attacks(from, piece.role, piece.color, occupied).contains(sq)
                })
            })
            .collect()
    }

    /// Destination squares of a non-castle move of `piece`.
    fn destinations(&self, piece: Piece) -> Bitboard {
        let own = self.by_color(piece.color);
        match piece.role {
            Role::Pawn => self.pawn_destinations(piece),
            Role::King => self.king_destinations(piece) & !own,
            role => attacks::attacks(piece.square, role, piece.color, self.occupied()) & !own,
        }
    }

    fn pawn_destinations(&self, pawn: Piece) -> Bitboard {
        let occupied = self.occupied();
        let forward = pawn.color.fold(Direction::North, Direction::South);

        let mut result = attacks::pawn_attacks(pawn.color, pawn.square) & self.by_color(!pawn.color);
        if let Some(single) = pawn.square.offset(forward, 1).filter(|&sq| !occupied.contains(sq)) {
            result.add(single);
            if !pawn.has_moved && pawn.square.row() == pawn.color.pawn_row() {
                if let Some(double) = pawn.square.offset(forward, 2).filter(|&sq| !occupied.contains(sq)) {
                    result.add(double);
                }
            }
        }
        result
    }

    fn king_destinations(&self, king: Piece) -> Bitboard {
        // The king must not shield the squares behind it from a slider.
        let occupied = self.occupied().without(king.square);
        let enemies = self.by_color(!king.color);
        attacks::king_attacks(king.square)
            .into_iter()
            .filter(|&to| self.attackers_among(to, enemies, occupied).is_empty())
            .collect()
    }

    fn is_possible_castle(&self, m: Move) -> bool {
        let Some((rook_from, _)) = catalog::castle_rook(m) else {
            return false;
        };
        let (Some(king), Some(rook)) = (self.get(m.from()), self.get(rook_from)) else {
            return false;
        };

        if king.role != Role::King || rook.role != Role::Rook || king.color != rook.color {
            return false;
        }
        if king.has_moved || rook.has_moved || m.from().row() != king.color.backrank() {
            return false;
        }
        if (attacks::between(m.from(), rook_from) & self.occupied()).any() {
            return false;
        }

        let path = attacks::between(m.from(), m.to()).with(m.from()).with(m.to());
        path.into_iter().all(|sq| !self.in_check_at(sq, king.color))
    }

    fn gen_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.pieces(color) {
            for to in self.destinations(piece) {
                moves.extend(catalog::lookup(piece.square, to, self.role_at(to)));
            }
            if piece.role == Role::King {
                gen_castling_moves(self, piece.square, &mut moves);
            }
        }
        moves
    }
}

fn gen_castling_moves(board: &Board, king: Square, moves: &mut MoveList) {
    for castle in catalog::CASTLES {
        if castle.from() == king && board.is_possible_castle(castle) {
            moves.push(castle);
        }
    }
}
