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

use crate::board::Board;

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the
/// final position. Moves are played and taken back on `board`, which is
/// left as it was found. Useful for comparing, testing and debugging move
/// generation correctness and performance.
///
/// # Examples
///
/// ```
/// use chessai::{perft, Board};
///
/// let mut board = Board::new();
/// assert_eq!(perft(&mut board, 1), 20);
/// assert_eq!(perft(&mut board, 2), 400);
/// assert_eq!(perft(&mut board, 3), 8902);
/// assert_eq!(board, Board::new());
/// ```
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = board.legal_moves();

    if depth == 1 {
        moves.len() as u64
    } else {
        moves
            .iter()
            .map(|&m| {
                board.make_move_unchecked(m, None);
                let nodes = perft(board, depth - 1);
                board.undo();
                nodes
            })
            .sum()
    }
}
