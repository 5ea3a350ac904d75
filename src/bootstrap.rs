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

// Initialize static lookup tables at compile time.

use crate::color::ByColor;

const QUEEN_DELTAS: [i32; 8] = [8, 9, 1, -7, -8, -9, -1, 7];
const KING_DELTAS: [i32; 8] = [9, 8, 7, 1, -9, -8, -7, -1];
const KNIGHT_DELTAS: [i32; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
const WHITE_PAWN_DELTAS: [i32; 2] = [7, 9];
const BLACK_PAWN_DELTAS: [i32; 2] = [-7, -9];

const fn sliding_attacks(square: i32, occupied: u64, deltas: &[i32]) -> u64 {
    let mut attack = 0;

    let mut i = 0;
    let len = deltas.len();
    while i < len {
        let mut previous = square;
        loop {
            let sq = previous + deltas[i];
            let file_diff = (sq & 0x7) - (previous & 0x7);
            if file_diff > 2 || file_diff < -2 || sq < 0 || sq > 63 {
                break;
            }
            let bb = 1 << sq;
            attack |= bb;
            if occupied & bb != 0 {
                break;
            }
            previous = sq;
        }
        i += 1;
    }

    attack
}

const fn init_attacks(occupied: u64, deltas: &[i32]) -> [u64; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq as usize] = sliding_attacks(sq, occupied, deltas);
        sq += 1;
    }
    table
}

pub static KNIGHT_ATTACKS: [u64; 64] = init_attacks(!0, &KNIGHT_DELTAS);
pub static KING_ATTACKS: [u64; 64] = init_attacks(!0, &KING_DELTAS);
pub static PAWN_ATTACKS: ByColor<[u64; 64]> = ByColor {
    white: init_attacks(!0, &WHITE_PAWN_DELTAS),
    black: init_attacks(!0, &BLACK_PAWN_DELTAS),
};

const fn init_plausible() -> [u64; 64] {
    let rays = init_attacks(0, &QUEEN_DELTAS);
    let jumps = init_attacks(!0, &KNIGHT_DELTAS);
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = rays[sq] | jumps[sq];
        sq += 1;
    }
    table
}

// Destinations reachable from each square by some piece on an empty
// board: the full queen rays plus the knight jumps.
pub static PLAUSIBLE: [u64; 64] = init_plausible();
