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

//! A library for chess rules: move validation, move generation, check
//! detection and reversible move history.
//!
//! # Examples
//!
//! Generate moves in the starting position:
//!
//! ```
//! use chessai::{Board, Color};
//!
//! let board = Board::new();
//! assert_eq!(board.possible_moves(Color::White).len(), 20);
//! assert_eq!(board.legal_moves().len(), 20);
//! ```
//!
//! Play and take back moves:
//!
//! ```
//! # use chessai::Board;
//! use chessai::{Color, Move, Square};
//!
//! let mut board = Board::new();
//!
//! // 1. e4
//! let m: Move = "e2-e4".parse()?;
//! board.make_move(m, None)?;
//! assert_eq!(board.turn(), Color::Black);
//!
//! assert_eq!(board.undo(), Some(m));
//! assert!(board.get(Square::E2).is_some());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use chessai::Board;
//! let board = Board::new();
//! assert!(!board.checkmate());
//! assert!(!board.stalemate());
//! ```
//!
//! Moves are written as `e2-e4`. Positions are loaded from
//! [layouts](Board::from_layout) of two-letter piece tags.
//!
//! # Feature flags
//!
//! * `cli`: Builds the `chessai` console binary, which reads moves from
//!   standard input and prints the board. Pulls in `clap` and
//!   `env_logger`.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! Played and undone moves are logged at debug level and move list
//! recomputation at trace level through the [`log`](https://docs.rs/log)
//! facade. The library never installs a logger.

#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod bootstrap;
mod color;
mod m;
mod movegen;
mod perft;
mod role;
mod square;
mod types;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod catalog;

pub use bitboard::Bitboard;
pub use board::{Board, HistoryEntry, LayoutError, PlayError, DEFAULT_LAYOUT};
pub use color::{ByColor, Color, ParseColorError};
pub use m::{Move, MoveList, ParseMoveError};
pub use perft::perft;
pub use role::Role;
pub use square::{Direction, ParseSquareError, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}
