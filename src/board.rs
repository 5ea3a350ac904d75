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

//! Board state, layouts and reversible move application.

use core::{cell::OnceCell, error::Error, fmt};

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::{
    bitboard::Bitboard,
    catalog,
    color::{ByColor, Color},
    m::{Move, MoveList, ParseMoveError},
    role::Role,
    square::Square,
    types::Piece,
};

/// The standard starting layout, one row per rank from rank 1 to rank 8.
#[rustfmt::skip]
pub const DEFAULT_LAYOUT: [[&str; 8]; 8] = [
    ["wr", "wn", "wb", "wq", "wk", "wb", "wn", "wr"],
    ["wp", "wp", "wp", "wp", "wp", "wp", "wp", "wp"],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["bp", "bp", "bp", "bp", "bp", "bp", "bp", "bp"],
    ["br", "bn", "bb", "bq", "bk", "bb", "bn", "br"],
];

/// Maximum number of pieces per side.
pub const MAX_PIECES: usize = 16;

/// Error when loading an invalid layout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// A non-empty cell is not a `<color><role>` tag like `wk`.
    InvalidTag { square: Square },
    /// The layout has more than 8 rows.
    TooManyRows,
    /// A row has more than 8 entries.
    TooManyColumns { row: usize },
    /// A side has more than one king.
    TooManyKings(Color),
    /// A side has more than 16 pieces.
    TooManyPieces(Color),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LayoutError::InvalidTag { square } => write!(f, "invalid piece tag on {square}"),
            LayoutError::TooManyRows => f.write_str("layout has more than 8 rows"),
            LayoutError::TooManyColumns { row } => {
                write!(f, "layout row {row} has more than 8 entries")
            }
            LayoutError::TooManyKings(color) => write!(f, "{color} has more than one king"),
            LayoutError::TooManyPieces(color) => {
                write!(f, "{color} has more than {MAX_PIECES} pieces")
            }
        }
    }
}

impl Error for LayoutError {}

/// Error when trying to play an illegal move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// The move is not possible on this board, or the piece on its origin
    /// does not belong to the side to move.
    IllegalMove(Move),
    /// Pawns cannot be promoted to this role.
    InvalidPromotion(Role),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PlayError::IllegalMove(m) => write!(f, "illegal move {m}"),
            PlayError::InvalidPromotion(role) => {
                write!(f, "cannot promote to {}", role.upper_char())
            }
        }
    }
}

impl Error for PlayError {}

/// A move that has been played, as recorded in the [history](Board::history).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryEntry {
    m: Move,
    role: Role,
    touched: ArrayVec<(Square, Option<Piece>), 4>,
}

impl HistoryEntry {
    /// The move as played, with its capture tag filled in from the board.
    pub fn m(&self) -> Move {
        self.m
    }

    /// Role of the piece that moved, before any promotion.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The piece captured by the move, as it stood before being taken.
    pub fn captured(&self) -> Option<Piece> {
        if self.m.is_castle() {
            return None;
        }
        self.touched
            .iter()
            .find(|&&(sq, _)| sq == self.m.to())
            .and_then(|&(_, piece)| piece)
    }
}

/// A chess board: pieces, side to move and the moves played so far.
///
/// The board owns its pieces. Every piece is stored in the cell of its
/// square and in the membership set of its color, and the two always
/// agree. Moves are applied with [`Board::make_move`] and reversed
/// exactly with [`Board::undo`].
///
/// # Examples
///
/// ```
/// use chessai::{Board, Color, Square};
///
/// let mut board = Board::new();
/// let m = board.parse_move("e2-e4")?;
/// board.make_move(m, None)?;
///
/// assert_eq!(board.turn(), Color::Black);
/// assert!(board.get(Square::E4).is_some());
///
/// assert_eq!(board.undo(), Some(m));
/// assert_eq!(board, chessai::Board::new());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
///
/// # Display
///
/// The board renders as a rank-labelled grid of piece glyphs, with `-`
/// for empty squares, followed by the side to move:
///
/// ```text
/// ===
///     8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
///     7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟
///     6 - - - - - - - -
///     5 - - - - - - - -
///     4 - - - - - - - -
///     3 - - - - - - - -
///     2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙
///     1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖
///       a b c d e f g h
/// Next move: White
/// ===
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    contents: [Option<Piece>; 64],
    by_color: ByColor<Bitboard>,
    kings: ByColor<Option<Square>>,
    turn: Color,
    history: Vec<HistoryEntry>,
    moves: ByColor<OnceCell<MoveList>>,
}

impl Board {
    /// A board with the standard starting layout, white to move.
    pub fn new() -> Board {
        let mut board = Board::empty(Color::White);
        board.place_layout(&DEFAULT_LAYOUT);
        board
    }

    /// A board without any pieces.
    pub fn empty(turn: Color) -> Board {
        Board {
            contents: [None; 64],
            by_color: ByColor::default(),
            kings: ByColor::default(),
            turn,
            history: Vec::new(),
            moves: ByColor::default(),
        }
    }

    /// Loads a layout of `<color><role>` tags, one row per rank starting
    /// at rank 1. Empty strings and missing trailing entries are empty
    /// squares.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if a tag is malformed, the layout is larger
    /// than 8×8, or a side has more than one king or more than 16 pieces.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Board, Color, Role, Square};
    ///
    /// let mut layout = vec![Vec::new(); 8];
    /// layout[0] = vec!["wk"];
    /// layout[7] = vec!["bk", "", "", "", "", "", "", "br"];
    ///
    /// let board = Board::from_layout(&layout, Color::Black)?;
    /// assert_eq!(board.role_at(Square::H8), Some(Role::Rook));
    /// assert_eq!(board.king_of(Color::White), Some(Square::A1));
    /// # Ok::<_, chessai::LayoutError>(())
    /// ```
    pub fn from_layout<R, S>(layout: &[R], turn: Color) -> Result<Board, LayoutError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if layout.len() > 8 {
            return Err(LayoutError::TooManyRows);
        }

        let mut pieces = ByColor::<usize>::default();
        let mut kings = ByColor::<usize>::default();
        let mut placed = ArrayVec::<Piece, 64>::new();

        for (row, cells) in layout.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() > 8 {
                return Err(LayoutError::TooManyColumns { row });
            }
            for (col, tag) in cells.iter().enumerate() {
                let tag = tag.as_ref();
                if tag.is_empty() {
                    continue;
                }
                let square = Square::new((row * 8 + col) as u32);
                let piece = Piece::from_tag(tag, square).ok_or(LayoutError::InvalidTag { square })?;

                *pieces.get_mut(piece.color) += 1;
                if *pieces.get(piece.color) > MAX_PIECES {
                    return Err(LayoutError::TooManyPieces(piece.color));
                }
                if piece.role == Role::King {
                    *kings.get_mut(piece.color) += 1;
                    if *kings.get(piece.color) > 1 {
                        return Err(LayoutError::TooManyKings(piece.color));
                    }
                }
                placed.push(piece);
            }
        }

        let mut board = Board::empty(turn);
        for piece in placed {
            board.set(piece.square, Some(piece));
        }
        debug!(
            "loaded layout with {} white and {} black pieces, {turn} to move",
            pieces.white, pieces.black
        );
        Ok(board)
    }

    fn place_layout(&mut self, layout: &[[&str; 8]; 8]) {
        for (row, cells) in layout.iter().enumerate() {
            for (col, tag) in cells.iter().enumerate() {
                let square = Square::new((row * 8 + col) as u32);
                if let Some(piece) = Piece::from_tag(tag, square) {
                    self.set(square, Some(piece));
                }
            }
        }
    }

    /// Removes all pieces and forgets the history. The side to move is
    /// kept.
    pub fn clear(&mut self) {
        *self = Board::empty(self.turn);
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.contents[sq.index()]
    }

    /// The role of the piece on `sq`, if any.
    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.get(sq).map(|piece| piece.role)
    }

    /// The color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|piece| piece.color)
    }

    /// All 64 cells in square index order.
    pub fn contents(&self) -> &[Option<Piece>; 64] {
        &self.contents
    }

    /// Squares occupied by pieces of either color.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.by_color.white | self.by_color.black
    }

    /// Squares occupied by pieces of `color`.
    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        *self.by_color.get(color)
    }

    /// The pieces of `color`, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.by_color(color)
            .into_iter()
            .filter_map(move |sq| self.get(sq))
    }

    /// Square of the king of `color`, or `None` if it has none.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        *self.kings.get(color)
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The moves played so far, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Tests if the pseudo-legal move list of `color` is cached and fresh.
    pub fn is_up_to_date(&self, color: Color) -> bool {
        self.fresh_moves(color).is_some()
    }

    pub(crate) fn fresh_moves(&self, color: Color) -> Option<&MoveList> {
        self.moves.get(color).get()
    }

    /// Puts `piece` on `sq`, or clears it, keeping the membership sets,
    /// king squares and move caches consistent.
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(old) = self.contents[sq.index()].take() {
            self.by_color.get_mut(old.color).discard(sq);
            if old.role == Role::King && self.king_of(old.color) == Some(sq) {
                *self.kings.get_mut(old.color) = None;
            }
        }
        if let Some(piece) = piece {
            debug_assert_eq!(piece.square, sq);
            self.by_color.get_mut(piece.color).add(sq);
            if piece.role == Role::King {
                *self.kings.get_mut(piece.color) = Some(sq);
            }
        }
        self.contents[sq.index()] = piece;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.moves = ByColor::default();
    }

    fn is_consistent(&self) -> bool {
        Square::all().all(|sq| match self.get(sq) {
            Some(piece) => {
                piece.square == sq
                    && self.by_color(piece.color).contains(sq)
                    && !self.by_color(!piece.color).contains(sq)
            }
            None => !self.occupied().contains(sq),
        }) && Color::ALL.into_iter().all(|color| {
            self.king_of(color).is_none_or(|sq| {
                matches!(self.get(sq), Some(p) if p.role == Role::King && p.color == color)
            })
        })
    }

    /// Plays a legal move for the side to move.
    ///
    /// A pawn reaching its last rank is replaced by a piece of
    /// `promotion`, or a queen if `None`. The promotion role is ignored
    /// for all other moves.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::IllegalMove`] if `m` is not
    /// [legal](Board::is_legal), and [`PlayError::InvalidPromotion`] for a
    /// king or pawn promotion role. The board is unchanged in both cases.
    pub fn make_move(&mut self, m: Move, promotion: Option<Role>) -> Result<(), PlayError> {
        if let Some(role) = promotion.filter(|role| !role.is_promotion_target()) {
            return Err(PlayError::InvalidPromotion(role));
        }
        if !self.is_legal(m) {
            return Err(PlayError::IllegalMove(m));
        }
        self.make_move_unchecked(m, promotion);
        Ok(())
    }

    /// Plays a move without validating it.
    ///
    /// Illegal moves are caught by a debug assertion. In release builds a
    /// move from an empty square is ignored, and an invalid promotion role
    /// falls back to a queen, so the board stays consistent either way.
    pub fn make_move_unchecked(&mut self, m: Move, promotion: Option<Role>) {
        debug_assert!(self.is_legal(m), "illegal move {m} for {}", self.turn);

        let Some(piece) = self.get(m.from()) else {
            debug!("ignoring {m}: no piece on {}", m.from());
            return;
        };

        let captured = self.get(m.to());
        let rook = catalog::castle_rook(m);

        let mut touched = ArrayVec::new();
        touched.push((m.from(), Some(piece)));
        touched.push((m.to(), captured));
        if let Some((rook_from, rook_to)) = rook {
            touched.push((rook_from, self.get(rook_from)));
            touched.push((rook_to, self.get(rook_to)));
        }
        let recorded = m.with_capture(captured.map(|p| p.role));
        self.history.push(HistoryEntry {
            m: recorded,
            role: piece.role,
            touched,
        });

        let mut moved = piece.moved_to(m.to());
        if piece.role == Role::Pawn && m.to().row() == piece.color.promotion_row() {
            moved.role = promotion
                .filter(|role| role.is_promotion_target())
                .unwrap_or(Role::Queen);
            debug!("{} promotes on {}", moved, m.to());
        }
        self.set(m.from(), None);
        self.set(m.to(), Some(moved));

        if let Some((rook_from, rook_to)) = rook {
            if let Some(rook) = self.get(rook_from) {
                self.set(rook_from, None);
                self.set(rook_to, Some(rook.moved_to(rook_to)));
            }
        }

        self.turn = !self.turn;
        debug_assert!(self.is_consistent());
        debug!("{} played {recorded}", piece.color);
    }

    /// Takes back the last move, restoring the board exactly as it was.
    ///
    /// Returns the undone move, or `None` if no moves have been played.
    pub fn undo(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        for &(sq, piece) in entry.touched.iter().rev() {
            self.set(sq, piece);
        }
        self.turn = !self.turn;
        debug_assert!(self.is_consistent());
        debug!("undid {}", entry.m);
        Some(entry.m)
    }

    /// Parses `e2-e4` notation and resolves it against this board.
    ///
    /// King steps e1-c1, e1-g1, e8-c8 and e8-g8 become castles and the
    /// capture tag is taken from the destination square. The result is
    /// not checked for legality.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoveError`] if the notation is malformed or names
    /// squares that no piece could move between.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessai::{Board, Role};
    ///
    /// let board = Board::new();
    /// let m = board.parse_move("d1-d7")?;
    /// assert_eq!(m.capture(), Some(Role::Pawn));
    /// # Ok::<_, chessai::ParseMoveError>(())
    /// ```
    pub fn parse_move(&self, s: &str) -> Result<Move, ParseMoveError> {
        let m: Move = s.parse()?;
        if self.role_at(m.from()) == Some(Role::King) {
            if let Some(castle) = Move::castle(m.from(), m.to()) {
                return Ok(castle);
            }
        }
        Ok(m.with_capture(self.role_at(m.to())))
    }

    pub(crate) fn cached_moves(&self, color: Color, compute: impl FnOnce() -> MoveList) -> &MoveList {
        self.moves.get(color).get_or_init(|| {
            let moves = compute();
            trace!("recomputed {} possible moves for {color}", moves.len());
            moves
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl PartialEq for Board {
    /// Boards are equal if they have the same pieces, including their
    /// `has_moved` flags, and the same side to move. History and caches
    /// are not compared.
    fn eq(&self, other: &Board) -> bool {
        self.contents == other.contents && self.turn == other.turn
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("===\n")?;
        for row in (0..8).rev() {
            write!(f, "    {} ", row + 1)?;
            for col in 0..8 {
                match self.get(Square::new(row * 8 + col)) {
                    Some(piece) => write!(f, "{} ", piece.symbol())?,
                    None => f.write_str("- ")?,
                }
            }
            f.write_str("\n")?;
        }
        f.write_str("      a b c d e f g h\n")?;
        write!(f, "Next move: {}\n===\n", self.turn.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(board: &Board, s: &str) -> Move {
        board.parse_move(s).expect("valid notation")
    }

    #[test]
    fn test_default_layout() {
        let board = Board::new();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.by_color(Color::White), Bitboard(0xffff));
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));
        assert_eq!(board.role_at(Square::D8), Some(Role::Queen));
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert!(board.pieces(Color::White).all(|p| !p.has_moved));
        assert!(board.is_consistent());
        assert_eq!(Board::from_layout(&DEFAULT_LAYOUT, Color::White), Ok(board));
    }

    #[test]
    fn test_layout_errors() {
        let too_many_rows = vec![Vec::<&str>::new(); 9];
        assert_eq!(
            Board::from_layout(&too_many_rows, Color::White),
            Err(LayoutError::TooManyRows)
        );
        assert_eq!(
            Board::from_layout(&[vec![""; 9]], Color::White),
            Err(LayoutError::TooManyColumns { row: 0 })
        );
        assert_eq!(
            Board::from_layout(&[["", "xk"]], Color::White),
            Err(LayoutError::InvalidTag { square: Square::B1 })
        );
        assert_eq!(
            Board::from_layout(&[["wk", "wk"]], Color::White),
            Err(LayoutError::TooManyKings(Color::White))
        );
        assert_eq!(
            Board::from_layout(&[vec!["bq"; 8], vec!["bq"; 8], vec!["bq"]], Color::White),
            Err(LayoutError::TooManyPieces(Color::Black))
        );
    }

    #[test]
    fn test_sparse_layout() {
        let board = Board::from_layout(&[["", "wk"], ["", ""]], Color::Black).expect("valid");
        assert_eq!(board.occupied(), Bitboard::from_square(Square::B1));
        assert_eq!(board.king_of(Color::Black), None);
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_set_keeps_membership() {
        let mut board = Board::empty(Color::White);
        let queen = Piece::new(Role::Queen, Color::White, Square::D4);
        board.set(Square::D4, Some(queen));
        assert!(board.by_color(Color::White).contains(Square::D4));

        let knight = Piece::new(Role::Knight, Color::Black, Square::D4);
        board.set(Square::D4, Some(knight));
        assert!(!board.by_color(Color::White).contains(Square::D4));
        assert!(board.by_color(Color::Black).contains(Square::D4));

        board.set(Square::D4, None);
        assert!(board.occupied().is_empty());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_make_move_and_undo() {
        let mut board = Board::new();
        let e4 = mv(&board, "e2-e4");
        board.make_move(e4, None).expect("legal");
        let pawn = board.get(Square::E4).expect("pawn");
        assert!(pawn.has_moved);
        assert_eq!(board.get(Square::E2), None);
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.history()[0].role(), Role::Pawn);

        assert_eq!(board.make_move(e4, None), Err(PlayError::IllegalMove(e4)));

        assert_eq!(board.undo(), Some(e4));
        assert_eq!(board, Board::new());
        assert_eq!(board.undo(), None);
    }

    #[test]
    fn test_invalid_promotion() {
        let mut board = Board::new();
        let e4 = mv(&board, "e2-e4");
        assert_eq!(
            board.make_move(e4, Some(Role::King)),
            Err(PlayError::InvalidPromotion(Role::King))
        );
        assert_eq!(board.history().len(), 0);
        // Ignored when the move does not promote.
        board.make_move(e4, Some(Role::Knight)).expect("legal");
        assert_eq!(board.role_at(Square::E4), Some(Role::Pawn));
    }

    #[test]
    fn test_parse_move() {
        let board = Board::from_layout(
            &[
                vec!["wr", "", "", "", "wk", "", "", "wr"],
                vec![],
                vec![],
                vec![],
                vec![],
                vec![],
                vec![],
                vec!["br", "", "", "", "bk"],
            ],
            Color::White,
        )
        .expect("valid");
        assert!(mv(&board, "e1-g1").is_castle());
        assert!(mv(&board, "e1-c1").is_castle());
        assert!(mv(&board, "e8-c8").is_castle());
        assert!(!mv(&board, "h1-f1").is_castle());
        assert_eq!(mv(&board, "a1-a8").capture(), Some(Role::Rook));
        assert_eq!(board.parse_move("a1-b3"), Move::new(Square::A1, Square::B3, None).ok_or(ParseMoveError::Impossible));
        assert_eq!(board.parse_move("a1-c4"), Err(ParseMoveError::Impossible));
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let expected = "===\n\
                        \x20   8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ \n\
                        \x20   7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ \n\
                        \x20   6 - - - - - - - - \n\
                        \x20   5 - - - - - - - - \n\
                        \x20   4 - - - - - - - - \n\
                        \x20   3 - - - - - - - - \n\
                        \x20   2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ \n\
                        \x20   1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ \n\
                        \x20     a b c d e f g h\n\
                        Next move: White\n\
                        ===\n";
        assert_eq!(board.to_string(), expected);
    }
}
