use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Applied, Color, Move, Piece, PieceType, Square};
use crate::core::error::{MoveError, Result};
use crate::core::utils::{between, distance, is_in_diagonal_line, is_in_straight_line};

const fn white(kind: PieceType) -> Piece {
    Piece::new(Color::White, kind)
}

const fn black(kind: PieceType) -> Piece {
    Piece::new(Color::Black, kind)
}

const E: Piece = Piece::Empty;

/** Plain 8x8 board, `arr[row][col]` */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    arr: [[Piece; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            arr: [[Piece::Empty; 8]; 8],
        }
    }

    pub fn inside(&self) -> &[[Piece; 8]; 8] {
        &self.arr
    }

    pub fn get(&self, square: Square) -> Piece {
        self.arr[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.arr[square.row() as usize][square.col() as usize] = piece;
    }

    /// Checked lookup by raw coordinates.
    pub fn at(&self, row: i8, col: i8) -> Option<Piece> {
        Square::new(row, col).map(|square| self.get(square))
    }

    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.at(row, col), Some(Piece::Empty))
    }

    /// Holds a piece of the color other than `color`.
    pub fn is_opponent(&self, row: i8, col: i8, color: Color) -> bool {
        match self.at(row, col) {
            Some(Piece::Occupied { color: other, .. }) => other != color,
            _ => false,
        }
    }

    #[inline]
    fn is_free_for(&self, square: Square, color: Color) -> bool {
        self.is_empty(square.row(), square.col())
            || self.is_opponent(square.row(), square.col(), color)
    }

    fn is_path_clear(&self, from: Square, to: Square) -> bool {
        between(from, to).all(|square| self.is_empty(square.row(), square.col()))
    }

    fn mover(&self, from: Square) -> Option<Color> {
        self.get(from).color()
    }

    pub fn is_legal_pawn_move(&self, from: Square, to: Square) -> bool {
        let Some(color) = self.mover(from) else {
            return false;
        };
        let direction = color.forward();
        let (dr, dc) = (to.row() - from.row(), to.col() - from.col());
        if dc == 0 && self.is_empty(to.row(), to.col()) {
            // single push
            if dr == direction {
                return true;
            }
            // double push
            return from.row() == color.pawn_row()
                && dr == 2 * direction
                && self.is_empty(from.row() + direction, from.col());
        }
        // capture
        dc.abs() == 1 && dr == direction && self.is_opponent(to.row(), to.col(), color)
    }

    pub fn is_legal_knight_move(&self, from: Square, to: Square) -> bool {
        let Some(color) = self.mover(from) else {
            return false;
        };
        let row_diff = from.row().abs_diff(to.row());
        distance(from, to) == 3 && (row_diff == 1 || row_diff == 2) && self.is_free_for(to, color)
    }

    pub fn is_legal_bishop_move(&self, from: Square, to: Square) -> bool {
        let Some(color) = self.mover(from) else {
            return false;
        };
        from != to
            && is_in_diagonal_line(from, to)
            && self.is_path_clear(from, to)
            && self.is_free_for(to, color)
    }

    pub fn is_legal_rook_move(&self, from: Square, to: Square) -> bool {
        let Some(color) = self.mover(from) else {
            return false;
        };
        from != to
            && is_in_straight_line(from, to)
            && self.is_path_clear(from, to)
            && self.is_free_for(to, color)
    }

    pub fn is_legal_queen_move(&self, from: Square, to: Square) -> bool {
        self.is_legal_bishop_move(from, to) || self.is_legal_rook_move(from, to)
    }

    pub fn is_legal_king_move(&self, from: Square, to: Square) -> bool {
        let Some(color) = self.mover(from) else {
            return false;
        };
        from != to
            && from.row().abs_diff(to.row()) <= 1
            && from.col().abs_diff(to.col()) <= 1
            && self.is_free_for(to, color)
    }

    /** Legality of moving whatever stands on `from`, own king safety ignored. */
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        match self.get(from).kind() {
            Some(PieceType::Pawn) => self.is_legal_pawn_move(from, to),
            Some(PieceType::Knight) => self.is_legal_knight_move(from, to),
            Some(PieceType::Bishop) => self.is_legal_bishop_move(from, to),
            Some(PieceType::Rook) => self.is_legal_rook_move(from, to),
            Some(PieceType::Queen) => self.is_legal_queen_move(from, to),
            Some(PieceType::King) => self.is_legal_king_move(from, to),
            None => false,
        }
    }

    /// Whether a piece not of `color` can reach the given square.
    pub fn is_in_check(&self, king_row: i8, king_col: i8, color: Color) -> bool {
        let Some(target) = Square::new(king_row, king_col) else {
            return false;
        };
        self.iter_pieces()
            .filter(|(_, piece)| piece.color().is_some_and(|other| other != color))
            .any(|(square, _)| self.is_legal_move(square, target))
    }

    /// First king of `color` in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.iter_pieces()
            .find(|(_, piece)| piece.is(color, PieceType::King))
            .map(|(square, _)| square)
    }

    pub fn is_checked(&self, color: Color) -> bool {
        self.king_square(color)
            .map(|king| self.is_in_check(king.row(), king.col(), color))
            .unwrap_or(false)
    }

    pub fn is_promotion(&self, _move: &Move) -> bool {
        match self.get(_move.from) {
            Piece::Occupied {
                color,
                kind: PieceType::Pawn,
            } => _move.to.row() == color.promotion_row(),
            _ => false,
        }
    }

    /** Execute ***valid*** move, returns what stood on the destination. */
    pub(crate) fn execute(&mut self, _move: &Move) -> Piece {
        let piece = self.get(_move.from);
        let captured = self.get(_move.to);
        self.set(_move.to, piece);
        self.set(_move.from, Piece::Empty);
        captured
    }

    /// Validates and applies a move. The board is untouched on error.
    pub fn apply_move(&mut self, _move: Move) -> Result<Applied> {
        let piece = self.get(_move.from);
        let Some(kind) = piece.kind() else {
            return Err(MoveError::EmptySquare(_move.from));
        };
        if !self.is_legal_move(_move.from, _move.to) {
            return Err(MoveError::IllegalMove {
                from: _move.from,
                to: _move.to,
                kind,
            });
        }
        let promotion = self.is_promotion(&_move);
        let captured = self.execute(&_move);
        let promoted = if promotion {
            let new_type = match _move.promotion {
                Some(
                    new_type @ (PieceType::Knight
                    | PieceType::Bishop
                    | PieceType::Rook
                    | PieceType::Queen),
                ) => new_type,
                Some(other) => {
                    warn!("Can't promote to {other}, defaulting to Queen");
                    PieceType::Queen
                }
                None => PieceType::Queen,
            };
            self.set(_move.to, piece.with_kind(new_type));
            debug!("Pawn promoted at {} to {}", _move.to, new_type);
            Some(new_type)
        } else {
            None
        };
        debug!("Move applied: {_move} {kind} captured {captured:?}");
        Ok(Applied {
            moved: piece,
            captured,
            promoted,
        })
    }

    /// Every move the piece rules allow for `color`, row-major by source then destination.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.iter_pieces()
            .filter(|(_, piece)| piece.color() == Some(color))
            .flat_map(|(from, _)| {
                Square::all()
                    .filter(move |to| self.is_legal_move(from, *to))
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Legal moves that don't leave the own king attacked.
    pub fn safe_moves(&self, color: Color) -> Vec<Move> {
        self.legal_moves(color)
            .into_iter()
            .filter(|_move| is_move_safe(_move, self, color))
            .collect()
    }

    /// Draw when each side is down to a bare king or a king and one minor piece.
    pub fn is_insufficient_material(&self) -> bool {
        [Color::White, Color::Black].into_iter().all(|color| {
            let mut rest = self.iter_pieces().filter_map(|(_, piece)| match piece {
                Piece::Occupied { color: owner, kind }
                    if owner == color && kind != PieceType::King =>
                {
                    Some(kind)
                }
                _ => None,
            });
            match (rest.next(), rest.next()) {
                (None, _) => true,
                (Some(kind), None) => kind.is_minor(),
                _ => false,
            }
        })
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().map(move |square| (square, self.get(square)))
    }
}

#[inline]
fn is_move_safe(_move: &Move, board: &Board, color: Color) -> bool {
    let mut board = board.clone();
    board.execute(_move);
    trace!("Trying {_move} for {color}");
    !board.is_checked(color)
}

impl Default for Board {
    #[rustfmt::skip]
    fn default() -> Self {
        use PieceType::*;
        Board {
            arr: [
                [black(Rook), black(Knight), black(Bishop), black(Queen), black(King), black(Bishop), black(Knight), black(Rook)],
                [black(Pawn); 8],
                [E; 8],
                [E; 8],
                [E; 8],
                [E; 8],
                [white(Pawn); 8],
                [white(Rook), white(Knight), white(Bishop), white(Queen), white(King), white(Bishop), white(Knight), white(Rook)],
            ]
        }
    }
}

/// Maps a promotion prompt answer to a piece: 1 Knight, 2 Bishop, 3 Rook, 4 Queen.
pub fn resolve_promotion(color: Color, choice: i32) -> Piece {
    let kind = match choice {
        1 => PieceType::Knight,
        2 => PieceType::Bishop,
        3 => PieceType::Rook,
        4 => PieceType::Queen,
        _ => {
            warn!("Invalid promotion choice {choice}. Defaulting to Queen promotion.");
            PieceType::Queen
        }
    };
    Piece::new(color, kind)
}

/// Converts raw prompt coordinates into a move.
pub fn move_from_coords(sr: i32, sc: i32, dr: i32, dc: i32) -> Result<Move> {
    let square = |row: i32, col: i32| {
        match (i8::try_from(row), i8::try_from(col)) {
            (Ok(r), Ok(c)) => Square::new(r, c),
            _ => None,
        }
        .ok_or(MoveError::InvalidSquare { row, col })
    };
    Ok(Move::new(square(sr, sc)?, square(dr, dc)?))
}
