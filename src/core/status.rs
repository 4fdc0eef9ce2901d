//! Terminal-state search: can a side make any move that leaves it out of check?
//!
//! Every candidate is tried on the live board and undone by [`Trial`] before
//! the next one, so the board is unchanged when the search returns.

use log::trace;

use crate::core::definitions::{Color, KingProbe, Move, Piece, PieceType, Square, Status};
use crate::core::engine::Board;
use crate::core::utils::{deltas, KING_MOVES, KNIGHT_MOVES};

/// A simulated move holding the board until dropped.
struct Trial<'a> {
    board: &'a mut Board,
    _move: Move,
    mover: Piece,
    captured: Piece,
}

impl<'a> Trial<'a> {
    fn new(board: &'a mut Board, _move: Move) -> Self {
        let mover = board.get(_move.from);
        let captured = board.execute(&_move);
        Trial {
            board,
            _move,
            mover,
            captured,
        }
    }

    fn leaves_check(&self, color: Color, probe: KingProbe) -> bool {
        let probe_square = match probe {
            KingProbe::MoverOrigin => Some(self._move.from),
            KingProbe::KingSquare if self.mover.kind() == Some(PieceType::King) => {
                Some(self._move.to)
            }
            KingProbe::KingSquare => self.board.king_square(color),
        };
        probe_square
            .map(|square| self.board.is_in_check(square.row(), square.col(), color))
            .unwrap_or(false)
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set(self._move.from, self.mover);
        self.board.set(self._move.to, self.captured);
    }
}

/// Destinations worth trying for a piece, before the legality rule filters them.
fn candidates(kind: PieceType) -> Vec<(i8, i8)> {
    match kind {
        PieceType::Pawn => deltas(1).collect(),
        PieceType::Knight => KNIGHT_MOVES.to_vec(),
        PieceType::Bishop => deltas(7).filter(|(dr, dc)| dr.abs() == dc.abs()).collect(),
        PieceType::Rook => deltas(7).filter(|(dr, dc)| *dr == 0 || *dc == 0).collect(),
        PieceType::Queen => deltas(7)
            .filter(|(dr, dc)| *dr == 0 || *dc == 0 || dr.abs() == dc.abs())
            .collect(),
        PieceType::King => KING_MOVES.to_vec(),
    }
}

impl Board {
    /// True when no move of `color` ends out of check, as seen by `probe`.
    pub fn has_no_escape(&mut self, color: Color, probe: KingProbe) -> bool {
        let pieces: Vec<(Square, PieceType)> = self
            .iter_pieces()
            .filter_map(|(square, piece)| match piece {
                Piece::Occupied { color: owner, kind } if owner == color => Some((square, kind)),
                _ => None,
            })
            .collect();
        for (from, kind) in pieces {
            for (dr, dc) in candidates(kind) {
                let Some(to) = from.offset(dr, dc) else {
                    continue;
                };
                if !self.is_legal_move(from, to) {
                    continue;
                }
                let trial = Trial::new(self, Move::new(from, to));
                if !trial.leaves_check(color, probe) {
                    trace!("Escape for {color}: {from} -> {to}");
                    return false;
                }
            }
        }
        true
    }

    /// Move-availability half of checkmate; pair it with [`Board::is_in_check`].
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.has_no_escape(color, KingProbe::default())
    }

    /// Move-availability half of stalemate; pair it with [`Board::is_in_check`].
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        self.has_no_escape(color, KingProbe::default())
    }

    pub fn status(&mut self, color: Color, probe: KingProbe) -> Status {
        let checked = self.is_checked(color);
        let stuck = self.has_no_escape(color, probe);
        match (checked, stuck) {
            (true, true) => Status::Checkmate,
            _ if self.is_insufficient_material() => Status::InsufficientMaterial,
            (false, true) => Status::Stalemate,
            (true, false) => Status::Check,
            (false, false) => Status::Normal,
        }
    }
}
