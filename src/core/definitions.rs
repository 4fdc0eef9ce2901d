use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::core::utils::is_valid_square;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step. White walks toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color promotes.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn is_minor(self) -> bool {
        matches!(self, PieceType::Knight | PieceType::Bishop)
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        })
    }
}

/** Content of a single board cell. */
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    Occupied { color: Color, kind: PieceType },
}

impl Piece {
    pub const fn new(color: Color, kind: PieceType) -> Piece {
        Piece::Occupied { color, kind }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Piece::Occupied { color, .. } => Some(*color),
            Piece::Empty => None,
        }
    }

    pub fn kind(&self) -> Option<PieceType> {
        match self {
            Piece::Occupied { kind, .. } => Some(*kind),
            Piece::Empty => None,
        }
    }

    pub fn is(&self, color: Color, kind: PieceType) -> bool {
        *self == Piece::new(color, kind)
    }

    /// Same color, new kind. Empty stays empty.
    pub fn with_kind(self, kind: PieceType) -> Piece {
        match self {
            Piece::Occupied { color, .. } => Piece::Occupied { color, kind },
            Piece::Empty => Piece::Empty,
        }
    }
}

/// A square on the board. Row 0 is Black's back rank, row 7 is White's.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if is_valid_square(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Index in 0..64, row-major.
    pub fn from_index(index: usize) -> Square {
        debug_assert!(index < 64, "Square index out of board!");
        Square {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    pub fn row(&self) -> i8 {
        self.row as i8
    }

    pub fn col(&self) -> i8 {
        self.col as i8
    }

    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row() + dr, self.col() + dc)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /** Kind a pawn turns into on the far rank, `None` means Queen */
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn set_promotion_type(&mut self, kind: PieceType) {
        self.promotion = Some(kind);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " ({kind})")?;
        }
        Ok(())
    }
}

/// Result of a successfully applied move.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Applied {
    pub moved: Piece,
    pub captured: Piece,
    pub promoted: Option<PieceType>,
}

/// Situation of the side to move.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Status {
    Normal,
    Check,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
}

impl Status {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            Status::Checkmate | Status::Stalemate | Status::InsufficientMaterial
        )
    }
}

/// Which square the terminal-state search probes after a simulated move.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum KingProbe {
    /// The mover's king as it stands after the move.
    #[default]
    KingSquare,
    /// The moved piece's own square before the move.
    MoverOrigin,
}
