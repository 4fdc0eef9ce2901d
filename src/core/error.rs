//! Errors reported when a move is rejected.

use thiserror::Error;

use crate::core::definitions::{Color, PieceType, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid square: {row},{col}")]
    InvalidSquare { row: i32, col: i32 },

    #[error("Invalid piece: square {0} is empty")]
    EmptySquare(Square),

    #[error("Illegal move: {kind} can't go from {from} to {to}")]
    IllegalMove {
        from: Square,
        to: Square,
        kind: PieceType,
    },

    #[error("It's {color}'s turn")]
    NotYourTurn { color: Color },

    #[error("Game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, MoveError>;
