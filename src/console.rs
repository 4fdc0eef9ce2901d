//! Text front-end: board rendering and prompt parsing.

use std::fmt::{self, Display};

use thiserror::Error;

use crate::core::definitions::{Color, Move, Piece, PieceType};
use crate::core::engine::{move_from_coords, Board};
use crate::core::error::MoveError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected four numbers: source_row source_col dest_row dest_col")]
    WrongArity,

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error(transparent)]
    Square(#[from] MoveError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
}

pub fn glyph(piece: Piece) -> char {
    use PieceType::*;
    match piece {
        Piece::Empty => '.',
        Piece::Occupied { color: Color::White, kind } => match kind {
            Pawn => '♟',
            Knight => '♞',
            Bishop => '♝',
            Rook => '♜',
            Queen => '♛',
            King => '♚',
        },
        Piece::Occupied { color: Color::Black, kind } => match kind {
            Pawn => '♙',
            Knight => '♘',
            Bishop => '♗',
            Rook => '♖',
            Queen => '♕',
            King => '♔',
        },
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        writeln!(f, "  ---------------")?;
        for (row, cells) in self.inside().iter().enumerate() {
            write!(f, "{row} |")?;
            for piece in cells {
                write!(f, "{} ", glyph(*piece))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses `sr sc dr dc` or `quit`.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }
    let coords = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| ParseError::NotANumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    match coords[..] {
        [sr, sc, dr, dc] => Ok(Command::Move(move_from_coords(sr, sc, dr, dc)?)),
        _ => Err(ParseError::WrongArity),
    }
}

/// Anything unreadable becomes 0, which promotes to a Queen.
pub fn parse_promotion_choice(line: &str) -> i32 {
    line.trim().parse().unwrap_or(0)
}
