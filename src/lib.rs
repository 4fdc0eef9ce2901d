pub mod console;
pub mod core;

// module re-exports
pub use crate::core::algorithms::{Algorithm, FirstLegalMove, RandomMove};
pub use crate::core::definitions::{
    Applied, Color, KingProbe, Move, Piece, PieceType, Square, Status,
};
pub use crate::core::engine::{move_from_coords, resolve_promotion, Board};
pub use crate::core::error::MoveError;
pub use crate::core::game::{Game, GameOptions};
pub use crate::core::utils::is_valid_square;
