use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::definitions::{Color, Move};
use crate::core::engine::Board;

/// Picks the opponent's move. `None` means `color` has nothing to play.
pub trait Algorithm {
    fn solve(&mut self, board: &Board, color: Color) -> Option<Move>;
}

/// First piece that can move, first destination it can reach.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMove;

impl Algorithm for FirstLegalMove {
    fn solve(&mut self, board: &Board, color: Color) -> Option<Move> {
        let chosen = board.legal_moves(color).into_iter().next();
        debug!("First legal move for {color}: {chosen:?}");
        chosen
    }
}

/// Uniformly random move that keeps the own king safe when one exists.
#[derive(Debug, Clone)]
pub struct RandomMove {
    rng: StdRng,
}

impl RandomMove {
    pub fn new() -> Self {
        RandomMove {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomMove {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMove {
    fn default() -> Self {
        RandomMove::new()
    }
}

impl Algorithm for RandomMove {
    fn solve(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mut moves = board.safe_moves(color);
        if moves.is_empty() {
            moves = board.legal_moves(color);
        }
        let chosen = moves.choose(&mut self.rng).copied();
        debug!(
            "Random move for {color}: {chosen:?} out of {} options",
            moves.len()
        );
        chosen
    }
}
