use log::{debug, info};

use crate::core::algorithms::Algorithm;
use crate::core::definitions::{Applied, Color, KingProbe, Move, Status};
use crate::core::engine::Board;
use crate::core::error::{MoveError, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub king_probe: KingProbe,
}

/// One game: owns the board and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    status: Status,
    options: GameOptions,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game::with_player(board, Color::White)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game::with_options(board, player, GameOptions::default())
    }

    pub fn with_options(board: Board, player: Color, options: GameOptions) -> Game {
        let mut game = Game {
            board,
            current_player: player,
            status: Status::Normal,
            options,
        };
        game.refresh_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn game_ended(&self) -> bool {
        self.status.is_finished()
    }

    pub fn needs_promotion(&self, _move: &Move) -> bool {
        self.board.is_promotion(_move)
    }

    fn refresh_status(&mut self) {
        self.status = self
            .board
            .status(self.current_player, self.options.king_probe);
        if self.status.is_finished() {
            info!("Game finished: {:?} for {}", self.status, self.current_player);
        }
    }

    /// Plays a move for the side on turn and hands the turn over.
    pub fn execute(&mut self, _move: Move) -> Result<Applied> {
        if self.game_ended() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(_move.from).color() {
            None => return Err(MoveError::EmptySquare(_move.from)),
            Some(color) if color != self.current_player => {
                return Err(MoveError::NotYourTurn {
                    color: self.current_player,
                })
            }
            Some(_) => {}
        }
        let applied = self.board.apply_move(_move)?;
        self.current_player = self.current_player.opposite();
        self.refresh_status();
        debug!("{} to move, status {:?}", self.current_player, self.status);
        Ok(applied)
    }

    /// Lets `algorithm` move for the side on turn. `Ok(None)` if it found nothing.
    pub fn play_algorithm(
        &mut self,
        algorithm: &mut dyn Algorithm,
    ) -> Result<Option<(Move, Applied)>> {
        if self.game_ended() {
            return Err(MoveError::GameOver);
        }
        match algorithm.solve(&self.board, self.current_player) {
            Some(_move) => self.execute(_move).map(|applied| Some((_move, applied))),
            None => Ok(None),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Default::default())
    }
}
