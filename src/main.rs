use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chess_rules::console::{glyph, parse_command, parse_promotion_choice, Command};
use chess_rules::{
    resolve_promotion, Algorithm, Board, Color, FirstLegalMove, Game, GameOptions, KingProbe,
    RandomMove, Status,
};
use clap::{Parser, ValueEnum};
use log::info;

/// Console chess against a placeholder opponent.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Side played from the keyboard.
    #[arg(long, value_enum, default_value_t = Side::White)]
    human: Side,

    #[arg(long, value_enum, default_value_t = Opponent::First)]
    opponent: Opponent,

    /// Seed for the random opponent.
    #[arg(long)]
    seed: Option<u64>,

    /// Square probed when searching for checkmate escapes.
    #[arg(long, value_enum, default_value_t = Probe::KingSquare)]
    king_probe: Probe,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opponent {
    First,
    Random,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Probe {
    KingSquare,
    MoverOrigin,
}

impl From<Side> for Color {
    fn from(value: Side) -> Self {
        match value {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl From<Probe> for KingProbe {
    fn from(value: Probe) -> Self {
        match value {
            Probe::KingSquare => KingProbe::KingSquare,
            Probe::MoverOrigin => KingProbe::MoverOrigin,
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("Failed to flush stdout")?;
    lines
        .next()
        .transpose()
        .context("Failed to read from stdin")
}

fn announce(game: &Game) -> bool {
    let player = game.current_player();
    match game.status() {
        Status::Checkmate => println!("Checkmate! {} wins.", player.opposite()),
        Status::Stalemate => println!("Stalemate! {player} has no legal move."),
        Status::InsufficientMaterial => println!("Draw by insufficient material."),
        Status::Check => println!("{player} is in check."),
        Status::Normal => (),
    }
    game.game_ended()
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = Config::parse();
    info!("Starting with {config:?}");

    let human: Color = config.human.into();
    let mut opponent: Box<dyn Algorithm> = match (config.opponent, config.seed) {
        (Opponent::First, _) => Box::new(FirstLegalMove),
        (Opponent::Random, Some(seed)) => Box::new(RandomMove::with_seed(seed)),
        (Opponent::Random, None) => Box::new(RandomMove::new()),
    };
    let options = GameOptions {
        king_probe: config.king_probe.into(),
    };
    let mut game = Game::with_options(Board::default(), Color::White, options);
    info!("Checkmate search probes {:?}", game.options().king_probe);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", game.board());
        if announce(&game) {
            break;
        }
        if game.current_player() != human {
            println!("AI's move ({}):", game.current_player());
            match game.play_algorithm(opponent.as_mut()) {
                Ok(Some((_move, applied))) => {
                    println!("AI played {} {_move}", glyph(applied.moved))
                }
                Ok(None) => {
                    println!("AI has no move to play.");
                    break;
                }
                Err(err) => {
                    println!("{err}");
                    break;
                }
            }
            continue;
        }
        let Some(line) = prompt(
            &mut lines,
            &format!("Your move ({human}), source_row source_col dest_row dest_col: "),
        )?
        else {
            break;
        };
        let mut _move = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Move(_move)) => _move,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if game.needs_promotion(&_move) && game.board().is_legal_move(_move.from, _move.to) {
            let text = format!(
                "Enter promotion choice for pawn at {} (1 - Knight, 2 - Bishop, 3 - Rook, 4 - Queen): ",
                _move.to
            );
            let choice = prompt(&mut lines, &text)?
                .map(|line| parse_promotion_choice(&line))
                .unwrap_or(0);
            if let Some(kind) = resolve_promotion(human, choice).kind() {
                _move.set_promotion_type(kind);
            }
        }
        match game.execute(_move) {
            Ok(applied) => {
                if let Some(kind) = applied.promoted {
                    println!("Pawn promoted at {} to {kind}", _move.to);
                }
                println!("Move applied.");
            }
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}
