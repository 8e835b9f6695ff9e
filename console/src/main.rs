use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};

use sweeper_core::{Game, GameConfig, GameEvent, GameState};

use command::Command;

mod board;
mod command;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = 10)]
    columns: usize,

    /// Number of traps
    #[arg(short, long, default_value_t = 10)]
    traps: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.rows, args.columns, args.traps).context("Invalid board")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let mut game = Game::seeded(config, seed)?;
    game.subscribe(|event, game| match event {
        GameEvent::GridChanged => {
            if let Err(err) = board::draw(game, &mut io::stdout().lock()) {
                log::warn!("Could not draw board: {err}");
            }
        }
        GameEvent::StateChanged { current, .. } => match current {
            GameState::Defeat => println!("Fail!"),
            GameState::Victory => println!("Win!"),
            GameState::New | GameState::InProgress => {}
        },
    });

    board::draw(&game, &mut io::stdout().lock())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            break;
        }

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(err) if err.ends_session() => {
                log::debug!("Ending session: {err}");
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let point = match command {
            Command::Reveal(point) => {
                let outcome = game.reveal(point);
                log::debug!("Reveal {point}: {outcome:?}");
                point
            }
            Command::Mark(point) => {
                let outcome = game.mark(point);
                log::debug!("Mark {point}: {outcome:?}");
                point
            }
        };
        match game.cell_at(point) {
            Some(cell) => log::trace!("{}", board::describe(point, cell)),
            None => eprintln!("{point} is outside the board"),
        }
    }

    Ok(())
}
