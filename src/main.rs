use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use simplelog::{Config, WriteLogger};

use snake::board::Board;
use snake::config::Settings;
use snake::game::{Flow, SnakeGame};
use snake::term::TermManager;

fn main() -> Result<()> {
    let settings = Settings::parse();

    // stdout is the game screen, so the log goes to a file
    let log_file = File::create(&settings.log_file)
        .with_context(|| format!("could not create log file {}", settings.log_file.display()))?;
    WriteLogger::init(settings.log_level, Config::default(), log_file)
        .context("could not initialize logger")?;

    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Starting with {:?}, seed {}", settings, seed);

    let board = Board::default();
    let mut game = SnakeGame::new(board, ChaCha8Rng::seed_from_u64(seed));
    let mut term = TermManager::new(board).context("could not prepare the terminal")?;

    let res = term.setup()
        .context("could not set up the terminal")
        .and_then(|_| play(&mut game, &mut term, settings.fps));
    term.restore().context("could not restore the terminal")?;

    res
}

fn play(game: &mut SnakeGame<ChaCha8Rng>, term: &mut TermManager, fps: u32) -> Result<()> {
    loop {
        if let Flow::Quit = game.run_frame(term, fps)? {
            info!("Exiting");
            return Ok(());
        }
    }
}
