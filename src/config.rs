use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::game::SPEED;

/// Snake on a wrapping grid: eat apples to grow, avoid poison and rocks.
#[derive(Debug, Clone, Parser)]
#[command(name = "snake", version, about)]
pub struct Settings {
    /// Ticks per second.
    #[arg(long, default_value_t = SPEED, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for item placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// File the game log is written to.
    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    /// One of off, error, warn, info, debug, trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
