use std::io;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{Board, CellCount, Coord, GameConfig, RandomMineGenerator};
use tracing_subscriber::filter::LevelFilter;

mod game;
mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(short = 'r', long, default_value_t = 10)]
    height: Coord,

    /// Number of columns
    #[arg(short = 'c', long, default_value_t = 10)]
    width: Coord,

    /// Number of mines to hide
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep earlier turns on screen instead of clearing the terminal
    #[arg(long)]
    no_clear: bool,
}

/// Routes `log` records to stderr so they never mix with the board on stdout.
fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.tracing_level_filter());

    let config = GameConfig::new(args.height, args.width, args.mines)
        .context("Could not set up the board")?;
    let generator = args
        .seed
        .map_or_else(RandomMineGenerator::with_random_seed, RandomMineGenerator::new);
    log::debug!("seed: {}", generator.seed());

    let mut board = Board::from_config(config, generator);
    let options = game::PlayOptions {
        clear_screen: !args.no_clear,
    };
    let ending = game::play(&mut board, io::stdin().lock(), io::stdout().lock(), options)?;
    log::info!("game over: {:?}", ending);
    Ok(())
}
