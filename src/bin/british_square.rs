//! Analyse a British Square position: print the board, each side's legal cells
//! and the exact score of every move for the side to play.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use british_square::encode::parse_moves;
use british_square::game::Game;
use british_square::{SearchMode, Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, env = "BRITISH_SQUARE_WIDTH", default_value_t = 5)]
    width: usize,

    /// Board height in cells
    #[arg(long, env = "BRITISH_SQUARE_HEIGHT", default_value_t = 5)]
    height: usize,

    /// Search without the transposition table
    #[arg(long)]
    plain: bool,

    /// Moves to play before analysing: cell indices and `pass`, e.g. "2,7"
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = SolverConfig::new(args.width, args.height)
        .with_mode(SearchMode::from_memoize(!args.plain));
    let mut solver = Solver::new(&config).context("invalid board configuration")?;

    let mut game = Game::with_geometry(*solver.geometry());
    let seed = parse_moves(&args.moves, solver.geometry()).context("invalid --moves")?;
    game.seed(&seed).context("cannot play seed moves")?;
    log::debug!("seeded {} moves, {} to move", game.move_count(), game.turn());

    let start = Instant::now();
    let analysis = solver.analyse(&game.position(), game.turn())?;
    let elapsed = start.elapsed();

    println!("{analysis}");
    println!("Analysis: {:.3?}", elapsed);
    if config.mode.is_memoized() {
        let table = solver.table();
        println!(
            "Hashmap size: {} {:.2} MB",
            table.len(),
            table.approx_bytes() as f64 / f64::from(1 << 20)
        );
    }
    Ok(())
}
