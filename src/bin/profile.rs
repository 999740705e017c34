//! Profiling harness: solve a board after a few random opening moves.
//!
//! Build with `--features hotpath` to get per-function timings of move
//! generation, canonicalisation and the recursive search.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use british_square::game::Game;
use british_square::r#move::Move;
use british_square::{Solver, SolverConfig};

const WIDTH: usize = 5;
const HEIGHT: usize = 4;
const OPENING_MOVES: usize = 2;
const GAMES: u64 = 4;

#[hotpath::main]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    for seed in 0..GAMES {
        let mut solver = Solver::new(&SolverConfig::new(WIDTH, HEIGHT))?;
        let mut game = Game::with_geometry(*solver.geometry());
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..OPENING_MOVES {
            let moves: Vec<Move> = game.legal_moves();
            match moves.choose(&mut rng) {
                Some(mv) => game.make_move(mv)?,
                None => break,
            }
        }

        let score = solver.evaluate(&game.position(), game.turn())?;
        println!(
            "seed {seed}: {:?} -> {score} ({} nodes, {} entries)",
            game.move_history(),
            solver.stats().nodes,
            solver.table().len()
        );
    }
    Ok(())
}
