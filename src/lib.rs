//! Exact solver for British Square.
//!
//! Two players take turns claiming empty cells of a rectangular grid. A cell
//! orthogonally adjacent to an opponent stone is off limits, and a player with
//! no legal cell passes. The solver searches the whole game tree with negamax,
//! memoizing positions by a key that is invariant under the board's symmetries.

pub mod bitboard;
pub mod board;
pub mod config;
pub mod encode;
pub mod error;
pub mod game;
pub mod movegen;
pub mod r#move;
pub mod outcome;
pub mod player;
pub mod position;
pub mod search;
pub mod symmetry;

pub use config::{SearchMode, SolverConfig};
pub use error::{Error, Result};
pub use search::{Analysis, Score, Solver};

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn british_square(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PySolver>()?;
    m.add_class::<PyGame>()?;
    m.add("BLUE", Player::Blue as i8)?;
    m.add("RED", Player::Red as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::encode;
    use crate::game::Game;
    use crate::player::Player;

    fn value_error(err: Error) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    fn player_from(turn: i8) -> PyResult<Player> {
        Player::from_int(turn).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("turn must be 1 (blue) or -1 (red)")
        })
    }

    #[pyclass(name = "Solver")]
    pub struct PySolver {
        solver: Solver,
    }

    #[pymethods]
    impl PySolver {
        #[new]
        #[pyo3(signature = (width, height, memoize = true))]
        pub fn new(width: usize, height: usize, memoize: bool) -> PyResult<Self> {
            let config = SolverConfig::new(width, height).with_mode(SearchMode::from_memoize(memoize));
            Ok(PySolver {
                solver: Solver::new(&config).map_err(value_error)?,
            })
        }

        pub fn legal_moves(&self, mover: u64, opponent: u64) -> PyResult<Vec<usize>> {
            let position = self
                .solver
                .position(Bitboard::from_bits(mover), Bitboard::from_bits(opponent))
                .map_err(value_error)?;
            let moves = self.solver.legal_moves(&position).map_err(value_error)?;
            Ok(moves.iter_ones().collect())
        }

        pub fn evaluate(&mut self, mover: u64, opponent: u64, turn: i8) -> PyResult<i32> {
            let position = self
                .solver
                .position(Bitboard::from_bits(mover), Bitboard::from_bits(opponent))
                .map_err(value_error)?;
            self.solver
                .evaluate(&position, player_from(turn)?)
                .map_err(value_error)
        }

        /// Per-cell scores (`None` where illegal) and the overall score.
        pub fn analyse(
            &mut self,
            mover: u64,
            opponent: u64,
            turn: i8,
        ) -> PyResult<(Vec<Option<i32>>, i32)> {
            let position = self
                .solver
                .position(Bitboard::from_bits(mover), Bitboard::from_bits(opponent))
                .map_err(value_error)?;
            let analysis = self
                .solver
                .analyse(&position, player_from(turn)?)
                .map_err(value_error)?;
            Ok((analysis.child_scores, analysis.score))
        }

        pub fn table_size(&self) -> (usize, usize) {
            let table = self.solver.table();
            (table.len(), table.approx_bytes())
        }

        pub fn __repr__(&self) -> String {
            let config = self.solver.config();
            format!(
                "Solver(width={}, height={}, mode={})",
                config.width, config.height, config.mode
            )
        }
    }

    #[pyclass(name = "Game")]
    #[derive(Clone)]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new(width: usize, height: usize) -> PyResult<Self> {
            Ok(PyGame {
                game: Game::new(width, height).map_err(value_error)?,
            })
        }

        pub fn turn(&self) -> i8 {
            self.game.turn() as i8
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn score(&self) -> (u32, u32) {
            self.game.score()
        }

        pub fn legal_action_indices(&self) -> Vec<usize> {
            let (w, h) = (self.game.width(), self.game.height());
            self.game
                .legal_moves()
                .iter()
                .map(|m| encode::encode_move(m, w, h))
                .collect()
        }

        pub fn apply_action(&mut self, action: usize) -> bool {
            let (w, h) = (self.game.width(), self.game.height());
            match encode::decode_move(action, w, h) {
                Some(move_) => self.game.make_move(&move_).is_ok(),
                None => false,
            }
        }

        pub fn unmake_move(&mut self) -> bool {
            self.game.unmake_move()
        }

        /// `(mover, opponent)` bitboards for the side to move.
        pub fn position(&self) -> (u64, u64) {
            let position = self.game.position();
            (position.mover.bits(), position.opponent.bits())
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }
    }
}
