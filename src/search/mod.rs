//! Exhaustive game-tree search.
//!
//! Contains:
//! - Negamax evaluation with the pass-score base case
//! - Transposition table keyed by canonical (symmetry-reduced) positions
//! - Per-cell analysis of a position

pub mod analysis;
pub mod negamax;
pub mod tt;

pub use analysis::Analysis;
pub use negamax::{evaluate, pass_score, Score, SearchStats, Solver};
pub use tt::TranspositionTable;
