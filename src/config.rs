use crate::board::{DEFAULT_COLS, DEFAULT_ROWS};

/// Which evaluator the solver runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Plain negamax, no table.
    Plain,
    /// Negamax through the transposition table, keyed by canonical position.
    #[default]
    Memoized,
}

impl SearchMode {
    pub fn from_memoize(memoize: bool) -> Self {
        if memoize {
            SearchMode::Memoized
        } else {
            SearchMode::Plain
        }
    }

    pub fn is_memoized(&self) -> bool {
        matches!(self, SearchMode::Memoized)
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Plain => write!(f, "plain"),
            SearchMode::Memoized => write!(f, "memoized"),
        }
    }
}

/// Board shape and evaluator choice for one solver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SolverConfig {
    pub width: usize,
    pub height: usize,
    pub mode: SearchMode,
}

impl SolverConfig {
    pub fn new(width: usize, height: usize) -> Self {
        SolverConfig {
            width,
            height,
            mode: SearchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
