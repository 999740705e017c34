//! Exhaustive negamax over British Square positions.
//!
//! A position's score is the final stone differential from the mover's point of
//! view under perfect play. Once the mover has no legal cell it can never move
//! again (opponent stones only ever forbid more cells), while the opponent keeps
//! every cell it can currently claim, so the rest of the game is fixed and is
//! scored directly by [`pass_score`] instead of being searched.

use log::{debug, info};

use crate::bitboard::{Bitboard, BoardGeometry};
use crate::config::{SearchMode, SolverConfig};
use crate::error::Result;
use crate::movegen::{legal_moves, opponent_moves};
use crate::player::Player;
use crate::position::Position;
use crate::search::analysis::Analysis;
use crate::search::tt::TranspositionTable;
use crate::symmetry::Symmetry;

pub type Score = i32;

/// Score of a position whose mover has no legal cell: minus the cells the
/// opponent can still fill, and one less again when the mover is not the first
/// player (the first player has already placed one stone more).
#[inline]
pub fn pass_score(geometry: &BoardGeometry, position: &Position, turn: Player) -> Score {
    let remaining = opponent_moves(geometry, position).count() as Score;
    if turn.is_first() {
        -remaining
    } else {
        -remaining - 1
    }
}

/// Unmemoized evaluation of `position` with `turn` to move.
pub fn evaluate(geometry: &BoardGeometry, position: &Position, turn: Player) -> Result<Score> {
    let position = Position::new(geometry, position.mover, position.opponent)?;
    Ok(negamax(geometry, position, turn))
}

fn negamax(geometry: &BoardGeometry, position: Position, turn: Player) -> Score {
    let moves = legal_moves(geometry, &position);
    if moves.is_empty() {
        return pass_score(geometry, &position, turn);
    }
    moves.iter_ones().fold(Score::MIN, |best, cell| {
        best.max(-negamax(geometry, position.play(cell), turn.opposite()))
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered, table hits included.
    pub nodes: u64,
    pub tt_hits: u64,
}

/// Owns everything one search run needs: board geometry, the symmetry tables
/// and the transposition table. Independent solvers share no state.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    geometry: BoardGeometry,
    symmetry: Symmetry,
    table: TranspositionTable,
    stats: SearchStats,
    /// Stone balance shared by every position in the table; see [`balance`].
    balance: Option<i32>,
}

/// Blue's stone lead at the positions where Blue is to move.
///
/// Keys carry no side to move. Below one root every move alternates, so this
/// stays constant and the stone counts in a key fix whose turn it is; table
/// entries from a root with another balance would be scored for the wrong side.
fn balance(position: &Position, turn: Player) -> i32 {
    let lead = position.mover.count() as i32 - position.opponent.count() as i32;
    if turn.is_first() {
        lead
    } else {
        -lead - 1
    }
}

impl Solver {
    /// Builds the geometry and symmetry tables, rejecting boards that do not fit
    /// a bitboard or the canonical key.
    pub fn new(config: &SolverConfig) -> Result<Self> {
        let geometry = BoardGeometry::new(config.width, config.height)?;
        let symmetry = Symmetry::new(&geometry)?;
        debug!(
            "solver for {}x{} board, {} search, {} symmetries",
            config.width,
            config.height,
            config.mode,
            symmetry.order()
        );
        Ok(Solver {
            config: *config,
            geometry,
            symmetry,
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
            balance: None,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn symmetry(&self) -> &Symmetry {
        &self.symmetry
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Drop all cached scores and counters.
    pub fn reset(&mut self) {
        debug!("clearing {} table entries", self.table.len());
        self.table.clear();
        self.stats = SearchStats::default();
        self.balance = None;
    }

    fn prepare_table(&mut self, position: &Position, turn: Player) {
        let balance = balance(position, turn);
        if self.balance.is_some_and(|b| b != balance) {
            debug!("stone balance changed to {balance}, clearing {} entries", self.table.len());
            self.table.clear();
        }
        self.balance = Some(balance);
    }

    /// Validated position on this solver's board.
    pub fn position(&self, mover: Bitboard, opponent: Bitboard) -> Result<Position> {
        Position::new(&self.geometry, mover, opponent)
    }

    pub fn legal_moves(&self, position: &Position) -> Result<Bitboard> {
        let position = self.checked(position)?;
        Ok(legal_moves(&self.geometry, &position))
    }

    /// Score of `position` for the mover, using the configured search mode.
    pub fn evaluate(&mut self, position: &Position, turn: Player) -> Result<Score> {
        match self.config.mode {
            SearchMode::Plain => self.evaluate_plain(position, turn),
            SearchMode::Memoized => self.evaluate_memoized(position, turn),
        }
    }

    pub fn evaluate_plain(&mut self, position: &Position, turn: Player) -> Result<Score> {
        self.evaluate_with(position, turn, false)
    }

    /// Like [`Solver::evaluate_plain`], but every node, the root included, is
    /// looked up in and stored to the transposition table.
    pub fn evaluate_memoized(&mut self, position: &Position, turn: Player) -> Result<Score> {
        self.evaluate_with(position, turn, true)
    }

    fn evaluate_with(&mut self, position: &Position, turn: Player, memoized: bool) -> Result<Score> {
        let position = self.checked(position)?;
        if memoized {
            self.prepare_table(&position, turn);
        }
        let before = self.stats;
        let score = self.search(position, turn, memoized);
        self.log_finished("evaluate", score, before);
        Ok(score)
    }

    /// Score every legal cell for the mover, as the driver reports it.
    pub fn analyse(&mut self, position: &Position, turn: Player) -> Result<Analysis> {
        let position = self.checked(position)?;
        let memoized = self.config.mode.is_memoized();
        if memoized {
            self.prepare_table(&position, turn);
        }
        let before = self.stats;

        let mover_moves = legal_moves(&self.geometry, &position);
        let mut child_scores = vec![None; self.geometry.area];
        for cell in mover_moves.iter_ones() {
            let score = -self.search(position.play(cell), turn.opposite(), memoized);
            child_scores[cell] = Some(score);
        }
        let score = child_scores
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or_else(|| pass_score(&self.geometry, &position, turn));

        self.log_finished("analyse", score, before);
        Ok(Analysis {
            width: self.geometry.width,
            height: self.geometry.height,
            position,
            turn,
            mover_moves,
            opponent_moves: opponent_moves(&self.geometry, &position),
            child_scores,
            score,
        })
    }

    /// Lowest-indexed cell with the best score, or `None` if the mover must pass.
    pub fn best_move(&mut self, position: &Position, turn: Player) -> Result<Option<usize>> {
        Ok(self.analyse(position, turn)?.best_cells().first().copied())
    }

    fn checked(&self, position: &Position) -> Result<Position> {
        Position::new(&self.geometry, position.mover, position.opponent)
    }

    #[hotpath::measure]
    fn search(&mut self, position: Position, turn: Player, memoized: bool) -> Score {
        self.stats.nodes += 1;
        if !memoized {
            return self.expand(position, turn, false);
        }

        let key = self.symmetry.canonical_key(&position);
        if let Some(score) = self.table.get(key) {
            self.stats.tt_hits += 1;
            return score;
        }
        let score = self.expand(position, turn, true);
        self.table.insert(key, score)
    }

    fn expand(&mut self, position: Position, turn: Player, memoized: bool) -> Score {
        let moves = legal_moves(&self.geometry, &position);
        if moves.is_empty() {
            return pass_score(&self.geometry, &position, turn);
        }
        moves.iter_ones().fold(Score::MIN, |best, cell| {
            best.max(-self.search(position.play(cell), turn.opposite(), memoized))
        })
    }

    fn log_finished(&self, what: &str, score: Score, before: SearchStats) {
        info!(
            "{} {}x{}: score {}, {} nodes, {} table hits, {} table entries",
            what,
            self.geometry.width,
            self.geometry.height,
            score,
            self.stats.nodes - before.nodes,
            self.stats.tt_hits - before.tt_hits,
            self.table.len()
        );
    }
}
