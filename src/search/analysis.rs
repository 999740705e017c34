use std::fmt;

use crate::bitboard::Bitboard;
use crate::player::Player;
use crate::position::Position;
use crate::search::negamax::Score;

/// Per-cell scores for one position, as produced by [`crate::search::Solver::analyse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub width: usize,
    pub height: usize,
    pub position: Position,
    pub turn: Player,
    pub mover_moves: Bitboard,
    pub opponent_moves: Bitboard,
    /// Score for the mover after claiming each cell; `None` where illegal.
    pub child_scores: Vec<Option<Score>>,
    /// Best child score, or the pass score when the mover has no legal cell.
    pub score: Score,
}

impl Analysis {
    /// True if the mover has no legal cell.
    pub fn is_pass(&self) -> bool {
        self.mover_moves.is_empty()
    }

    /// Cells that reach the best score, lowest index first.
    pub fn best_cells(&self) -> Vec<usize> {
        self.child_scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score == Some(self.score))
            .map(|(cell, _)| cell)
            .collect()
    }

    fn stone_char(&self, cell: usize) -> char {
        if self.position.mover.get(cell) {
            self.turn.to_char()
        } else if self.position.opponent.get(cell) {
            self.turn.opposite().to_char()
        } else {
            '.'
        }
    }
}

/// Four blocks per board row: stones, mover's legal cells, opponent's legal
/// cells, and the score of each legal cell.
impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mover_glyph = self.turn.to_potential_char();
        let opponent_glyph = self.turn.opposite().to_potential_char();

        writeln!(f, "Board\tCurr\tOpp\tAnalysis")?;
        for row in 0..self.height {
            let cells = row * self.width..(row + 1) * self.width;

            for cell in cells.clone() {
                write!(f, "{}", self.stone_char(cell))?;
            }
            write!(f, "\t")?;
            for cell in cells.clone() {
                let c = if self.mover_moves.get(cell) { mover_glyph } else { '.' };
                write!(f, "{}", c)?;
            }
            write!(f, "\t")?;
            for cell in cells.clone() {
                let c = if self.opponent_moves.get(cell) { opponent_glyph } else { '.' };
                write!(f, "{}", c)?;
            }
            write!(f, "\t")?;
            for cell in cells {
                match self.child_scores[cell] {
                    Some(score) => write!(f, "{:>3}", score)?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "\nScore: {}", self.score)
    }
}
