use crate::bitboard::{Bitboard, BoardGeometry};
use crate::board::Board;
use crate::error::{Error, Result};
use crate::movegen::legal_moves;
use crate::outcome::GameOutcome;
use crate::player::Player;
use crate::position::Position;
use crate::r#move::Move;

/// A game in progress: stones by colour, side to move and the moves so far.
///
/// Blue moves first. A side with no legal cell must pass; the game ends once
/// neither side can place a stone, and the side with more stones wins.
#[derive(Clone, Debug)]
pub struct Game {
    geometry: BoardGeometry,
    board: Board,
    current_player: Player,
    move_history: Vec<Move>,
}

impl Game {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let geometry = BoardGeometry::new(width, height)?;
        Ok(Self::with_geometry(geometry))
    }

    pub fn with_geometry(geometry: BoardGeometry) -> Self {
        Game {
            geometry,
            board: Board::new(geometry.width, geometry.height),
            current_player: Player::Blue,
            move_history: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.geometry.width
    }

    pub fn height(&self) -> usize {
        self.geometry.height
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.current_player
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Search position with the side to move first.
    pub fn position(&self) -> Position {
        self.board.position_for(self.current_player)
    }

    /// Cells the side to move may claim.
    pub fn legal_cells(&self) -> Bitboard {
        legal_moves(&self.geometry, &self.position())
    }

    /// Neither side can place another stone.
    pub fn is_over(&self) -> bool {
        let position = self.position();
        legal_moves(&self.geometry, &position).is_empty()
            && legal_moves(&self.geometry, &position.swapped()).is_empty()
    }

    /// Stone counts `(blue, red)`.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.stones_for(Player::Blue).count(),
            self.board.stones_for(Player::Red).count(),
        )
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_over() {
            return None;
        }
        let (blue, red) = self.score();
        Some(GameOutcome::from_counts(blue, red))
    }

    /// Placements for the side to move, or a lone pass when it has none.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let cells = self.legal_cells();
        if cells.is_empty() {
            return vec![Move::pass()];
        }
        cells
            .iter_ones()
            .map(|cell| Move::from_index(cell, self.geometry.width))
            .collect()
    }

    pub fn is_legal_move(&self, move_: &Move) -> bool {
        if self.is_over() {
            return false;
        }
        match move_ {
            Move::Pass => self.legal_cells().is_empty(),
            Move::Place { .. } => move_
                .index(&self.geometry)
                .is_some_and(|cell| self.legal_cells().get(cell)),
        }
    }

    pub fn make_move(&mut self, move_: &Move) -> Result<()> {
        if !self.is_legal_move(move_) {
            return Err(Error::IllegalMove(format!(
                "{} by {}",
                move_, self.current_player
            )));
        }
        if let Some(cell) = move_.index(&self.geometry) {
            self.board.set_piece(cell, Some(self.current_player));
        }
        self.move_history.push(*move_);
        self.current_player = self.current_player.opposite();
        Ok(())
    }

    pub fn unmake_move(&mut self) -> bool {
        match self.move_history.pop() {
            Some(move_) => {
                self.current_player = self.current_player.opposite();
                if let Some(cell) = move_.index(&self.geometry) {
                    self.board.set_piece(cell, None);
                }
                true
            }
            None => false,
        }
    }

    /// Play seed moves in order, inserting a pass before any placement whose
    /// side has no legal cell.
    pub fn seed(&mut self, moves: &[Move]) -> Result<()> {
        for move_ in moves {
            if !move_.is_pass() && self.legal_cells().is_empty() && !self.is_over() {
                self.make_move(&Move::pass())?;
            }
            self.make_move(move_)?;
        }
        Ok(())
    }

    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<()> {
        moves.iter().try_for_each(|move_| self.make_move(move_))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, is_over: {}, outcome: {:?})\n{}",
            self.current_player,
            self.is_over(),
            self.outcome(),
            self.board
        )
    }
}
