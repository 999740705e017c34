use std::fmt;

use crate::bitboard::Bitboard;
use crate::player::Player;
use crate::position::Position;

pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_ROWS: usize = 5;

/// Stones by colour, independent of whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    blue: Bitboard,
    red: Bitboard,
    width: usize,
    height: usize,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            blue: Bitboard::empty(),
            red: Bitboard::empty(),
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_piece(&self, index: usize) -> Option<Player> {
        if self.blue.get(index) {
            Some(Player::Blue)
        } else if self.red.get(index) {
            Some(Player::Red)
        } else {
            None
        }
    }

    pub fn set_piece(&mut self, index: usize, player: Option<Player>) {
        if index < self.width * self.height {
            self.blue.clear(index);
            self.red.clear(index);
            match player {
                Some(Player::Blue) => self.blue.set(index),
                Some(Player::Red) => self.red.set(index),
                None => {}
            }
        }
    }

    pub fn clear(&mut self) {
        self.blue = Bitboard::empty();
        self.red = Bitboard::empty();
    }

    #[inline]
    pub fn stones_for(&self, player: Player) -> Bitboard {
        match player {
            Player::Blue => self.blue,
            Player::Red => self.red,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.blue | self.red
    }

    /// Search position with `to_move`'s stones first.
    pub fn position_for(&self, to_move: Player) -> Position {
        Position {
            mover: self.stones_for(to_move),
            opponent: self.stones_for(to_move.opposite()),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{}", "---+".repeat(self.width))?;
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let c = self
                    .get_piece(row * self.width + col)
                    .map_or('.', |player| player.to_char());
                write!(f, " {} |", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "+{}", "---+".repeat(self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3, 3);
        board.set_piece(4, Some(Player::Blue));
        board.set_piece(0, Some(Player::Red));
        assert_eq!(board.get_piece(4), Some(Player::Blue));
        assert_eq!(board.get_piece(0), Some(Player::Red));
        assert_eq!(board.get_piece(1), None);

        board.set_piece(4, Some(Player::Red));
        assert_eq!(board.stones_for(Player::Blue), Bitboard::empty());
        assert_eq!(board.occupied().count(), 2);

        board.set_piece(9, Some(Player::Blue));
        assert_eq!(board.occupied().count(), 2);

        board.clear();
        assert!(board.occupied().is_empty());
    }

    #[test]
    fn test_position_for() {
        let mut board = Board::new(3, 3);
        board.set_piece(1, Some(Player::Blue));
        board.set_piece(7, Some(Player::Red));
        let pos = board.position_for(Player::Red);
        assert_eq!(pos.mover, Bitboard::single(7));
        assert_eq!(pos.opponent, Bitboard::single(1));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 2);
        board.set_piece(0, Some(Player::Blue));
        board.set_piece(3, Some(Player::Red));
        let expected = "+---+---+\n| O | . |\n| . | X |\n+---+---+\n";
        assert_eq!(board.to_string(), expected);
    }
}
