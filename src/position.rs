use crate::bitboard::{Bitboard, BoardGeometry};
use crate::error::{Error, Result};

/// A search node: the stones of the player about to move and of their opponent.
///
/// Whose turn it is is carried by field order alone. Positions are plain values;
/// playing a move builds a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub mover: Bitboard,
    pub opponent: Bitboard,
}

impl Position {
    /// Validated constructor. Rejects overlapping stone sets and stones off the board.
    pub fn new(geometry: &BoardGeometry, mover: Bitboard, opponent: Bitboard) -> Result<Self> {
        let overlap = mover & opponent;
        if !overlap.is_empty() {
            return Err(Error::OverlappingStones { overlap });
        }
        let stray = (mover | opponent) & !geometry.board_mask;
        if !stray.is_empty() {
            return Err(Error::OffBoard { stray });
        }
        Ok(Position { mover, opponent })
    }

    pub const fn empty() -> Self {
        Position {
            mover: Bitboard::empty(),
            opponent: Bitboard::empty(),
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.mover | self.opponent
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    /// The child position after the mover claims `cell`: the new stone joins
    /// the mover's set and the roles swap.
    #[inline]
    pub fn play(&self, cell: usize) -> Position {
        debug_assert!(!self.occupied().get(cell), "cell {cell} already occupied");
        Position {
            mover: self.opponent,
            opponent: self.mover.with(cell),
        }
    }

    /// Same stones, roles exchanged (a pass).
    #[inline]
    pub fn swapped(&self) -> Position {
        Position {
            mover: self.opponent,
            opponent: self.mover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_overlap() {
        let geo = BoardGeometry::new(4, 4).unwrap();
        let a = Bitboard::single(1) | Bitboard::single(2);
        let b = Bitboard::single(2);
        assert_eq!(
            Position::new(&geo, a, b),
            Err(Error::OverlappingStones {
                overlap: Bitboard::single(2)
            })
        );
    }

    #[test]
    fn test_new_rejects_off_board() {
        let geo = BoardGeometry::new(3, 3).unwrap();
        let result = Position::new(&geo, Bitboard::single(9), Bitboard::empty());
        assert!(matches!(result, Err(Error::OffBoard { .. })));
    }

    #[test]
    fn test_play_swaps_roles() {
        let pos = Position::empty().play(5);
        assert!(pos.mover.is_empty());
        assert!(pos.opponent.get(5));

        let pos = pos.play(10);
        assert!(pos.mover.get(5));
        assert!(pos.opponent.get(10));
        assert_eq!(pos.stone_count(), 2);
    }

    #[test]
    fn test_play_leaves_parent_untouched() {
        let parent = Position::empty().play(0);
        let child = parent.play(3);
        assert_eq!(parent.stone_count(), 1);
        assert_eq!(child.stone_count(), 2);
    }

    #[test]
    fn test_swapped() {
        let pos = Position::empty().play(4);
        let swapped = pos.swapped();
        assert_eq!(swapped.mover, pos.opponent);
        assert_eq!(swapped.opponent, pos.mover);
    }
}
