use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::error::{Error, Result};

/// Number of cells a `Bitboard` can hold.
pub const MAX_CELLS: usize = u64::BITS as usize;

/// A set of board cells, one bit per cell, stored in a single `u64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// The lowest `cells` bits set.
    #[inline]
    pub const fn full(cells: usize) -> Self {
        if cells >= MAX_CELLS {
            Bitboard(u64::MAX)
        } else {
            Bitboard((1u64 << cells) - 1)
        }
    }

    /// Single bit set at `index`.
    #[inline]
    pub fn single(index: usize) -> Self {
        debug_assert!(index < MAX_CELLS);
        Bitboard(1u64 << index)
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Bitboard(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < MAX_CELLS);
        (self.0 >> index) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < MAX_CELLS);
        self.0 |= 1u64 << index;
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < MAX_CELLS);
        self.0 &= !(1u64 << index);
    }

    /// Copy of `self` with bit `index` set.
    #[inline]
    pub fn with(self, index: usize) -> Self {
        debug_assert!(index < MAX_CELLS);
        Bitboard(self.0 | 1u64 << index)
    }

    /// True if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Population count.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub fn lowest_bit_index(&self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Shift all bits toward higher indices. Bits shifted past bit 63 are lost.
    #[inline]
    pub fn shift_left(&self, n: usize) -> Self {
        if n >= MAX_CELLS {
            return Self::empty();
        }
        Bitboard(self.0 << n)
    }

    /// Shift all bits toward lower indices. Bits shifted below 0 are lost.
    #[inline]
    pub fn shift_right(&self, n: usize) -> Self {
        if n >= MAX_CELLS {
            return Self::empty();
        }
        Bitboard(self.0 >> n)
    }

    /// Iterate over indices of set bits, lowest first.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator { bits: self.0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIterator {}

/// Precomputed masks for a given board geometry. Created once per solver.
///
/// Cells are numbered row-major from the top-left corner, so row 0 is the top
/// row and moving down a row adds `width` to the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub width: usize,
    pub height: usize,
    pub area: usize,
    /// Mask with 1s at all valid board positions (indices 0..area).
    pub board_mask: Bitboard,
    /// board_mask minus the top row (cells that have a neighbor above).
    pub not_row0: Bitboard,
    /// board_mask minus the bottom row (cells that have a neighbor below).
    pub not_row_last: Bitboard,
    /// board_mask minus column 0 (cells that have a neighbor to the left).
    pub not_col0: Bitboard,
    /// board_mask minus the last column (cells that have a neighbor to the right).
    pub not_col_last: Bitboard,
}

impl BoardGeometry {
    /// Build geometry for a `width × height` board.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyBoard { width, height });
        }
        let area = width
            .checked_mul(height)
            .filter(|&a| a <= MAX_CELLS)
            .ok_or(Error::BoardTooLarge {
                width,
                height,
                max_cells: MAX_CELLS,
            })?;

        let board_mask = Bitboard::full(area);

        let mut not_row0 = board_mask;
        let mut not_row_last = board_mask;
        for col in 0..width {
            not_row0.clear(col);
            not_row_last.clear((height - 1) * width + col);
        }

        let mut not_col0 = board_mask;
        let mut not_col_last = board_mask;
        for row in 0..height {
            not_col0.clear(row * width);
            not_col_last.clear(row * width + width - 1);
        }

        Ok(BoardGeometry {
            width,
            height,
            area,
            board_mask,
            not_row0,
            not_row_last,
            not_col0,
            not_col_last,
        })
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.area
    }

    /// Compute the set of all orthogonal neighbors of every bit in `bb`.
    ///
    /// Each edge mask is applied before the matching shift so that no bit
    /// wraps into the next row or falls off the board.
    #[inline]
    pub fn neighbors(&self, bb: Bitboard) -> Bitboard {
        let right = (bb & self.not_col_last).shift_left(1);
        let left = (bb & self.not_col0).shift_right(1);
        let down = (bb & self.not_row_last).shift_left(self.width);
        let up = (bb & self.not_row0).shift_right(self.width);
        right | left | down | up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bb = Bitboard::empty();
        assert!(bb.is_empty());
        assert_eq!(bb.count(), 0);
        assert!(bb.lowest_bit_index().is_none());
    }

    #[test]
    fn test_single() {
        let bb = Bitboard::single(0);
        assert!(bb.get(0));
        assert!(!bb.get(1));
        assert_eq!(bb.count(), 1);
        assert_eq!(bb.lowest_bit_index(), Some(0));

        let bb2 = Bitboard::single(63);
        assert!(bb2.get(63));
        assert!(!bb2.get(62));
        assert_eq!(bb2.lowest_bit_index(), Some(63));
    }

    #[test]
    fn test_full() {
        assert_eq!(Bitboard::full(0), Bitboard::empty());
        assert_eq!(Bitboard::full(16).bits(), 0xFFFF);
        assert_eq!(Bitboard::full(64).bits(), u64::MAX);
    }

    #[test]
    fn test_set_clear_with() {
        let mut bb = Bitboard::empty();
        bb.set(40);
        assert!(bb.get(40));
        assert_eq!(bb.count(), 1);
        bb.clear(40);
        assert!(!bb.get(40));
        assert!(bb.is_empty());

        let base = Bitboard::single(3);
        let grown = base.with(7);
        assert!(!base.get(7));
        assert!(grown.get(3) && grown.get(7));
    }

    #[test]
    fn test_bitwise_ops() {
        let a = Bitboard::single(5) | Bitboard::single(10);
        let b = Bitboard::single(10) | Bitboard::single(20);

        let and = a & b;
        assert!(and.get(10));
        assert!(!and.get(5));
        assert!(!and.get(20));

        let or = a | b;
        assert_eq!(or.count(), 3);

        let not = !Bitboard::single(5);
        assert!(!not.get(5));
        assert!(not.get(0));
    }

    #[test]
    fn test_assign_ops() {
        let mut bb = Bitboard::single(1);
        bb |= Bitboard::single(2);
        assert!(bb.get(1));
        assert!(bb.get(2));

        bb &= Bitboard::single(2);
        assert!(!bb.get(1));
        assert!(bb.get(2));
    }

    #[test]
    fn test_shifts() {
        assert!(Bitboard::single(0).shift_left(1).get(1));
        assert!(Bitboard::single(1).shift_right(1).get(0));
        assert!(Bitboard::single(0).shift_right(1).is_empty());
        assert!(Bitboard::single(63).shift_left(1).is_empty());
        assert!(Bitboard::single(3).shift_left(64).is_empty());
    }

    #[test]
    fn test_iter_ones() {
        let bb = Bitboard::single(3) | Bitboard::single(17) | Bitboard::single(63);
        let indices: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(indices, vec![3, 17, 63]);
        assert_eq!(bb.iter_ones().len(), 3);
        assert_eq!(Bitboard::empty().iter_ones().count(), 0);
    }

    #[test]
    fn test_geometry_4x4() {
        let geo = BoardGeometry::new(4, 4).unwrap();
        assert_eq!(geo.area, 16);
        assert_eq!(geo.board_mask.count(), 16);
        assert!(geo.is_square());

        for i in 0..4 {
            assert!(!geo.not_row0.get(i));
            assert!(!geo.not_row_last.get(12 + i));
            assert!(!geo.not_col0.get(i * 4));
            assert!(!geo.not_col_last.get(i * 4 + 3));
        }
        assert_eq!(geo.not_row0.count(), 12);
        assert_eq!(geo.not_col_last.count(), 12);
    }

    #[test]
    fn test_geometry_rejects_bad_sizes() {
        assert!(matches!(
            BoardGeometry::new(0, 3),
            Err(Error::EmptyBoard { .. })
        ));
        assert!(matches!(
            BoardGeometry::new(9, 8),
            Err(Error::BoardTooLarge { .. })
        ));
        assert!(BoardGeometry::new(8, 8).is_ok());
        assert!(BoardGeometry::new(64, 1).is_ok());
    }

    #[test]
    fn test_neighbors_center() {
        let geo = BoardGeometry::new(5, 5).unwrap();
        let nbrs = geo.neighbors(Bitboard::single(12));
        let expected: Vec<usize> = vec![7, 11, 13, 17];
        assert_eq!(nbrs.iter_ones().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_neighbors_no_wrap() {
        let geo = BoardGeometry::new(4, 3).unwrap();
        // Right edge of row 0: index 3
        let nbrs = geo.neighbors(Bitboard::single(3));
        assert!(nbrs.get(2));
        assert!(nbrs.get(7));
        assert!(!nbrs.get(4)); // must NOT wrap into row 1
        assert_eq!(nbrs.count(), 2);

        // Left edge of row 1: index 4
        let nbrs = geo.neighbors(Bitboard::single(4));
        assert!(nbrs.get(0));
        assert!(nbrs.get(5));
        assert!(nbrs.get(8));
        assert!(!nbrs.get(3)); // must NOT wrap into row 0
        assert_eq!(nbrs.count(), 3);
    }

    #[test]
    fn test_neighbors_full_width_board() {
        // 8x8 uses every bit, so the bottom row must not spill past bit 63.
        let geo = BoardGeometry::new(8, 8).unwrap();
        let nbrs = geo.neighbors(Bitboard::single(63));
        assert_eq!(nbrs.iter_ones().collect::<Vec<_>>(), vec![55, 62]);
    }

    #[test]
    fn test_single_cell_board() {
        let geo = BoardGeometry::new(1, 1).unwrap();
        assert_eq!(geo.board_mask.count(), 1);
        assert!(geo.neighbors(Bitboard::single(0)).is_empty());
    }
}
