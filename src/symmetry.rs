//! Board symmetries and the canonical position key used by the transposition table.
//!
//! The symmetry group is generated by two reflections: a row reflection
//! (top/bottom mirror) and a line reflection, which is the anti-diagonal mirror on
//! square boards and the left/right column mirror otherwise. Applying them
//! alternately walks the whole group: 8 elements for a square board, 4 for a
//! rectangle.
//!
//! Each reflection is stored as a list of bands (rows, columns or anti-diagonals).
//! Band `i` and band `last - i` are mirror images separated by a fixed shift, so
//! reflecting a bitboard is one mask and two shifts per band pair. The middle band
//! of an odd-sized board maps onto itself.

use crate::bitboard::{Bitboard, BoardGeometry};
use crate::error::{Error, Result};
use crate::position::Position;

/// Canonical position key.
pub type Key = u128;

pub const KEY_BITS: usize = Key::BITS as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryKind {
    /// Full dihedral group of order 8.
    Square,
    /// Identity, both mirrors and the half turn.
    Rectangular,
}

impl SymmetryKind {
    pub fn order(&self) -> usize {
        match self {
            SymmetryKind::Square => 8,
            SymmetryKind::Rectangular => 4,
        }
    }
}

/// One mirror of the board, precomputed as band masks and shift amounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflection {
    bands: Vec<Bitboard>,
    /// `shifts[i]` moves band `i` onto band `last - i` (left shift) and back
    /// (right shift).
    shifts: Vec<usize>,
    /// Cells that are their own image.
    fixed: Bitboard,
}

impl Reflection {
    /// Top/bottom mirror: row `r` swaps with row `height - 1 - r`.
    pub fn rows(geometry: &BoardGeometry) -> Self {
        let (w, h) = (geometry.width, geometry.height);
        let bands: Vec<Bitboard> = (0..h)
            .map(|r| Bitboard::full((r + 1) * w) & !Bitboard::full(r * w))
            .collect();
        let shifts = (0..h / 2).map(|r| (h - 1 - 2 * r) * w).collect();
        let fixed = if h % 2 == 1 {
            bands[h / 2]
        } else {
            Bitboard::empty()
        };
        Reflection {
            bands,
            shifts,
            fixed,
        }
    }

    /// Left/right mirror: column `c` swaps with column `width - 1 - c`.
    pub fn columns(geometry: &BoardGeometry) -> Self {
        let (w, h) = (geometry.width, geometry.height);
        let bands: Vec<Bitboard> = (0..w)
            .map(|c| {
                (0..h).fold(Bitboard::empty(), |bb, r| bb.with(r * w + c))
            })
            .collect();
        let shifts = (0..w / 2).map(|c| w - 1 - 2 * c).collect();
        let fixed = if w % 2 == 1 {
            bands[w / 2]
        } else {
            Bitboard::empty()
        };
        Reflection {
            bands,
            shifts,
            fixed,
        }
    }

    /// Mirror across the anti-diagonal of a square board: `(r, c)` maps to
    /// `(n - 1 - c, n - 1 - r)`. Band `d` holds the cells with `r + c == d`.
    pub fn anti_diagonals(geometry: &BoardGeometry) -> Self {
        debug_assert!(geometry.is_square());
        let n = geometry.width;
        let mut bands = vec![Bitboard::empty(); 2 * n - 1];
        for r in 0..n {
            for c in 0..n {
                bands[r + c].set(r * n + c);
            }
        }
        let shifts = (0..n - 1).map(|d| geometry.area - 1 - (n + 1) * d).collect();
        let fixed = bands[n - 1];
        Reflection {
            bands,
            shifts,
            fixed,
        }
    }

    /// Mirror a bitboard.
    #[inline]
    pub fn apply(&self, bb: Bitboard) -> Bitboard {
        let last = self.bands.len() - 1;
        let mut out = bb & self.fixed;
        for (i, &shift) in self.shifts.iter().enumerate() {
            out |= (bb & self.bands[i]).shift_left(shift)
                | (bb & self.bands[last - i]).shift_right(shift);
        }
        out
    }
}

/// The symmetry group of one board shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symmetry {
    kind: SymmetryKind,
    cells: usize,
    row: Reflection,
    line: Reflection,
}

impl Symmetry {
    pub fn new(geometry: &BoardGeometry) -> Result<Self> {
        let needed = 2 * geometry.area;
        if needed > KEY_BITS {
            return Err(Error::KeyOverflow {
                cells: geometry.area,
                needed,
                available: KEY_BITS,
            });
        }

        let (kind, line) = if geometry.is_square() {
            (SymmetryKind::Square, Reflection::anti_diagonals(geometry))
        } else {
            (SymmetryKind::Rectangular, Reflection::columns(geometry))
        };

        Ok(Symmetry {
            kind,
            cells: geometry.area,
            row: Reflection::rows(geometry),
            line,
        })
    }

    pub fn kind(&self) -> SymmetryKind {
        self.kind
    }

    pub fn order(&self) -> usize {
        self.kind.order()
    }

    /// `mover * 2^cells + opponent`.
    #[inline]
    pub fn encode(&self, mover: Bitboard, opponent: Bitboard) -> Key {
        (Key::from(mover.bits()) << self.cells) | Key::from(opponent.bits())
    }

    /// Generator applied at step `step` of the walk through the group.
    #[inline]
    fn generator(&self, step: usize) -> &Reflection {
        if step % 2 == 0 {
            &self.row
        } else {
            &self.line
        }
    }

    /// Smallest encoding over every symmetric image of `position`.
    #[hotpath::measure]
    pub fn canonical_key(&self, position: &Position) -> Key {
        let (mut mover, mut opponent) = (position.mover, position.opponent);
        let mut lowest = self.encode(mover, opponent);
        for step in 0..self.order() - 1 {
            let reflection = self.generator(step);
            mover = reflection.apply(mover);
            opponent = reflection.apply(opponent);
            lowest = lowest.min(self.encode(mover, opponent));
        }
        lowest
    }

    /// Every image of `position` under the group, identity first.
    pub fn images(&self, position: &Position) -> Vec<Position> {
        let mut current = *position;
        let mut images = Vec::with_capacity(self.order());
        images.push(current);
        for step in 0..self.order() - 1 {
            let reflection = self.generator(step);
            current = Position {
                mover: reflection.apply(current.mover),
                opponent: reflection.apply(current.opponent),
            };
            images.push(current);
        }
        images
    }
}
