//! Error type shared by the whole crate.

use crate::bitboard::Bitboard;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A board needs at least one row and one column.
    #[error("board {width}x{height} has no cells")]
    EmptyBoard { width: usize, height: usize },

    /// More cells than a bitboard has bits.
    #[error("board {width}x{height} exceeds the {max_cells}-cell bitboard limit")]
    BoardTooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },

    /// `mover * 2^cells + opponent` would not fit the canonical key.
    #[error("board with {cells} cells needs a {needed}-bit key, only {available} bits available")]
    KeyOverflow {
        cells: usize,
        needed: usize,
        available: usize,
    },

    /// Mover and opponent claim the same cells.
    #[error("mover and opponent overlap on cells {overlap:?}")]
    OverlappingStones { overlap: Bitboard },

    /// Stones outside the board mask.
    #[error("stones {stray:?} lie outside the board")]
    OffBoard { stray: Bitboard },

    #[error("cell {index} is outside a board of {area} cells")]
    CellOutOfRange { index: usize, area: usize },

    #[error("illegal move: {0}")]
    IllegalMove(String),
}

pub type Result<T> = std::result::Result<T, Error>;
