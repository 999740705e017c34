//! Action indices for moves and the textual move lists used to seed games.

use crate::bitboard::BoardGeometry;
use crate::error::{Error, Result};
use crate::r#move::Move;

/// Encode a move as an action index: cells are `0..area`, a pass is `area`.
pub fn encode_move(move_: &Move, board_width: usize, board_height: usize) -> usize {
    match move_ {
        Move::Place { col, row } => *row as usize * board_width + *col as usize,
        Move::Pass => board_width * board_height,
    }
}

/// Inverse of [`encode_move`]; `None` past the pass index.
pub fn decode_move(action: usize, board_width: usize, board_height: usize) -> Option<Move> {
    let board_size = board_width * board_height;

    if action == board_size {
        return Some(Move::pass());
    }

    if action > board_size {
        return None;
    }

    Some(Move::from_index(action, board_width))
}

pub fn total_actions(board_width: usize, board_height: usize) -> usize {
    board_width * board_height + 1
}

/// Parse a comma or whitespace separated list of cell indices, with `pass`
/// allowed as an entry: `"5, 10 pass 3"`.
pub fn parse_moves(text: &str, geometry: &BoardGeometry) -> Result<Vec<Move>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.eq_ignore_ascii_case("pass") {
                return Ok(Move::pass());
            }
            let index: usize = token
                .parse()
                .map_err(|_| Error::IllegalMove(format!("cannot parse move {token:?}")))?;
            if !geometry.contains(index) {
                return Err(Error::CellOutOfRange {
                    index,
                    area: geometry.area,
                });
            }
            Ok(Move::from_index(index, geometry.width))
        })
        .collect()
}
