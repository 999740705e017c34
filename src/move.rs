use crate::bitboard::BoardGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { col: u8, row: u8 },
    Pass,
}

impl Move {
    pub fn place(col: u8, row: u8) -> Self {
        Move::Place { col, row }
    }

    pub fn pass() -> Self {
        Move::Pass
    }

    /// Placement on row-major cell `index`.
    pub fn from_index(index: usize, width: usize) -> Self {
        Move::Place {
            col: (index % width) as u8,
            row: (index / width) as u8,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Row-major cell index, or `None` for a pass or an off-board placement.
    pub fn index(&self, geometry: &BoardGeometry) -> Option<usize> {
        match *self {
            Move::Place { col, row }
                if (col as usize) < geometry.width && (row as usize) < geometry.height =>
            {
                Some(row as usize * geometry.width + col as usize)
            }
            _ => None,
        }
    }

    pub fn col(&self) -> Option<u8> {
        match self {
            Move::Place { col, .. } => Some(*col),
            Move::Pass => None,
        }
    }

    pub fn row(&self) -> Option<u8> {
        match self {
            Move::Place { row, .. } => Some(*row),
            Move::Pass => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { col, row } => write!(f, "Place({}, {})", col, row),
            Move::Pass => write!(f, "Pass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        let geo = BoardGeometry::new(4, 3).unwrap();
        let mv = Move::from_index(6, geo.width);
        assert_eq!(mv, Move::place(2, 1));
        assert_eq!(mv.index(&geo), Some(6));
        assert_eq!(Move::place(4, 0).index(&geo), None);
        assert_eq!(Move::pass().index(&geo), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::place(1, 2).to_string(), "Place(1, 2)");
        assert_eq!(Move::pass().to_string(), "Pass");
    }
}
