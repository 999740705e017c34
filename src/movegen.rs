use crate::bitboard::{Bitboard, BoardGeometry};
use crate::position::Position;

/// Cells the mover may claim: empty and not orthogonally adjacent to any
/// opponent stone.
#[hotpath::measure]
#[inline]
pub fn legal_moves(geometry: &BoardGeometry, position: &Position) -> Bitboard {
    let forbidden = position.occupied() | geometry.neighbors(position.opponent);
    geometry.board_mask & !forbidden
}

/// Legal cells for the opponent, as if the mover passed.
#[inline]
pub fn opponent_moves(geometry: &BoardGeometry, position: &Position) -> Bitboard {
    legal_moves(geometry, &position.swapped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_board_all_legal() {
        let geo = BoardGeometry::new(4, 4).unwrap();
        let moves = legal_moves(&geo, &Position::empty());
        assert_eq!(moves, geo.board_mask);
        assert_eq!(moves.count(), 16);
    }

    #[test]
    fn test_4x4_after_two_moves() {
        let geo = BoardGeometry::new(4, 4).unwrap();
        // Mover plays 5, opponent replies 10; mover is to move again.
        let pos = Position::empty().play(5).play(10);
        let moves = legal_moves(&geo, &pos);

        for excluded in [5, 10, 6, 9, 11, 14] {
            assert!(!moves.get(excluded), "cell {excluded} should be illegal");
        }
        // Neighbors of our own stone stay legal.
        for allowed in [1, 4] {
            assert!(moves.get(allowed), "cell {allowed} should be legal");
        }
        assert_eq!(moves.count(), 10);

        // The opponent is kept away from 5 and its neighbors instead.
        let theirs = opponent_moves(&geo, &pos);
        for excluded in [5, 10, 1, 4, 6, 9] {
            assert!(!theirs.get(excluded));
        }
        assert!(theirs.get(11) && theirs.get(14));
    }

    #[test]
    fn test_edge_stones_do_not_wrap() {
        let geo = BoardGeometry::new(3, 3).unwrap();
        // Opponent on the right edge of row 0.
        let pos = Position {
            mover: Bitboard::empty(),
            opponent: Bitboard::single(2),
        };
        let moves = legal_moves(&geo, &pos);
        assert!(!moves.get(1));
        assert!(!moves.get(5));
        assert!(moves.get(3)); // start of row 1 is not a neighbor of 2
        assert_eq!(moves.count(), 6);
    }

    #[test]
    fn test_single_cell_board() {
        let geo = BoardGeometry::new(1, 1).unwrap();
        assert_eq!(legal_moves(&geo, &Position::empty()).count(), 1);

        let after = Position::empty().play(0);
        assert!(legal_moves(&geo, &after).is_empty());
        assert!(opponent_moves(&geo, &after).is_empty());
    }

    #[test]
    fn test_never_returns_occupied_cells() {
        let geo = BoardGeometry::new(5, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let mut pos = Position::empty();
            for _ in 0..12 {
                let moves: Vec<usize> = legal_moves(&geo, &pos).iter_ones().collect();
                let Some(&cell) = moves.choose(&mut rng) else {
                    pos = pos.swapped();
                    continue;
                };
                pos = pos.play(cell);

                let next = legal_moves(&geo, &pos);
                assert!((next & pos.occupied()).is_empty());
                assert!((next & geo.neighbors(pos.opponent)).is_empty());
                assert!((next & !geo.board_mask).is_empty());
            }
        }
    }
}
