use rand::seq::SliceRandom;
use rand::RngCore;

use super::strategy::Strategy;
use crate::game::Board;

/// Plays a uniformly random legal landing square.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_column(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        let mut choices: Vec<(usize, usize)> = board
            .available_columns()
            .into_iter()
            .filter_map(|col| board.next_available_row(col).map(|row| (row, col)))
            .collect();
        choices.shuffle(rng);
        choices.first().map(|&(_, col)| col)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Piece;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_selects_legal_column() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::default();
        for row in 0..6 {
            board.drop_piece(row, 2, Piece::Player);
        }

        for _ in 0..100 {
            let col = RandomStrategy.select_column(&board, &mut rng).unwrap();
            assert!(board.is_valid_column(col), "column {col} is full");
            assert_ne!(col, 2);
        }
    }

    #[test]
    fn test_random_covers_every_open_column() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::default();
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[RandomStrategy.select_column(&board, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_on_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(1, 2).unwrap();
        board.drop_piece(0, 0, Piece::Player);
        board.drop_piece(0, 1, Piece::Computer);
        assert_eq!(RandomStrategy.select_column(&board, &mut rng), None);
    }

    #[test]
    fn test_random_name() {
        assert_eq!(RandomStrategy.name(), "Random");
    }
}
