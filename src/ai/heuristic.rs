use rand::seq::IndexedRandom;
use rand::RngCore;

use super::strategy::Strategy;
use crate::game::{Board, Piece};

/// One-ply search: plays the column whose resulting position scores best.
///
/// The running best starts at a score of 0 on a random open column, and a
/// later column with an equal or higher score replaces it. On ties the
/// highest-indexed column therefore wins, and if every candidate scores
/// below zero the random starting column is played.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn select_column(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        let valid = board.available_columns();
        let mut best_column = *valid.choose(rng)?;
        let mut best_score = 0;

        for col in valid {
            let Some(row) = board.next_available_row(col) else {
                continue;
            };
            let mut simulated = board.clone();
            simulated.drop_piece(row, col, Piece::Computer);
            let score = simulated.score(Piece::Computer);
            if score >= best_score {
                best_score = score;
                best_column = col;
            }
        }

        Some(best_column)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn prefers_center_on_empty_board() {
        let mut rng = StdRng::seed_from_u64(1);
        // Only the center column scores above zero
        assert_eq!(
            HeuristicStrategy.select_column(&Board::default(), &mut rng),
            Some(3)
        );
    }

    #[test]
    fn ties_go_to_last_column() {
        let mut rng = StdRng::seed_from_u64(1);
        // No run fits and the center is full, so columns 0 and 2 tie at 0
        let mut board = Board::new(3, 3).unwrap();
        for row in 0..3 {
            board.drop_piece(row, 1, Piece::Player);
        }
        for _ in 0..10 {
            assert_eq!(HeuristicStrategy.select_column(&board, &mut rng), Some(2));
        }
    }

    #[test]
    fn completes_four() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(0, col, Piece::Computer);
            board.drop_piece(1, col, Piece::Player);
        }
        assert_eq!(HeuristicStrategy.select_column(&board, &mut rng), Some(3));
    }

    #[test]
    fn full_board_has_no_move() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new(1, 1).unwrap();
        board.drop_piece(0, 0, Piece::Computer);
        assert_eq!(HeuristicStrategy.select_column(&board, &mut rng), None);
    }
}
