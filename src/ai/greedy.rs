use rand::RngCore;

use super::random::RandomStrategy;
use super::strategy::Strategy;
use crate::game::{Board, Piece};

/// Wins if it can, blocks if it must, otherwise plays at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// First column, ascending, where dropping `piece` completes four for it
    pub fn winning_column(board: &Board, piece: Piece) -> Option<usize> {
        board.available_columns().into_iter().find(|&col| {
            let Some(row) = board.next_available_row(col) else {
                return false;
            };
            let mut simulated = board.clone();
            simulated.drop_piece(row, col, piece);
            simulated.is_winning_move(piece)
        })
    }
}

impl Strategy for GreedyStrategy {
    fn select_column(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        Self::winning_column(board, Piece::Computer)
            .or_else(|| Self::winning_column(board, Piece::Player))
            .or_else(|| RandomStrategy.select_column(board, rng))
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
