use rand::seq::IndexedRandom;
use rand::RngCore;

use super::strategy::Strategy;
use crate::game::{Board, Piece};

/// Plies searched by the default computer opponent.
pub const SEARCH_DEPTH: u32 = 5;

/// Score of a position the Computer has won; the Player's wins score the
/// negation.
pub const WIN_SCORE: i64 = 100_000_000_000;

/// A position is terminal once either side has four in a row or no column
/// is open.
fn is_terminal(board: &Board) -> bool {
    board.is_winning_move(Piece::Player)
        || board.is_winning_move(Piece::Computer)
        || board.available_columns().is_empty()
}

/// Score of a terminal position or of the search horizon.
fn leaf_score(board: &Board) -> i64 {
    if board.is_winning_move(Piece::Computer) {
        WIN_SCORE
    } else if board.is_winning_move(Piece::Player) {
        -WIN_SCORE
    } else if board.available_columns().is_empty() {
        0
    } else {
        board.score(Piece::Computer)
    }
}

/// Fixed-depth minimax with alpha-beta pruning, always scored from the
/// Computer's side. The Computer maximises, the Player minimises.
///
/// Returns the best column at this level (`None` at leaves) and its score.
/// Columns are tried in ascending order and only a strict improvement
/// replaces the running best, which starts on a random open column.
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    rng: &mut dyn RngCore,
) -> (Option<usize>, i64) {
    if depth == 0 || is_terminal(board) {
        return (None, leaf_score(board));
    }
    let valid = board.available_columns();

    let (piece, mut best_score) = if maximizing {
        (Piece::Computer, i64::MIN)
    } else {
        (Piece::Player, i64::MAX)
    };
    let mut best_column = valid.choose(rng).copied();

    for &col in &valid {
        let Some(row) = board.next_available_row(col) else {
            continue;
        };
        let mut child = board.clone();
        child.drop_piece(row, col, piece);
        let (_, score) = minimax(&child, depth - 1, alpha, beta, !maximizing, rng);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_column = Some(col);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_column = Some(col);
            }
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            break;
        }
    }

    (best_column, best_score)
}

/// Minimax agent with alpha-beta pruning.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    depth: u32,
}

impl MinimaxStrategy {
    /// Search `depth` plies ahead; at least one ply is always searched.
    pub fn new(depth: u32) -> Self {
        MinimaxStrategy {
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_column(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        let (column, score) = minimax(board, self.depth, i64::MIN, i64::MAX, true, rng);
        tracing::debug!(?column, score, depth = self.depth, "minimax search finished");
        column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomStrategy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    /// Full 6x7 board without four in a row for either side
    fn drawn_board() -> Board {
        let mut board = Board::default();
        for row in 0..6 {
            for col in 0..7 {
                let piece = if (col / 2 + row) % 2 == 0 {
                    Piece::Player
                } else {
                    Piece::Computer
                };
                board.drop_piece(row, col, piece);
            }
        }
        board
    }

    // --- Leaf evaluation ---

    #[test]
    fn computer_win_scores_max() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(0, col, Piece::Computer);
        }
        assert!(is_terminal(&board));
        assert_eq!(
            minimax(&board, 3, i64::MIN, i64::MAX, true, &mut rng()),
            (None, WIN_SCORE)
        );
    }

    #[test]
    fn win_outranks_heuristic_at_depth_zero() {
        let mut board = Board::default();
        for row in 0..4 {
            board.drop_piece(row, 2, Piece::Player);
        }
        assert_eq!(
            minimax(&board, 0, i64::MIN, i64::MAX, true, &mut rng()),
            (None, -WIN_SCORE)
        );
    }

    #[test]
    fn player_win_scores_min() {
        let mut board = Board::default();
        for row in 0..4 {
            board.drop_piece(row, 5, Piece::Player);
        }
        assert_eq!(
            minimax(&board, 3, i64::MIN, i64::MAX, false, &mut rng()),
            (None, -WIN_SCORE)
        );
    }

    #[test]
    fn draw_scores_zero() {
        let board = drawn_board();
        assert!(board.is_board_full());
        assert!(!board.is_winning_move(Piece::Player));
        assert!(!board.is_winning_move(Piece::Computer));
        assert!(is_terminal(&board));
        assert_eq!(
            minimax(&board, 5, i64::MIN, i64::MAX, true, &mut rng()),
            (None, 0)
        );
    }

    #[test]
    fn depth_zero_uses_heuristic() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(0, col, Piece::Computer);
        }
        assert!(!is_terminal(&board));
        assert_eq!(
            minimax(&board, 0, i64::MIN, i64::MAX, false, &mut rng()),
            (None, board.score(Piece::Computer))
        );
    }

    // --- Search ---

    #[test]
    fn takes_winning_move_at_depth_one() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(0, col, Piece::Computer);
        }
        let (column, score) = minimax(&board, 1, i64::MIN, i64::MAX, true, &mut rng());
        assert_eq!(column, Some(3));
        assert_eq!(score, WIN_SCORE);
    }

    #[test]
    fn takes_winning_move_at_full_depth() {
        let mut board = Board::default();
        for col in 4..7 {
            board.drop_piece(0, col, Piece::Computer);
        }
        let strategy = MinimaxStrategy::default();
        assert_eq!(strategy.select_column(&board, &mut rng()), Some(3));
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(0, col, Piece::Player);
        }
        board.drop_piece(0, 6, Piece::Computer);
        board.drop_piece(0, 5, Piece::Computer);
        let strategy = MinimaxStrategy::new(2);
        assert_eq!(strategy.select_column(&board, &mut rng()), Some(3));
    }

    #[test]
    fn never_selects_full_column() {
        let mut board = Board::default();
        for (row, piece) in [
            Piece::Player,
            Piece::Player,
            Piece::Computer,
            Piece::Computer,
            Piece::Player,
            Piece::Player,
        ]
        .into_iter()
        .enumerate()
        {
            board.drop_piece(row, 3, piece);
        }
        assert!(!board.is_valid_column(3));

        for depth in 1..=4 {
            let col = MinimaxStrategy::new(depth)
                .select_column(&board, &mut rng())
                .unwrap();
            assert!(board.is_valid_column(col), "depth {depth} chose full column {col}");
        }
    }

    #[test]
    fn single_open_column_is_chosen() {
        let drawn = drawn_board();
        let mut board = Board::default();
        for row in 0..6 {
            for col in 0..7 {
                if (row, col) == (5, 4) {
                    continue;
                }
                if let Some(piece) = drawn.get(row, col).piece() {
                    board.drop_piece(row, col, piece);
                }
            }
        }
        assert_eq!(board.available_columns(), vec![4]);
        assert_eq!(
            MinimaxStrategy::default().select_column(&board, &mut rng()),
            Some(4)
        );
    }

    #[test]
    fn zero_depth_is_clamped() {
        assert_eq!(MinimaxStrategy::new(0).depth(), 1);
        let col = MinimaxStrategy::new(0).select_column(&Board::default(), &mut rng());
        assert!(col.is_some());
    }

    // --- Integration ---

    #[test]
    fn full_game_against_random_stays_legal() {
        let mut rng = rng();
        let minimax = MinimaxStrategy::new(3);
        let mut board = Board::default();
        let mut turn = Piece::Player;

        while !is_terminal(&board) {
            let col = match turn {
                Piece::Player => RandomStrategy.select_column(&board, &mut rng),
                Piece::Computer => minimax.select_column(&board, &mut rng),
            }
            .unwrap();
            assert!(board.is_valid_column(col));
            let row = board.next_available_row(col).unwrap();
            board.drop_piece(row, col, turn);
            turn = turn.other();
        }

        assert!(is_terminal(&board));
    }

    #[test]
    fn name_is_minimax() {
        assert_eq!(MinimaxStrategy::default().name(), "Minimax");
    }
}
