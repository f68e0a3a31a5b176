use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{
    GreedyStrategy, HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy, SEARCH_DEPTH,
};
use crate::game::{Board, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(piece) => write!(f, "{} wins", piece.name()),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the computer's piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub column: usize,
    pub row: usize,
}

impl fmt::Display for ComputerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Computer moves on column {} and row {}!",
            self.column, self.row
        )
    }
}

/// Owns the real board and applies moves for both sides.
///
/// Strategies only ever see the board; the controller is the single place
/// that mutates it, once a strategy has settled on a column.
pub struct Game {
    board: Board,
    rng: StdRng,
    search_depth: u32,
}

impl Game {
    /// Start a game on `board` with an OS-seeded random source
    pub fn new(board: Board) -> Self {
        Game {
            board,
            rng: StdRng::from_os_rng(),
            search_depth: SEARCH_DEPTH,
        }
    }

    /// Start a game whose random choices are reproducible
    pub fn with_seed(board: Board, seed: u64) -> Self {
        Game {
            board,
            rng: StdRng::seed_from_u64(seed),
            search_depth: SEARCH_DEPTH,
        }
    }

    /// Override the minimax depth (default `SEARCH_DEPTH`)
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Clear the board for a new game
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// Drop the Player's piece in `col`. Returns false, leaving the board
    /// untouched, when the column is full or out of range.
    pub fn apply_human_move(&mut self, col: usize) -> bool {
        if !self.board.is_valid_column(col) {
            return false;
        }
        let Some(row) = self.board.next_available_row(col) else {
            return false;
        };
        self.board.drop_piece(row, col, Piece::Player);
        true
    }

    /// Let `strategy` choose a column and commit the Computer's piece there
    pub fn play_computer_move(&mut self, strategy: &dyn Strategy) -> Option<ComputerMove> {
        let column = strategy.select_column(&self.board, &mut self.rng)?;
        let row = self.board.next_available_row(column)?;
        self.board.drop_piece(row, column, Piece::Computer);

        tracing::info!(column, row, strategy = strategy.name(), "computer moved");
        Some(ComputerMove { column, row })
    }

    pub fn random_computer_move(&mut self) -> Option<ComputerMove> {
        self.play_computer_move(&RandomStrategy)
    }

    /// Win if possible, else block, else random
    pub fn greedy_computer_move(&mut self) -> Option<ComputerMove> {
        self.play_computer_move(&GreedyStrategy)
    }

    /// Best one-ply heuristic score
    pub fn heuristic_computer_move(&mut self) -> Option<ComputerMove> {
        self.play_computer_move(&HeuristicStrategy)
    }

    pub fn minimax_computer_move(&mut self) -> Option<ComputerMove> {
        let strategy = MinimaxStrategy::new(self.search_depth);
        self.play_computer_move(&strategy)
    }

    /// Minimax when `use_advanced_ai`, otherwise the greedy win/block player.
    pub fn dispatch_computer_move(&mut self, use_advanced_ai: bool) -> Option<ComputerMove> {
        if use_advanced_ai {
            self.minimax_computer_move()
        } else {
            self.greedy_computer_move()
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.board.is_winning_move(Piece::Computer) {
            Some(GameOutcome::Winner(Piece::Computer))
        } else if self.board.is_winning_move(Piece::Player) {
            Some(GameOutcome::Winner(Piece::Player))
        } else if self.board.is_board_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
