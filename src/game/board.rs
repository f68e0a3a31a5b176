use std::fmt;
use std::ops::Range;

use super::piece::Piece;
use crate::error::BoardError;

/// Default board height.
pub const ROWS: usize = 6;
/// Default board width.
pub const COLS: usize = 7;
/// Length of a winning run.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// The piece occupying this cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Piece::Player),
            Cell::Computer => Some(Piece::Computer),
        }
    }
}

/// Orientation of a run of `CONNECT` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row, column) delta between consecutive cells of a run
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }
}

/// A rows x columns grid. Row 0 is the bottom; columns fill bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows,
                columns: cols,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row `rows - 1` is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Place `piece` at (row, col). Legality is the caller's concern.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row * self.cols + col] = piece.to_cell();
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// A column accepts a piece while its topmost cell is empty
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col) == Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` if the column is full
    pub fn next_available_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Columns that still accept a piece, in ascending order
    pub fn available_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.is_valid_column(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_board_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// True if `piece` owns any complete run of `CONNECT` cells
    pub fn is_winning_move(&self, piece: Piece) -> bool {
        let cell = piece.to_cell();
        self.windows()
            .any(|(_, window)| window.iter().all(|&c| c == cell))
    }

    /// Every run of `CONNECT` cells that fits on the grid, tagged with its
    /// direction. No wraparound.
    pub fn windows(&self) -> impl Iterator<Item = (Direction, [Cell; CONNECT])> + '_ {
        Direction::ALL.into_iter().flat_map(move |direction| {
            let (rows, cols) = self.starts(direction);
            rows.flat_map(move |row| {
                cols.clone()
                    .map(move |col| (direction, self.window(direction, row, col)))
            })
        })
    }

    /// Ranges of starting (row, column) positions whose run stays in bounds
    fn starts(&self, direction: Direction) -> (Range<usize>, Range<usize>) {
        let span = CONNECT - 1;
        let free_rows = 0..self.rows.saturating_sub(span);
        let free_cols = 0..self.cols.saturating_sub(span);
        match direction {
            Direction::Horizontal => (0..self.rows, free_cols),
            Direction::Vertical => (free_rows, 0..self.cols),
            Direction::DiagonalUp => (free_rows, free_cols),
            Direction::DiagonalDown => (span..self.rows, free_cols),
        }
    }

    fn window(&self, direction: Direction, row: usize, col: usize) -> [Cell; CONNECT] {
        let (dr, dc) = direction.step();
        std::array::from_fn(|i| {
            let r = row as isize + dr * i as isize;
            let c = col as isize + dc * i as isize;
            self.get(r as usize, c as usize)
        })
    }

    /// Heuristic desirability of the position for `piece`; higher is better.
    ///
    /// Pieces in the middle column earn 3 each. Every window is then scored
    /// by its mix of own, opposing and empty cells. Descending diagonals use
    /// their own table: 3-with-a-gap is worth 10 instead of 5 and the
    /// opponent threat penalty is not applied. Likely unintended, but kept:
    /// changing it changes how the computer plays.
    pub fn score(&self, piece: Piece) -> i64 {
        let own_cell = piece.to_cell();
        let opp_cell = piece.other().to_cell();

        let center = self.cols / 2;
        let mut score = (0..self.rows)
            .filter(|&row| self.get(row, center) == own_cell)
            .count() as i64
            * 3;

        for (direction, window) in self.windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for cell in window {
                match cell {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += match direction {
                Direction::DiagonalDown => Self::score_descending_window(own, empty),
                _ => Self::score_window(own, opp, empty),
            };
        }

        score
    }

    fn score_window(own: usize, opp: usize, empty: usize) -> i64 {
        let mut score = if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else {
            0
        };
        if opp == 3 && empty == 1 {
            score -= 4;
        }
        score
    }

    fn score_descending_window(own: usize, empty: usize) -> i64 {
        if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            10
        } else {
            0
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }
}

impl fmt::Display for Board {
    /// Top row first, with column indices as a header
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in (0..self.rows).rev() {
            write!(f, "{row:>2} ")?;
            for col in 0..self.cols {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Player => 'X',
                    Cell::Computer => 'O',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
