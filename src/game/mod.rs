//! Core Connect Four rules: board representation with gravity, win and draw
//! detection, the positional heuristic, and move input validation.

mod board;
mod piece;
mod validator;

pub use board::{Board, Cell, Direction, COLS, CONNECT, ROWS};
pub use piece::Piece;
pub use validator::parse_move;
