use rand::RngCore;

use crate::game::Board;

/// Universal interface for the computer's move selection.
///
/// Strategies only read the board; committing the chosen column is the
/// controller's job.
pub trait Strategy {
    /// Select a column for the Computer to play on `board`.
    /// Returns `None` only when every column is full.
    fn select_column(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}
