//! Computer move selection: the `Strategy` trait, the random, greedy and
//! one-ply heuristic strategies, and fixed-depth minimax with alpha-beta
//! pruning.

mod greedy;
mod heuristic;
pub mod minimax;
mod random;
mod strategy;

pub use greedy::GreedyStrategy;
pub use heuristic::HeuristicStrategy;
pub use minimax::{minimax, MinimaxStrategy, SEARCH_DEPTH, WIN_SCORE};
pub use random::RandomStrategy;
pub use strategy::Strategy;
