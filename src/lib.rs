//! # Connect Four
//!
//! Rules engine and computer opponent for Connect Four on a configurable
//! grid. The computer can play randomly, greedily (win, else block, else
//! random), by one-ply heuristic, or by fixed-depth minimax with alpha-beta
//! pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board with gravity, win/draw detection, heuristic, move parsing
//! - [`ai`] — Strategy trait, random/greedy/heuristic strategies, minimax search
//! - [`controller`] — Applies human and computer moves to the real board
//! - [`ui`] — Console prompt loop and ratatui terminal view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;

pub use controller::{ComputerMove, Game, GameOutcome};
