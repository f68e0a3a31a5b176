//! Front ends: a line-based console and a full-screen terminal board.

mod app;
mod console;
mod game_view;

pub use app::App;
pub use console::Console;
