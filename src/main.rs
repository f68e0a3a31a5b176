use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, UiMode};
use connect_four::ui::{App, Console};
use connect_four::Game;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the front end
    #[arg(long, value_enum)]
    ui: Option<UiMode>,

    /// Play against the greedy win/block opponent instead of minimax
    #[arg(long)]
    no_ai: bool,

    /// Seed the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(ui) = cli.ui {
        config.game.ui = ui;
    }
    if cli.no_ai {
        config.game.advanced_ai = false;
    }

    let board = config.new_board().context("creating board")?;
    let game = match cli.seed {
        Some(seed) => Game::with_seed(board, seed),
        None => Game::new(board),
    }
    .with_search_depth(config.game.search_depth);

    tracing::info!(
        rows = config.board.rows,
        columns = config.board.columns,
        advanced_ai = config.game.advanced_ai,
        ui = ?config.game.ui,
        "starting game"
    );

    match config.game.ui {
        UiMode::Console => {
            let stdin = io::stdin();
            let mut console =
                Console::new(game, config.game.advanced_ai, stdin.lock(), io::stdout());
            console.run().context("console session failed")?;
        }
        UiMode::Tui => run_tui(App::new(game, config.game.advanced_ai))
            .context("terminal session failed")?,
    }

    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the session failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
