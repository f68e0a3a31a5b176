use crate::controller::{Game, GameOutcome};
use crate::game::{parse_move, Piece};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Full-screen front end. Columns are picked with a cursor and dropped with
/// Enter; a move into a full column is ignored.
pub struct App {
    game: Game,
    advanced_ai: bool,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game: Game, advanced_ai: bool) -> Self {
        let selected_column = game.board().columns() / 2;
        App {
            game,
            advanced_ai,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Ok(col) = parse_move(&c.to_string(), self.game.board().columns()) {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = self.game.board().columns() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the computer reply
    fn drop_piece(&mut self) {
        if self.game.outcome().is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if !self.game.apply_human_move(self.selected_column) {
            return;
        }
        self.message = None;

        if self.announce_outcome() {
            return;
        }

        if let Some(mv) = self.game.dispatch_computer_move(self.advanced_ai) {
            self.message = Some(mv.to_string());
        }
        self.announce_outcome();
    }

    /// Replace the message with the result once the game has ended
    fn announce_outcome(&mut self) -> bool {
        let Some(outcome) = self.game.outcome() else {
            return false;
        };
        tracing::info!(%outcome, "game over");
        self.message = Some(match outcome {
            GameOutcome::Winner(Piece::Player) => "You win!".to_string(),
            GameOutcome::Winner(Piece::Computer) => "Computer wins!".to_string(),
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
        true
    }

    fn opponent_label(&self) -> &'static str {
        if self.advanced_ai {
            "Minimax"
        } else {
            "Greedy"
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            &self.message,
            self.opponent_label(),
        );
    }
}
