use std::io::{self, BufRead, Write};

use crate::controller::{Game, GameOutcome};
use crate::game::{parse_move, Piece};

/// Line-based front end: prints the board, prompts the human for a column and
/// answers with the computer's move. The human always starts.
pub struct Console<R, W> {
    game: Game,
    advanced_ai: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: Game, advanced_ai: bool, input: R, output: W) -> Self {
        Console {
            game,
            advanced_ai,
            input,
            output,
        }
    }

    /// Play one game. Returns `None` if input ends before the game does.
    pub fn run(&mut self) -> io::Result<Option<GameOutcome>> {
        writeln!(self.output, "Welcome to Connect Four!")?;
        writeln!(self.output, "Let's play! Human starts!")?;

        let mut turn = Piece::Player;
        loop {
            write!(self.output, "{}", self.game.board())?;

            match turn {
                Piece::Player => {
                    let Some(col) = self.read_move()? else {
                        return Ok(None);
                    };
                    if self.game.apply_human_move(col) {
                        turn = Piece::Computer;
                    } else {
                        writeln!(self.output, "Column {col} is full!")?;
                    }
                }
                Piece::Computer => {
                    if let Some(mv) = self.game.dispatch_computer_move(self.advanced_ai) {
                        writeln!(self.output, "{mv}")?;
                    }
                    turn = Piece::Player;
                }
            }

            if let Some(outcome) = self.game.outcome() {
                tracing::info!(%outcome, "game over");
                write!(self.output, "{}", self.game.board())?;
                let text = match outcome {
                    GameOutcome::Winner(Piece::Player) => "Congrats! You win!",
                    GameOutcome::Winner(Piece::Computer) => "Computer wins!",
                    GameOutcome::Draw => "It's a draw!",
                };
                writeln!(self.output, "{text}")?;
                return Ok(Some(outcome));
            }
        }
    }

    /// Prompt until a line parses as a column; `None` on end of input
    fn read_move(&mut self) -> io::Result<Option<usize>> {
        let columns = self.game.board().columns();
        loop {
            write!(
                self.output,
                "Input column on which you wish to make a move (0-{}): ",
                columns - 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_move(&line, columns) {
                Ok(col) => return Ok(Some(col)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}
