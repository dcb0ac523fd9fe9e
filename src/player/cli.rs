#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::cli::{shot_message, BoardView};
use crate::core::{
    board::Board,
    common::{BoardError, CellId, CellState},
};
use rand::rngs::SmallRng;

use super::Player;

/// Why a typed move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not hold exactly two tokens.
    WrongCount,
    NotANumber,
    Board(BoardError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCount => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
            InputError::Board(e) => write!(f, "{}", e),
        }
    }
}

/// Parse an `x y` line into a cell of `board` that has not been fired upon.
pub fn parse_move(input: &str, board: &Board) -> Result<CellId, InputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return Err(InputError::WrongCount);
    };
    let x: usize = x.parse().map_err(|_| InputError::NotANumber)?;
    let y: usize = y.parse().map_err(|_| InputError::NotANumber)?;
    let id = board
        .cell_id(x, y)
        .ok_or(InputError::Board(BoardError::OutOfBounds { x, y }))?;
    if board.cell(id).is_some_and(|c| c.is_shot()) {
        return Err(InputError::Board(BoardError::AlreadyFired { x, y }));
    }
    Ok(id)
}

/// Human player typing `x y` coordinates: x is the column, y the row.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning whatever was written to it.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Your move: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "user"
    }

    fn move_text(&self) -> String {
        "Your move!".into()
    }

    fn win_text(&self) -> String {
        "You win!".into()
    }

    fn select_target(&mut self, _rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<CellId> {
        loop {
            let Some(line) = self.prompt()? else {
                anyhow::bail!("input closed before a move was entered");
            };
            match parse_move(&line, enemy) {
                Ok(id) => return Ok(id),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, target: CellId, _outcome: CellState, enemy: &Board) {
        if let Some(cell) = enemy.cell(target) {
            let _ = writeln!(self.output, "{}", shot_message(enemy, cell));
        }
        let _ = writeln!(self.output, "{}", BoardView::new(enemy));
    }

    fn handle_rejected_shot(&mut self, error: &BoardError) {
        let _ = writeln!(self.output, "{}", error);
    }
}
