//! Text rendering of boards.

use core::fmt;

use crate::core::{
    board::Board,
    cell::Cell,
    common::{CellState, Occupancy},
};

/// Framed text view of a board. Ships and buffer water are only drawn when
/// `reveal` is set, so an opponent's fleet stays hidden.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    /// View as seen by the board's owner; enemy boards are hidden.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            reveal: !board.is_enemy(),
        }
    }

    /// Show everything, e.g. once the game is over.
    pub fn revealed(board: &'a Board) -> Self {
        Self { board, reveal: true }
    }

    fn glyph(&self, cell: &Cell) -> char {
        match cell.state() {
            CellState::Hit | CellState::Destroyed => 'X',
            CellState::Miss => 'o',
            CellState::Unshot if self.reveal => match cell.occupancy() {
                Occupancy::Ship => 'S',
                Occupancy::Buffer => '.',
                Occupancy::Empty => ' ',
            },
            CellState::Unshot => ' ',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        let width = size * 2 + 1;
        write!(f, "    ")?;
        for x in 0..size {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)?;
        writeln!(f, "   ╔{}╗", "═".repeat(width))?;
        for y in 0..size {
            write!(f, "{:2} ║", y)?;
            for x in 0..size {
                let glyph = self.board.get_cell(x, y).map_or(' ', |c| self.glyph(c));
                write!(f, " {}", glyph)?;
            }
            writeln!(f, " ║")?;
        }
        writeln!(f, "   ╚{}╝", "═".repeat(width))?;
        if self.reveal {
            write!(f, "    Legend: S=Ship  X=Hit  o=Miss  .=Reserved")
        } else {
            write!(f, "    Legend: X=Hit  o=Miss")
        }
    }
}

/// Name of the ship sitting on a shot cell, for result messages.
pub fn shot_message(board: &Board, cell: &Cell) -> String {
    let name = board.ship_at(cell.id()).map_or("Ship", |s| s.name());
    cell.state().describe(name)
}
