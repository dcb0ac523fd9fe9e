//! Ship definitions: a straight run of cells with a lives counter.

use alloc::vec::Vec;

use super::common::{BoardError, CellId};
use super::config::{ship_name, MAX_SHIP_LENGTH};

/// Axis along which a ship's body extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Body grows along +x.
    Horizontal,
    /// Body grows along +y.
    Vertical,
}

impl Orientation {
    /// Unit step along this axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A ship anchored at (`x`, `y`). Until it is built onto a board the
/// buffer list is empty and the body may even lie off the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    x: usize,
    y: usize,
    lives: usize,
    buffer: Vec<CellId>,
}

impl Ship {
    /// Create an unplaced ship. Fails for lengths outside `1..=MAX_SHIP_LENGTH`.
    pub fn new(
        length: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidShipLength(length));
        }
        Ok(Ship {
            length,
            orientation,
            x,
            y,
            lives: length,
            buffer: Vec::new(),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor of the ship (x, y).
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn name(&self) -> &'static str {
        // lengths are checked in `new`
        ship_name(self.length).unwrap_or("Ship")
    }

    /// Buffer cells reserved around the ship. May contain duplicates.
    pub fn buffer(&self) -> &[CellId] {
        &self.buffer
    }

    pub fn is_destroyed(&self) -> bool {
        self.lives == 0
    }

    /// Coordinates of every body segment, starting at the anchor.
    pub fn body(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dx, dy) = self.orientation.step();
        (0..self.length).map(move |d| {
            (
                self.x.saturating_add(d * dx as usize),
                self.y.saturating_add(d * dy as usize),
            )
        })
    }

    /// Take one hit. Returns `true` when this sank the ship.
    pub fn hit(&mut self) -> bool {
        debug_assert!(self.lives > 0, "hit on a destroyed {}", self.name());
        self.lives = self.lives.saturating_sub(1);
        self.is_destroyed()
    }

    pub(crate) fn push_buffer(&mut self, cell: CellId) {
        self.buffer.push(cell);
    }
}
