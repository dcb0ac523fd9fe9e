//! A single grid location.

use super::common::{CellId, CellState, Occupancy, ShipId};

/// One cell of a [`Board`](super::board::Board). Cells are created by the
/// board and only mutated through it; `id` is the cell's own slot in the
/// board's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    x: usize,
    y: usize,
    is_buffer: bool,
    ship: Option<ShipId>,
    state: CellState,
}

impl Cell {
    pub(crate) fn new(id: CellId, x: usize, y: usize) -> Self {
        Self {
            id,
            x,
            y,
            is_buffer: false,
            ship: None,
            state: CellState::Unshot,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// The ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn is_buffer(&self) -> bool {
        self.is_buffer
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_shot(&self) -> bool {
        self.state.is_shot()
    }

    /// Neither occupied nor reserved as buffer.
    pub fn is_free(&self) -> bool {
        self.ship.is_none() && !self.is_buffer
    }

    pub fn occupancy(&self) -> Occupancy {
        if self.ship.is_some() {
            Occupancy::Ship
        } else if self.is_buffer {
            Occupancy::Buffer
        } else {
            Occupancy::Empty
        }
    }

    pub(crate) fn set_ship(&mut self, ship: ShipId) {
        self.ship = Some(ship);
    }

    pub(crate) fn mark_buffer(&mut self) {
        self.is_buffer = true;
    }

    /// Record a shot result. Callers check `is_shot` first.
    pub(crate) fn set_state(&mut self, state: CellState) {
        debug_assert!(!self.is_shot(), "cell {:?} shot twice", self.coords());
        self.state = state;
    }
}
