//! Game board: an N×N table of cells that owns the fleet placed on it.

use alloc::vec::Vec;
use rand::Rng;

use super::cell::Cell;
use super::common::{BoardError, CellId, CellState, ShipId};
use super::config::validate_fleet;
use super::ship::{Orientation, Ship};

/// Which cells around a given cell to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// All eight surrounding cells.
    Omni,
    /// The two cells one step either way along the axis.
    Along(Orientation),
    /// The four orthogonal cells.
    Cross,
}

const OMNI: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const CROSS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALONG_X: [(isize, isize); 2] = [(-1, 0), (1, 0)];
const ALONG_Y: [(isize, isize); 2] = [(0, -1), (0, 1)];

impl Neighborhood {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Neighborhood::Omni => &OMNI,
            Neighborhood::Along(Orientation::Horizontal) => &ALONG_X,
            Neighborhood::Along(Orientation::Vertical) => &ALONG_Y,
            Neighborhood::Cross => &CROSS,
        }
    }
}

/// One player's side of the ocean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    is_enemy: bool,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships.
    pub fn new(size: usize, is_enemy: bool) -> Self {
        let cells = (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .enumerate()
            .map(|(id, (x, y))| Cell::new(id, x, y))
            .collect();
        Board {
            size,
            is_enemy,
            cells,
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether this board belongs to the opponent of the viewing player.
    pub fn is_enemy(&self) -> bool {
        self.is_enemy
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Ship occupying the cell, if any.
    pub fn ship_at(&self, id: CellId) -> Option<&Ship> {
        self.cell(id)?.ship().and_then(|s| self.ships.get(s))
    }

    /// Handle of the cell at (x, y), `None` when off the board.
    pub fn cell_id(&self, x: usize, y: usize) -> Option<CellId> {
        (x < self.size && y < self.size).then(|| x * self.size + y)
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cell_id(x, y).map(|id| &self.cells[id])
    }

    /// Returns `true` when every ship is destroyed. An empty fleet counts
    /// as defeated.
    pub fn is_defeated(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    fn offset(&self, id: CellId, dx: isize, dy: isize) -> Option<CellId> {
        let cell = self.cells.get(id)?;
        let x = cell.x().checked_add_signed(dx)?;
        let y = cell.y().checked_add_signed(dy)?;
        self.cell_id(x, y)
    }

    /// In-bounds neighbours of `id` for the given neighbourhood.
    pub fn get_neighborhood(
        &self,
        id: CellId,
        hood: Neighborhood,
    ) -> impl Iterator<Item = CellId> + '_ {
        hood.offsets()
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(id, dx, dy))
    }

    /// Body cells of `ship`, or `None` if any of them is off the board,
    /// occupied or reserved as buffer.
    fn body_cells(&self, ship: &Ship) -> Option<Vec<CellId>> {
        ship.body()
            .map(|(x, y)| self.cell_id(x, y).filter(|&id| self.cells[id].is_free()))
            .collect()
    }

    /// Returns `true` if `ship` cannot be placed where it is anchored.
    pub fn is_blocked(&self, ship: &Ship) -> bool {
        self.body_cells(ship).is_none()
    }

    pub fn fits(&self, ship: &Ship) -> bool {
        !self.is_blocked(ship)
    }

    /// Place `ship` and reserve the water around it. On failure the board
    /// is left untouched.
    pub fn build(&mut self, mut ship: Ship) -> Result<ShipId, BoardError> {
        let body = self.body_cells(&ship).ok_or(BoardError::PlacementBlocked)?;
        let ship_id = self.ships.len();
        for &id in &body {
            self.cells[id].set_ship(ship_id);
        }
        for &id in &body {
            let around: Vec<CellId> = self.get_neighborhood(id, Neighborhood::Omni).collect();
            for n in around {
                let cell = &mut self.cells[n];
                if cell.ship().is_none() {
                    cell.mark_buffer();
                    ship.push_buffer(n);
                }
            }
        }
        log::trace!(
            "built {} at {:?} {:?}",
            ship.name(),
            ship.origin(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(ship_id)
    }

    /// Place a prepared fleet. Either every ship is built or the board is
    /// left as it was.
    pub fn build_all<I>(&mut self, ships: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut staged = self.clone();
        for ship in ships {
            staged.build(ship)?;
        }
        *self = staged;
        Ok(())
    }

    /// Randomly place one ship per entry of `fleet`.
    ///
    /// Each ship gets `size²` attempts at a random free anchor and random
    /// orientation. Running out of attempts (or of free cells) fails with
    /// [`BoardError::FleetPlacementExhausted`] and leaves the board as it
    /// was before the call.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[usize],
    ) -> Result<(), BoardError> {
        validate_fleet(self.size, fleet)?;
        let mut staged = self.clone();
        for &length in fleet {
            staged.place_random(rng, length)?;
        }
        *self = staged;
        Ok(())
    }

    fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<ShipId, BoardError> {
        let budget = self.size * self.size;
        for attempt in 0..budget {
            let anchor = self
                .get_free_random_cell(rng)
                .ok_or(BoardError::FleetPlacementExhausted {
                    length,
                    attempts: attempt,
                })?;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (x, y) = self.cells[anchor].coords();
            match self.build(Ship::new(length, orientation, x, y)?) {
                Ok(id) => return Ok(id),
                Err(BoardError::PlacementBlocked) => continue,
                Err(e) => return Err(e),
            }
        }
        log::debug!("no room for a ship of length {} after {} attempts", length, budget);
        Err(BoardError::FleetPlacementExhausted {
            length,
            attempts: budget,
        })
    }

    /// Uniformly random cell that is neither occupied nor buffer.
    pub fn get_free_random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CellId> {
        let free: Vec<CellId> = self
            .cells
            .iter()
            .filter(|c| c.is_free())
            .map(Cell::id)
            .collect();
        pick(rng, &free)
    }

    /// Uniformly random unshot cell, restricted to `candidates` when given.
    pub fn get_not_shot_random_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        candidates: Option<&[CellId]>,
    ) -> Option<CellId> {
        let pool: Vec<CellId> = match candidates {
            Some(ids) => ids
                .iter()
                .copied()
                .filter(|&id| self.cell(id).is_some_and(|c| !c.is_shot()))
                .collect(),
            None => self
                .cells
                .iter()
                .filter(|c| !c.is_shot())
                .map(Cell::id)
                .collect(),
        };
        pick(rng, &pool)
    }

    /// Fire at (x, y).
    pub fn fire(&mut self, x: usize, y: usize) -> Result<CellState, BoardError> {
        let id = self.cell_id(x, y).ok_or(BoardError::OutOfBounds { x, y })?;
        self.fire_cell(id)
    }

    /// Fire at a cell, returning the new state of that cell.
    ///
    /// Sinking a ship also marks every unshot buffer cell around it as a miss.
    pub fn fire_cell(&mut self, id: CellId) -> Result<CellState, BoardError> {
        let Some(cell) = self.cells.get(id) else {
            let size = self.size.max(1);
            return Err(BoardError::OutOfBounds {
                x: id / size,
                y: id % size,
            });
        };
        if cell.is_shot() {
            let (x, y) = cell.coords();
            return Err(BoardError::AlreadyFired { x, y });
        }
        let state = match cell.ship() {
            None => CellState::Miss,
            Some(ship_id) => {
                if self.ships[ship_id].hit() {
                    self.reveal_buffer(ship_id);
                    CellState::Destroyed
                } else {
                    CellState::Hit
                }
            }
        };
        self.cells[id].set_state(state);
        Ok(state)
    }

    fn reveal_buffer(&mut self, ship_id: ShipId) {
        let Board { cells, ships, .. } = self;
        for &id in ships[ship_id].buffer() {
            let cell = &mut cells[id];
            if !cell.is_shot() {
                cell.set_state(CellState::Miss);
            }
        }
    }

    /// Number of cells fired upon, including revealed buffer.
    pub fn shot_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_shot()).count()
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[CellId]) -> Option<CellId> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.random_range(0..pool.len())])
    }
}
