//! Common types for the game engine: shot states, board errors and handles.

/// Index of a cell in its board's cell table.
pub type CellId = usize;

/// Index of a ship in its board's fleet.
pub type ShipId = usize;

/// Outcome of firing at a cell. Once it leaves `Unshot` it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unshot,
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank the ship.
    Destroyed,
}

impl CellState {
    pub fn is_shot(self) -> bool {
        self != CellState::Unshot
    }

    /// `Hit` or `Destroyed`.
    pub fn is_hit(self) -> bool {
        matches!(self, CellState::Hit | CellState::Destroyed)
    }

    /// Message shown to the players after a shot. `ship_name` is only used
    /// for `Destroyed`.
    pub fn describe(self, ship_name: &str) -> alloc::string::String {
        match self {
            CellState::Unshot => alloc::string::String::new(),
            CellState::Miss => "Miss!".into(),
            CellState::Hit => "Hit!".into(),
            CellState::Destroyed => alloc::format!("{} destroyed!", ship_name),
        }
    }
}

/// What a cell holds, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Ship,
    /// Reserved water next to a ship.
    Buffer,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinates are outside the board.
    OutOfBounds { x: usize, y: usize },
    /// The cell was already fired upon.
    AlreadyFired { x: usize, y: usize },
    /// The ship would leave the board or touch another ship.
    PlacementBlocked,
    /// No room was found for a ship within its attempt budget.
    FleetPlacementExhausted { length: usize, attempts: usize },
    InvalidShipLength(usize),
    InvalidBoardSize(usize),
    /// The fleet has more body cells than the board.
    FleetTooLarge { cells: usize, capacity: usize },
}

impl BoardError {
    /// Errors a player can recover from by picking another target.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds { .. } | BoardError::AlreadyFired { .. }
        )
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Cell at x = {} and y = {} is off the board", x, y)
            }
            BoardError::AlreadyFired { x, y } => {
                write!(f, "Cell at x = {} and y = {} was already fired upon", x, y)
            }
            BoardError::PlacementBlocked => write!(f, "Ship does not fit at this position"),
            BoardError::FleetPlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::InvalidShipLength(l) => write!(f, "Invalid ship length {}", l),
            BoardError::InvalidBoardSize(n) => write!(f, "Invalid board size {}", n),
            BoardError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
