use alloc::vec::Vec;

use super::common::BoardError;

pub const BOARD_SIZE: usize = 10;

/// Longest ship the engine knows a name for.
pub const MAX_SHIP_LENGTH: usize = 4;

/// One battleship, two cruisers, three destroyers and four boats.
pub const CLASSIC_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in [`CLASSIC_FLEET`].
pub const CLASSIC_FLEET_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Ship names indexed by `length - 1`.
pub const SHIP_NAMES: [&str; MAX_SHIP_LENGTH] = ["Boat", "Destroyer", "Cruiser", "Battleship"];

/// How many times the driver regenerates a board from scratch after
/// placement runs out of attempts.
pub const DEFAULT_PLACEMENT_RESTARTS: usize = 8;

/// Name of a ship with the given length, if there is one.
pub fn ship_name(length: usize) -> Option<&'static str> {
    length.checked_sub(1).and_then(|i| SHIP_NAMES.get(i).copied())
}

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    /// Pause before each automated shot, in milliseconds.
    pub ai_delay_ms: u64,
    pub placement_restarts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: CLASSIC_FLEET.to_vec(),
            ai_delay_ms: 0,
            placement_restarts: DEFAULT_PLACEMENT_RESTARTS,
        }
    }
}

impl GameConfig {
    /// Reject configurations that can never produce a board.
    ///
    /// A fleet whose body cells exceed `size²` is refused up front; a fleet
    /// that merely packs badly is left to generation to report.
    pub fn validate(&self) -> Result<(), BoardError> {
        validate_fleet(self.size, &self.fleet)
    }
}

pub(crate) fn validate_fleet(size: usize, fleet: &[usize]) -> Result<(), BoardError> {
    if size == 0 {
        return Err(BoardError::InvalidBoardSize(size));
    }
    if let Some(&bad) = fleet.iter().find(|&&l| l == 0 || l > MAX_SHIP_LENGTH) {
        return Err(BoardError::InvalidShipLength(bad));
    }
    let cells: usize = fleet.iter().sum();
    let capacity = size * size;
    if cells > capacity {
        return Err(BoardError::FleetTooLarge { cells, capacity });
    }
    Ok(())
}
