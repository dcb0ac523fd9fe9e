//! Core sea battle engine (no_std compatible)
//!
//! This module contains the pure game logic: cells, ships, boards with their
//! placement and firing rules, and the automated targeting strategy. It only
//! needs `alloc` and `rand`.

pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod ship;
pub mod targeting;

// Re-export commonly used types
pub use board::{Board, Neighborhood};
pub use cell::Cell;
pub use common::{BoardError, CellId, CellState, Occupancy, ShipId};
pub use config::*;
pub use ship::{Orientation, Ship};
pub use targeting::HuntStrategy;
