#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
pub mod game;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;

pub use crate::core::*;
pub use game::*;
pub use player::*;
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
