//! Command-line interface utilities and display functions
//!
//! This module provides CLI-related functionality including:
//! - Framed text views of boards
//! - Shot result messages

#![cfg(feature = "std")]

pub mod interface;

// Re-export interface functions
pub use interface::*;
