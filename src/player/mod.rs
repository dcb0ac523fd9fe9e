//! Player trait and the turn protocol shared by every player kind
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: hunt-and-finish automated opponent
//! - CliPlayer: interactive player reading coordinates from a terminal

use alloc::string::String;
use alloc::vec::Vec;

use crate::core::{
    board::Board,
    common::{BoardError, CellId, CellState},
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets on the opponent's board
/// - Handling feedback from its shots
/// - Providing the text announced for its moves and its victory
pub trait Player {
    /// Short label used in logs and summaries.
    fn name(&self) -> &str;

    /// Announcement printed when this player's turn starts.
    fn move_text(&self) -> String;

    /// Announcement printed when this player wins.
    fn win_text(&self) -> String;

    /// Choose the next cell to fire at on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<CellId>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: CellId, _outcome: CellState, _enemy: &Board) {}

    /// Inform the player that its last target was refused. The turn goes on
    /// and the player is asked again.
    fn handle_rejected_shot(&mut self, _error: &BoardError) {}
}

/// One fired shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Shot {
    pub x: usize,
    pub y: usize,
    pub outcome: CellState,
}

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum TurnEnd {
    /// A miss handed the move to the opponent.
    Passed,
    /// The opponent's fleet is gone.
    Won,
}

/// Every shot of one turn and how the turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub shots: Vec<Shot>,
    pub end: TurnEnd,
}

/// Let `player` fire at `enemy` until it misses or sinks the last ship.
///
/// Hits grant another shot. Refused targets (off the board, already fired
/// upon) are reported back to the player and retried; a player that keeps
/// choosing refused targets for more than `size²` tries in a row is treated
/// as broken.
pub fn take_turn<P: Player + ?Sized>(
    player: &mut P,
    enemy: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<Turn> {
    let mut shots = Vec::new();
    let mut refused = 0usize;
    let max_refused = enemy.cells().len().max(1);
    loop {
        if enemy.is_defeated() {
            return Ok(Turn {
                shots,
                end: TurnEnd::Won,
            });
        }
        let target = player.select_target(rng, enemy)?;
        let outcome = match enemy.fire_cell(target) {
            Ok(outcome) => outcome,
            Err(e) if e.is_recoverable() => {
                log::debug!("{} picked a refused target: {}", player.name(), e);
                player.handle_rejected_shot(&e);
                refused += 1;
                if refused > max_refused {
                    anyhow::bail!("{} keeps choosing invalid targets", player.name());
                }
                continue;
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        };
        refused = 0;
        let (x, y) = enemy
            .cell(target)
            .map(|c| c.coords())
            .ok_or_else(|| anyhow::anyhow!("fired cell {} vanished", target))?;
        log::debug!("{} fires at ({}, {}): {:?}", player.name(), x, y, outcome);
        player.handle_shot_result(target, outcome, enemy);
        shots.push(Shot { x, y, outcome });
        if enemy.is_defeated() {
            return Ok(Turn {
                shots,
                end: TurnEnd::Won,
            });
        }
        if outcome == CellState::Miss {
            return Ok(Turn {
                shots,
                end: TurnEnd::Passed,
            });
        }
    }
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
