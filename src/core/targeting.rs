//! Hunt-and-finish targeting for the automated player.
//!
//! Random search until something is hit, then walk along the suspected
//! ship: keep the direction while hits continue, turn around at a dead end,
//! and drop the streak once the ship sinks.

use alloc::vec::Vec;
use rand::Rng;

use super::board::{Board, Neighborhood};
use super::common::{BoardError, CellId, CellState};
use super::ship::Orientation;

/// Cross-turn targeting state of one automated player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntStrategy {
    /// Hit cells of the ship currently being finished off, in firing order.
    streak: Vec<CellId>,
}

impl HuntStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streak(&self) -> &[CellId] {
        &self.streak
    }

    /// Axis of the current streak: same x on the last two hits means the
    /// ship runs vertically. `None` with fewer than two hits.
    pub fn orientation(&self, board: &Board) -> Option<Orientation> {
        let [.., prev, last] = self.streak.as_slice() else {
            return None;
        };
        let (prev, last) = (board.cell(*prev)?, board.cell(*last)?);
        if prev.x() == last.x() {
            Some(Orientation::Vertical)
        } else {
            Some(Orientation::Horizontal)
        }
    }

    /// Unshot neighbour of the last streak cell along the streak's axis.
    fn finish_off<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<CellId> {
        let &last = self.streak.last()?;
        let hood = match self.orientation(board) {
            Some(axis) => Neighborhood::Along(axis),
            None => Neighborhood::Cross,
        };
        let candidates: Vec<CellId> = board.get_neighborhood(last, hood).collect();
        board.get_not_shot_random_cell(rng, Some(candidates.as_slice()))
    }

    /// Choose the next cell to fire at on the opponent's `board`.
    ///
    /// Returns `None` only when every cell has been fired upon.
    pub fn select_target<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Option<CellId> {
        if !self.streak.is_empty() {
            if let Some(target) = self.finish_off(board, rng) {
                return Some(target);
            }
            let last_sunk = self
                .streak
                .last()
                .and_then(|&id| board.cell(id))
                .is_some_and(|c| c.state() == CellState::Destroyed);
            if last_sunk {
                log::trace!("streak of {} closed, ship sunk", self.streak.len());
                self.streak.clear();
            } else {
                self.streak.reverse();
                if let Some(target) = self.finish_off(board, rng) {
                    return Some(target);
                }
            }
        }
        board.get_not_shot_random_cell(rng, None)
    }

    /// Feed back the result of a shot at `target`.
    pub fn record(&mut self, target: CellId, outcome: CellState) {
        if outcome.is_hit() {
            self.streak.push(target);
        }
    }

    /// Select a target, fire at it and record the outcome.
    pub fn fire_next<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<Option<(CellId, CellState)>, BoardError> {
        let Some(target) = self.select_target(board, rng) else {
            return Ok(None);
        };
        let outcome = board.fire_cell(target)?;
        self.record(target, outcome);
        Ok(Some((target, outcome)))
    }
}
