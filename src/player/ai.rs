use alloc::string::String;
use core::time::Duration;

use crate::core::{
    board::Board,
    common::{CellId, CellState},
    targeting::HuntStrategy,
};
use rand::rngs::SmallRng;

use super::Player;

/// Automated player driven by [`HuntStrategy`]. Each instance keeps its own
/// streak, so two AI players never share targeting state.
pub struct AiPlayer {
    strategy: HuntStrategy,
    delay: Duration,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// AI that pauses for `delay` before every shot so a human can follow.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            strategy: HuntStrategy::new(),
            delay,
        }
    }

    pub fn strategy(&self) -> &HuntStrategy {
        &self.strategy
    }

    #[cfg(feature = "std")]
    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    #[cfg(not(feature = "std"))]
    fn pause(&self) {}
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn move_text(&self) -> String {
        "Computer's move!".into()
    }

    fn win_text(&self) -> String {
        "The computer wins!".into()
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<CellId> {
        let target = self
            .strategy
            .select_target(enemy, rng)
            .ok_or_else(|| anyhow::anyhow!("no unshot cells left to fire at"))?;
        self.pause();
        Ok(target)
    }

    fn handle_shot_result(&mut self, target: CellId, outcome: CellState, _enemy: &Board) {
        self.strategy.record(target, outcome);
    }
}
