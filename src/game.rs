//! Outer game driver: two boards, two players, alternating turns.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::core::{
    board::Board,
    common::BoardError,
    config::GameConfig,
};
use crate::player::{take_turn, Player, Turn, TurnEnd};
use rand::{rngs::SmallRng, Rng};

/// Build a board and randomly place `fleet` on it, starting over from an
/// empty board up to `restarts` times when placement runs out of attempts.
pub fn generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    is_enemy: bool,
    fleet: &[usize],
    restarts: usize,
) -> Result<Board, BoardError> {
    let mut board = Board::new(size, is_enemy);
    let mut attempt = 0;
    loop {
        match board.generate(rng, fleet) {
            Ok(()) => return Ok(board),
            Err(e @ BoardError::FleetPlacementExhausted { .. }) if attempt < restarts => {
                attempt += 1;
                log::warn!("fleet placement failed ({}), restart {}/{}", e, attempt, restarts);
            }
            Err(e) => return Err(e),
        }
    }
}

/// One player together with the board it owns.
struct Side {
    board: Board,
    player: Box<dyn Player>,
    rng: SmallRng,
    shots: usize,
}

/// Result of a single [`Game::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the side that moved.
    pub side: usize,
    pub turn: Turn,
}

/// Final tally of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub winner: usize,
    pub winner_name: String,
    pub turns: usize,
    /// Shots fired by each side.
    pub shots: [usize; 2],
}

/// Two-player game. Side 0 moves first and each side fires at the other
/// side's board; side 1's board is the enemy board from side 0's view.
pub struct Game {
    sides: [Side; 2],
    current: usize,
    turns: usize,
    winner: Option<usize>,
}

impl Game {
    /// Set up both boards and hand them to the players.
    ///
    /// Each side uses its own random generator, for placement and for
    /// every decision its player makes.
    pub fn new(
        config: &GameConfig,
        players: [Box<dyn Player>; 2],
        rngs: [SmallRng; 2],
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let [first, second] = players;
        let [mut rng_a, mut rng_b] = rngs;
        let board_a = generate_board(
            &mut rng_a,
            config.size,
            false,
            &config.fleet,
            config.placement_restarts,
        )?;
        let board_b = generate_board(
            &mut rng_b,
            config.size,
            true,
            &config.fleet,
            config.placement_restarts,
        )?;
        Ok(Self::with_boards([board_a, board_b], [first, second], [rng_a, rng_b]))
    }

    /// Start a game on boards that are already populated.
    pub fn with_boards(
        boards: [Board; 2],
        players: [Box<dyn Player>; 2],
        rngs: [SmallRng; 2],
    ) -> Self {
        let [board_a, board_b] = boards;
        let [player_a, player_b] = players;
        let [rng_a, rng_b] = rngs;
        Self {
            sides: [
                Side {
                    board: board_a,
                    player: player_a,
                    rng: rng_a,
                    shots: 0,
                },
                Side {
                    board: board_b,
                    player: player_b,
                    rng: rng_b,
                    shots: 0,
                },
            ],
            current: 0,
            turns: 0,
            winner: None,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: usize) -> &Board {
        &self.sides[side].board
    }

    pub fn player(&self, side: usize) -> &dyn Player {
        &*self.sides[side].player
    }

    /// Side whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn shots(&self, side: usize) -> usize {
        self.sides[side].shots
    }

    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Play one full turn of the current side.
    pub fn step(&mut self) -> anyhow::Result<TurnReport> {
        if self.is_ended() {
            anyhow::bail!("game is already over");
        }
        let side = self.current;
        let (left, right) = self.sides.split_at_mut(1);
        let (me, them) = if side == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        };
        let turn = take_turn(&mut *me.player, &mut them.board, &mut me.rng)?;
        me.shots += turn.shots.len();
        self.turns += 1;
        match turn.end {
            TurnEnd::Won => {
                log::info!("{} sank the last ship", me.player.name());
                self.winner = Some(side);
            }
            TurnEnd::Passed => {
                log::info!(
                    "{} fired {} shot(s), turn passes",
                    me.player.name(),
                    turn.shots.len()
                );
                self.current = 1 - side;
            }
        }
        Ok(TurnReport { side, turn })
    }

    /// Alternate turns until one fleet is gone. `on_turn` sees the game
    /// after every turn.
    pub fn run<F>(&mut self, mut on_turn: F) -> anyhow::Result<GameSummary>
    where
        F: FnMut(&Game, &TurnReport),
    {
        while !self.is_ended() {
            let report = self.step()?;
            on_turn(self, &report);
        }
        self.summary()
            .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))
    }

    /// Tally of a finished game, `None` while it is still running.
    pub fn summary(&self) -> Option<GameSummary> {
        let winner = self.winner?;
        Some(GameSummary {
            winner,
            winner_name: self.sides[winner].player.name().into(),
            turns: self.turns,
            shots: [self.sides[0].shots, self.sides[1].shots],
        })
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("current", &self.current)
            .field("turns", &self.turns)
            .field("winner", &self.winner)
            .field("boards", &[&self.sides[0].board, &self.sides[1].board])
            .finish()
    }
}
