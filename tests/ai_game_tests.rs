use std::collections::VecDeque;

use seabattle::{
    generate_board, take_turn, AiPlayer, Board, BoardError, CellId, CellState, Game,
    GameConfig, Orientation, Player, Ship, TurnEnd, CLASSIC_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Player firing at a fixed list of coordinates.
struct Scripted {
    targets: VecDeque<(usize, usize)>,
    results: Vec<CellState>,
    rejected: Vec<BoardError>,
}

impl Scripted {
    fn new(targets: &[(usize, usize)]) -> Self {
        Self {
            targets: targets.iter().copied().collect(),
            results: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn move_text(&self) -> String {
        "Scripted move".into()
    }

    fn win_text(&self) -> String {
        "Scripted wins".into()
    }

    fn select_target(&mut self, _rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<CellId> {
        let (x, y) = self
            .targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
        // off-board coordinates map past the end of the cell table
        Ok(enemy.cell_id(x, y).unwrap_or(enemy.cells().len() + x))
    }

    fn handle_shot_result(&mut self, _target: CellId, outcome: CellState, _enemy: &Board) {
        self.results.push(outcome);
    }

    fn handle_rejected_shot(&mut self, error: &BoardError) {
        self.rejected.push(error.clone());
    }
}

fn target_board() -> Board {
    let mut board = Board::new(6, true);
    board
        .build_all([
            Ship::new(2, Orientation::Horizontal, 0, 0).unwrap(),
            Ship::new(1, Orientation::Horizontal, 5, 5).unwrap(),
        ])
        .unwrap();
    board
}

#[test]
fn test_miss_passes_the_turn() {
    let mut board = target_board();
    let mut player = Scripted::new(&[(3, 3), (0, 0)]);
    let mut rng = SmallRng::seed_from_u64(1);
    let turn = take_turn(&mut player, &mut board, &mut rng).unwrap();
    assert_eq!(turn.end, TurnEnd::Passed);
    assert_eq!(turn.shots.len(), 1);
    assert_eq!(turn.shots[0].outcome, CellState::Miss);
    assert_eq!(player.targets.len(), 1);
}

#[test]
fn test_hits_grant_extra_shots_until_win() {
    let mut board = target_board();
    let mut player = Scripted::new(&[(0, 0), (0, 0), (1, 0), (5, 5)]);
    let mut rng = SmallRng::seed_from_u64(1);
    let turn = take_turn(&mut player, &mut board, &mut rng).unwrap();
    assert_eq!(turn.end, TurnEnd::Won);
    assert_eq!(
        player.results,
        vec![CellState::Hit, CellState::Destroyed, CellState::Destroyed]
    );
    assert_eq!(player.rejected, vec![BoardError::AlreadyFired { x: 0, y: 0 }]);
    assert!(board.is_defeated());
}

#[test]
fn test_out_of_bounds_is_retried() {
    let mut board = target_board();
    let mut player = Scripted::new(&[(7, 1), (2, 2)]);
    let mut rng = SmallRng::seed_from_u64(1);
    let turn = take_turn(&mut player, &mut board, &mut rng).unwrap();
    assert_eq!(turn.end, TurnEnd::Passed);
    assert_eq!(player.rejected.len(), 1);
    assert!(matches!(player.rejected[0], BoardError::OutOfBounds { .. }));
}

#[test]
fn test_ai_vs_ai_game() {
    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    let rngs = [SmallRng::seed_from_u64(123), SmallRng::seed_from_u64(456)];
    let mut game = Game::new(&GameConfig::default(), players, rngs).unwrap();

    let mut turns = 0;
    let summary = game
        .run(|game, report| {
            turns += 1;
            assert!(!report.turn.shots.is_empty());
            if report.turn.end == TurnEnd::Passed {
                assert_eq!(report.turn.shots.last().unwrap().outcome, CellState::Miss);
                assert_eq!(game.current(), 1 - report.side);
            }
        })
        .unwrap();

    assert_eq!(summary.turns, turns);
    assert!(game.is_ended());
    let loser = 1 - summary.winner;
    assert!(game.board(loser).is_defeated());
    assert!(!game.board(summary.winner).is_defeated());
    assert!(summary.shots[summary.winner] >= 20);
    assert!(game.step().is_err());
}

#[test]
fn test_same_seeds_replay_the_same_game() {
    let play = || {
        let players: [Box<dyn Player>; 2] =
            [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
        let rngs = [SmallRng::seed_from_u64(5), SmallRng::seed_from_u64(6)];
        let mut game = Game::new(&GameConfig::default(), players, rngs).unwrap();
        game.run(|_, _| {}).unwrap()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_generate_board_gives_up_after_restarts() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_board(&mut rng, 2, false, &[1, 1], 3).unwrap_err();
    assert!(matches!(err, BoardError::FleetPlacementExhausted { .. }));

    let board = generate_board(&mut rng, 10, true, &CLASSIC_FLEET, 3).unwrap();
    assert!(board.is_enemy());
    assert_eq!(board.ships().len(), CLASSIC_FLEET.len());
}

#[test]
fn test_invalid_config_is_refused() {
    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    let rngs = [SmallRng::seed_from_u64(1), SmallRng::seed_from_u64(2)];
    let config = GameConfig {
        fleet: vec![5],
        ..GameConfig::default()
    };
    assert_eq!(
        Game::new(&config, players, rngs).unwrap_err(),
        BoardError::InvalidShipLength(5)
    );
}
