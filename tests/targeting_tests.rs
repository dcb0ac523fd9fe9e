use seabattle::{Board, CellId, CellState, HuntStrategy, Orientation, Ship};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with(length: usize, orientation: Orientation, x: usize, y: usize) -> Board {
    let mut board = Board::new(10, true);
    board
        .build(Ship::new(length, orientation, x, y).unwrap())
        .unwrap();
    board
}

/// Fire at (x, y) and feed the result to the strategy.
fn shoot(strategy: &mut HuntStrategy, board: &mut Board, x: usize, y: usize) -> CellState {
    let id = board.cell_id(x, y).unwrap();
    let outcome = board.fire_cell(id).unwrap();
    strategy.record(id, outcome);
    outcome
}

fn coords(board: &Board, id: CellId) -> (usize, usize) {
    board.cell(id).unwrap().coords()
}

#[test]
fn test_vertical_streak_follows_axis() {
    let mut board = board_with(4, Orientation::Vertical, 3, 4);
    let mut strategy = HuntStrategy::new();
    assert_eq!(shoot(&mut strategy, &mut board, 3, 5), CellState::Hit);
    assert_eq!(shoot(&mut strategy, &mut board, 3, 6), CellState::Hit);
    assert_eq!(strategy.orientation(&board), Some(Orientation::Vertical));

    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = strategy.select_target(&board, &mut rng).unwrap();
        let picked = coords(&board, target);
        assert!(picked == (3, 4) || picked == (3, 7), "picked {:?}", picked);
    }
}

#[test]
fn test_horizontal_streak_follows_axis() {
    let mut board = board_with(3, Orientation::Horizontal, 5, 2);
    let mut strategy = HuntStrategy::new();
    shoot(&mut strategy, &mut board, 5, 2);
    shoot(&mut strategy, &mut board, 6, 2);
    assert_eq!(strategy.orientation(&board), Some(Orientation::Horizontal));

    let mut rng = SmallRng::seed_from_u64(9);
    let target = strategy.select_target(&board, &mut rng).unwrap();
    let picked = coords(&board, target);
    assert!(picked == (4, 2) || picked == (7, 2), "picked {:?}", picked);
}

#[test]
fn test_single_hit_probes_cross() {
    let mut board = board_with(2, Orientation::Horizontal, 0, 0);
    let mut strategy = HuntStrategy::new();
    shoot(&mut strategy, &mut board, 0, 0);
    assert_eq!(strategy.orientation(&board), None);

    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = strategy.select_target(&board, &mut rng).unwrap();
        let picked = coords(&board, target);
        assert!(picked == (1, 0) || picked == (0, 1), "picked {:?}", picked);
    }
}

#[test]
fn test_miss_keeps_streak() {
    let mut board = board_with(3, Orientation::Vertical, 3, 3);
    let mut strategy = HuntStrategy::new();
    shoot(&mut strategy, &mut board, 3, 4);
    assert_eq!(shoot(&mut strategy, &mut board, 4, 4), CellState::Miss);
    assert_eq!(strategy.streak(), &[board.cell_id(3, 4).unwrap()]);
}

#[test]
fn test_dead_end_reverses_streak() {
    let mut board = board_with(4, Orientation::Vertical, 3, 3);
    let mut strategy = HuntStrategy::new();
    shoot(&mut strategy, &mut board, 3, 4);
    shoot(&mut strategy, &mut board, 3, 5);
    shoot(&mut strategy, &mut board, 3, 6);
    assert_eq!(shoot(&mut strategy, &mut board, 3, 7), CellState::Miss);

    let mut rng = SmallRng::seed_from_u64(5);
    let target = strategy.select_target(&board, &mut rng).unwrap();
    assert_eq!(coords(&board, target), (3, 3));
    let streak: Vec<_> = strategy.streak().iter().map(|&id| coords(&board, id)).collect();
    assert_eq!(streak, vec![(3, 6), (3, 5), (3, 4)]);

    assert_eq!(
        strategy.fire_next(&mut board, &mut rng).unwrap(),
        Some((target, CellState::Destroyed))
    );
    assert!(board.is_defeated());
}

#[test]
fn test_sunk_ship_clears_streak() {
    let mut board = board_with(3, Orientation::Vertical, 3, 4);
    board
        .build(Ship::new(1, Orientation::Horizontal, 8, 8).unwrap())
        .unwrap();
    let mut strategy = HuntStrategy::new();
    shoot(&mut strategy, &mut board, 3, 5);
    shoot(&mut strategy, &mut board, 3, 6);
    assert_eq!(shoot(&mut strategy, &mut board, 3, 7), CellState::Miss);
    assert_eq!(shoot(&mut strategy, &mut board, 3, 4), CellState::Destroyed);
    assert_eq!(strategy.streak().len(), 3);

    let mut rng = SmallRng::seed_from_u64(11);
    let target = strategy.select_target(&board, &mut rng).unwrap();
    assert!(strategy.streak().is_empty());
    assert!(!board.cell(target).unwrap().is_shot());
}

#[test]
fn test_empty_streak_searches_randomly() {
    let mut board = Board::new(2, true);
    let mut strategy = HuntStrategy::new();
    let mut rng = SmallRng::seed_from_u64(2);
    let mut seen = Vec::new();
    while let Some((id, outcome)) = strategy.fire_next(&mut board, &mut rng).unwrap() {
        assert_eq!(outcome, CellState::Miss);
        assert!(!seen.contains(&id));
        seen.push(id);
    }
    assert_eq!(seen.len(), 4);
    assert!(strategy.streak().is_empty());
}

#[test]
fn test_strategies_do_not_share_state() {
    let mut board = board_with(2, Orientation::Horizontal, 4, 4);
    let mut first = HuntStrategy::new();
    let second = HuntStrategy::new();
    shoot(&mut first, &mut board, 4, 4);
    assert_eq!(first.streak().len(), 1);
    assert!(second.streak().is_empty());
}
