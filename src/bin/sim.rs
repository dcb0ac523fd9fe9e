use seabattle::{AiPlayer, Game, GameConfig, Player};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let rngs = [SmallRng::seed_from_u64(seed1), SmallRng::seed_from_u64(seed2)];
    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];

    let mut game = Game::new(&GameConfig::default(), players, rngs)
        .map_err(|e| anyhow::anyhow!(e))?;
    let summary = game.run(|_, _| {})?;

    let winner = if summary.winner == 0 { "player1" } else { "player2" };
    let result = json!({
        "player1": {"shots": summary.shots[0]},
        "player2": {"shots": summary.shots[1]},
        "turns": summary.turns,
        "winner": winner,
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
