#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, AiPlayer, BoardView, CliPlayer, Game, GameConfig, Player, TurnEnd,
    BOARD_SIZE, DEFAULT_PLACEMENT_RESTARTS,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Width and height of each board")]
    size: usize,
    #[arg(long, default_value_t = 1000, help = "Pause before each computer shot, in milliseconds")]
    delay_ms: u64,
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_RESTARTS, help = "Board regenerations allowed when ships do not fit")]
    restarts: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Watch two computer players fight each other.
    Watch {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            ai_delay_ms: self.delay_ms,
            placement_restarts: self.restarts,
            ..GameConfig::default()
        }
    }

    fn rngs(&self) -> [SmallRng; 2] {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                [
                    SmallRng::seed_from_u64(s),
                    SmallRng::seed_from_u64(s.wrapping_add(1)),
                ]
            }
            None => {
                let mut seed_rng = rand::rng();
                [
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                ]
            }
        }
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("Welcome to sea battle!");
    println!("Input format: x y");
    println!("  x - column number");
    println!("  y - row number");
    println!();
}

#[cfg(feature = "std")]
fn run(mut game: Game, human: Option<usize>) -> anyhow::Result<()> {
    let own = human.unwrap_or(0);
    println!("{}", if human.is_some() { "Your board:" } else { "First board:" });
    println!("{}", BoardView::new(game.board(own)));
    println!();
    if human.is_some() {
        println!("{}", game.player(own).move_text());
        println!("{}", BoardView::new(game.board(1 - own)));
    }
    game.run(|game, report| {
        let side = report.side;
        if human != Some(side) {
            for shot in &report.turn.shots {
                println!(
                    "{} fires at {} {}: {:?}",
                    game.player(side).name(),
                    shot.x,
                    shot.y,
                    shot.outcome
                );
            }
            println!("{}", BoardView::new(game.board(1 - side)));
        }
        match report.turn.end {
            TurnEnd::Won => println!("{}", game.player(side).win_text()),
            TurnEnd::Passed => {
                println!();
                let next = game.current();
                println!("{}", game.player(next).move_text());
                if human == Some(next) {
                    println!("{}", BoardView::new(game.board(1 - next)));
                }
            }
        }
    })?;
    println!("\nFinal boards:");
    println!("{}", BoardView::revealed(game.board(0)));
    println!("{}", BoardView::revealed(game.board(1)));
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            greet();
            let config = game.config();
            let ai_delay = Duration::from_millis(config.ai_delay_ms);
            let players: [Box<dyn Player>; 2] = [
                Box::new(CliPlayer::stdio()),
                Box::new(AiPlayer::with_delay(ai_delay)),
            ];
            let game = Game::new(&config, players, game.rngs())
                .map_err(|e| anyhow::anyhow!(e))?;
            run(game, Some(0))
        }
        Commands::Watch { game } => {
            println!("Starting computer vs computer game...");
            let config = game.config();
            let ai_delay = Duration::from_millis(config.ai_delay_ms);
            let players: [Box<dyn Player>; 2] = [
                Box::new(AiPlayer::with_delay(ai_delay)),
                Box::new(AiPlayer::with_delay(ai_delay)),
            ];
            let game = Game::new(&config, players, game.rngs())
                .map_err(|e| anyhow::anyhow!(e))?;
            run(game, None)
        }
    }
}
