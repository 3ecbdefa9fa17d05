//! MiniGo: a 5x5 Go rule engine.
//!
//! ## Usage
//!
//! - `minigo` - Start the text console on stdin/stdout
//! - `minigo console` - Same as above
//! - `minigo demo --seed 7` - Play a random game and print it

use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use minigo::board::Color;
use minigo::console::Console;
use minigo::constants::MAX_DEMO_MOVES;
use minigo::game::GameSession;
use minigo::selfplay::SelfPlay;

/// MiniGo: a 5x5 Go rule engine
#[derive(Parser)]
#[command(name = "minigo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Console,
    /// Play a random game between two random players
    Demo {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many moves
        #[arg(long, default_value_t = MAX_DEMO_MOVES)]
        max_moves: usize,

        /// Probability that a player passes instead of playing
        #[arg(long, default_value_t = 0.1)]
        pass_rate: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Console) | None => {
            let mut console = Console::new();
            console.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Demo {
            seed,
            max_moves,
            pass_rate,
        }) => run_demo(seed, max_moves, pass_rate)?,
    }
    Ok(())
}

fn run_demo(seed: Option<u64>, max_moves: usize, pass_rate: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&pass_rate),
        "pass rate must be between 0 and 1 (got {pass_rate})"
    );
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("MiniGo: random self-play (seed {seed})\n");

    let mut game = GameSession::new();
    let mut rng = fastrand::Rng::with_seed(seed);
    let played = SelfPlay {
        max_moves,
        pass_rate,
    }
    .play_out(&mut game, &mut rng)?;

    println!("{}", game.board());
    println!("{}\n", game.history());
    println!(
        "{played} moves, game over: {}, captured black {} white {}",
        game.is_over(),
        game.captured(Color::Black),
        game.captured(Color::White)
    );
    Ok(())
}
