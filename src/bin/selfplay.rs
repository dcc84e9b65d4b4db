//! Plays computer-vs-computer games and logs every transition.
//!
//! ```text
//! RUST_LOG=morris_rules=debug selfplay --seed 7 --games 3
//! ```

use clap::Parser;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

use morris_rules::{ActorChoice, Color, ColorMap, GameConfig, GameSession};

/// Self-play driver for the Nine Men's Morris rules engine
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play seeded computer-vs-computer games", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed of the first game; game n uses seed + n
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Give up on a game after this many actions
    #[arg(long, default_value = "1000")]
    max_actions: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!(?cli, "Starting self-play");

    let mut wins: ColorMap<u32> = ColorMap::with_value(0);
    let mut unfinished = 0u32;
    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(u64::from(game));
        match play_game(seed, cli.max_actions) {
            Some(winner) => wins[winner] += 1,
            None => unfinished += 1,
        }
    }

    info!(
        white = wins[Color::White],
        black = wins[Color::Black],
        unfinished,
        "Self-play finished"
    );
}

/// Play one game. Returns the winner, or `None` if the action cap hit first.
#[instrument]
fn play_game(seed: u64, max_actions: u32) -> Option<Color> {
    let mut session = GameSession::new(GameConfig::self_play().with_seed(seed));

    for _ in 0..max_actions {
        let outcome = session.apply_action(ActorChoice::Autonomous);
        if !outcome.status.is_applied() {
            warn!(status = ?outcome.status, "Computer seat could not act");
            return None;
        }
        info!(
            status = ?outcome.status,
            follow_up = ?outcome.follow_up,
            message = %outcome.message
        );
        if let Some(winner) = outcome.winner {
            return Some(winner);
        }
    }

    warn!(max_actions, "Action cap reached without a winner");
    None
}
