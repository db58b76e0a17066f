//! Skyjump entry point
//!
//! Runs a headless climb with the autopilot steering, then records the
//! result on the leaderboard. A windowed front end drives the same `tick`.
//!
//! Example:
//!   RUST_LOG=skyjump=debug cargo run -- --seed 42 --ticks 20000

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use skyjump::highscores::{HighScores, now_millis};
use skyjump::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use skyjump::{Settings, background::background_color};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless skyjump run with the autopilot", long_about = None)]
struct Args {
    /// Settings file (JSON); defaults are used when it doesn't exist
    #[arg(long, default_value = "data/settings.json")]
    settings: PathBuf,
    /// Run seed, overriding the settings file
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks even if the player is still climbing
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,
    /// Name recorded on the leaderboard, overriding the settings file
    #[arg(long)]
    name: Option<String>,
    /// Write the effective settings to --settings and exit
    #[arg(long)]
    write_default_settings: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings);
    if args.write_default_settings {
        settings.save(&args.settings)?;
        println!("Wrote {}", args.settings.display());
        return Ok(());
    }
    if let Some(name) = args.name {
        settings.player_name = name;
    }
    settings.validate().context("invalid settings")?;

    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or_else(|| now_millis() as u64);
    log::info!("Skyjump (native) starting with seed {seed}");

    let mut state = GameState::new(seed, settings.world(), &settings.tuning);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let dt = settings.sim_dt();

    let mut bounces = 0u64;
    while state.phase == GamePhase::Playing && state.time_ticks < args.ticks {
        tick(&mut state, &input, dt);
        bounces += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Bounce { .. }))
            .count() as u64;
    }

    let [r, g, b] = background_color(state.score);
    println!(
        "Score {} after {} ticks, {} bounces, {} zone, difficulty {:.2} (sky #{r:02x}{g:02x}{b:02x})",
        state.score,
        state.time_ticks,
        bounces,
        state.paths.zone().as_str(),
        state.paths.difficulty(),
    );

    let mut board = HighScores::load(&settings.high_score_path);
    match board.add_score(&settings.player_name, state.score, now_millis()) {
        Some(rank) => {
            board.save(&settings.high_score_path)?;
            println!("New high score! Rank #{rank}");
        }
        None => println!("No leaderboard entry this time"),
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable there
}
