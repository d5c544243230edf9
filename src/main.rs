//! Breakout entry point
//!
//! Runs a headless session: no window, the paddle is driven by the autopilot
//! or left idle, and the final board can be dumped as JSON.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use breakout::sim::{GameEvent, GamePhase};
use breakout::{Session, Settings};

#[derive(Parser, Debug)]
#[command(about = "Run a headless Breakout session", version)]
struct Args {
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of fixed ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    ticks: u32,
    /// Let the paddle follow the ball
    #[arg(long)]
    autopilot: bool,
    /// Write the final snapshot here as JSON
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let fallback_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut session = Session::new(&settings, fallback_seed);
    session.set_autopilot(args.autopilot);

    // One fixed step per frame
    let frame_ms = 16.0;
    let mut bricks_destroyed = 0u32;
    for _ in 0..args.ticks {
        session.on_tick(frame_ms);

        for event in session.drain_events() {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                GameEvent::Cleared => log::info!("Board cleared"),
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
                _ => {}
            }
        }

        if session.phase() == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = session.snapshot();
    println!(
        "seed={} ticks={} score={} bricks_left={} phase={:?}",
        session.state().seed,
        session.state().time_ticks,
        snapshot.score,
        snapshot.bricks.len(),
        snapshot.phase
    );
    log::debug!("Bricks destroyed: {}", bricks_destroyed);

    if let Some(path) = &args.snapshot_out {
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, json)?;
        log::info!("Snapshot written to {}", path.display());
    }

    Ok(())
}
