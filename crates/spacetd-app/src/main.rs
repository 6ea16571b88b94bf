use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spacetd_app::build_order::BuildOrder;
use spacetd_app::config::load_mission_config;
use spacetd_app::game_loop::{self, LoopSettings};
use spacetd_core::constants::MAX_LEVEL;
use spacetd_core::outcome::OutcomeSink;
use spacetd_core::path::Path;
use spacetd_profile::ProfileStore;

/// Run a headless SpaceTD mission
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mission config JSON file; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mission level, overriding the config file
    #[arg(short, long)]
    level: Option<u32>,

    /// RNG seed, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player profile file
    #[arg(short, long, default_value = "spacetd-profile.json")]
    profile: PathBuf,

    /// Hold the nominal 60 Hz tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,

    /// Do not place any towers
    #[arg(long)]
    no_build: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut config = load_mission_config(args.config.as_deref())?;
    if let Some(level) = args.level {
        config.level = level;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.level = config.level.clamp(1, MAX_LEVEL);

    let mut store = ProfileStore::open(&args.profile)
        .with_context(|| format!("failed to open profile {}", args.profile.display()))?;
    let profile = *store.profile();
    if !profile.is_level_unlocked(config.level) {
        bail!(
            "level {} is locked; highest unlocked level is {}",
            config.level,
            profile.highest_level
        );
    }

    let build_order = if args.no_build {
        BuildOrder::default()
    } else {
        BuildOrder::along_path(&Path::for_playfield(&config.playfield))
    };
    info!(
        level = config.level,
        seed = config.seed,
        towers = build_order.remaining(),
        "starting mission"
    );

    let settings = LoopSettings {
        realtime: args.realtime,
        max_ticks: args.max_ticks,
    };
    let handle = game_loop::spawn_game_loop(config, settings, build_order)
        .context("failed to spawn game loop thread")?;

    let poll_interval = if args.realtime {
        Duration::from_secs(1)
    } else {
        Duration::from_millis(100)
    };
    while !handle.is_finished() {
        std::thread::sleep(poll_interval);
        if let Some(snapshot) = handle.latest_snapshot() {
            info!(
                tick = snapshot.time.tick,
                wave = snapshot.wave,
                phase = ?snapshot.phase,
                base_health = snapshot.base_health,
                coins = snapshot.coins,
                score = snapshot.score,
                enemies = snapshot.enemies.len(),
                "mission status"
            );
        }
    }

    let report = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!(exit = ?report.exit, ticks = report.ticks, "game loop finished");

    match report.outcome {
        Some(outcome) => {
            info!(result = ?outcome.result, score = outcome.score, "mission over");
            store
                .deliver(&outcome)
                .with_context(|| format!("failed to save profile {}", store.path().display()))?;
            info!(
                highest_level = store.profile().highest_level,
                high_score = store.profile().high_score,
                "profile"
            );
        }
        None => info!("mission ended without an outcome"),
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
