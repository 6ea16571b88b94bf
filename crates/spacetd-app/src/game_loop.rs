//! Game loop thread: runs the mission engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling; the outcome is returned when the thread is joined.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use spacetd_core::config::MissionConfig;
use spacetd_core::constants::TICK_RATE;
use spacetd_core::outcome::MissionOutcome;
use spacetd_core::state::GameStateSnapshot;
use spacetd_sim::MissionEngine;

use crate::build_order::BuildOrder;
use crate::state::{GameLoopCommand, MissionHandle};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Sleep between ticks to hold the nominal tick rate. Otherwise run flat out.
    pub realtime: bool,
    /// Stop after this many ticks even if the mission is still running.
    pub max_ticks: u64,
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The mission was won, lost or aborted.
    MissionEnded,
    Shutdown,
    Disconnected,
    TickLimit,
}

#[derive(Debug, Clone)]
pub struct LoopReport {
    pub exit: LoopExit,
    pub ticks: u64,
    pub outcome: Option<MissionOutcome>,
    pub aborted: bool,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: MissionConfig,
    settings: LoopSettings,
    build_order: BuildOrder,
) -> io::Result<MissionHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("spacetd-game-loop".into())
        .spawn(move || run_game_loop(config, settings, build_order, command_rx, &shared))?;

    Ok(MissionHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until the mission ends, Shutdown, channel disconnect,
/// or the tick limit.
pub fn run_game_loop(
    config: MissionConfig,
    settings: LoopSettings,
    mut build_order: BuildOrder,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopReport {
    let mut engine = MissionEngine::new(config);
    let mut outcome = None;
    let mut next_tick_time = Instant::now();

    let exit = loop {
        // 1. Drain all pending commands
        if let Some(exit) = drain_commands(&command_rx, &mut engine) {
            break exit;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        if snapshot.outcome.is_some() {
            outcome = snapshot.outcome;
        }

        // 3. Scripted placements, applied next tick
        engine.queue_commands(build_order.next_commands(&snapshot));

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if !engine.is_running() {
            break LoopExit::MissionEnded;
        }
        if engine.time().tick >= settings.max_ticks {
            break LoopExit::TickLimit;
        }

        // 5. Sleep until next tick
        if settings.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    };

    debug!(?exit, tick = engine.time().tick, "game loop stopped");
    LoopReport {
        exit,
        ticks: engine.time().tick,
        outcome,
        aborted: engine.is_aborted(),
    }
}

fn drain_commands(
    command_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut MissionEngine,
) -> Option<LoopExit> {
    loop {
        match command_rx.try_recv() {
            Ok(GameLoopCommand::Player(command)) => engine.queue_command(command),
            Ok(GameLoopCommand::Shutdown) => return Some(LoopExit::Shutdown),
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => return Some(LoopExit::Disconnected),
        }
    }
}
