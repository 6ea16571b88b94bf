//! Handle shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use spacetd_core::commands::PlayerCommand;
use spacetd_core::state::GameStateSnapshot;

use crate::game_loop::LoopReport;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the mission engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// A running mission.
///
/// `mpsc::Sender` carries commands in; the snapshot is polled from shared
/// state; the loop's report comes back when the thread is joined.
pub struct MissionHandle {
    pub(crate) command_tx: mpsc::Sender<GameLoopCommand>,
    pub(crate) latest_snapshot: SharedSnapshot,
    pub(crate) thread: JoinHandle<LoopReport>,
}

impl MissionHandle {
    /// Forward a player command. Returns false once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx.send(GameLoopCommand::Player(command)).is_ok()
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }

    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop to exit.
    pub fn join(self) -> thread::Result<LoopReport> {
        self.thread.join()
    }
}
