//! Mission outcome report handed to the profile collaborator.

use serde::{Deserialize, Serialize};

use crate::enums::MissionResult;

/// Read-only report produced once, on the tick the mission becomes terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub level: u32,
    pub score: u64,
    pub result: MissionResult,
}

impl MissionOutcome {
    pub fn is_win(&self) -> bool {
        self.result == MissionResult::Won
    }
}

/// Receiver of mission outcomes, such as a persistent player profile.
///
/// The simulation never writes persisted state itself; its driver hands
/// the outcome to a sink.
pub trait OutcomeSink {
    type Error;

    fn deliver(&mut self, outcome: &MissionOutcome) -> Result<(), Self::Error>;
}
