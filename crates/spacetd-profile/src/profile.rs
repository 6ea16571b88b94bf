//! Level unlocks and high score.

use serde::{Deserialize, Serialize};

use spacetd_core::constants::MAX_LEVEL;
use spacetd_core::outcome::MissionOutcome;

/// Progress carried between missions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    /// Highest level the player may start, 1 through `MAX_LEVEL`.
    pub highest_level: u32,
    pub high_score: u64,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            highest_level: 1,
            high_score: 0,
        }
    }
}

impl PlayerProfile {
    pub fn is_level_unlocked(&self, level: u32) -> bool {
        (1..=self.highest_level).contains(&level)
    }

    /// Apply a won mission. Neither field ever decreases, and the unlocked
    /// level never passes `MAX_LEVEL`. Returns whether anything changed.
    pub fn record_win(&mut self, level: u32, score: u64) -> bool {
        let before = *self;
        if level >= self.highest_level {
            self.highest_level = self.highest_level.max(level.saturating_add(1).min(MAX_LEVEL));
        }
        if score > self.high_score {
            self.high_score = score;
        }
        *self != before
    }

    /// Apply any mission outcome. Losses leave the profile untouched.
    pub fn apply(&mut self, outcome: &MissionOutcome) -> bool {
        outcome.is_win() && self.record_win(outcome.level, outcome.score)
    }
}
