//! Mission configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Playfield dimensions. The path and projectile bounds derive from these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYFIELD_WIDTH,
            height: DEFAULT_PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    /// Whether `(x, y)` lies within the playfield grown by `margin` on every side.
    pub fn contains_with_margin(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
    }
}

/// Configuration for starting a new mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// RNG seed for determinism. Same seed = same mission.
    pub seed: u64,
    /// Mission level, 1 through `BOSS_LEVEL`.
    pub level: u32,
    pub playfield: Playfield,
    pub starting_coins: u32,
    pub base_health: i32,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            level: 1,
            playfield: Playfield::default(),
            starting_coins: STARTING_COINS,
            base_health: STARTING_BASE_HEALTH,
        }
    }
}
