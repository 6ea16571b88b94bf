//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    Basic,
    Fast,
    Heavy,
    Boss,
}

impl EnemyType {
    /// Every archetype, in the order random selection draws from.
    pub const ALL: [EnemyType; 4] = [
        EnemyType::Basic,
        EnemyType::Fast,
        EnemyType::Heavy,
        EnemyType::Boss,
    ];
}

/// Tower archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerType {
    /// Fast firing, low damage.
    Laser,
    /// Slow firing, high damage.
    Missile,
    /// Balanced damage and fire rate.
    Plasma,
}

impl TowerType {
    pub const ALL: [TowerType; 3] = [TowerType::Laser, TowerType::Missile, TowerType::Plasma];
}

/// Mission phase (top-level state). `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between waves; the next wave start is scheduled.
    Waiting,
    /// A wave is spawning or its enemies are still on the field.
    Wave,
    /// Mission started, first wave not yet begun.
    #[default]
    Active,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Enemy lifecycle status, set by movement and combat and read by cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyStatus {
    /// Following the path.
    #[default]
    Advancing,
    /// Health reached zero; reward already settled.
    Killed,
    /// Reached the last waypoint; base already damaged.
    ReachedBase,
}

/// Final result of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionResult {
    Won,
    Lost,
}
