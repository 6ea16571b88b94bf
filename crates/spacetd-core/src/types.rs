//! Fundamental geometric, identity and simulation-time types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// 2D position on the playfield (screen-like units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Identity of an enemy. Allocated monotonically, never reused within a mission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EnemyId(pub u32);

/// Identity of a tower.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TowerId(pub u32);

/// Identity of a projectile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u32);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Displace this position by `velocity * dt`.
    pub fn advance(&mut self, velocity: &Velocity, dt: f64) {
        self.x += velocity.x * dt;
        self.y += velocity.y * dt;
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` pointing from `from` toward `to`.
    /// Zero when the two points coincide.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Self {
        let dir = (to.as_vec() - from.as_vec()).normalize_or_zero();
        let v = dir * speed;
        Self { x: v.x, y: v.y }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    ///
    /// Elapsed time is derived from the tick count rather than accumulated,
    /// so it never drifts.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 / TICK_RATE as f64;
    }
}
