//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EnemyId, ProjectileId, TowerId};

/// An enemy walking the path toward the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyType,
    /// Movement speed (units per second).
    pub speed: f64,
    /// Damage dealt to the base on arrival.
    pub damage: u32,
    /// Coins credited when killed.
    pub reward: u32,
    pub status: EnemyStatus,
}

/// Hit points. `current` never exceeds `max` and never goes below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Progress along the mission path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathProgress {
    /// Index of the waypoint the enemy last reached.
    pub waypoint_index: usize,
}

/// A stationary tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerType,
    /// Damage per shot.
    pub damage: u32,
    /// Targeting radius.
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    /// Tick of the last shot, `None` if the tower never fired.
    pub last_shot_tick: Option<u64>,
}

/// A fired projectile travelling in a straight line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub damage: u32,
    /// Set once the projectile has damaged an enemy.
    pub consumed: bool,
}
