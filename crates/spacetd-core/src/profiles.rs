//! Archetype stat profiles and level difficulty scaling.
//!
//! Consolidates per-archetype parameters for enemies and towers.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyType, TowerType};

/// Base stats of an enemy archetype, before level scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub health: u32,
    /// Units per second.
    pub speed: f64,
    pub reward: u32,
    /// Damage dealt to the base on arrival.
    pub damage: u32,
}

/// Stats and catalogue entry of a tower archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TowerProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u32,
    pub damage: u32,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
}

/// Get the base profile for an enemy archetype.
pub fn enemy_profile(kind: EnemyType) -> EnemyProfile {
    match kind {
        EnemyType::Basic => EnemyProfile {
            health: 50,
            speed: 50.0,
            reward: 10,
            damage: 10,
        },
        EnemyType::Fast => EnemyProfile {
            health: 30,
            speed: 100.0,
            reward: 15,
            damage: 5,
        },
        EnemyType::Heavy => EnemyProfile {
            health: 150,
            speed: 25.0,
            reward: 25,
            damage: 20,
        },
        EnemyType::Boss => EnemyProfile {
            health: 1000,
            speed: 30.0,
            reward: 200,
            damage: 50,
        },
    }
}

/// Get the profile for a tower archetype.
pub fn tower_profile(kind: TowerType) -> TowerProfile {
    match kind {
        TowerType::Laser => TowerProfile {
            name: "Laser",
            description: "Fast firing, low damage",
            cost: 50,
            damage: 25,
            range: 100.0,
            fire_rate: 2.0,
        },
        TowerType::Missile => TowerProfile {
            name: "Missile",
            description: "Slow firing, high damage",
            cost: 100,
            damage: 75,
            range: 150.0,
            fire_rate: 0.5,
        },
        TowerType::Plasma => TowerProfile {
            name: "Plasma",
            description: "Balanced damage and speed",
            cost: 75,
            damage: 50,
            range: 120.0,
            fire_rate: 1.0,
        },
    }
}

/// Whether `level` is the single-wave boss fight.
pub fn is_boss_level(level: u32) -> bool {
    level == BOSS_LEVEL
}

/// Stat multiplier for a mission level: `1 + (level - 1) * 0.3`.
pub fn level_multiplier(level: u32) -> f64 {
    1.0 + level.saturating_sub(1) as f64 * LEVEL_SCALING_STEP
}

/// Number of waves in a mission at `level`.
pub fn max_waves(level: u32) -> u32 {
    if is_boss_level(level) {
        1
    } else {
        BASE_WAVE_COUNT + level
    }
}

/// Number of enemies spawned by wave `wave` on a non-boss level.
pub fn wave_quota(wave: u32) -> u32 {
    BASE_WAVE_QUOTA + wave * WAVE_QUOTA_STEP
}

/// Base profile of `kind` scaled for `level`.
///
/// Integer stats are rounded to the nearest whole number so that
/// products such as `1000 * 3.7` are not truncated by float error.
pub fn scaled_enemy_profile(kind: EnemyType, level: u32) -> EnemyProfile {
    let base = enemy_profile(kind);
    let m = level_multiplier(level);
    let scale = |v: u32| (v as f64 * m).round() as u32;
    EnemyProfile {
        health: scale(base.health),
        speed: base.speed * m,
        reward: scale(base.reward),
        damage: scale(base.damage),
    }
}
