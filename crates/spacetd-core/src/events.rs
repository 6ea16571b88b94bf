//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EnemyId, Position, ProjectileId, TowerId};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    WaveStarted {
        wave: u32,
        quota: u32,
    },
    EnemySpawned {
        enemy: EnemyId,
        kind: EnemyType,
    },
    TowerPlaced {
        tower: TowerId,
        kind: TowerType,
        position: Position,
    },
    TowerFired {
        tower: TowerId,
        target: EnemyId,
        projectile: ProjectileId,
    },
    EnemyHit {
        enemy: EnemyId,
        projectile: ProjectileId,
        damage: u32,
    },
    /// Enemy health reached zero; reward and score were credited.
    EnemyKilled {
        enemy: EnemyId,
        reward: u32,
    },
    /// Enemy reached the last waypoint and damaged the base.
    EnemyReachedBase {
        enemy: EnemyId,
        damage: u32,
    },
    WaveCleared {
        wave: u32,
    },
    MissionWon,
    MissionLost,
}
