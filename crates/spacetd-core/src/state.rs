//! Game state snapshot: the complete visible state handed to the presentation
//! layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::outcome::MissionOutcome;
use crate::types::{EnemyId, Position, ProjectileId, SimTime, TowerId};

/// Complete mission state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: u32,
    pub wave: u32,
    pub max_waves: u32,
    /// Base health clamped at zero.
    pub base_health: u32,
    pub coins: u32,
    pub score: u64,
    pub selected_tower: Option<TowerType>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events raised during the tick that produced this snapshot.
    pub events: Vec<SimEvent>,
    /// Present only on the tick the mission became terminal.
    pub outcome: Option<MissionOutcome>,
}

/// A live enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyType,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
}

/// A placed tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerType,
    pub position: Position,
    pub range: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
}
