//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use spacetd_core::components::*;
use spacetd_core::enums::{GamePhase, TowerType};
use spacetd_core::events::SimEvent;
use spacetd_core::outcome::MissionOutcome;
use spacetd_core::state::*;
use spacetd_core::types::{Position, SimTime};

use crate::economy::Economy;

/// Mission-level scalars that accompany the entity collections.
pub struct MissionSummary {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: u32,
    pub wave: u32,
    pub max_waves: u32,
    pub base_health: i32,
    pub selected_tower: Option<TowerType>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    summary: &MissionSummary,
    economy: &Economy,
    events: Vec<SimEvent>,
    outcome: Option<MissionOutcome>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: summary.time,
        phase: summary.phase,
        level: summary.level,
        wave: summary.wave,
        max_waves: summary.max_waves,
        base_health: summary.base_health.max(0) as u32,
        coins: economy.coins,
        score: economy.score,
        selected_tower: summary.selected_tower,
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        events,
        outcome,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Health, &Position)>()
        .iter()
        .map(|(_, (enemy, health, pos))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (tower, pos))| TowerView {
            id: tower.id,
            kind: tower.kind,
            position: *pos,
            range: tower.range,
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            position: *pos,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
