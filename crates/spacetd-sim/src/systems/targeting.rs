//! Targeting system: ready towers pick the nearest enemy in range and fire.

use spacetd_core::components::{Enemy, Health, Tower};
use spacetd_core::constants::{PROJECTILE_SPEED, TICK_RATE};
use spacetd_core::enums::EnemyStatus;
use spacetd_core::types::{EnemyId, Position, ProjectileId, TowerId, Velocity};

use crate::registry::EntityRegistry;

/// A shot fired this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub tower: TowerId,
    pub target: EnemyId,
    pub projectile: ProjectileId,
}

/// Whether the tower's cooldown of `1 / fire_rate` seconds has elapsed at `tick`.
///
/// Compared in whole ticks (`elapsed_ticks * fire_rate >= tick_rate`) so
/// the boundary is exact. A tower that never fired is ready.
pub fn is_ready(tower: &Tower, tick: u64) -> bool {
    match tower.last_shot_tick {
        None => true,
        Some(last) => {
            let elapsed = tick.saturating_sub(last) as f64;
            elapsed * tower.fire_rate >= TICK_RATE as f64
        }
    }
}

/// Pick the candidate closest to `origin` within `range` (inclusive).
/// Ties go to the earliest candidate.
pub fn nearest_in_range(
    origin: &Position,
    range: f64,
    candidates: &[(EnemyId, Position)],
) -> Option<(EnemyId, Position)> {
    let mut best: Option<(f64, EnemyId, Position)> = None;
    for &(id, pos) in candidates {
        let distance = origin.distance_to(&pos);
        if distance > range {
            continue;
        }
        match best {
            Some((best_distance, _, _)) if distance >= best_distance => {}
            _ => best = Some((distance, id, pos)),
        }
    }
    best.map(|(_, id, pos)| (id, pos))
}

/// Living enemies in registry order.
fn living_enemies(registry: &EntityRegistry) -> Vec<(EnemyId, Position)> {
    let world = registry.world();
    registry
        .enemies_in_order()
        .into_iter()
        .filter_map(|entity| {
            let mut query = world
                .query_one::<(&Enemy, &Health, &Position)>(entity)
                .ok()?;
            let (enemy, health, pos) = query.get()?;
            (enemy.status == EnemyStatus::Advancing && health.current > 0)
                .then_some((enemy.id, *pos))
        })
        .collect()
}

/// Fire every ready tower that has an enemy in range.
///
/// The enemy roster is captured once, before any tower fires, so every tower
/// sees the same state. Each tower fires at most once. New projectiles are
/// aimed at the target's current position and start moving next tick.
pub fn run(registry: &mut EntityRegistry, tick: u64) -> Vec<Shot> {
    let candidates = living_enemies(registry);
    let mut shots = Vec::new();
    if candidates.is_empty() {
        return shots;
    }

    for entity in registry.towers_in_order() {
        let (tower_id, origin, range, damage) = {
            let world = registry.world_mut();
            match world.query_one_mut::<(&Tower, &Position)>(entity) {
                Ok((tower, pos)) if is_ready(tower, tick) => {
                    (tower.id, *pos, tower.range, tower.damage)
                }
                _ => continue,
            }
        };

        let Some((target, target_pos)) = nearest_in_range(&origin, range, &candidates) else {
            continue;
        };

        let velocity = Velocity::toward(&origin, &target_pos, PROJECTILE_SPEED);
        let projectile = registry.spawn_projectile(origin, velocity, damage);

        if let Ok(tower) = registry.world_mut().query_one_mut::<&mut Tower>(entity) {
            tower.last_shot_tick = Some(tick);
        }

        shots.push(Shot {
            tower: tower_id,
            target,
            projectile,
        });
    }

    shots
}
