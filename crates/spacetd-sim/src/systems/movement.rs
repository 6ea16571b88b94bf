//! Movement system.
//!
//! Enemies walk the path at their own speed; projectiles integrate their
//! fixed velocity: position += velocity * dt.

use glam::DVec2;
use hecs::World;

use spacetd_core::components::{Enemy, PathProgress, Projectile};
use spacetd_core::constants::WAYPOINT_SNAP_TOLERANCE;
use spacetd_core::enums::{EnemyStatus, EnemyType};
use spacetd_core::path::Path;
use spacetd_core::types::{EnemyId, Position, Velocity};

/// Outcome of advancing one enemy by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    Moved,
    /// The enemy is at the last waypoint.
    Arrived,
}

/// An enemy that reached the base this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub enemy: EnemyId,
    pub kind: EnemyType,
    pub damage: u32,
}

/// Advance one enemy `distance` units along the path.
///
/// An enemy already at the last waypoint does not move and is reported as
/// arrived. Otherwise it moves along the normalized direction from its
/// current waypoint to the next, and advances its waypoint index once it is
/// within the snapping tolerance of the next waypoint. Zero-length segments
/// are skipped without moving.
pub fn step_along_path(
    path: &Path,
    progress: &mut PathProgress,
    position: &mut Position,
    distance: f64,
) -> PathStep {
    let last = path.last_index();
    if progress.waypoint_index >= last {
        return PathStep::Arrived;
    }

    let waypoints = path.waypoints();
    let current = waypoints[progress.waypoint_index];
    let next = waypoints[progress.waypoint_index + 1];

    let direction = (next.as_vec() - current.as_vec()).normalize_or_zero();
    if direction == DVec2::ZERO {
        progress.waypoint_index += 1;
    } else {
        *position = Position::from(position.as_vec() + direction * distance);
        if position.distance_to(&next) < WAYPOINT_SNAP_TOLERANCE {
            progress.waypoint_index += 1;
        }
    }

    if progress.waypoint_index >= last {
        PathStep::Arrived
    } else {
        PathStep::Moved
    }
}

/// Move every advancing enemy. Enemies that reach the base are marked
/// `ReachedBase` and returned in registry order; removal is left to cleanup.
pub fn run_enemies(world: &mut World, path: &Path, dt: f64) -> Vec<Arrival> {
    let mut arrivals = Vec::new();

    for (_entity, (enemy, progress, pos)) in
        world.query_mut::<(&mut Enemy, &mut PathProgress, &mut Position)>()
    {
        if enemy.status != EnemyStatus::Advancing {
            continue;
        }
        if step_along_path(path, progress, pos, enemy.speed * dt) == PathStep::Arrived {
            enemy.status = EnemyStatus::ReachedBase;
            arrivals.push(Arrival {
                enemy: enemy.id,
                kind: enemy.kind,
                damage: enemy.damage,
            });
        }
    }

    arrivals.sort_by_key(|a| a.enemy);
    arrivals
}

/// Integrate every projectile's fixed velocity.
pub fn run_projectiles(world: &mut World, dt: f64) {
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.advance(vel, dt);
    }
}
