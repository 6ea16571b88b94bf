//! Cleanup system: the single per-tick removal phase.
//!
//! Removes enemies that were killed or reached the base, and projectiles
//! that were consumed or left the playfield.

use hecs::Entity;

use spacetd_core::components::Enemy;
use spacetd_core::config::Playfield;
use spacetd_core::constants::PROJECTILE_BOUNDS_MARGIN;
use spacetd_core::enums::EnemyStatus;

use crate::registry::EntityRegistry;

/// What cleanup removed this tick.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Removed enemies in registry order, with their final status.
    pub removed_enemies: Vec<Enemy>,
    pub removed_projectiles: usize,
}

/// Remove dead and expended entities.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    registry: &mut EntityRegistry,
    playfield: &Playfield,
    despawn_buffer: &mut Vec<Entity>,
) -> CleanupReport {
    let removed_enemies = registry.remove_enemies_where(despawn_buffer, |enemy, health| {
        enemy.status != EnemyStatus::Advancing || health.current == 0
    });

    let removed_projectiles = registry.remove_projectiles_where(despawn_buffer, |projectile, pos| {
        projectile.consumed || !playfield.contains_with_margin(pos.x, pos.y, PROJECTILE_BOUNDS_MARGIN)
    });

    CleanupReport {
        removed_enemies,
        removed_projectiles,
    }
}
