//! Combat resolver: projectile/enemy proximity, damage and settlement.

use tracing::debug;

use spacetd_core::components::{Enemy, Health, Projectile};
use spacetd_core::constants::HIT_RADIUS;
use spacetd_core::enums::EnemyStatus;
use spacetd_core::events::SimEvent;
use spacetd_core::types::Position;

use crate::economy::Economy;
use crate::registry::EntityRegistry;

/// Resolve hits for every unconsumed projectile.
///
/// Projectiles are processed in registry order. Each one damages the first
/// living enemy (registry order) closer than `HIT_RADIUS` and is consumed;
/// a projectile with no living enemy in reach keeps flying. An enemy whose
/// health reaches zero is marked `Killed` and settled exactly once.
pub fn run(registry: &mut EntityRegistry, economy: &mut Economy, events: &mut Vec<SimEvent>) {
    let enemies = registry.enemies_in_order();
    if enemies.is_empty() {
        return;
    }

    for projectile_entity in registry.projectiles_in_order() {
        let world = registry.world_mut();

        let (projectile_id, damage, projectile_pos) =
            match world.query_one_mut::<(&Projectile, &Position)>(projectile_entity) {
                Ok((projectile, pos)) if !projectile.consumed => {
                    (projectile.id, projectile.damage, *pos)
                }
                _ => continue,
            };

        let mut struck = false;
        for &enemy_entity in &enemies {
            let (enemy, health, pos) = match world
                .query_one_mut::<(&mut Enemy, &mut Health, &Position)>(enemy_entity)
            {
                Ok(item) => item,
                Err(_) => continue,
            };

            if enemy.status != EnemyStatus::Advancing || health.current == 0 {
                continue;
            }
            if pos.distance_to(&projectile_pos) >= HIT_RADIUS {
                continue;
            }

            health.current = health.current.saturating_sub(damage);
            events.push(SimEvent::EnemyHit {
                enemy: enemy.id,
                projectile: projectile_id,
                damage,
            });

            if health.current == 0 {
                enemy.status = EnemyStatus::Killed;
                economy.credit_kill(enemy.reward);
                debug!(enemy = enemy.id.0, reward = enemy.reward, "enemy killed");
                events.push(SimEvent::EnemyKilled {
                    enemy: enemy.id,
                    reward: enemy.reward,
                });
            }

            struck = true;
            break;
        }

        if struck {
            if let Ok(projectile) = world.query_one_mut::<&mut Projectile>(projectile_entity) {
                projectile.consumed = true;
            }
        }
    }
}
