//! Entity registry: sole authority for creating and removing mission entities.
//!
//! Wraps the hecs world together with monotonically increasing id counters,
//! so an identity is never reused within a mission. Registry order is
//! insertion order, which is the same as ascending id order; systems that
//! depend on scan order sort by id through the `*_in_order` helpers rather
//! than relying on hecs archetype layout.

use hecs::{Entity, World};

use spacetd_core::components::*;
use spacetd_core::enums::{EnemyStatus, EnemyType, TowerType};
use spacetd_core::profiles::{scaled_enemy_profile, tower_profile};
use spacetd_core::types::*;

/// Owns the live enemy, tower and projectile collections.
#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    next_enemy_id: u32,
    next_tower_id: u32,
    next_projectile_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy of `kind` scaled for `level` at the path entry.
    pub fn spawn_enemy(&mut self, kind: EnemyType, level: u32, at: Position) -> EnemyId {
        let profile = scaled_enemy_profile(kind, level);
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;

        self.world.spawn((
            Enemy {
                id,
                kind,
                speed: profile.speed,
                damage: profile.damage,
                reward: profile.reward,
                status: EnemyStatus::Advancing,
            },
            Health {
                current: profile.health,
                max: profile.health,
            },
            PathProgress::default(),
            at,
        ));
        id
    }

    /// Spawn a tower of `kind` at a fixed position.
    pub fn spawn_tower(&mut self, kind: TowerType, at: Position) -> TowerId {
        let profile = tower_profile(kind);
        let id = TowerId(self.next_tower_id);
        self.next_tower_id += 1;

        self.world.spawn((
            Tower {
                id,
                kind,
                damage: profile.damage,
                range: profile.range,
                fire_rate: profile.fire_rate,
                last_shot_tick: None,
            },
            at,
        ));
        id
    }

    /// Spawn a projectile with a fixed velocity.
    pub fn spawn_projectile(&mut self, at: Position, velocity: Velocity, damage: u32) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;

        self.world.spawn((
            Projectile {
                id,
                damage,
                consumed: false,
            },
            at,
            velocity,
        ));
        id
    }

    /// Enemy entities in registry order.
    pub fn enemies_in_order(&self) -> Vec<Entity> {
        let mut entries: Vec<(EnemyId, Entity)> = self
            .world
            .query::<&Enemy>()
            .iter()
            .map(|(entity, enemy)| (enemy.id, entity))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, e)| e).collect()
    }

    /// Tower entities in registry order.
    pub fn towers_in_order(&self) -> Vec<Entity> {
        let mut entries: Vec<(TowerId, Entity)> = self
            .world
            .query::<&Tower>()
            .iter()
            .map(|(entity, tower)| (tower.id, entity))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, e)| e).collect()
    }

    /// Projectile entities in registry order.
    pub fn projectiles_in_order(&self) -> Vec<Entity> {
        let mut entries: Vec<(ProjectileId, Entity)> = self
            .world
            .query::<&Projectile>()
            .iter()
            .map(|(entity, projectile)| (projectile.id, entity))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, e)| e).collect()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn tower_count(&self) -> usize {
        self.world.query::<&Tower>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Remove every enemy matching `pred`. Returns the removed enemies.
    pub fn remove_enemies_where(
        &mut self,
        buffer: &mut Vec<Entity>,
        mut pred: impl FnMut(&Enemy, &Health) -> bool,
    ) -> Vec<Enemy> {
        buffer.clear();
        let mut removed = Vec::new();
        for (entity, (enemy, health)) in self.world.query_mut::<(&Enemy, &Health)>() {
            if pred(enemy, health) {
                buffer.push(entity);
                removed.push(enemy.clone());
            }
        }
        for entity in buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        removed.sort_by_key(|e| e.id);
        removed
    }

    /// Remove every projectile matching `pred`. Returns how many were removed.
    pub fn remove_projectiles_where(
        &mut self,
        buffer: &mut Vec<Entity>,
        mut pred: impl FnMut(&Projectile, &Position) -> bool,
    ) -> usize {
        buffer.clear();
        for (entity, (projectile, pos)) in self.world.query_mut::<(&Projectile, &Position)>() {
            if pred(projectile, pos) {
                buffer.push(entity);
            }
        }
        let count = buffer.len();
        for entity in buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        count
    }
}
