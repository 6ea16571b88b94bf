//! Wave director: spawns each wave's enemies at a fixed cadence.

use rand::Rng;
use tracing::debug;

use spacetd_core::constants::SPAWN_INTERVAL_TICKS;
use spacetd_core::enums::EnemyType;
use spacetd_core::events::SimEvent;
use spacetd_core::path::Path;
use spacetd_core::profiles::{is_boss_level, wave_quota};

use crate::registry::EntityRegistry;

/// Spawning state of the current wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectorState {
    #[default]
    Idle,
    Spawning {
        quota: u32,
        spawned: u32,
        next_spawn_tick: u64,
    },
}

/// Governs when and how many enemies spawn for the mission's level.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    level: u32,
    state: DirectorState,
}

impl WaveDirector {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            state: DirectorState::Idle,
        }
    }

    pub fn state(&self) -> DirectorState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DirectorState::Idle
    }

    /// Begin spawning `wave`. Returns the wave's enemy quota.
    ///
    /// Regular waves spawn `5 + 2 * wave` enemies, the first one cadence
    /// interval after the start. The boss level's only wave is a single
    /// boss, spawned immediately.
    pub fn begin_wave(&mut self, wave: u32, tick: u64) -> u32 {
        let (quota, next_spawn_tick) = if is_boss_level(self.level) {
            (1, tick)
        } else {
            (wave_quota(wave), tick + SPAWN_INTERVAL_TICKS)
        };
        self.state = DirectorState::Spawning {
            quota,
            spawned: 0,
            next_spawn_tick,
        };
        quota
    }

    /// Stop spawning. Used when the mission ends.
    pub fn halt(&mut self) {
        self.state = DirectorState::Idle;
    }

    /// Spawn at most one enemy if one is due at `tick`.
    pub fn run<R: Rng>(
        &mut self,
        registry: &mut EntityRegistry,
        path: &Path,
        rng: &mut R,
        tick: u64,
        events: &mut Vec<SimEvent>,
    ) {
        let DirectorState::Spawning {
            quota,
            spawned,
            next_spawn_tick,
        } = self.state
        else {
            return;
        };

        if tick < next_spawn_tick {
            return;
        }

        let kind = if is_boss_level(self.level) {
            EnemyType::Boss
        } else {
            choose_enemy_type(rng)
        };
        let enemy = registry.spawn_enemy(kind, self.level, path.start());
        debug!(enemy = enemy.0, ?kind, tick, "enemy spawned");
        events.push(SimEvent::EnemySpawned { enemy, kind });

        let spawned = spawned + 1;
        self.state = if spawned >= quota {
            DirectorState::Idle
        } else {
            DirectorState::Spawning {
                quota,
                spawned,
                next_spawn_tick: next_spawn_tick + SPAWN_INTERVAL_TICKS,
            }
        };
    }
}

/// Draw an enemy type uniformly from all four archetypes.
pub fn choose_enemy_type<R: Rng>(rng: &mut R) -> EnemyType {
    EnemyType::ALL[rng.gen_range(0..EnemyType::ALL.len())]
}
