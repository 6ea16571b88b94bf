//! Mission engine: the core of the game.
//!
//! `MissionEngine` owns the entity registry and the path, applies player
//! commands, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use spacetd_core::commands::PlayerCommand;
use spacetd_core::config::{MissionConfig, Playfield};
use spacetd_core::constants::{MAX_LEVEL, WAVE_DELAY_TICKS};
use spacetd_core::enums::{EnemyStatus, EnemyType, GamePhase, MissionResult, TowerType};
use spacetd_core::events::SimEvent;
use spacetd_core::outcome::MissionOutcome;
use spacetd_core::path::Path;
use spacetd_core::profiles::{is_boss_level, max_waves, tower_profile};
use spacetd_core::state::GameStateSnapshot;
use spacetd_core::types::{Position, SimTime, TowerId};

use crate::economy::Economy;
use crate::error::PlacementError;
use crate::registry::EntityRegistry;
use crate::schedule::{Schedule, ScheduledAction};
use crate::systems;
use crate::systems::game_state::{MissionContext, Transition, WaveTimer};
use crate::systems::snapshot::MissionSummary;
use crate::systems::wave_director::WaveDirector;

/// A single mission session. Owns every entity and the path for its lifetime.
pub struct MissionEngine {
    registry: EntityRegistry,
    path: Path,
    playfield: Playfield,
    time: SimTime,
    phase: GamePhase,
    level: u32,
    max_waves: u32,
    wave: u32,
    base_health: i32,
    economy: Economy,
    selected_tower: Option<TowerType>,
    rng: ChaCha8Rng,
    schedule: Schedule,
    director: WaveDirector,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    outcome: Option<MissionOutcome>,
    outcome_reported: bool,
    aborted: bool,
}

impl MissionEngine {
    /// Create a mission with the default path across the configured playfield.
    pub fn new(config: MissionConfig) -> Self {
        let path = Path::for_playfield(&config.playfield);
        Self::with_path(config, path)
    }

    /// Create a mission along a custom path.
    pub fn with_path(config: MissionConfig, path: Path) -> Self {
        let level = config.level.clamp(1, MAX_LEVEL);
        let mut schedule = Schedule::new();
        schedule.schedule(0, ScheduledAction::StartNextWave);

        info!(level, seed = config.seed, "mission created");

        Self {
            registry: EntityRegistry::new(),
            path,
            playfield: config.playfield,
            time: SimTime::default(),
            phase: GamePhase::default(),
            level,
            max_waves: max_waves(level),
            wave: 1,
            base_health: config.base_health,
            economy: Economy::new(config.starting_coins),
            selected_tower: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            schedule,
            director: WaveDirector::new(level),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            outcome: None,
            outcome_reported: false,
            aborted: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the mission by one tick and return the resulting snapshot.
    ///
    /// Once the mission is won, lost or aborted, ticks change nothing.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.is_running() {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        let outcome = if self.outcome_reported {
            None
        } else {
            self.outcome_reported = self.outcome.is_some();
            self.outcome
        };
        self.build_snapshot(events, outcome)
    }

    /// Current state, without draining the tick's events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone(), None)
    }

    /// Build a tower of `tower_type` at `position`, paying its cost.
    /// On rejection nothing changes.
    pub fn place_tower(
        &mut self,
        tower_type: TowerType,
        position: Position,
    ) -> Result<TowerId, PlacementError> {
        if !self.is_running() {
            return Err(PlacementError::MissionOver);
        }

        let cost = tower_profile(tower_type).cost;
        self.economy
            .try_spend(cost)
            .map_err(|available| PlacementError::InsufficientCoins {
                tower_type,
                cost,
                available,
            })?;

        let tower = self.registry.spawn_tower(tower_type, position);
        debug!(tower = tower.0, ?tower_type, x = position.x, y = position.y, "tower placed");
        self.events.push(SimEvent::TowerPlaced {
            tower,
            kind: tower_type,
            position,
        });
        Ok(tower)
    }

    /// Build the selected tower type at `position`. Clears the selection on success.
    pub fn place_selected_tower(&mut self, position: Position) -> Result<TowerId, PlacementError> {
        if !self.is_running() {
            return Err(PlacementError::MissionOver);
        }
        let tower_type = self.selected_tower.ok_or(PlacementError::NoTowerSelected)?;
        let tower = self.place_tower(tower_type, position)?;
        self.selected_tower = None;
        Ok(tower)
    }

    /// Record the tower type the player intends to build. Creates no entity.
    pub fn set_selected_tower_type(&mut self, tower_type: Option<TowerType>) {
        if !self.is_running() {
            return;
        }
        self.selected_tower = tower_type;
    }

    /// Stop the mission. Pending wave timers are cancelled and no outcome is reported.
    pub fn abort(&mut self) {
        if !self.is_running() {
            return;
        }
        self.aborted = true;
        self.schedule.cancel_all();
        self.director.halt();
        info!(level = self.level, wave = self.wave, "mission aborted");
    }

    /// Whether ticks still advance the mission.
    pub fn is_running(&self) -> bool {
        !self.aborted && !self.phase.is_terminal()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn max_waves(&self) -> u32 {
        self.max_waves
    }

    pub fn coins(&self) -> u32 {
        self.economy.coins
    }

    pub fn score(&self) -> u64 {
        self.economy.score
    }

    pub fn base_health(&self) -> i32 {
        self.base_health
    }

    pub fn selected_tower(&self) -> Option<TowerType> {
        self.selected_tower
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mission's outcome once it is won or lost.
    pub fn outcome(&self) -> Option<MissionOutcome> {
        self.outcome
    }

    /// Tick at which the next wave timer fires, if one is pending.
    pub fn next_wave_tick(&self) -> Option<u64> {
        self.schedule.next_due()
    }

    /// Read-only access to the entity registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Spawn an enemy outside the wave director (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, kind: EnemyType, at: Position) -> spacetd_core::types::EnemyId {
        self.registry.spawn_enemy(kind, self.level, at)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower {
                position,
                tower_type,
            } => {
                if let Err(err) = self.place_tower(tower_type, position) {
                    warn!(%err, "tower placement rejected");
                }
            }
            PlayerCommand::PlaceSelectedTower { position } => {
                if let Err(err) = self.place_selected_tower(position) {
                    warn!(%err, "tower placement rejected");
                }
            }
            PlayerCommand::SelectTowerType { tower_type } => {
                self.set_selected_tower_type(tower_type);
            }
            PlayerCommand::Abort => self.abort(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;
        let dt = self.time.dt();

        // 1. Enemy movement; arrivals damage the base
        let arrivals = systems::movement::run_enemies(self.registry.world_mut(), &self.path, dt);
        for arrival in arrivals {
            self.base_health -= arrival.damage as i32;
            self.economy.enemies_leaked += 1;
            debug!(
                enemy = arrival.enemy.0,
                damage = arrival.damage,
                base_health = self.base_health,
                "enemy reached base"
            );
            self.events.push(SimEvent::EnemyReachedBase {
                enemy: arrival.enemy,
                damage: arrival.damage,
            });
        }

        // 2. Projectile movement
        systems::movement::run_projectiles(self.registry.world_mut(), dt);

        // 3. Targeting and combat, unless the base already fell
        if self.base_health > 0 {
            for shot in systems::targeting::run(&mut self.registry, tick) {
                debug!(tower = shot.tower.0, target = shot.target.0, "tower fired");
                self.events.push(SimEvent::TowerFired {
                    tower: shot.tower,
                    target: shot.target,
                    projectile: shot.projectile,
                });
            }
            systems::combat::run(&mut self.registry, &mut self.economy, &mut self.events);
        }

        // 4. Cleanup
        let report =
            systems::cleanup::run(&mut self.registry, &self.playfield, &mut self.despawn_buffer);

        // 5. Phase transitions
        let boss_killed = report
            .removed_enemies
            .iter()
            .any(|e| e.kind == EnemyType::Boss && e.status == EnemyStatus::Killed);
        let ctx = MissionContext {
            phase: self.phase,
            base_health: self.base_health,
            enemies_remaining: self.registry.enemy_count(),
            director_idle: self.director.is_idle(),
            boss_level: is_boss_level(self.level),
            boss_killed,
        };
        match systems::game_state::evaluate(&ctx) {
            Transition::None => {}
            Transition::WaveCleared => self.clear_wave(tick),
            Transition::Won => self.finish(MissionResult::Won),
            Transition::Lost => self.finish(MissionResult::Lost),
        }

        if !self.is_running() {
            return;
        }

        // 6. Deferred wave timers, then spawning
        for action in self.schedule.take_due(tick) {
            match action {
                ScheduledAction::StartNextWave => self.on_wave_timer(tick),
            }
            if !self.is_running() {
                return;
            }
        }
        self.director.run(
            &mut self.registry,
            &self.path,
            &mut self.rng,
            tick,
            &mut self.events,
        );
    }

    fn clear_wave(&mut self, tick: u64) {
        info!(wave = self.wave, tick, "wave cleared");
        self.events.push(SimEvent::WaveCleared { wave: self.wave });
        self.phase = GamePhase::Waiting;
        self.wave += 1;
        self.schedule
            .schedule(tick + WAVE_DELAY_TICKS, ScheduledAction::StartNextWave);
    }

    fn on_wave_timer(&mut self, tick: u64) {
        let boss_level = is_boss_level(self.level);
        match systems::game_state::on_wave_timer(self.wave, self.max_waves, boss_level) {
            WaveTimer::Won => self.finish(MissionResult::Won),
            WaveTimer::StartWave => {
                let quota = self.director.begin_wave(self.wave, tick);
                self.phase = GamePhase::Wave;
                info!(wave = self.wave, quota, tick, "wave started");
                self.events.push(SimEvent::WaveStarted {
                    wave: self.wave,
                    quota,
                });
            }
        }
    }

    /// Enter a terminal phase and record the outcome.
    fn finish(&mut self, result: MissionResult) {
        self.phase = match result {
            MissionResult::Won => GamePhase::Won,
            MissionResult::Lost => GamePhase::Lost,
        };
        self.schedule.cancel_all();
        self.director.halt();
        self.events.push(match result {
            MissionResult::Won => SimEvent::MissionWon,
            MissionResult::Lost => SimEvent::MissionLost,
        });
        let outcome = MissionOutcome {
            level: self.level,
            score: self.economy.score,
            result,
        };
        info!(
            level = outcome.level,
            score = outcome.score,
            ?result,
            wave = self.wave,
            "mission over"
        );
        self.outcome = Some(outcome);
    }

    fn build_snapshot(
        &self,
        events: Vec<SimEvent>,
        outcome: Option<MissionOutcome>,
    ) -> GameStateSnapshot {
        let summary = MissionSummary {
            time: self.time,
            phase: self.phase,
            level: self.level,
            wave: self.wave,
            max_waves: self.max_waves,
            base_health: self.base_health,
            selected_tower: self.selected_tower,
        };
        systems::snapshot::build_snapshot(
            self.registry.world(),
            &summary,
            &self.economy,
            events,
            outcome,
        )
    }
}
