//! Mission phase state machine.
//!
//! Pure functions over plain data; the engine gathers the context after
//! cleanup and applies the returned transition.

use spacetd_core::enums::GamePhase;

/// Mission facts relevant to phase transitions, sampled after cleanup.
#[derive(Debug, Clone, Copy)]
pub struct MissionContext {
    pub phase: GamePhase,
    pub base_health: i32,
    pub enemies_remaining: usize,
    pub director_idle: bool,
    pub boss_level: bool,
    /// The boss was removed this tick with zero health.
    pub boss_killed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Wave → Waiting; the wave counter advances and the next wave is scheduled.
    WaveCleared,
    Won,
    Lost,
}

/// Evaluate the phase machine once. Loss has priority over every other outcome.
pub fn evaluate(ctx: &MissionContext) -> Transition {
    if ctx.phase.is_terminal() {
        return Transition::None;
    }
    if ctx.base_health <= 0 {
        return Transition::Lost;
    }

    if ctx.boss_level && ctx.boss_killed {
        return Transition::Won;
    }

    if ctx.phase == GamePhase::Wave && ctx.director_idle && ctx.enemies_remaining == 0 {
        Transition::WaveCleared
    } else {
        Transition::None
    }
}

/// What the pending wave timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveTimer {
    StartWave,
    /// Every wave has been cleared.
    Won,
}

/// Decide whether the next wave starts or the mission is won.
/// The boss level only ends on the boss kill, so an escaped boss comes back.
pub fn on_wave_timer(wave: u32, max_waves: u32, boss_level: bool) -> WaveTimer {
    if !boss_level && wave > max_waves {
        WaveTimer::Won
    } else {
        WaveTimer::StartWave
    }
}
