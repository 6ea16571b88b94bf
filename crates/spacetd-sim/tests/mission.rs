use spacetd_sim::core::config::MissionConfig;
use spacetd_sim::core::enums::{GamePhase, MissionResult};
use spacetd_sim::core::events::SimEvent;
use spacetd_sim::core::path::Path;
use spacetd_sim::core::state::GameStateSnapshot;
use spacetd_sim::core::types::Position;
use spacetd_sim::MissionEngine;

/// Tick until the mission ends or `max_ticks` pass. Returns every snapshot.
fn run_mission(engine: &mut MissionEngine, max_ticks: usize) -> Vec<GameStateSnapshot> {
    let mut snapshots = Vec::new();
    for _ in 0..max_ticks {
        let snap = engine.tick();
        let done = snap.phase.is_terminal();
        snapshots.push(snap);
        if done {
            break;
        }
    }
    snapshots
}

// --- Undefended missions ---

#[test]
fn undefended_base_is_lost() {
    let mut engine = MissionEngine::new(MissionConfig::default());
    let snapshots = run_mission(&mut engine, 60_000);
    let last = snapshots.last().unwrap();

    assert_eq!(last.phase, GamePhase::Lost);
    assert_eq!(last.base_health, 0);
    assert_eq!(last.outcome.unwrap().result, MissionResult::Lost);
    assert!(engine.wave() <= engine.max_waves());

    // The outcome is reported on exactly one snapshot.
    let reported = snapshots.iter().filter(|s| s.outcome.is_some()).count();
    assert_eq!(reported, 1);
}

#[test]
fn surviving_every_wave_wins() {
    let path = Path::new(vec![Position::new(0.0, 0.0), Position::new(10.0, 0.0)]).unwrap();
    let mut engine = MissionEngine::with_path(
        MissionConfig {
            seed: 9,
            base_health: 1_000_000,
            ..Default::default()
        },
        path,
    );

    let snapshots = run_mission(&mut engine, 10_000);
    let last = snapshots.last().unwrap();

    assert_eq!(last.phase, GamePhase::Won);
    assert_eq!(last.wave, 7);
    assert_eq!(last.max_waves, 6);
    assert!(last.events.contains(&SimEvent::MissionWon));
    assert_eq!(last.outcome.unwrap().level, 1);

    let cleared: Vec<u32> = snapshots
        .iter()
        .flat_map(|s| &s.events)
        .filter_map(|e| match e {
            SimEvent::WaveCleared { wave } => Some(*wave),
            _ => None,
        })
        .collect();
    assert_eq!(cleared, vec![1, 2, 3, 4, 5, 6]);

    let quotas: Vec<u32> = snapshots
        .iter()
        .flat_map(|s| &s.events)
        .filter_map(|e| match e {
            SimEvent::WaveStarted { quota, .. } => Some(*quota),
            _ => None,
        })
        .collect();
    assert_eq!(quotas, vec![7, 9, 11, 13, 15, 17]);
}

#[test]
fn boss_escape_breaches_default_base() {
    let mut engine = MissionEngine::new(MissionConfig {
        level: 10,
        ..Default::default()
    });

    let snapshots = run_mission(&mut engine, 5_000);
    let last = snapshots.last().unwrap();
    assert_eq!(last.phase, GamePhase::Lost);
    assert_eq!(last.base_health, 0);
    assert!(last
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::EnemyReachedBase { .. })));

    let spawns = snapshots
        .iter()
        .flat_map(|s| &s.events)
        .filter(|e| matches!(e, SimEvent::EnemySpawned { .. }))
        .count();
    assert_eq!(spawns, 1);
}

#[test]
fn boss_keeps_returning_while_base_holds() {
    let mut engine = MissionEngine::new(MissionConfig {
        level: 10,
        base_health: 10_000,
        ..Default::default()
    });

    let snapshots = run_mission(&mut engine, 5_000);
    let last = snapshots.last().unwrap();
    assert!(!last.phase.is_terminal());
    assert!(last.base_health > 0);
    assert!(snapshots.iter().all(|s| s.outcome.is_none()));

    let boss_waves: Vec<u32> = snapshots
        .iter()
        .flat_map(|s| &s.events)
        .filter_map(|e| match e {
            SimEvent::WaveStarted { wave, quota: 1 } => Some(*wave),
            _ => None,
        })
        .collect();
    assert!(boss_waves.len() >= 2);
    assert_eq!(&boss_waves[..2], &[1, 2]);
}
