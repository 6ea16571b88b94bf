use crate::commands::PlayerCommand;
use crate::config::{MissionConfig, Playfield};
use crate::constants::*;
use crate::enums::*;
use crate::events::SimEvent;
use crate::path::Path;
use crate::profiles::*;
use crate::state::GameStateSnapshot;
use crate::types::{EnemyId, Position, SimTime, Velocity};

// ---- Difficulty scaling ----

#[test]
fn test_max_waves_by_level() {
    assert_eq!(max_waves(1), 6);
    assert_eq!(max_waves(3), 8);
    assert_eq!(max_waves(9), 14);
    assert_eq!(max_waves(BOSS_LEVEL), 1);
}

#[test]
fn test_wave_quota() {
    assert_eq!(wave_quota(1), 7);
    assert_eq!(wave_quota(2), 9);
    assert_eq!(wave_quota(8), 21);
}

#[test]
fn test_level_one_is_unscaled() {
    for kind in EnemyType::ALL {
        assert_eq!(scaled_enemy_profile(kind, 1), enemy_profile(kind));
    }
}

#[test]
fn test_boss_scaling_at_boss_level() {
    let boss = scaled_enemy_profile(EnemyType::Boss, BOSS_LEVEL);
    assert_eq!(boss.health, 3700);
    assert_eq!(boss.damage, 185);
    assert_eq!(boss.reward, 740);
    assert!((boss.speed - 111.0).abs() < 1e-9);
}

#[test]
fn test_level_three_scaling() {
    let basic = scaled_enemy_profile(EnemyType::Basic, 3);
    assert_eq!(basic.health, 80);
    assert_eq!(basic.reward, 16);
    assert_eq!(basic.damage, 16);
    assert!((basic.speed - 80.0).abs() < 1e-9);

    let heavy = scaled_enemy_profile(EnemyType::Heavy, 3);
    assert_eq!(heavy.health, 240);
}

#[test]
fn test_tower_catalogue() {
    assert_eq!(tower_profile(TowerType::Laser).cost, 50);
    assert_eq!(tower_profile(TowerType::Missile).cost, 100);
    assert_eq!(tower_profile(TowerType::Plasma).cost, 75);
    assert!((tower_profile(TowerType::Missile).fire_rate - 0.5).abs() < 1e-12);
}

// ---- Path ----

#[test]
fn test_path_rejects_single_waypoint() {
    assert!(Path::new(vec![Position::new(0.0, 0.0)]).is_none());
    assert!(Path::new(vec![Position::new(0.0, 0.0), Position::new(1.0, 0.0)]).is_some());
}

#[test]
fn test_default_path_spans_playfield() {
    let playfield = Playfield {
        width: 400.0,
        height: 300.0,
    };
    let path = Path::for_playfield(&playfield);

    let first = path.start();
    let last = path.waypoints()[path.last_index()];
    assert!((first.x + PATH_EDGE_MARGIN).abs() < 1e-9);
    assert!(last.x < playfield.width + PATH_EDGE_MARGIN);
    assert!(last.x >= playfield.width + PATH_EDGE_MARGIN - PATH_WAYPOINT_SPACING);
    assert!(path.waypoints().iter().all(|p| (p.y - 150.0).abs() < 1e-9));
    // -50..450 step 20
    assert_eq!(path.len(), 25);
}

#[test]
fn test_default_path_is_pure() {
    let playfield = Playfield::default();
    assert_eq!(Path::for_playfield(&playfield), Path::for_playfield(&playfield));
}

// ---- Geometry ----

#[test]
fn test_velocity_toward() {
    let v = Velocity::toward(&Position::new(0.0, 0.0), &Position::new(3.0, 4.0), 10.0);
    assert!((v.x - 6.0).abs() < 1e-9);
    assert!((v.y - 8.0).abs() < 1e-9);
    assert!((v.speed() - 10.0).abs() < 1e-9);

    let zero = Velocity::toward(&Position::new(1.0, 1.0), &Position::new(1.0, 1.0), 10.0);
    assert_eq!(zero, Velocity::default());
}

#[test]
fn test_playfield_bounds() {
    let playfield = Playfield::default();
    assert!(playfield.contains_with_margin(0.0, 0.0, 0.0));
    assert!(playfield.contains_with_margin(-40.0, 360.0, 50.0));
    assert!(!playfield.contains_with_margin(-60.0, 360.0, 50.0));
    assert!(!playfield.contains_with_margin(640.0, 771.0, 50.0));
}

#[test]
fn test_sim_time_sixty_ticks_one_second() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance();
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
}

// ---- Serde ----

#[test]
fn test_game_phase_terminal() {
    assert!(GamePhase::Won.is_terminal());
    assert!(GamePhase::Lost.is_terminal());
    assert!(!GamePhase::Waiting.is_terminal());
    assert!(!GamePhase::Wave.is_terminal());
    assert!(!GamePhase::Active.is_terminal());
    assert_eq!(GamePhase::default(), GamePhase::Active);
}

#[test]
fn test_player_command_tagged_json() {
    let cmd = PlayerCommand::PlaceTower {
        position: Position::new(10.0, 20.0),
        tower_type: TowerType::Plasma,
    };
    let json = serde_json::to_value(&cmd).unwrap();
    assert_eq!(json["type"], "PlaceTower");
    assert_eq!(json["tower_type"], "Plasma");

    let back: PlayerCommand = serde_json::from_value(json).unwrap();
    assert_eq!(back, cmd);
}

#[test]
fn test_event_tagged_json() {
    let event = SimEvent::EnemyKilled {
        enemy: EnemyId(7),
        reward: 15,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"EnemyKilled\""), "got {json}");
}

#[test]
fn test_mission_config_partial_json() {
    let config: MissionConfig = serde_json::from_str(r#"{ "level": 4 }"#).unwrap();
    assert_eq!(config.level, 4);
    assert_eq!(config.seed, 42);
    assert_eq!(config.starting_coins, STARTING_COINS);
    assert_eq!(config.base_health, STARTING_BASE_HEALTH);
    assert_eq!(config.playfield, Playfield::default());
}

#[test]
fn test_default_snapshot_serializes() {
    let snap = GameStateSnapshot::default();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
