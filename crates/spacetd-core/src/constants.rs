//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Default playfield width (units).
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 1280.0;

/// Default playfield height (units).
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 720.0;

/// Distance the path extends beyond the left and right playfield edges.
pub const PATH_EDGE_MARGIN: f64 = 50.0;

/// Spacing between consecutive waypoints of the default path.
pub const PATH_WAYPOINT_SPACING: f64 = 20.0;

/// Projectiles further than this outside the playfield are removed.
pub const PROJECTILE_BOUNDS_MARGIN: f64 = 50.0;

// --- Movement ---

/// An enemy within this distance of its next waypoint advances to it.
pub const WAYPOINT_SNAP_TOLERANCE: f64 = 10.0;

/// Projectile speed (units per second).
pub const PROJECTILE_SPEED: f64 = 300.0;

// --- Combat ---

/// A projectile closer than this to a living enemy hits it.
pub const HIT_RADIUS: f64 = 20.0;

/// Score credited per coin of enemy reward.
pub const SCORE_PER_REWARD: u64 = 10;

// --- Mission ---

/// Base health at mission start.
pub const STARTING_BASE_HEALTH: i32 = 100;

/// Coin balance at mission start.
pub const STARTING_COINS: u32 = 150;

/// The terminal mission level, a single boss fight.
pub const BOSS_LEVEL: u32 = 10;

/// Highest level a profile can unlock.
pub const MAX_LEVEL: u32 = 10;

/// Waves on a non-boss level are `BASE_WAVE_COUNT + level`.
pub const BASE_WAVE_COUNT: u32 = 5;

// --- Wave spawning ---

/// Enemies in wave `w` are `BASE_WAVE_QUOTA + w * WAVE_QUOTA_STEP`.
pub const BASE_WAVE_QUOTA: u32 = 5;

/// Additional enemies per wave number.
pub const WAVE_QUOTA_STEP: u32 = 2;

/// Ticks between enemy spawns within a wave (1 s at 60 Hz).
pub const SPAWN_INTERVAL_TICKS: u64 = 60;

/// Delay between a wave clearing and the next one starting (2 s at 60 Hz).
pub const WAVE_DELAY_TICKS: u64 = 120;

/// Per-level increase of the enemy stat multiplier.
pub const LEVEL_SCALING_STEP: f64 = 0.3;
