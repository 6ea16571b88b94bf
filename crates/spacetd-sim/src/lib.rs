//! Simulation engine for SpaceTD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the presentation layer.

pub mod economy;
pub mod engine;
pub mod error;
pub mod registry;
pub mod schedule;
pub mod systems;

pub use engine::MissionEngine;
pub use error::PlacementError;
pub use spacetd_core as core;
