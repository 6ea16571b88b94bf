//! ECS systems that operate on the mission world each tick.
//!
//! Systems are free functions over the registry (or `&mut World`). They do
//! not own state; entity state lives in components and mission state in the
//! engine.

pub mod cleanup;
pub mod combat;
pub mod game_state;
pub mod movement;
pub mod snapshot;
pub mod targeting;
pub mod wave_director;
