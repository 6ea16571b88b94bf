//! Persistent player profile for SpaceTD.
//!
//! Receives mission outcomes from the simulation's driver, tracks the
//! highest unlocked level and the high score, and stores them as JSON.

pub mod profile;
pub mod store;

pub use profile::PlayerProfile;
pub use store::{ProfileError, ProfileStore};
