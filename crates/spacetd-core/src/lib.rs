//! Core types and definitions for the SpaceTD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, stat profiles,
//! the enemy path, and constants. It has no dependency on a runtime
//! or presentation framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod outcome;
pub mod path;
pub mod profiles;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
