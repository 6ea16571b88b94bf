//! Headless SpaceTD driver.
//!
//! Runs a mission on its own thread at a fixed tick rate, forwards player
//! commands to it over a channel, and exposes the latest snapshot for
//! polling.

pub mod build_order;
pub mod config;
pub mod game_loop;
pub mod state;

pub use spacetd_core as core;
