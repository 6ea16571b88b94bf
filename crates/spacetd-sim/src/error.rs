//! Errors returned by the simulation's inbound operations.
//!
//! A rejected call leaves the mission unchanged.

use thiserror::Error;

use spacetd_core::enums::TowerType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{tower_type:?} tower costs {cost} coins, only {available} available")]
    InsufficientCoins {
        tower_type: TowerType,
        cost: u32,
        available: u32,
    },
    #[error("no tower type selected")]
    NoTowerSelected,
    #[error("mission is over")]
    MissionOver,
}
