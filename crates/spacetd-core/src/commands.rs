//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TowerType;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Build a tower of the given type at a position.
    PlaceTower {
        position: Position,
        tower_type: TowerType,
    },
    /// Build the currently selected tower type at a position.
    PlaceSelectedTower { position: Position },
    /// Record the tower type the player intends to build next.
    SelectTowerType { tower_type: Option<TowerType> },
    /// Stop the mission without an outcome.
    Abort,
}
