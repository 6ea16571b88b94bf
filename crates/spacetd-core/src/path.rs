//! The fixed waypoint path enemies follow from entry to base.

use serde::{Deserialize, Serialize};

use crate::config::Playfield;
use crate::constants::{PATH_EDGE_MARGIN, PATH_WAYPOINT_SPACING};
use crate::types::Position;

/// Ordered, immutable waypoint sequence with at least two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Path {
    /// Build a path from explicit waypoints. Returns `None` for fewer than two.
    pub fn new(waypoints: Vec<Position>) -> Option<Self> {
        (waypoints.len() >= 2).then_some(Self { waypoints })
    }

    /// The default path for a playfield: a horizontal line across the
    /// vertical middle, from just off the left edge to just off the right
    /// edge, with evenly spaced waypoints.
    ///
    /// Pure function of the playfield dimensions.
    pub fn for_playfield(playfield: &Playfield) -> Self {
        let y = playfield.height / 2.0;
        let end = playfield.width + PATH_EDGE_MARGIN;
        let mut waypoints = Vec::new();
        let mut x = -PATH_EDGE_MARGIN;
        while x < end {
            waypoints.push(Position::new(x, y));
            x += PATH_WAYPOINT_SPACING;
        }
        // Degenerate playfields still get a traversable segment.
        if waypoints.len() < 2 {
            waypoints = vec![Position::new(-PATH_EDGE_MARGIN, y), Position::new(end, y)];
        }
        Self { waypoints }
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; a path has at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the final waypoint (the base).
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Entry point where enemies spawn.
    pub fn start(&self) -> Position {
        self.waypoints[0]
    }
}
