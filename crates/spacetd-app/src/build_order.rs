//! Scripted tower placement for unattended missions.

use std::collections::VecDeque;

use spacetd_core::commands::PlayerCommand;
use spacetd_core::enums::TowerType;
use spacetd_core::path::Path;
use spacetd_core::profiles::tower_profile;
use spacetd_core::state::GameStateSnapshot;
use spacetd_core::types::Position;

/// Distance from the path at which scripted towers are placed.
const PATH_OFFSET: f64 = 40.0;

/// Fractions of the path length at which towers go, in build order.
const PLACEMENT_FRACTIONS: [f64; 9] = [0.15, 0.25, 0.35, 0.45, 0.2, 0.3, 0.4, 0.5, 0.6];

const TOWER_ROTATION: [TowerType; 3] = [TowerType::Laser, TowerType::Plasma, TowerType::Missile];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildStep {
    pub tower_type: TowerType,
    pub position: Position,
}

/// Towers to buy, in order, as soon as each becomes affordable.
#[derive(Debug, Clone, Default)]
pub struct BuildOrder {
    steps: VecDeque<BuildStep>,
}

impl BuildOrder {
    pub fn new(steps: impl IntoIterator<Item = BuildStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// A default defence along `path`, alternating above and below it.
    pub fn along_path(path: &Path) -> Self {
        let waypoints = path.waypoints();
        let last = waypoints.len().saturating_sub(1) as f64;
        let steps = PLACEMENT_FRACTIONS
            .iter()
            .enumerate()
            .filter_map(|(i, fraction)| {
                let anchor = waypoints.get((last * fraction).round() as usize)?;
                let offset = if i % 2 == 0 { -PATH_OFFSET } else { PATH_OFFSET };
                Some(BuildStep {
                    tower_type: TOWER_ROTATION[i % TOWER_ROTATION.len()],
                    position: Position::new(anchor.x, anchor.y + offset),
                })
            });
        Self::new(steps)
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Commands to issue after `snapshot`: at most one placement per tick,
    /// once the next step is affordable.
    pub fn next_commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if !snapshot.phase.is_terminal() {
            if let Some(step) = self.steps.front() {
                if snapshot.coins >= tower_profile(step.tower_type).cost {
                    let step = *step;
                    self.steps.pop_front();
                    return vec![PlayerCommand::PlaceTower {
                        position: step.position,
                        tower_type: step.tower_type,
                    }];
                }
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacetd_core::config::Playfield;
    use spacetd_core::enums::GamePhase;

    #[test]
    fn along_path_builds_near_the_path() {
        let path = Path::for_playfield(&Playfield::default());
        let order = BuildOrder::along_path(&path);
        assert_eq!(order.remaining(), PLACEMENT_FRACTIONS.len());

        for step in &order.steps {
            assert_eq!((step.position.y - 360.0).abs(), PATH_OFFSET);
        }
        assert_eq!(order.steps[0].tower_type, TowerType::Laser);
        assert_eq!(order.steps[1].tower_type, TowerType::Plasma);
        assert_eq!(order.steps[2].tower_type, TowerType::Missile);
    }

    #[test]
    fn waits_until_affordable() {
        let mut order = BuildOrder::new([BuildStep {
            tower_type: TowerType::Missile,
            position: Position::new(100.0, 100.0),
        }]);
        let mut snapshot = GameStateSnapshot {
            coins: 99,
            ..Default::default()
        };
        assert!(order.next_commands(&snapshot).is_empty());

        snapshot.coins = 100;
        let commands = order.next_commands(&snapshot);
        assert_eq!(
            commands,
            vec![PlayerCommand::PlaceTower {
                position: Position::new(100.0, 100.0),
                tower_type: TowerType::Missile,
            }]
        );
        assert_eq!(order.remaining(), 0);
        assert!(order.next_commands(&snapshot).is_empty());
    }

    #[test]
    fn nothing_after_mission_ends() {
        let mut order = BuildOrder::along_path(&Path::for_playfield(&Playfield::default()));
        let snapshot = GameStateSnapshot {
            phase: GamePhase::Lost,
            coins: 1000,
            ..Default::default()
        };
        assert!(order.next_commands(&snapshot).is_empty());
    }
}
