use mindpoint_camera::CameraOrientation;
use mindpoint_common::{Block, BlockKind, GridPosition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reasons a level cannot be loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("level has no blocks")]
    Empty,
    #[error("level has no start block")]
    MissingStart,
    #[error("level has {0} start blocks, expected exactly one")]
    MultipleStarts(usize),
    #[error("level has no goal block")]
    MissingGoal,
    #[error("level has {0} goal blocks, expected exactly one")]
    MultipleGoals(usize),
    #[error("declared start {declared} does not match start block at {block}")]
    StartMismatch {
        declared: GridPosition,
        block: GridPosition,
    },
    #[error("declared goal {declared} does not match goal block at {block}")]
    GoalMismatch {
        declared: GridPosition,
        block: GridPosition,
    },
    #[error("two steppable blocks share position {0}")]
    DuplicatePosition(GridPosition),
    #[error("camera baseline is degenerate (radius {radius}, azimuth {azimuth})")]
    BadCamera { radius: f32, azimuth: f32 },
}

/// A puzzle: its blocks, where the player starts and finishes, and the
/// camera pose it opens with. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    pub start: GridPosition,
    pub goal: GridPosition,
    /// Free-roam pose applied on load. Deliberately not a snapped view.
    #[serde(default)]
    pub camera: CameraOrientation,
    pub blocks: Vec<Block>,
}

impl Level {
    /// Check the structural requirements for a solvable level.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.blocks.is_empty() {
            return Err(LevelError::Empty);
        }

        let azimuth = self.camera.azimuth.radians();
        if !(self.camera.radius.is_finite() && self.camera.radius > 0.0 && azimuth.is_finite()) {
            return Err(LevelError::BadCamera {
                radius: self.camera.radius,
                azimuth,
            });
        }

        let start = self.single_of(BlockKind::Start).map_err(|n| match n {
            0 => LevelError::MissingStart,
            n => LevelError::MultipleStarts(n),
        })?;
        if start.position != self.start {
            return Err(LevelError::StartMismatch {
                declared: self.start,
                block: start.position,
            });
        }

        let goal = self.single_of(BlockKind::Goal).map_err(|n| match n {
            0 => LevelError::MissingGoal,
            n => LevelError::MultipleGoals(n),
        })?;
        if goal.position != self.goal {
            return Err(LevelError::GoalMismatch {
                declared: self.goal,
                block: goal.position,
            });
        }

        let mut seen = BTreeSet::new();
        for block in self.steppable_blocks() {
            if !seen.insert(block.position) {
                return Err(LevelError::DuplicatePosition(block.position));
            }
        }
        Ok(())
    }

    /// The unique block of `kind`, or how many there were if not exactly one.
    fn single_of(&self, kind: BlockKind) -> Result<&Block, usize> {
        let mut found = self.blocks.iter().filter(|b| b.kind == kind);
        let first = found.next();
        match (first, found.count()) {
            (Some(block), 0) => Ok(block),
            (Some(_), rest) => Err(rest + 1),
            (None, _) => Err(0),
        }
    }

    /// Start, goal and platform blocks.
    pub fn steppable_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.kind.is_steppable())
    }

    /// The steppable block occupying `position`, if any.
    pub fn block_at(&self, position: GridPosition) -> Option<&Block> {
        self.steppable_blocks().find(|b| b.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindpoint_common::Face;

    fn p(x: i32, y: i32, z: i32) -> GridPosition {
        GridPosition::new(x, y, z)
    }

    fn corridor() -> Level {
        Level {
            id: 1,
            name: "corridor".into(),
            description: String::new(),
            quote: None,
            start: p(0, 0, 0),
            goal: p(0, 0, -2),
            camera: CameraOrientation::default(),
            blocks: vec![
                Block::new(p(0, 0, 0), BlockKind::Start),
                Block::new(p(0, 0, -1), BlockKind::Platform),
                Block::new(p(0, 0, -2), BlockKind::Goal),
            ],
        }
    }

    #[test]
    fn valid_level_passes() {
        assert_eq!(corridor().validate(), Ok(()));
    }

    #[test]
    fn missing_start_is_rejected() {
        let mut l = corridor();
        l.blocks.remove(0);
        assert_eq!(l.validate(), Err(LevelError::MissingStart));
    }

    #[test]
    fn two_goals_are_rejected() {
        let mut l = corridor();
        l.blocks.push(Block::new(p(5, 0, 0), BlockKind::Goal));
        assert_eq!(l.validate(), Err(LevelError::MultipleGoals(2)));
    }

    #[test]
    fn start_must_match_start_block() {
        let mut l = corridor();
        l.start = p(0, 0, -1);
        assert!(matches!(l.validate(), Err(LevelError::StartMismatch { .. })));
    }

    #[test]
    fn duplicate_steppable_positions_are_rejected() {
        let mut l = corridor();
        l.blocks
            .push(Block::new(p(0, 0, -1), BlockKind::Platform).with_blocked_faces([Face::Top]));
        assert_eq!(l.validate(), Err(LevelError::DuplicatePosition(p(0, 0, -1))));
    }

    #[test]
    fn decoration_may_overlap() {
        let mut l = corridor();
        l.blocks.push(Block::new(p(0, 0, -1), BlockKind::Decoration));
        assert_eq!(l.validate(), Ok(()));
        assert_eq!(l.block_at(p(0, 0, -1)).map(|b| b.kind), Some(BlockKind::Platform));
    }

    #[test]
    fn bad_camera_is_rejected() {
        let mut l = corridor();
        l.camera.radius = 0.0;
        assert!(matches!(l.validate(), Err(LevelError::BadCamera { .. })));
    }

    #[test]
    fn empty_level_is_rejected() {
        let mut l = corridor();
        l.blocks.clear();
        assert_eq!(l.validate(), Err(LevelError::Empty));
    }

    #[test]
    fn json_defaults_camera_baseline() {
        let json = r#"{
            "id": 3, "name": "tiny", "start": [0,0,0], "goal": [1,0,0],
            "blocks": [
                {"position": [0,0,0], "kind": "start"},
                {"position": [1,0,0], "kind": "goal"}
            ]
        }"#;
        let l: Level = serde_json::from_str(json).unwrap();
        assert_eq!(l.camera, CameraOrientation::default());
        assert_eq!(l.validate(), Ok(()));
    }
}
