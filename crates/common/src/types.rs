use glam::{IVec3, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Integer cell coordinate: the authoritative location of blocks and the player.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell centre in world space.
    pub fn to_world(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    pub fn offset(self, delta: IVec3) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }
}

impl From<[i32; 3]> for GridPosition {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<GridPosition> for [i32; 3] {
    fn from(p: GridPosition) -> Self {
        [p.x, p.y, p.z]
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six axis-aligned cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
}

impl Face {
    /// Canonical enumeration order, shared with the renderer's material slots.
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Outward normal of the face.
    pub fn normal(self) -> IVec3 {
        match self {
            Face::Right => IVec3::X,
            Face::Left => IVec3::NEG_X,
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Face::Right => "right",
            Face::Left => "left",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a block is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Start,
    Goal,
    Platform,
    /// Purely visual distractor. Never steppable, never occludes.
    #[serde(alias = "deco")]
    Decoration,
}

impl BlockKind {
    pub fn is_steppable(self) -> bool {
        !matches!(self, BlockKind::Decoration)
    }
}

/// A single cube of a level. Immutable once the level is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub position: GridPosition,
    pub kind: BlockKind,
    /// Faces that act as a wall whenever they are the visible face.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub blocked_faces: BTreeSet<Face>,
}

impl Block {
    pub fn new(position: GridPosition, kind: BlockKind) -> Self {
        Self {
            position,
            kind,
            blocked_faces: BTreeSet::new(),
        }
    }

    pub fn with_blocked_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.blocked_faces.extend(faces);
        self
    }

    pub fn is_blocked_from(&self, face: Face) -> bool {
        self.blocked_faces.contains(&face)
    }
}

/// Discrete screen-space input direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Canonical screen vector, +Y up.
    pub fn screen_vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.pad(s)
    }
}
