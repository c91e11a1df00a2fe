//! Camera model: orbit orientation, drag and snap, projection, visible face.
//!
//! # Invariants
//! - Polar angle never reaches exactly 0 or π; every write path clamps.
//! - Projection is orthographic: screen distances depend on angle, never on depth.
//! - `project` is pure and deterministic for identical inputs.

pub mod orientation;
pub mod projector;
pub mod rig;
pub mod visibility;

pub use orientation::{CameraOrientation, POLAR_EPSILON, SnapTarget, ViewMode};
pub use projector::{CameraTransform, Viewport, project};
pub use rig::{CameraConfig, CameraRig, DragAnchor};
pub use visibility::{is_steppable, visible_face};
