//! Shared types for the mindpoint puzzle core.
//!
//! # Invariants
//! - Grid positions are integral; visual offsets never leak into them.
//! - Faces are always enumerated in the canonical order
//!   Right, Left, Top, Bottom, Front, Back.
//! - Azimuths are stored unbounded and only normalised through
//!   [`Azimuth::normalized`].

pub mod angle;
pub mod types;

pub use angle::Azimuth;
pub use types::{Block, BlockKind, Direction, Face, GridPosition};
