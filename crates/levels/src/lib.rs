//! Level sources: the built-in campaign and JSON level packs.
//!
//! # Invariants
//! - Every level handed out by a [`LevelPack`] has passed validation.
//! - Packs are read-only once built; order is play order.

pub mod catalog;
pub mod pack;

pub use catalog::builtin;
pub use pack::{LevelPack, LevelSourceError};
