//! Developer tooling: read-only inspection of a running session.
//!
//! # Invariants
//! - Tools never mutate game state.

pub mod inspector;

pub use inspector::{BlockInfo, Probe, SessionInspector, SessionSummary};
