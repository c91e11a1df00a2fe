//! Puzzle kernel: level data, movement resolution, and the move/reset state machine.
//!
//! # Invariants
//! - Every state mutation flows through an explicit `Game` operation and is
//!   recorded in the event log.
//! - At most one move animation is in flight; re-entrant input is a no-op.
//! - Each animated field has at most one owner; starting a tween on a field
//!   replaces whatever was animating it.
//! - Levels are validated before they are loaded and are immutable afterwards.

pub mod anim;
pub mod campaign;
pub mod config;
pub mod event;
pub mod game;
pub mod level;
pub mod resolver;

pub use campaign::{Campaign, CampaignError, CampaignState, LevelSource};
pub use config::{GameConfig, MotionConfig, ResolverConfig, Shake};
pub use event::{AudioCue, AudioSink, GameEvent, StatusSink, dispatch};
pub use game::{Game, MoveOutcome, Phase, PlayerState};
pub use level::{Level, LevelError};
pub use resolver::{MoveRejection, Resolution, resolve_move};
