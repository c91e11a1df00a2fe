//! Input mapping: keyboard, pointer and scripted input produce the same actions.
//!
//! # Invariants
//! - The kernel consumes [`Action`]s, never raw device events.
//! - A script replays exactly the actions a live session would produce.

pub mod action;
pub mod bindings;
pub mod script;

pub use action::{Action, ActionResult, replay};
pub use bindings::{KeyBindings, key_direction};
pub use script::{ScriptError, parse_script};
