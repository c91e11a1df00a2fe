//! Data-driven tuning for the puzzle kernel.
//!
//! Every threshold, duration and feedback amplitude lives here so the
//! resolver and state machine carry no magic numbers. All groups default
//! field-by-field, so a JSON override only needs the keys it changes.

use mindpoint_camera::{CameraConfig, Viewport};
use serde::{Deserialize, Serialize};

/// Thresholds for matching a screen direction to a grid step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum dot product between the input and the best axis on screen.
    pub axis_confidence: f32,
    /// Minimum dot product between the input and a candidate's screen offset.
    pub candidate_alignment: f32,
    /// Allowed deviation from the reference step, as a fraction of it.
    pub step_tolerance: f32,
    /// Screen offsets shorter than this (view units) count as zero.
    pub degenerate_length: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            axis_confidence: 0.5,
            candidate_alignment: 0.95,
            step_tolerance: 0.15,
            degenerate_length: 1e-3,
        }
    }
}

/// A yoyo pull on the camera radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shake {
    /// How far the radius is pulled in.
    pub amplitude: f32,
    /// Seconds per half swing.
    pub duration: f32,
    pub repeats: u32,
}

impl Default for Shake {
    fn default() -> Self {
        Self {
            amplitude: 0.2,
            duration: 0.05,
            repeats: 1,
        }
    }
}

/// Durations and delays for the time-driven parts of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub move_duration: f32,
    /// Delay between reaching the goal and signalling level completion.
    pub goal_delay: f32,
    /// Delay between a reset starting and the player being rebuilt.
    pub reset_delay: f32,
    pub shrink_duration: f32,
    /// Feedback for a rejected move.
    pub bump: Shake,
    /// Feedback for a reset.
    pub reset_shake: Shake,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_duration: 0.35,
            goal_delay: 1.5,
            reset_delay: 1.0,
            shrink_duration: 0.3,
            bump: Shake::default(),
            reset_shake: Shake {
                amplitude: 2.0,
                duration: 0.05,
                repeats: 5,
            },
        }
    }
}

/// Complete tuning for a game session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub camera: CameraConfig,
    pub viewport: Viewport,
    pub resolver: ResolverConfig,
    pub motion: MotionConfig,
}
