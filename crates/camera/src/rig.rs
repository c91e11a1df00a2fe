use crate::orientation::{CameraOrientation, SnapTarget, ViewMode};
use mindpoint_common::Azimuth;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Tunables for dragging and snapping the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Radians per pointer pixel.
    pub sensitivity: f32,
    /// Polar clamp applied during a free drag, away from both poles.
    pub drag_polar_margin: f32,
    /// Azimuth snap increment.
    pub snap_step: f32,
    /// Polar angles below this snap to the top view.
    pub top_threshold: f32,
    pub top_polar: f32,
    pub side_polar: f32,
    /// Seconds for an animated snap.
    pub snap_duration: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.008,
            drag_polar_margin: 0.1,
            snap_step: FRAC_PI_2,
            top_threshold: FRAC_PI_4,
            top_polar: 1e-4,
            side_polar: FRAC_PI_2,
            snap_duration: 0.6,
        }
    }
}

/// Orientation and pointer position captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub orientation: CameraOrientation,
    pub pointer: (f32, f32),
}

/// Orbit camera driven by pointer drags and released into canonical snaps.
///
/// Camera motion is presentation state, not level state: the rig knows
/// nothing about resets or animations. Gating and tweening belong to the caller.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub config: CameraConfig,
    orientation: CameraOrientation,
    drag: Option<DragAnchor>,
}

impl CameraRig {
    /// A rig at `orientation` with no drag in progress.
    pub fn new(config: CameraConfig, orientation: CameraOrientation) -> Self {
        Self {
            config,
            orientation,
            drag: None,
        }
    }

    /// Current orientation.
    pub fn orientation(&self) -> &CameraOrientation {
        &self.orientation
    }

    /// Direct write access, used by the tween table.
    pub fn orientation_mut(&mut self) -> &mut CameraOrientation {
        &mut self.orientation
    }

    /// Replace the orientation and drop any drag in progress.
    pub fn reset(&mut self, orientation: CameraOrientation) {
        self.orientation = orientation;
        self.drag = None;
    }

    /// View mode derived from the current polar angle.
    pub fn view_mode(&self) -> ViewMode {
        self.orientation.view_mode(self.config.top_threshold)
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Orientation and pointer recorded when the drag began.
    pub fn drag_anchor(&self) -> Option<&DragAnchor> {
        self.drag.as_ref()
    }

    /// Record the anchor for a new drag, replacing any previous one.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag = Some(DragAnchor {
            orientation: self.orientation,
            pointer: (x, y),
        });
    }

    /// Rotate relative to the anchor. Returns false when no drag is active.
    pub fn update_drag(&mut self, x: f32, y: f32) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let dx = x - anchor.pointer.0;
        let dy = y - anchor.pointer.1;
        let sens = self.config.sensitivity;
        let margin = self.config.drag_polar_margin;

        self.orientation.azimuth =
            Azimuth::new(anchor.orientation.azimuth.radians() - dx * sens);
        let polar = (anchor.orientation.polar() - dy * sens).clamp(margin, PI - margin);
        self.orientation.set_polar(polar);
        true
    }

    /// Finish the drag and report where the camera should snap to.
    ///
    /// Returns `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<SnapTarget> {
        self.drag.take()?;
        Some(self.snap_target())
    }

    /// Nearest quarter-turn azimuth and nearest canonical polar.
    pub fn snap_target(&self) -> SnapTarget {
        let azimuth = self.orientation.azimuth.snapped(self.config.snap_step);
        let mode = if self.orientation.polar() < self.config.top_threshold {
            ViewMode::TopView
        } else {
            ViewMode::SideView
        };
        let polar = match mode {
            ViewMode::TopView => self.config.top_polar,
            ViewMode::SideView => self.config.side_polar,
        };
        SnapTarget {
            azimuth,
            polar,
            mode,
        }
    }

    /// Jump straight to a snap target.
    pub fn apply_snap(&mut self, target: SnapTarget) {
        self.orientation.azimuth = target.azimuth;
        self.orientation.set_polar(target.polar);
        tracing::debug!(
            azimuth = target.azimuth.radians(),
            polar = target.polar,
            mode = %target.mode,
            "camera snapped"
        );
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default(), CameraOrientation::default())
    }
}
