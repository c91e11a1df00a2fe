use glam::{Mat4, Vec3};
use mindpoint_common::Azimuth;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

/// Hard floor for the polar angle. Anything closer to the poles makes the
/// look-at basis degenerate.
pub const POLAR_EPSILON: f32 = 1e-4;

/// The two canonical, flattened camera alignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// Polar ≈ π/2: depth fully flattened, looking at a side face.
    SideView,
    /// Polar ≈ 0: looking straight down.
    TopView,
}

impl ViewMode {
    /// Classify a polar angle against the top-view threshold.
    pub fn from_polar(polar: f32, top_threshold: f32) -> Self {
        if polar < top_threshold {
            ViewMode::TopView
        } else {
            ViewMode::SideView
        }
    }

    /// Status line shown to the player after a snap.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::SideView => "SIDE VIEW (2D)",
            ViewMode::TopView => "TOP VIEW (2D)",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::SideView => f.write_str("side"),
            ViewMode::TopView => f.write_str("top"),
        }
    }
}

/// Spherical camera orientation around the world origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrientationRecord", into = "OrientationRecord")]
pub struct CameraOrientation {
    pub azimuth: Azimuth,
    polar: f32,
    pub radius: f32,
}

impl CameraOrientation {
    pub fn new(azimuth: f32, polar: f32, radius: f32) -> Self {
        let mut o = Self {
            azimuth: Azimuth::new(azimuth),
            polar: 0.0,
            radius,
        };
        o.set_polar(polar);
        o
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Set the polar angle, clamped into `[POLAR_EPSILON, π - POLAR_EPSILON]`.
    pub fn set_polar(&mut self, polar: f32) {
        self.polar = polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    pub fn view_mode(&self, top_threshold: f32) -> ViewMode {
        ViewMode::from_polar(self.polar, top_threshold)
    }

    /// Eye position: `r·sinφ·sinθ, r·cosφ, r·sinφ·cosθ`.
    pub fn position(&self) -> Vec3 {
        let (sin_t, cos_t) = self.azimuth.radians().sin_cos();
        let (sin_p, cos_p) = self.polar.sin_cos();
        Vec3::new(
            self.radius * sin_p * sin_t,
            self.radius * cos_p,
            self.radius * sin_p * cos_t,
        )
    }

    /// World-to-view transform looking at the origin with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }
}

impl Default for CameraOrientation {
    /// Free-roam inspection pose used when a level loads.
    fn default() -> Self {
        Self::new(PI / 4.0, PI / 2.5, 20.0)
    }
}

/// Wire form of [`CameraOrientation`]; the polar clamp is re-applied on load.
#[derive(Serialize, Deserialize)]
struct OrientationRecord {
    azimuth: f32,
    polar: f32,
    radius: f32,
}

impl From<OrientationRecord> for CameraOrientation {
    fn from(r: OrientationRecord) -> Self {
        Self::new(r.azimuth, r.polar, r.radius)
    }
}

impl From<CameraOrientation> for OrientationRecord {
    fn from(o: CameraOrientation) -> Self {
        Self {
            azimuth: o.azimuth.radians(),
            polar: o.polar,
            radius: o.radius,
        }
    }
}

/// Where a snap lands: a quarter-turn azimuth and one of the canonical polars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub azimuth: Azimuth,
    pub polar: f32,
    pub mode: ViewMode,
}
