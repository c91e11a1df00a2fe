use crate::orientation::CameraOrientation;
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Fixed orthographic extent of the view volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Half the visible height in world units.
    pub half_height: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            half_height: 10.0,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}

impl Viewport {
    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = self.half_height * self.aspect;
        Mat4::orthographic_rh(
            -half_width,
            half_width,
            -self.half_height,
            self.half_height,
            self.near,
            self.far,
        )
    }
}

/// Look-at transform derived from an orientation.
///
/// Holds the view matrix so a batch of points can be projected against the
/// same camera without recomputing the basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    eye: Vec3,
    view: Mat4,
}

impl CameraTransform {
    pub fn new(orientation: &CameraOrientation) -> Self {
        Self {
            eye: orientation.position(),
            view: orientation.view_matrix(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Coordinates on the view plane, in world units (x right, y up).
    ///
    /// Isotropic, so lengths and angles can be compared directly.
    pub fn to_view_plane(&self, point: Vec3) -> Vec2 {
        self.view.transform_point3(point).truncate()
    }

    /// Distance in front of the eye along the viewing direction.
    pub fn depth(&self, point: Vec3) -> f32 {
        -self.view.transform_point3(point).z
    }

    /// Normalised device coordinates in `[-1, 1]` for points inside the view volume.
    pub fn to_screen(&self, point: Vec3, viewport: &Viewport) -> Vec2 {
        (viewport.projection_matrix() * self.view)
            .project_point3(point)
            .truncate()
    }
}

/// Project a world point to screen space for the given orientation.
pub fn project(point: Vec3, orientation: &CameraOrientation, viewport: &Viewport) -> Vec2 {
    CameraTransform::new(orientation).to_screen(point, viewport)
}
