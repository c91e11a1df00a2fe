//! Screen-direction to grid-step resolution.
//!
//! Two phases. First pick the horizontal world axis whose on-screen image
//! best matches the input, and take its on-screen length as the reference
//! step. Then accept any steppable block whose screen offset from the
//! player points the same way and is one reference step long, whatever
//! its actual 3D position. That second phase is where the illusions live.
//!
//! All comparisons are in view-plane units and relative to the reference
//! step, so nothing depends on window size or zoom.

use crate::config::ResolverConfig;
use glam::IVec3;
use mindpoint_camera::{
    CameraConfig, CameraOrientation, CameraTransform, ViewMode, is_steppable, visible_face,
};
use mindpoint_common::{Block, Direction, GridPosition};
use serde::{Deserialize, Serialize};

/// The horizontal grid directions an input can map to. Height changes only
/// ever emerge from which block sits at the matched screen position.
pub const HORIZONTAL_AXES: [IVec3; 4] = [IVec3::NEG_Z, IVec3::Z, IVec3::NEG_X, IVec3::X];

/// Why a directional input did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum MoveRejection {
    #[error("every horizontal axis collapses to a point on screen")]
    DegenerateView,
    #[error("input matches no world axis (best alignment {best_alignment:.2})")]
    NoMatchingAxis { best_alignment: f32 },
    #[error("no steppable block one step along {axis}")]
    NoCandidate { axis: IVec3 },
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub target: Block,
    /// World axis the input was matched to.
    pub axis: IVec3,
    /// Screen length of one grid step along `axis`.
    pub reference_step: f32,
}

/// Resolve `direction` to the block the player would step onto.
pub fn resolve_move(
    direction: Direction,
    player: GridPosition,
    orientation: &CameraOrientation,
    blocks: &[Block],
    camera: &CameraConfig,
    tuning: &ResolverConfig,
) -> Result<Resolution, MoveRejection> {
    let transform = CameraTransform::new(orientation);
    let input = direction.screen_vector();
    let origin = player.to_world();
    let here = transform.to_view_plane(origin);

    // Phase one: best-matching axis and its reference step.
    let mut best: Option<(IVec3, f32, f32)> = None;
    for axis in HORIZONTAL_AXES {
        let delta = transform.to_view_plane(origin + axis.as_vec3()) - here;
        let length = delta.length();
        if length < tuning.degenerate_length {
            continue;
        }
        let alignment = (delta / length).dot(input);
        if best.is_none_or(|(_, a, _)| alignment > a) {
            best = Some((axis, alignment, length));
        }
    }
    let (axis, alignment, reference_step) = best.ok_or(MoveRejection::DegenerateView)?;
    if alignment < tuning.axis_confidence {
        tracing::debug!(%direction, alignment, "input matches no axis");
        return Err(MoveRejection::NoMatchingAxis {
            best_alignment: alignment,
        });
    }

    // Phase two: blocks that sit one reference step away on screen.
    let mode = orientation.view_mode(camera.top_threshold);
    let face = visible_face(mode, orientation.azimuth);
    let tolerance = tuning.step_tolerance * reference_step;
    let eye = transform.eye();

    let candidates: Vec<&Block> = blocks
        .iter()
        .filter(|b| b.position != player)
        .filter(|b| is_steppable(b, face))
        .filter(|b| {
            let offset = transform.to_view_plane(b.position.to_world()) - here;
            let length = offset.length();
            length >= tuning.degenerate_length
                && (offset / length).dot(input) >= tuning.candidate_alignment
                && (length - reference_step).abs() <= tolerance
        })
        .collect();

    tracing::debug!(
        %direction,
        ?axis,
        reference_step,
        %face,
        candidates = candidates.len(),
        "screen-space candidates"
    );

    let chosen = match mode {
        // Straight down, stacked blocks overlap; the highest one is the surface.
        ViewMode::TopView => candidates.into_iter().max_by(|a, b| {
            a.position
                .y
                .cmp(&b.position.y)
                .then_with(|| eye_distance(b, eye).total_cmp(&eye_distance(a, eye)))
        }),
        ViewMode::SideView => candidates
            .into_iter()
            .min_by(|a, b| eye_distance(a, eye).total_cmp(&eye_distance(b, eye))),
    };

    chosen
        .map(|target| Resolution {
            target: target.clone(),
            axis,
            reference_step,
        })
        .ok_or(MoveRejection::NoCandidate { axis })
}

fn eye_distance(block: &Block, eye: glam::Vec3) -> f32 {
    block.position.to_world().distance_squared(eye)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindpoint_camera::POLAR_EPSILON;
    use mindpoint_common::{BlockKind, Face};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn p(x: i32, y: i32, z: i32) -> GridPosition {
        GridPosition::new(x, y, z)
    }

    fn platform(x: i32, y: i32, z: i32) -> Block {
        Block::new(p(x, y, z), BlockKind::Platform)
    }

    fn side(azimuth: f32) -> CameraOrientation {
        CameraOrientation::new(azimuth, FRAC_PI_2, 20.0)
    }

    fn top(azimuth: f32) -> CameraOrientation {
        CameraOrientation::new(azimuth, POLAR_EPSILON, 20.0)
    }

    fn resolve(
        direction: Direction,
        player: GridPosition,
        orientation: CameraOrientation,
        blocks: &[Block],
    ) -> Result<Resolution, MoveRejection> {
        resolve_move(
            direction,
            player,
            &orientation,
            blocks,
            &CameraConfig::default(),
            &ResolverConfig::default(),
        )
    }

    #[test]
    fn steps_along_screen_right_in_side_view() {
        let blocks = [
            Block::new(p(0, 0, 0), BlockKind::Start),
            platform(1, 0, 0),
        ];
        let r = resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).unwrap();
        assert_eq!(r.target.position, p(1, 0, 0));
        assert_eq!(r.axis, IVec3::X);
        assert!((r.reference_step - 1.0).abs() < 1e-4);
    }

    #[test]
    fn depth_axis_cannot_be_walked_head_on() {
        // Camera on +Z: the only blocks lie along Z, which is pure depth.
        let blocks = [Block::new(p(0, 0, 0), BlockKind::Start), platform(0, 0, -1)];
        for d in Direction::ALL {
            assert!(resolve(d, p(0, 0, 0), side(0.0), &blocks).is_err());
        }
    }

    #[test]
    fn up_in_side_view_matches_no_axis() {
        let blocks = [platform(0, 1, 0)];
        let err = resolve(Direction::Up, p(0, 0, 0), side(0.0), &blocks).unwrap_err();
        assert!(matches!(err, MoveRejection::NoMatchingAxis { .. }));
    }

    #[test]
    fn never_selects_decoration_or_current_block() {
        let blocks = [
            Block::new(p(0, 0, 0), BlockKind::Start),
            Block::new(p(1, 0, 0), BlockKind::Decoration),
        ];
        let err = resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).unwrap_err();
        assert_eq!(err, MoveRejection::NoCandidate { axis: IVec3::X });
    }

    #[test]
    fn never_selects_block_blocked_on_visible_face() {
        let blocks = [platform(1, 0, 0).with_blocked_faces([Face::Front])];
        assert!(resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).is_err());
        // From the back the same block is fine; screen right is now -X.
        let blocks = [platform(-1, 0, 0).with_blocked_faces([Face::Front])];
        let r = resolve(Direction::Right, p(0, 0, 0), side(PI), &blocks).unwrap();
        assert_eq!(r.target.position, p(-1, 0, 0));
    }

    #[test]
    fn top_blocked_block_is_fine_from_the_side_but_not_from_above() {
        let blocks = [
            Block::new(p(0, 0, 0), BlockKind::Start),
            platform(1, 0, 0).with_blocked_faces([Face::Top]),
        ];
        assert!(resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).is_ok());
        assert!(resolve(Direction::Right, p(0, 0, 0), top(0.0), &blocks).is_err());
    }

    #[test]
    fn gap_filler_only_aligns_at_one_azimuth() {
        let blocks = [
            platform(0, 0, -1),
            platform(2, 0, -2),
            platform(0, 0, -3),
        ];
        // Camera on +X flattens X: (2,0,-2) sits right where (0,0,-2) would.
        let r = resolve(Direction::Right, p(0, 0, -1), side(FRAC_PI_2), &blocks).unwrap();
        assert_eq!(r.target.position, p(2, 0, -2));
        let r = resolve(Direction::Right, p(2, 0, -2), side(FRAC_PI_2), &blocks).unwrap();
        assert_eq!(r.target.position, p(0, 0, -3));

        for orientation in [side(0.0), side(PI), top(0.0), top(FRAC_PI_2)] {
            for d in Direction::ALL {
                assert!(
                    resolve(d, p(0, 0, -1), orientation, &blocks).is_err(),
                    "{d} should fail at azimuth {}",
                    orientation.azimuth.radians()
                );
            }
        }
    }

    #[test]
    fn single_candidate_selected_regardless_of_depth() {
        // Far behind in depth, but one step on screen.
        let blocks = [platform(1, 0, -7)];
        let r = resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).unwrap();
        assert_eq!(r.target.position, p(1, 0, -7));
    }

    #[test]
    fn side_view_tie_prefers_block_nearer_camera() {
        let blocks = [platform(1, 0, -3), platform(1, 0, 0), platform(1, 0, 2)];
        let r = resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).unwrap();
        assert_eq!(r.target.position, p(1, 0, 2));
    }

    #[test]
    fn top_view_tie_prefers_highest_block() {
        let blocks = [platform(1, 0, 0), platform(1, 2, 0), platform(1, -3, 0)];
        let r = resolve(Direction::Right, p(0, 0, 0), top(0.0), &blocks).unwrap();
        assert_eq!(r.target.position, p(1, 2, 0));
    }

    #[test]
    fn top_view_crosses_heights() {
        let blocks = [platform(1, 0, 0), platform(2, 2, 0)];
        let r = resolve(Direction::Right, p(1, 0, 0), top(0.0), &blocks).unwrap();
        assert_eq!(r.target.position, p(2, 2, 0));
        // Side view sees the height difference and refuses.
        assert!(resolve(Direction::Right, p(1, 0, 0), side(0.0), &blocks).is_err());
    }

    #[test]
    fn two_step_offset_is_out_of_tolerance() {
        let blocks = [platform(2, 0, 0)];
        let err = resolve(Direction::Right, p(0, 0, 0), side(0.0), &blocks).unwrap_err();
        assert_eq!(err, MoveRejection::NoCandidate { axis: IVec3::X });
    }

    #[test]
    fn reference_step_scales_with_oblique_views() {
        // Halfway to the top view, Z steps shrink on screen by cos(φ) but
        // a one-step neighbour still matches.
        let o = CameraOrientation::new(0.0, PI / 3.0, 20.0);
        let blocks = [platform(0, 0, -1)];
        let r = resolve(Direction::Up, p(0, 0, 0), o, &blocks).unwrap();
        assert_eq!(r.target.position, p(0, 0, -1));
        assert!((r.reference_step - 0.5).abs() < 1e-3);
    }
}
