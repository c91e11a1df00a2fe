use crate::orientation::ViewMode;
use mindpoint_common::{Azimuth, Block, Face};

/// The single cube face treated as facing the viewer.
///
/// Top view always sees `Top`. Otherwise the azimuth picks a side: a camera
/// at azimuth 0 sits on +Z and looks at the `Front` face, and each quarter
/// turn moves one face round: Front, Right, Back, Left.
pub fn visible_face(mode: ViewMode, azimuth: Azimuth) -> Face {
    if mode == ViewMode::TopView {
        return Face::Top;
    }
    match azimuth.quadrant() {
        0 => Face::Front,
        1 => Face::Right,
        2 => Face::Back,
        _ => Face::Left,
    }
}

/// Whether the player may stand on `block` while `face` is the visible face.
pub fn is_steppable(block: &Block, face: Face) -> bool {
    block.kind.is_steppable() && !block.is_blocked_from(face)
}
