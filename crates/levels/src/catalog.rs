//! The built-in campaign.

use mindpoint_camera::CameraOrientation;
use mindpoint_common::Face::{Back, Bottom, Front, Left, Right, Top};
use mindpoint_common::{Block, BlockKind, Face, GridPosition};
use mindpoint_kernel::Level;

/// Blocked from every side: a visual filler that can never be stood on.
const SEALED: [Face; 6] = Face::ALL;

fn at(kind: BlockKind, [x, y, z]: [i32; 3]) -> Block {
    Block::new(GridPosition::new(x, y, z), kind)
}

fn start(p: [i32; 3]) -> Block {
    at(BlockKind::Start, p)
}

fn goal(p: [i32; 3]) -> Block {
    at(BlockKind::Goal, p)
}

fn platform(p: [i32; 3]) -> Block {
    at(BlockKind::Platform, p)
}

fn deco(p: [i32; 3]) -> Block {
    at(BlockKind::Decoration, p)
}

fn guarded<const N: usize>(p: [i32; 3], faces: [Face; N]) -> Block {
    platform(p).with_blocked_faces(faces)
}

fn level(
    id: u32,
    name: &str,
    description: &str,
    quote: &str,
    blocks: Vec<Block>,
) -> Level {
    let find = |kind: BlockKind| {
        blocks
            .iter()
            .find(|b| b.kind == kind)
            .map(|b| b.position)
            .unwrap_or_default()
    };
    let (start, goal) = (find(BlockKind::Start), find(BlockKind::Goal));
    Level {
        id,
        name: name.to_string(),
        description: description.to_string(),
        quote: Some(quote.to_string()),
        start,
        goal,
        camera: CameraOrientation::default(),
        blocks,
    }
}

/// The ten built-in puzzles, in play order.
pub fn builtin() -> Vec<Level> {
    vec![
        level(
            1,
            "First Steps",
            "Rotate until the gap disappears.",
            "A journey of a thousand miles begins with a single step.",
            vec![
                start([0, 0, 0]),
                platform([0, 0, -1]),
                platform([2, 0, -2]),
                platform([0, 0, -3]),
                goal([0, 0, -4]),
                deco([3, -3, 0]),
                deco([-3, 2, -3]),
                deco([2, 3, -6]),
                deco([-2, -2, -1]),
            ],
        ),
        level(
            2,
            "Bird's Eye View",
            "Switch to Top View to walk across heights.",
            "Change your thoughts and you change your world.",
            vec![
                start([0, 0, 0]),
                platform([1, 0, 0]),
                platform([2, 2, 0]),
                goal([3, 4, 0]),
                deco([4, -1, 3]),
                deco([4, -1, -3]),
                deco([0, -4, 0]),
                deco([5, 1, 0]),
                deco([1, 6, 3]),
            ],
        ),
        level(
            3,
            "The Invisible Staircase",
            "In Top View, height is meaningless.",
            "What is essential is invisible to the eye.",
            vec![
                start([0, 0, 0]),
                platform([1, 0, 0]),
                platform([1, 2, 1]),
                platform([0, 2, 1]),
                platform([0, 4, 2]),
                goal([1, 6, 2]),
                deco([3, -1, 3]),
                deco([-4, 3, -1]),
                deco([2, 7, -1]),
                deco([4, 2, 4]),
                deco([0, -3, -3]),
            ],
        ),
        level(
            4,
            "The Occlusion Bridge",
            "Use the floating pillar to bridge the gap.",
            "We build too many walls and not enough bridges.",
            vec![
                start([-2, 0, 0]),
                platform([-1, 0, 0]),
                platform([0, 3, 0]),
                platform([1, 0, 0]),
                goal([2, 0, 0]),
                deco([0, -4, 3]),
                deco([0, 5, -3]),
                deco([-3, 2, 3]),
                deco([3, 5, -2]),
                deco([0, 8, 0]),
            ],
        ),
        level(
            5,
            "Urban Canyon",
            "Staggered steps. Keep offsets to exactly 1 unit.",
            "Order is the sanity of the mind, the health of the body.",
            vec![
                start([0, 0, 0]),
                platform([1, 0, -2]),
                platform([1, 2, -3]),
                platform([0, 2, -3]),
                platform([-1, 4, -3]),
                goal([-1, 4, -4]),
                deco([2, 0, 0]),
                deco([-2, 4, -2]),
            ],
        ),
        level(
            6,
            "The Phantom Helix",
            "An expanding spiral. No stacking allowed.",
            "The spiral is the spiritualized circle.",
            vec![
                start([0, 0, 0]),
                platform([1, 0, -2]),
                platform([1, 2, -3]),
                platform([2, 2, -5]),
                goal([3, 4, -5]),
                deco([-2, 2, 0]),
                deco([5, 0, -5]),
            ],
        ),
        level(
            7,
            "Disjointed Reality",
            "Floating islands with precise 1-unit visual gaps.",
            "Reality is merely an illusion, albeit a very persistent one.",
            vec![
                start([-2, 0, 2]),
                platform([-1, 0, 2]),
                platform([0, 0, 0]),
                platform([1, 2, 0]),
                platform([2, 2, -2]),
                goal([1, 4, -2]),
                deco([0, 4, 2]),
                deco([-2, 2, -2]),
            ],
        ),
        level(
            8,
            "The Void Steps",
            "Precise adjacent jumps.",
            "In the middle of difficulty lies opportunity.",
            vec![
                start([0, 0, 0]),
                platform([-1, 0, -2]),
                platform([0, 2, -2]),
                platform([-1, 2, -5]),
                goal([0, 5, -5]),
                deco([2, 0, -2]),
                deco([-3, 4, 0]),
            ],
        ),
        level(
            9,
            "Perspective Lock",
            "A straight corridor. Every step forces a specific camera angle.",
            "The only thing you can change is your perspective.",
            vec![
                start([-4, 0, 0]),
                // top only
                guarded([-3, 0, 0], [Front, Back, Right, Left]),
                // front only
                guarded([-2, 0, 0], [Top, Back, Left]),
                // back only
                guarded([-1, 0, 0], [Top, Front, Right]),
                guarded([0, 0, 0], [Front, Back, Right, Left]),
                guarded([1, 0, 0], [Top, Back]),
                guarded([2, 0, 0], [Top, Front]),
                guarded([3, 0, 0], [Front, Back]),
                goal([4, 0, 0]),
                deco([-3, 0, 2]),
                deco([-1, 2, 0]),
                deco([1, 0, -2]),
                deco([3, 2, 0]),
            ],
        ),
        level(
            10,
            "The Zig-Zag Path",
            "Follow the Green Line. Rotate: Front -> Right -> Back -> Left -> Front -> Right.",
            "The path is not a straight line; it's a spiral.",
            vec![
                // z = 3
                start([-3, 0, 3]),
                guarded([-1, 0, 3], [Back, Left, Top, Bottom]),
                guarded([1, 0, 3], SEALED),
                guarded([3, 0, 3], SEALED),
                // z = 2
                guarded([-2, 0, 2], [Back, Left, Right, Top, Bottom]),
                guarded([0, 0, 2], [Front, Back, Left, Top, Bottom]),
                guarded([2, 0, 2], SEALED),
                // z = 1
                guarded([-3, 0, 1], SEALED),
                guarded([-1, 0, 1], [Front, Left, Top, Bottom]),
                guarded([1, 0, 1], [Front, Right, Top, Bottom]),
                guarded([3, 0, 1], SEALED),
                // z = 0
                guarded([-2, 0, 0], SEALED),
                guarded([0, 0, 0], [Front, Left, Right, Top, Bottom]),
                guarded([2, 0, 0], [Front, Back, Right, Top, Bottom]),
                // z = -1
                guarded([-3, 0, -1], SEALED),
                guarded([-1, 0, -1], SEALED),
                guarded([1, 0, -1], [Back, Right, Top, Bottom]),
                guarded([3, 0, -1], [Back, Left, Top, Bottom]),
                // z = -2
                guarded([-2, 0, -2], SEALED),
                guarded([0, 0, -2], SEALED),
                guarded([2, 0, -2], [Back, Left, Top, Bottom]),
                // z = -3
                guarded([-3, 0, -3], SEALED),
                guarded([-1, 0, -3], SEALED),
                guarded([1, 0, -3], SEALED),
                goal([3, 0, -3]),
            ],
        ),
    ]
}
