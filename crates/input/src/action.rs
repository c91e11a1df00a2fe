use glam::Vec2;
use mindpoint_common::Direction;
use mindpoint_kernel::{Game, MoveOutcome};

/// A high-level action that any input source (keyboard, pointer, script) can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Directional move intent in screen space.
    Press(Direction),
    /// Pointer down at the given pixel position.
    DragStart(Vec2),
    /// Pointer moved while held.
    DragMove(Vec2),
    /// Pointer released.
    DragEnd,
    /// Let time pass, in seconds.
    Wait(f32),
    /// Externally detected paradox: restart from the level start.
    Reset,
}

/// What the game made of an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionResult {
    Move(MoveOutcome),
    /// Whether the drag operation was accepted.
    Drag(bool),
    Waited(f32),
    /// Whether a new reset began.
    Reset(bool),
}

impl Action {
    /// Feed this action to `game`. Waits are ticked in slices of at most `step` seconds.
    pub fn apply(&self, game: &mut Game, step: f32) -> ActionResult {
        match *self {
            Action::Press(direction) => ActionResult::Move(game.press(direction)),
            Action::DragStart(p) => ActionResult::Drag(game.begin_drag(p.x, p.y)),
            Action::DragMove(p) => ActionResult::Drag(game.update_drag(p.x, p.y)),
            Action::DragEnd => ActionResult::Drag(game.end_drag().is_some()),
            Action::Wait(seconds) => {
                wait(game, seconds, step);
                ActionResult::Waited(seconds)
            }
            Action::Reset => ActionResult::Reset(game.trigger_reset()),
        }
    }
}

/// Tick `seconds` as whole `step` slices plus one remainder slice.
///
/// Once nothing is animating or scheduled, the rest of the wait is a
/// single tick: a quiescent game cannot change.
fn wait(game: &mut Game, seconds: f32, step: f32) {
    if step <= 0.0 || seconds <= step {
        game.tick(seconds);
        return;
    }
    let step = f64::from(step);
    let total = f64::from(seconds);
    let slices = (total / step).floor() as u64;
    let mut ticked = 0u64;
    while ticked < slices {
        if game.active_animations() == 0 && game.pending_delays() == 0 {
            break;
        }
        game.tick(step as f32);
        ticked += 1;
    }
    let rest = (total - ticked as f64 * step).max(0.0) as f32;
    if rest > 0.0 {
        game.tick(rest);
    }
}

/// Apply `actions` in order and collect their results.
pub fn replay(game: &mut Game, actions: &[Action], step: f32) -> Vec<ActionResult> {
    let _span = tracing::info_span!("replay", actions = actions.len()).entered();
    actions
        .iter()
        .map(|action| {
            let result = action.apply(game, step);
            tracing::debug!(?action, ?result, "action applied");
            result
        })
        .collect()
}
