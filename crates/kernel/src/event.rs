use crate::resolver::MoveRejection;
use mindpoint_camera::ViewMode;
use mindpoint_common::{Direction, GridPosition};
use serde::{Deserialize, Serialize};

/// Fire-and-forget sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    Move,
    Snap,
    Fail,
    Win,
}

/// A record of every externally visible effect of a [`crate::Game`] operation.
///
/// Collaborators (renderer, audio, status line, campaign) consume these
/// instead of being called from inside the state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new level became active.
    LevelLoaded { id: u32, name: String },
    /// Blocks and player should be (re)built in the scene.
    SceneBuilt { blocks: usize },
    /// Previous blocks and player should be removed from the scene.
    SceneTornDown,
    /// New status line for the UI.
    Status { label: String, mode: ViewMode },
    Audio(AudioCue),
    DragStarted,
    /// A snap was requested toward `mode`.
    Snapped { mode: ViewMode, instant: bool },
    /// An animated snap reached its target.
    SnapSettled,
    MoveStarted {
        from: GridPosition,
        to: GridPosition,
    },
    MoveFinished { at: GridPosition },
    MoveRejected {
        direction: Direction,
        reason: MoveRejection,
    },
    GoalReached { at: GridPosition },
    /// The post-goal delay elapsed; the level is done.
    LevelComplete,
    ResetStarted,
    ResetFinished,
}

/// Sound collaborator.
pub trait AudioSink {
    fn on_move(&mut self);
    fn on_snap(&mut self);
    fn on_fail(&mut self);
    fn on_win(&mut self);
}

/// Status line collaborator. Purely observational.
pub trait StatusSink {
    fn show(&mut self, label: &str, mode: ViewMode);
}

/// Route audio and status events to their collaborators.
pub fn dispatch<A: AudioSink + ?Sized, S: StatusSink + ?Sized>(
    events: &[GameEvent],
    audio: &mut A,
    status: &mut S,
) {
    for event in events {
        match event {
            GameEvent::Audio(AudioCue::Move) => audio.on_move(),
            GameEvent::Audio(AudioCue::Snap) => audio.on_snap(),
            GameEvent::Audio(AudioCue::Fail) => audio.on_fail(),
            GameEvent::Audio(AudioCue::Win) => audio.on_win(),
            GameEvent::Status { label, mode } => status.show(label, *mode),
            _ => {}
        }
    }
}
