//! The level / move / reset state machine.
//!
//! [`Game`] is single-threaded and cooperative: input operations and
//! [`Game::tick`] are called serially by the host. Everything time-based
//! (snaps, moves, shakes, the goal and reset delays) is driven by `tick`.

use crate::anim::{Animator, Cue, Delays, Easing, Field, Sample, Trigger, Tween, Value};
use crate::config::{GameConfig, Shake};
use crate::event::{AudioCue, GameEvent};
use crate::level::{Level, LevelError};
use crate::resolver::{MoveRejection, resolve_move};
use glam::Vec3;
use mindpoint_camera::{CameraOrientation, CameraRig, SnapTarget, ViewMode, visible_face};
use mindpoint_common::{Azimuth, Block, BlockKind, Direction, Face, GridPosition};
use serde::{Deserialize, Serialize};

pub const STATUS_PROMPT: &str = "Drag & Release to Align Perspective";
pub const STATUS_DRAGGING: &str = "3D Mode Active...";
pub const STATUS_GOAL: &str = "COSMIC ALIGNMENT REACHED";
pub const STATUS_RESET: &str = "PARADOX DETECTED - RESETTING";

/// Coarse state, derived from the player and camera flags.
///
/// Snapping is not a phase of its own: it is `Idle` with camera tweens in
/// flight (see [`Game::is_snapping`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Dragging,
    Moving,
    Resetting,
}

/// Authoritative player state plus its presentation values.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Grid cell the player stands on. Only updated when a move completes.
    pub position: GridPosition,
    pub moving: bool,
    pub resetting: bool,
    /// Interpolated world position while a move animates.
    pub visual_position: Vec3,
    pub scale: f32,
}

impl PlayerState {
    fn at(position: GridPosition) -> Self {
        Self {
            position,
            moving: false,
            resetting: false,
            visual_position: position.to_world(),
            scale: 1.0,
        }
    }
}

/// Result of a directional input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Input arrived while moving, dragging, resetting or after the goal.
    Ignored,
    /// Nothing to step onto from this angle; feedback was played.
    Rejected(MoveRejection),
    Started { target: GridPosition },
}

/// A running puzzle session on one level.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    level: Level,
    rig: CameraRig,
    player: PlayerState,
    pending_target: Option<Block>,
    goal_reached: bool,
    animator: Animator,
    delays: Delays,
    events: Vec<GameEvent>,
}

impl Game {
    /// Start a session on `level`. Fails if the level does not validate.
    pub fn new(config: GameConfig, level: Level) -> Result<Self, LevelError> {
        level.validate()?;
        let mut game = Self {
            config,
            rig: CameraRig::new(config.camera, level.camera),
            player: PlayerState::at(level.start),
            level,
            pending_target: None,
            goal_reached: false,
            animator: Animator::new(),
            delays: Delays::default(),
            events: Vec::new(),
        };
        game.enter_level(false);
        Ok(game)
    }

    /// Replace the active level. On error the current session is untouched.
    pub fn load_level(&mut self, level: Level) -> Result<(), LevelError> {
        level.validate()?;
        self.level = level;
        self.enter_level(true);
        Ok(())
    }

    fn enter_level(&mut self, teardown: bool) {
        let _span = tracing::info_span!("load_level", id = self.level.id).entered();
        if teardown {
            self.events.push(GameEvent::SceneTornDown);
        }
        self.animator.cancel_all();
        self.delays.clear();
        self.pending_target = None;
        self.goal_reached = false;
        self.rig.reset(self.level.camera);
        self.player = PlayerState::at(self.level.start);

        self.events.push(GameEvent::LevelLoaded {
            id: self.level.id,
            name: self.level.name.clone(),
        });
        self.events.push(GameEvent::SceneBuilt {
            blocks: self.level.blocks.len(),
        });
        self.status(STATUS_PROMPT);
        tracing::info!(
            id = self.level.id,
            name = %self.level.name,
            blocks = self.level.blocks.len(),
            start = %self.level.start,
            "level loaded"
        );
    }

    // ---------------------------------------------------------------
    // Camera
    // ---------------------------------------------------------------

    /// Start orbiting. No-op while resetting; cancels an in-flight snap.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> bool {
        if self.player.resetting {
            return false;
        }
        self.animator.cancel(Field::CameraAzimuth);
        self.animator.cancel(Field::CameraPolar);
        self.rig.begin_drag(x, y);
        self.events.push(GameEvent::DragStarted);
        self.status(STATUS_DRAGGING);
        true
    }

    /// Rotate relative to the drag anchor. `false` if no drag is active.
    pub fn update_drag(&mut self, x: f32, y: f32) -> bool {
        if self.player.resetting {
            return false;
        }
        self.rig.update_drag(x, y)
    }

    /// Release the drag into an animated snap. `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<SnapTarget> {
        self.rig.end_drag()?;
        let target = self.snap(false);
        self.events.push(GameEvent::Audio(AudioCue::Snap));
        Some(target)
    }

    /// Align the camera to the nearest canonical view. Ends any active drag
    /// first so the snap tweens are the only writers of the orientation.
    pub fn snap(&mut self, instant: bool) -> SnapTarget {
        self.rig.end_drag();
        let target = self.rig.snap_target();
        if instant {
            self.animator.cancel(Field::CameraAzimuth);
            self.animator.cancel(Field::CameraPolar);
            self.rig.apply_snap(target);
        } else {
            let o = *self.rig.orientation();
            let cam = &self.config.camera;
            let easing = match target.mode {
                ViewMode::TopView => Easing::Power4Out,
                ViewMode::SideView => Easing::BackOut(1.7),
            };
            self.animator.start(
                Field::CameraAzimuth,
                Tween::scalar(
                    o.azimuth.radians(),
                    target.azimuth.radians(),
                    cam.snap_duration,
                    easing,
                )
                .with_cue(Cue::SnapSettled),
            );
            self.animator.start(
                Field::CameraPolar,
                Tween::scalar(o.polar(), target.polar, cam.snap_duration, easing),
            );
        }
        self.events.push(GameEvent::Snapped {
            mode: target.mode,
            instant,
        });
        self.events.push(GameEvent::Status {
            label: target.mode.label().to_string(),
            mode: target.mode,
        });
        tracing::info!(mode = %target.mode, azimuth = target.azimuth.radians(), instant, "snap");
        target
    }

    // ---------------------------------------------------------------
    // Movement
    // ---------------------------------------------------------------

    /// Directional input. Re-entrant input is ignored, not an error.
    pub fn press(&mut self, direction: Direction) -> MoveOutcome {
        if self.player.moving
            || self.player.resetting
            || self.rig.is_dragging()
            || self.goal_reached
        {
            tracing::debug!(%direction, phase = ?self.phase(), "input ignored");
            return MoveOutcome::Ignored;
        }

        let _span = tracing::info_span!("resolve_move", %direction).entered();
        let resolved = resolve_move(
            direction,
            self.player.position,
            self.rig.orientation(),
            &self.level.blocks,
            &self.config.camera,
            &self.config.resolver,
        );

        match resolved {
            Ok(resolution) => {
                let target = resolution.target;
                let to = target.position;
                self.events.push(GameEvent::MoveStarted {
                    from: self.player.position,
                    to,
                });
                self.animator.start(
                    Field::PlayerPosition,
                    Tween::new(
                        Value::Vector(self.player.visual_position),
                        Value::Vector(to.to_world()),
                        self.config.motion.move_duration,
                        Easing::Power1InOut,
                    )
                    .with_cue(Cue::MoveFinished),
                );
                self.player.moving = true;
                self.pending_target = Some(target);
                tracing::info!(from = %self.player.position, %to, "move started");
                MoveOutcome::Started { target: to }
            }
            Err(reason) => {
                tracing::info!(%reason, "move rejected");
                self.events.push(GameEvent::MoveRejected { direction, reason });
                self.events.push(GameEvent::Audio(AudioCue::Fail));
                self.shake(self.config.motion.bump);
                MoveOutcome::Rejected(reason)
            }
        }
    }

    fn finish_move(&mut self) {
        self.player.moving = false;
        let Some(target) = self.pending_target.take() else {
            return;
        };
        self.player.position = target.position;
        self.player.visual_position = target.position.to_world();
        self.events.push(GameEvent::MoveFinished {
            at: target.position,
        });

        if target.kind == BlockKind::Goal {
            self.goal_reached = true;
            self.events.push(GameEvent::GoalReached {
                at: target.position,
            });
            self.status(STATUS_GOAL);
            self.events.push(GameEvent::Audio(AudioCue::Win));
            self.delays
                .schedule(self.config.motion.goal_delay, Trigger::LevelComplete);
            tracing::info!(at = %target.position, "goal reached");
        } else {
            self.events.push(GameEvent::Audio(AudioCue::Move));
        }
    }

    // ---------------------------------------------------------------
    // Reset
    // ---------------------------------------------------------------

    /// Enter the paradox reset: shrink the player, shake the camera and
    /// rebuild at the start after the reset delay. Returns false if a reset
    /// is already running.
    pub fn trigger_reset(&mut self) -> bool {
        if self.player.resetting {
            return false;
        }
        let motion = self.config.motion;
        self.player.resetting = true;
        self.player.moving = false;
        self.pending_target = None;
        self.animator.cancel(Field::PlayerPosition);
        self.rig.end_drag();
        // A pending completion belongs to the run being discarded.
        self.delays.cancel(Trigger::LevelComplete);

        self.events.push(GameEvent::ResetStarted);
        self.status(STATUS_RESET);
        self.events.push(GameEvent::Audio(AudioCue::Fail));
        self.shake(motion.reset_shake);
        self.animator.start(
            Field::PlayerScale,
            Tween::scalar(self.player.scale, 0.0, motion.shrink_duration, Easing::Linear),
        );
        self.delays.schedule(motion.reset_delay, Trigger::ResetRebuild);
        tracing::info!(at = %self.player.position, "reset started");
        true
    }

    fn rebuild(&mut self) {
        self.animator.cancel(Field::PlayerPosition);
        self.animator.cancel(Field::PlayerScale);
        self.pending_target = None;
        self.goal_reached = false;
        self.player = PlayerState::at(self.level.start);
        self.events.push(GameEvent::SceneTornDown);
        self.events.push(GameEvent::SceneBuilt {
            blocks: self.level.blocks.len(),
        });
        self.events.push(GameEvent::ResetFinished);
        tracing::info!(start = %self.level.start, "reset finished");
    }

    fn shake(&mut self, shake: Shake) {
        let rest = self.level.camera.radius;
        self.animator.start(
            Field::CameraRadius,
            Tween::scalar(rest, rest - shake.amplitude, shake.duration, Easing::Linear)
                .yoyo(shake.repeats),
        );
    }

    // ---------------------------------------------------------------
    // Time
    // ---------------------------------------------------------------

    /// Advance animations and delayed triggers by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let due = self.delays.advance(dt);
        let samples = self.animator.advance(dt);
        for sample in &samples {
            self.apply(sample);
        }
        for cue in samples.iter().filter_map(|s| s.cue) {
            match cue {
                Cue::MoveFinished => self.finish_move(),
                Cue::SnapSettled => self.events.push(GameEvent::SnapSettled),
            }
        }
        for trigger in due {
            match trigger {
                Trigger::LevelComplete => {
                    tracing::info!(id = self.level.id, "level complete");
                    self.events.push(GameEvent::LevelComplete);
                }
                Trigger::ResetRebuild => self.rebuild(),
            }
        }
    }

    fn apply(&mut self, sample: &Sample) {
        match (sample.field, sample.value) {
            (Field::CameraAzimuth, Value::Scalar(v)) => {
                self.rig.orientation_mut().azimuth = Azimuth::new(v);
            }
            // set_polar keeps the eased overshoot off the poles.
            (Field::CameraPolar, Value::Scalar(v)) => self.rig.orientation_mut().set_polar(v),
            (Field::CameraRadius, Value::Scalar(v)) => self.rig.orientation_mut().radius = v,
            (Field::PlayerPosition, Value::Vector(v)) => self.player.visual_position = v,
            (Field::PlayerScale, Value::Scalar(v)) => self.player.scale = v,
            (field, value) => tracing::warn!(?field, ?value, "mismatched animation sample"),
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Current phase, derived from the player and rig flags.
    pub fn phase(&self) -> Phase {
        if self.player.resetting {
            Phase::Resetting
        } else if self.player.moving {
            Phase::Moving
        } else if self.rig.is_dragging() {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }

    /// Tuning this session runs with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The loaded level.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Player grid position, animation state and flags.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The camera rig, including any drag anchor.
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Current (possibly mid-tween) camera orientation.
    pub fn orientation(&self) -> &CameraOrientation {
        self.rig.orientation()
    }

    /// View mode derived from the current polar angle.
    pub fn view_mode(&self) -> ViewMode {
        self.rig.view_mode()
    }

    /// The cube face that currently faces the viewer.
    pub fn visible_face(&self) -> Face {
        visible_face(self.view_mode(), self.orientation().azimuth)
    }

    /// Whether a snap tween still owns an orientation field.
    pub fn is_snapping(&self) -> bool {
        self.animator.is_animating(Field::CameraAzimuth)
            || self.animator.is_animating(Field::CameraPolar)
    }

    /// The goal was reached and input is closed for this level.
    pub fn is_complete(&self) -> bool {
        self.goal_reached
    }

    /// Number of fields with a running tween.
    pub fn active_animations(&self) -> usize {
        self.animator.active()
    }

    /// Number of scheduled delayed triggers.
    pub fn pending_delays(&self) -> usize {
        self.delays.len()
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all recorded events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn status(&mut self, label: &str) {
        self.events.push(GameEvent::Status {
            label: label.to_string(),
            mode: self.rig.view_mode(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindpoint_camera::POLAR_EPSILON;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn p(x: i32, y: i32, z: i32) -> GridPosition {
        GridPosition::new(x, y, z)
    }

    fn level(start: GridPosition, goal: GridPosition, mut extra: Vec<Block>, camera: CameraOrientation) -> Level {
        let mut blocks = vec![
            Block::new(start, BlockKind::Start),
            Block::new(goal, BlockKind::Goal),
        ];
        blocks.append(&mut extra);
        Level {
            id: 1,
            name: "test".into(),
            description: String::new(),
            quote: None,
            start,
            goal,
            camera,
            blocks,
        }
    }

    fn corridor() -> Level {
        level(
            p(0, 0, 0),
            p(0, 0, -2),
            vec![Block::new(p(0, 0, -1), BlockKind::Platform)],
            CameraOrientation::default(),
        )
    }

    fn game(level: Level) -> Game {
        Game::new(GameConfig::default(), level).unwrap()
    }

    fn has(events: &[GameEvent], wanted: &GameEvent) -> bool {
        events.iter().any(|e| e == wanted)
    }

    #[test]
    fn load_emits_build_and_prompt() {
        let g = game(corridor());
        assert_eq!(g.phase(), Phase::Idle);
        assert_eq!(g.player().position, p(0, 0, 0));
        assert!(has(g.events(), &GameEvent::SceneBuilt { blocks: 3 }));
        assert!(g.events().iter().any(
            |e| matches!(e, GameEvent::Status { label, .. } if label == STATUS_PROMPT)
        ));
        // Baseline is free roam, not a snapped view.
        assert!(!g.orientation().azimuth.is_aligned(FRAC_PI_2, 1e-3));
    }

    #[test]
    fn invalid_level_is_rejected_before_loading() {
        let mut g = game(corridor());
        let mut bad = corridor();
        bad.blocks.retain(|b| b.kind != BlockKind::Goal);
        assert_eq!(g.load_level(bad), Err(LevelError::MissingGoal));
        assert_eq!(g.level().blocks.len(), 3);
    }

    #[test]
    fn colinear_walk_after_drag_snap() {
        let mut g = game(corridor());
        assert!(g.begin_drag(0.0, 0.0));
        assert_eq!(g.phase(), Phase::Dragging);
        g.update_drag(-10.0, 0.0);
        let target = g.end_drag().unwrap();
        assert_eq!(target.mode, ViewMode::SideView);
        assert!(g.is_snapping());
        g.tick(1.0);
        assert!(!g.is_snapping());
        assert_eq!(g.orientation().azimuth.radians(), FRAC_PI_2);
        assert_eq!(g.visible_face(), Face::Right);

        // Camera on +X: screen right is -Z.
        assert_eq!(
            g.press(Direction::Right),
            MoveOutcome::Started { target: p(0, 0, -1) }
        );
        assert_eq!(g.phase(), Phase::Moving);
        g.tick(1.0);
        assert_eq!(g.player().position, p(0, 0, -1));

        assert_eq!(
            g.press(Direction::Right),
            MoveOutcome::Started { target: p(0, 0, -2) }
        );
        g.tick(0.5);
        assert_eq!(g.player().position, p(0, 0, -2));
        assert!(g.is_complete());
        assert!(has(g.events(), &GameEvent::GoalReached { at: p(0, 0, -2) }));
        assert!(!has(g.events(), &GameEvent::LevelComplete));

        g.tick(1.4);
        assert!(!has(g.events(), &GameEvent::LevelComplete));
        g.tick(0.2);
        assert!(has(g.events(), &GameEvent::LevelComplete));
        assert_eq!(g.press(Direction::Right), MoveOutcome::Ignored);
    }

    #[test]
    fn move_updates_grid_position_only_on_completion() {
        let mut g = game(corridor());
        g.begin_drag(0.0, 0.0);
        g.update_drag(-10.0, 0.0);
        g.end_drag();
        g.tick(1.0);
        g.drain_events();

        g.press(Direction::Right);
        g.tick(0.1);
        assert_eq!(g.player().position, p(0, 0, 0));
        let z = g.player().visual_position.z;
        assert!(z < 0.0 && z > -1.0);
        g.tick(0.3);
        assert_eq!(g.player().visual_position, p(0, 0, -1).to_world());
        let events = g.drain_events();
        assert!(has(&events, &GameEvent::Audio(AudioCue::Move)));
        assert!(has(&events, &GameEvent::MoveFinished { at: p(0, 0, -1) }));
    }

    #[test]
    fn gap_filler_needs_the_right_azimuth() {
        let filler = vec![Block::new(p(2, 0, -2), BlockKind::Platform)];
        let lvl = level(
            p(0, 0, -1),
            p(0, 0, -3),
            filler,
            CameraOrientation::new(1.3, PI / 2.5, 20.0),
        );

        let mut g = game(lvl.clone());
        g.snap(true);
        assert_eq!(g.orientation().azimuth.radians(), FRAC_PI_2);
        assert_eq!(
            g.press(Direction::Right),
            MoveOutcome::Started { target: p(2, 0, -2) }
        );
        g.tick(0.5);
        assert_eq!(
            g.press(Direction::Right),
            MoveOutcome::Started { target: p(0, 0, -3) }
        );

        let mut front = lvl;
        front.camera = CameraOrientation::new(0.1, PI / 2.5, 20.0);
        let mut g = game(front);
        g.snap(true);
        g.drain_events();
        for d in Direction::ALL {
            assert!(matches!(g.press(d), MoveOutcome::Rejected(_)), "{d}");
        }
        let events = g.drain_events();
        assert!(has(&events, &GameEvent::Audio(AudioCue::Fail)));
        assert_eq!(g.player().position, p(0, 0, -1));
    }

    #[test]
    fn rejected_move_bumps_radius_and_settles() {
        let mut g = game(corridor());
        g.snap(true);
        let rest = g.orientation().radius;
        assert!(matches!(g.press(Direction::Up), MoveOutcome::Rejected(_)));
        g.tick(0.05);
        assert!(g.orientation().radius < rest);
        g.tick(0.1);
        assert_eq!(g.orientation().radius, rest);
        assert_eq!(g.phase(), Phase::Idle);
    }

    #[test]
    fn top_blocked_block_depends_on_view() {
        let blocked = vec![Block::new(p(1, 0, 0), BlockKind::Platform).with_blocked_faces([Face::Top])];

        let side = level(
            p(0, 0, 0),
            p(2, 0, 0),
            blocked.clone(),
            CameraOrientation::new(0.1, PI / 2.5, 20.0),
        );
        let mut g = game(side);
        assert_eq!(g.snap(true).mode, ViewMode::SideView);
        assert_eq!(
            g.press(Direction::Right),
            MoveOutcome::Started { target: p(1, 0, 0) }
        );

        let top = level(
            p(0, 0, 0),
            p(2, 0, 0),
            blocked,
            CameraOrientation::new(0.1, 0.3, 20.0),
        );
        let mut g = game(top);
        assert_eq!(g.snap(true).mode, ViewMode::TopView);
        assert_eq!(g.orientation().polar(), POLAR_EPSILON);
        assert_eq!(g.visible_face(), Face::Top);
        assert!(matches!(
            g.press(Direction::Right),
            MoveOutcome::Rejected(MoveRejection::NoCandidate { .. })
        ));
    }

    #[test]
    fn reset_round_trip_restores_start() {
        let original = corridor();
        let mut g = game(original.clone());
        g.begin_drag(0.0, 0.0);
        g.update_drag(-10.0, 0.0);
        g.end_drag();
        g.tick(1.0);
        g.press(Direction::Right);
        g.tick(1.0);
        assert_eq!(g.player().position, p(0, 0, -1));

        assert!(g.trigger_reset());
        assert!(!g.trigger_reset());
        assert_eq!(g.phase(), Phase::Resetting);
        assert_eq!(g.press(Direction::Right), MoveOutcome::Ignored);
        assert!(!g.begin_drag(0.0, 0.0));
        assert!(!g.update_drag(5.0, 5.0));

        g.tick(0.5);
        assert_eq!(g.player().scale, 0.0);
        assert_eq!(g.phase(), Phase::Resetting);
        g.tick(0.5);
        assert_eq!(g.phase(), Phase::Idle);
        assert_eq!(g.player().position, original.start);
        assert_eq!(g.player().scale, 1.0);
        assert_eq!(g.orientation().radius, original.camera.radius);
        assert_eq!(g.level(), &original);
        assert!(has(g.events(), &GameEvent::ResetFinished));
    }

    #[test]
    fn reset_cancels_move_in_flight() {
        let mut g = game(corridor());
        g.rig.reset(CameraOrientation::new(FRAC_PI_2, FRAC_PI_2, 20.0));
        assert!(matches!(g.press(Direction::Right), MoveOutcome::Started { .. }));
        g.trigger_reset();
        g.tick(2.0);
        assert_eq!(g.player().position, p(0, 0, 0));
        assert!(!has(g.events(), &GameEvent::MoveFinished { at: p(0, 0, -1) }));
    }

    #[test]
    fn reentrant_input_is_ignored() {
        let mut g = game(corridor());
        g.rig.reset(CameraOrientation::new(FRAC_PI_2, FRAC_PI_2, 20.0));
        assert!(matches!(g.press(Direction::Right), MoveOutcome::Started { .. }));
        assert_eq!(g.press(Direction::Right), MoveOutcome::Ignored);
        assert_eq!(g.press(Direction::Left), MoveOutcome::Ignored);
        g.tick(1.0);
        assert_eq!(g.player().position, p(0, 0, -1));

        g.begin_drag(0.0, 0.0);
        assert_eq!(g.press(Direction::Right), MoveOutcome::Ignored);
    }

    #[test]
    fn drag_cancels_snap_in_flight() {
        let mut g = game(corridor());
        g.begin_drag(0.0, 0.0);
        g.update_drag(-10.0, 0.0);
        g.end_drag();
        g.tick(0.1);
        assert!(g.is_snapping());
        g.begin_drag(0.0, 0.0);
        assert!(!g.is_snapping());
        let before = *g.orientation();
        g.tick(1.0);
        assert_eq!(*g.orientation(), before);
    }

    #[test]
    fn snap_mid_drag_ends_the_drag() {
        let mut g = game(corridor());
        g.begin_drag(0.0, 0.0);
        g.update_drag(-10.0, 0.0);
        assert_eq!(g.phase(), Phase::Dragging);

        let target = g.snap(false);
        assert_eq!(target.mode, ViewMode::SideView);
        assert!(!g.rig().is_dragging());
        assert_eq!(g.phase(), Phase::Idle);
        assert!(g.is_snapping());
        // The drag no longer writes the orientation under the tween.
        assert!(!g.update_drag(40.0, 0.0));
        g.tick(1.0);
        assert_eq!(g.orientation().azimuth.radians(), FRAC_PI_2);
    }

    #[test]
    fn reset_after_goal_drops_level_complete() {
        let mut g = game(corridor());
        g.begin_drag(0.0, 0.0);
        g.update_drag(-10.0, 0.0);
        g.end_drag();
        g.tick(1.0);
        g.press(Direction::Right);
        g.tick(1.0);
        g.press(Direction::Right);
        g.tick(0.5);
        assert!(g.is_complete());
        assert_eq!(g.pending_delays(), 1);

        assert!(g.trigger_reset());
        g.drain_events();
        g.tick(3.0);
        let events = g.drain_events();
        assert!(has(&events, &GameEvent::ResetFinished));
        assert!(!has(&events, &GameEvent::LevelComplete));
        assert!(!g.is_complete());
        assert_eq!(g.player().position, p(0, 0, 0));
        assert_eq!(g.pending_delays(), 0);
    }

    #[test]
    fn input_during_snap_uses_interpolated_orientation() {
        let mut g = game(corridor());
        g.begin_drag(0.0, 0.0);
        g.update_drag(-10.0, 0.0);
        g.end_drag();
        g.tick(0.3);
        assert!(g.is_snapping());
        // Halfway through the eased swing -Z already reads as screen right.
        assert_eq!(
            g.press(Direction::Right),
            MoveOutcome::Started { target: p(0, 0, -1) }
        );
        assert!(g.is_snapping());
    }

    #[test]
    fn loading_a_new_level_tears_down_and_resets_camera() {
        let mut g = game(corridor());
        g.snap(true);
        g.drain_events();
        let mut next = corridor();
        next.id = 2;
        g.load_level(next).unwrap();
        let events = g.drain_events();
        assert_eq!(events[0], GameEvent::SceneTornDown);
        assert!(has(&events, &GameEvent::LevelLoaded { id: 2, name: "test".into() }));
        assert_eq!(*g.orientation(), CameraOrientation::default());
        assert_eq!(g.active_animations(), 0);
    }
}
