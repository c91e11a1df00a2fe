use mindpoint_camera::{ViewMode, is_steppable};
use mindpoint_common::{BlockKind, Direction, Face, GridPosition};
use mindpoint_kernel::{Game, MoveRejection, Phase, resolve_move};
use std::fmt;

/// Read-only queries against a running session, for debugging and dev UI.
pub struct SessionInspector;

impl SessionInspector {
    /// Snapshot of the session state.
    pub fn summary(game: &Game) -> SessionSummary {
        let o = game.orientation();
        SessionSummary {
            level_id: game.level().id,
            level_name: game.level().name.clone(),
            phase: game.phase(),
            player: game.player().position,
            azimuth: o.azimuth.normalized(),
            polar: o.polar(),
            radius: o.radius,
            view_mode: game.view_mode(),
            visible_face: game.visible_face(),
            snapping: game.is_snapping(),
            active_animations: game.active_animations(),
            pending_delays: game.pending_delays(),
            pending_events: game.events().len(),
        }
    }

    /// The steppable block at `position` and whether it can be stood on from the current view.
    pub fn inspect_block(game: &Game, position: GridPosition) -> Option<BlockInfo> {
        let face = game.visible_face();
        game.level().block_at(position).map(|block| BlockInfo {
            position,
            kind: block.kind,
            blocked_faces: block.blocked_faces.iter().copied().collect(),
            steppable_now: is_steppable(block, face),
        })
    }

    /// What each direction would resolve to from the current view, without moving.
    pub fn probe(game: &Game) -> Vec<Probe> {
        let config = game.config();
        let probes: Vec<Probe> = Direction::ALL
            .into_iter()
            .map(|direction| Probe {
                direction,
                result: resolve_move(
                    direction,
                    game.player().position,
                    game.orientation(),
                    &game.level().blocks,
                    &config.camera,
                    &config.resolver,
                )
                .map(|r| r.target.position),
            })
            .collect();
        tracing::debug!(
            open = probes.iter().filter(|p| p.result.is_ok()).count(),
            "probed directions"
        );
        probes
    }
}

/// Summary of session state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub level_id: u32,
    pub level_name: String,
    pub phase: Phase,
    pub player: GridPosition,
    /// Normalised to `[0, 2π)`.
    pub azimuth: f32,
    pub polar: f32,
    pub radius: f32,
    pub view_mode: ViewMode,
    pub visible_face: Face,
    pub snapping: bool,
    pub active_animations: usize,
    pub pending_delays: usize,
    pub pending_events: usize,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level {} \"{}\": phase={:?} player={} camera=(θ {:.3}, φ {:.3}, r {:.2}) view={}{} face={} animations={} delays={} pending_events={}",
            self.level_id,
            self.level_name,
            self.phase,
            self.player,
            self.azimuth,
            self.polar,
            self.radius,
            self.view_mode,
            if self.snapping { " (snapping)" } else { "" },
            self.visible_face,
            self.active_animations,
            self.pending_delays,
            self.pending_events
        )
    }
}

/// Detailed info about a single block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInfo {
    pub position: GridPosition,
    pub kind: BlockKind,
    pub blocked_faces: Vec<Face>,
    pub steppable_now: bool,
}

impl fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block {} {:?}", self.position, self.kind)?;
        if !self.blocked_faces.is_empty() {
            let faces: Vec<&str> = self.blocked_faces.iter().map(|face| face.label()).collect();
            write!(f, " blocked=[{}]", faces.join(", "))?;
        }
        write!(f, " steppable_now={}", self.steppable_now)
    }
}

/// Where one direction would lead.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub direction: Direction,
    pub result: Result<GridPosition, MoveRejection>,
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(target) => write!(f, "{:>5} -> {target}", self.direction),
            Err(reason) => write!(f, "{:>5} x  {reason}", self.direction),
        }
    }
}
