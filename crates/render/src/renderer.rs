use glam::{Vec2, Vec3};
use mindpoint_camera::{CameraOrientation, CameraTransform, ViewMode, Viewport, visible_face};
use mindpoint_common::{Block, BlockKind, Face};
use mindpoint_kernel::{GameEvent, Level};

/// Renderer-agnostic scene interface.
///
/// The kernel never touches rendering primitives. It announces scene
/// changes through its event log and asks renderers for screen positions.
pub trait Renderer {
    /// Create visuals for every block of `level`.
    fn build_scene(&mut self, level: &Level);

    /// Remove every block and player visual.
    fn teardown_scene(&mut self);

    /// Screen position (normalised device coordinates) of a world point.
    fn project_to_screen(&self, point: Vec3, transform: &CameraTransform) -> Vec2;
}

/// Follow the scene events of a drained batch.
pub fn sync_scene<R: Renderer + ?Sized>(renderer: &mut R, events: &[GameEvent], level: &Level) {
    for event in events {
        match event {
            GameEvent::SceneTornDown => renderer.teardown_scene(),
            GameEvent::SceneBuilt { .. } => renderer.build_scene(level),
            _ => {}
        }
    }
}

/// Debug text renderer: an ASCII frame of the current view.
///
/// Blocks are drawn far to near, so whatever sits in front on screen wins
/// the cell, exactly like the illusion the player sees. Glyphs: `S` start,
/// `G` goal, `#` platform, `X` platform blocked on the visible face,
/// `.` decoration, `@` player.
#[derive(Debug, Clone)]
pub struct DebugTextRenderer {
    viewport: Viewport,
    columns: usize,
    rows: usize,
    blocks: Vec<Block>,
}

impl DebugTextRenderer {
    pub fn new(viewport: Viewport, columns: usize, rows: usize) -> Self {
        Self {
            viewport,
            columns: columns.max(1),
            rows: rows.max(1),
            blocks: Vec::new(),
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Rasterise the scene as seen from `orientation`.
    pub fn frame(&self, orientation: &CameraOrientation, mode: ViewMode, player: Vec3) -> String {
        let transform = CameraTransform::new(orientation);
        let face = visible_face(mode, orientation.azimuth);
        let mut grid = vec![vec![' '; self.columns]; self.rows];

        let mut order: Vec<&Block> = self.blocks.iter().collect();
        order.sort_by(|a, b| {
            let da = transform.depth(a.position.to_world());
            let db = transform.depth(b.position.to_world());
            db.total_cmp(&da)
        });
        for block in order {
            let screen = self.project_to_screen(block.position.to_world(), &transform);
            if let Some((col, row)) = self.cell(screen) {
                grid[row][col] = glyph(block, face);
            }
        }
        if let Some((col, row)) = self.cell(self.project_to_screen(player, &transform)) {
            grid[row][col] = '@';
        }

        let mut out = format!(
            "{mode} view  azimuth {:.2}  polar {:.2}  face {face}\n",
            orientation.azimuth.normalized(),
            orientation.polar()
        );
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    /// Grid cell for a screen position, if it is on screen.
    fn cell(&self, ndc: Vec2) -> Option<(usize, usize)> {
        if !(-1.0..=1.0).contains(&ndc.x) || !(-1.0..=1.0).contains(&ndc.y) {
            return None;
        }
        let col = ((ndc.x + 1.0) * 0.5 * self.columns as f32) as usize;
        let row = ((1.0 - ndc.y) * 0.5 * self.rows as f32) as usize;
        Some((col.min(self.columns - 1), row.min(self.rows - 1)))
    }
}

impl Default for DebugTextRenderer {
    fn default() -> Self {
        let viewport = Viewport {
            half_height: 6.0,
            ..Viewport::default()
        };
        Self::new(viewport, 64, 24)
    }
}

impl Renderer for DebugTextRenderer {
    fn build_scene(&mut self, level: &Level) {
        self.blocks = level.blocks.clone();
        tracing::debug!(id = level.id, blocks = self.blocks.len(), "scene built");
    }

    fn teardown_scene(&mut self) {
        self.blocks.clear();
    }

    fn project_to_screen(&self, point: Vec3, transform: &CameraTransform) -> Vec2 {
        transform.to_screen(point, &self.viewport)
    }
}

fn glyph(block: &Block, face: Face) -> char {
    match block.kind {
        BlockKind::Start => 'S',
        BlockKind::Goal => 'G',
        BlockKind::Platform if block.is_blocked_from(face) => 'X',
        BlockKind::Platform => '#',
        BlockKind::Decoration => '.',
    }
}
