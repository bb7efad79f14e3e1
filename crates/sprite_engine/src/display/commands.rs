//! Recording surface
//!
//! [`CommandList`] implements [`Surface`] by resolving the state stack and
//! storing one [`DrawCommand`] per draw call. Headless platforms render into
//! it, and tests inspect it.

use super::{BlendMode, Surface, Texture};
use crate::foundation::math::{Matrix, Rectangle};

/// Resolved surface state at the time of a draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    /// Local-to-surface transform
    pub matrix: Matrix,
    /// Accumulated opacity
    pub alpha: f32,
    /// Active blend mode
    pub blend_mode: BlendMode,
    /// Axis-aligned clip in surface coordinates
    pub scissor: Option<Rectangle>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            matrix: Matrix::IDENTITY,
            alpha: 1.0,
            blend_mode: BlendMode::Normal,
            scissor: None,
        }
    }
}

/// What a draw call drew
#[derive(Debug, Clone, PartialEq)]
pub enum DrawKind {
    /// `fill_rect`
    FillRect {
        /// `0xRRGGBB` color
        color: u32,
        /// Rectangle in local coordinates
        rect: Rectangle,
    },
    /// `draw_texture`
    Texture {
        /// Texture size
        width: u32,
        /// Texture size
        height: u32,
        /// Offset within the root texture
        offset: (u32, u32),
        /// Destination in local coordinates
        x: f32,
        /// Destination in local coordinates
        y: f32,
    },
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// What was drawn
    pub kind: DrawKind,
    /// State it was drawn with
    pub state: DrawState,
}

impl DrawCommand {
    /// Axis-aligned bounds of the drawn area in surface coordinates
    pub fn surface_bounds(&self) -> Rectangle {
        let (x, y, w, h) = match self.kind {
            DrawKind::FillRect { rect, .. } => (rect.x, rect.y, rect.width, rect.height),
            DrawKind::Texture { width, height, x, y, .. } => (x, y, width as f32, height as f32),
        };
        transformed_bounds(&self.state.matrix, &Rectangle::new(x, y, w, h))
    }
}

fn transformed_bounds(matrix: &Matrix, rect: &Rectangle) -> Rectangle {
    let corners = [
        matrix.transform(rect.x, rect.y),
        matrix.transform(rect.right(), rect.y),
        matrix.transform(rect.right(), rect.bottom()),
        matrix.transform(rect.x, rect.bottom()),
    ];
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for p in corners {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rectangle::from_extents(min_x, min_y, max_x, max_y)
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct CommandList {
    state: DrawState,
    stack: Vec<DrawState>,
    commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands and reset the state stack
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.state = DrawState::default();
    }

    /// Current state
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Depth of the save stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn record(&mut self, kind: DrawKind) {
        let empty_clip = self
            .state
            .scissor
            .is_some_and(|clip| clip.width <= 0.0 || clip.height <= 0.0);
        if empty_clip || self.state.alpha <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand { kind, state: self.state });
    }
}

impl Surface for CommandList {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("CommandList::restore without matching save"),
        }
    }

    fn transform(&mut self, matrix: &Matrix) {
        self.state.matrix.mult_matrix(matrix);
    }

    fn multiply_alpha(&mut self, factor: f32) {
        self.state.alpha *= factor;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend_mode = mode;
    }

    fn apply_scissor(&mut self, rect: &Rectangle) {
        let clip = transformed_bounds(&self.state.matrix, rect);
        self.state.scissor = Some(match self.state.scissor {
            Some(existing) => {
                let min_x = existing.x.max(clip.x);
                let min_y = existing.y.max(clip.y);
                let max_x = existing.right().min(clip.right()).max(min_x);
                let max_y = existing.bottom().min(clip.bottom()).max(min_y);
                Rectangle::from_extents(min_x, min_y, max_x, max_y)
            }
            None => clip,
        });
    }

    fn fill_rect(&mut self, color: u32, x: f32, y: f32, width: f32, height: f32) {
        self.record(DrawKind::FillRect {
            color,
            rect: Rectangle::new(x, y, width, height),
        });
    }

    fn draw_texture(&mut self, texture: &dyn Texture, x: f32, y: f32) {
        self.record(DrawKind::Texture {
            width: texture.width(),
            height: texture.height(),
            offset: texture.offset(),
            x,
            y,
        });
    }
}
