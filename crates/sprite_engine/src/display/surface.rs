//! Drawing surface contract

use super::Texture;
use crate::foundation::math::{Matrix, Rectangle};

/// How drawn pixels combine with what is already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source over destination
    #[default]
    Normal,
    /// Additive
    Add,
    /// Multiply
    Multiply,
    /// Screen
    Screen,
    /// Keep destination only where the source is opaque
    Mask,
    /// Replace destination
    Copy,
}

/// Immediate-mode drawing target supplied by the platform.
///
/// State changes (`transform`, `multiply_alpha`, `set_blend_mode`,
/// `apply_scissor`) apply until the matching `restore`.
pub trait Surface {
    /// Push the current state
    fn save(&mut self);

    /// Pop back to the last saved state
    fn restore(&mut self);

    /// Concatenate a transform onto the current one; `matrix` applies first
    fn transform(&mut self, matrix: &Matrix);

    /// Scale the current opacity
    fn multiply_alpha(&mut self, factor: f32);

    /// Set the blend mode
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Restrict drawing to a rectangle in the current coordinate space
    fn apply_scissor(&mut self, rect: &Rectangle);

    /// Fill a rectangle with a `0xRRGGBB` color
    fn fill_rect(&mut self, color: u32, x: f32, y: f32, width: f32, height: f32);

    /// Draw a whole texture with its top-left corner at `(x, y)`
    fn draw_texture(&mut self, texture: &dyn Texture, x: f32, y: f32);

    /// Concatenate a translation
    fn translate(&mut self, x: f32, y: f32) {
        self.transform(&Matrix::new(1.0, 0.0, 0.0, 1.0, x, y));
    }
}
