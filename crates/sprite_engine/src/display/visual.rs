//! Visual content carried by sprites
//!
//! A sprite's transform lives in [`Sprite`](super::Sprite); what it looks
//! like is a [`Visual`]: anything with a natural size that can draw itself.

use super::{Surface, Texture};
use crate::ecs::AsAny;
use std::rc::Rc;

/// Untransformed size of a visual
pub trait NaturalSize {
    /// Width in local units
    fn natural_width(&self) -> f32;
    /// Height in local units
    fn natural_height(&self) -> f32;
}

/// Something that can draw itself onto a surface in local coordinates
pub trait Drawable {
    /// Draw with the surface already transformed into local space
    fn draw(&self, surface: &mut dyn Surface);
}

/// Sized, drawable content of a sprite
pub trait Visual: NaturalSize + Drawable + AsAny {}

impl<T: NaturalSize + Drawable + 'static> Visual for T {}

/// Solid rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct FillVisual {
    /// `0xRRGGBB` color
    pub color: u32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl FillVisual {
    /// Create a filled rectangle
    pub fn new(color: u32, width: f32, height: f32) -> Self {
        Self { color, width, height }
    }
}

impl NaturalSize for FillVisual {
    fn natural_width(&self) -> f32 {
        self.width
    }

    fn natural_height(&self) -> f32 {
        self.height
    }
}

impl Drawable for FillVisual {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.color, 0.0, 0.0, self.width, self.height);
    }
}

/// Whole texture; sized by the texture, or zero when unset
#[derive(Default)]
pub struct ImageVisual {
    /// Texture to draw
    pub texture: Option<Rc<dyn Texture>>,
}

impl ImageVisual {
    /// Create an image visual
    pub fn new(texture: Option<Rc<dyn Texture>>) -> Self {
        Self { texture }
    }
}

impl NaturalSize for ImageVisual {
    fn natural_width(&self) -> f32 {
        self.texture.as_ref().map_or(0.0, |t| t.width() as f32)
    }

    fn natural_height(&self) -> f32 {
        self.texture.as_ref().map_or(0.0, |t| t.height() as f32)
    }
}

impl Drawable for ImageVisual {
    fn draw(&self, surface: &mut dyn Surface) {
        if let Some(texture) = &self.texture {
            surface.draw_texture(texture.as_ref(), 0.0, 0.0);
        }
    }
}

/// Nothing to draw; a pure transform node
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyVisual;

impl NaturalSize for EmptyVisual {
    fn natural_width(&self) -> f32 {
        0.0
    }

    fn natural_height(&self) -> f32 {
        0.0
    }
}

impl Drawable for EmptyVisual {
    fn draw(&self, _surface: &mut dyn Surface) {}
}
