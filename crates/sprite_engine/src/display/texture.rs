//! Texture contract
//!
//! Textures are created by the platform or an asset pack; the engine only
//! needs their size and a way to release them.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A drawable image
pub trait Texture {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Release the underlying resource. Disposing twice is a no-op.
    fn dispose(&self);

    /// Region of the root texture this texture covers, as `(x, y)`
    fn offset(&self) -> (u32, u32) {
        (0, 0)
    }
}

impl fmt::Debug for dyn Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Texture({}x{})", self.width(), self.height())
    }
}

/// Texture with a size and no pixel data, used by headless platforms
#[derive(Debug)]
pub struct BlankTexture {
    width: u32,
    height: u32,
    disposed: Cell<bool>,
}

impl BlankTexture {
    /// Create a blank texture
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            disposed: Cell::new(false),
        }
    }

    /// Whether `dispose` has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}

impl Texture for BlankTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn dispose(&self) {
        self.disposed.set(true);
    }
}

/// Rectangular region of another texture, such as a frame of an atlas
pub struct SubTexture {
    parent: Rc<dyn Texture>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl SubTexture {
    /// Create a region of `parent`, clamped to the parent's bounds
    pub fn new(parent: Rc<dyn Texture>, x: u32, y: u32, width: u32, height: u32) -> Self {
        let x = x.min(parent.width());
        let y = y.min(parent.height());
        let width = width.min(parent.width() - x);
        let height = height.min(parent.height() - y);
        Self { parent, x, y, width, height }
    }

    /// The texture this region was cut from
    pub fn parent(&self) -> &Rc<dyn Texture> {
        &self.parent
    }
}

impl Texture for SubTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Sub-textures share their parent's resource, so disposing one does
    /// nothing.
    fn dispose(&self) {}

    fn offset(&self) -> (u32, u32) {
        let (px, py) = self.parent.offset();
        (px + self.x, py + self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_texture_is_clamped() {
        let atlas: Rc<dyn Texture> = Rc::new(BlankTexture::new(64, 32));
        let frame = SubTexture::new(Rc::clone(&atlas), 48, 16, 32, 32);
        assert_eq!((frame.width(), frame.height()), (16, 16));
        assert_eq!(frame.offset(), (48, 16));

        let nested = SubTexture::new(Rc::new(frame), 4, 4, 8, 8);
        assert_eq!(nested.offset(), (52, 20));
    }

    #[test]
    fn test_dispose_blank() {
        let texture = BlankTexture::new(1, 1);
        texture.dispose();
        texture.dispose();
        assert!(texture.is_disposed());
    }
}
