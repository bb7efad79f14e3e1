//! Display tree: sprites, their visuals and the walks over them
//!
//! - [`Sprite`] is the component carrying a 2D transform, opacity and
//!   visibility plus a boxed [`Visual`] that does the actual drawing.
//! - [`hit_test`] and [`bounds`] walk the tree for pointer picking and
//!   layout.
//! - [`render`] walks the tree once per frame and draws onto a [`Surface`].

mod commands;
mod render;
mod sprite;
mod surface;
mod texture;
mod visual;

pub use commands::{CommandList, DrawCommand, DrawKind, DrawState};
pub use hit_test::{bounds, hit_test};
pub use render::render;
pub use sprite::{parent_sprite, view_matrix, view_to_local, PointerSignal, Sprite, SpriteFlags};
pub use surface::{BlendMode, Surface};
pub use texture::{BlankTexture, SubTexture, Texture};
pub use visual::{Drawable, EmptyVisual, FillVisual, ImageVisual, NaturalSize, Visual};
