//! Sprite: the transform and hit-test node of the display tree
//!
//! Every transform property is an [`AnimatedFloat`]. Change listeners on
//! those floats flip dirty bits, and the local and view matrices are
//! recomputed lazily the next time they are read.
//!
//! The view matrix also records which ancestor view it was derived from and
//! that ancestor's revision, so moving or reparenting an ancestor refreshes
//! every descendant on its next read.

use super::visual::{EmptyVisual, FillVisual, ImageVisual, Visual};
use super::{BlendMode, Drawable, NaturalSize, Surface, Texture};
use crate::animation::AnimatedFloat;
use crate::ecs::{Component, ComponentId, Context, EntityId, World};
use crate::events::Signal1;
use crate::foundation::math::{deg_to_rad, Matrix, Rectangle};
use crate::input::PointerEvent;
use bitflags::bitflags;
use std::cell::{Cell, OnceCell};
use std::fmt;
use std::rc::Rc;

bitflags! {
    /// Sprite state and cache invalidation bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpriteFlags: u16 {
        /// Drawn and hit-testable
        const VISIBLE = 1 << 0;
        /// Receives pointer events
        const POINTER_ENABLED = 1 << 1;
        /// Translation is rounded to whole pixels when rendering
        const PIXEL_SNAPPING = 1 << 2;
        /// Local matrix must be rebuilt
        const LOCAL_DIRTY = 1 << 3;
        /// View matrix must be rebuilt
        const VIEW_DIRTY = 1 << 4;
        /// Cached sine/cosine of the rotation must be refreshed
        const ROTATION_DIRTY = 1 << 5;
    }
}

/// Lazily created pointer signals
#[derive(Default)]
struct PointerSignals {
    down: OnceCell<Signal1<PointerEvent>>,
    moved: OnceCell<Signal1<PointerEvent>>,
    up: OnceCell<Signal1<PointerEvent>>,
    entered: OnceCell<Signal1<PointerEvent>>,
    exited: OnceCell<Signal1<PointerEvent>>,
}

/// Which pointer signal to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSignal {
    /// Button pressed over the sprite
    Down,
    /// Pointer moved over the sprite
    Move,
    /// Button released over the sprite
    Up,
    /// Pointer started hovering the sprite
    In,
    /// Pointer stopped hovering the sprite
    Out,
}

/// Positioned, rotated, scaled and faded node of the display tree.
///
/// The transform properties are public so they can be animated directly,
/// e.g. `sprite.x.animate_to(100.0, 0.5)`. Change them through their own
/// methods; assigning a fresh [`AnimatedFloat`] would detach it from the
/// sprite's cache invalidation.
pub struct Sprite {
    /// X position in the parent's space
    pub x: AnimatedFloat,
    /// Y position in the parent's space
    pub y: AnimatedFloat,
    /// Rotation in degrees, clockwise
    pub rotation: AnimatedFloat,
    /// Horizontal scale
    pub scale_x: AnimatedFloat,
    /// Vertical scale
    pub scale_y: AnimatedFloat,
    /// X of the local point placed at `(x, y)` and rotated about
    pub anchor_x: AnimatedFloat,
    /// Y of the local point placed at `(x, y)` and rotated about
    pub anchor_y: AnimatedFloat,
    /// Opacity, multiplied down the tree
    pub alpha: AnimatedFloat,

    flags: Rc<Cell<SpriteFlags>>,
    local_matrix: Cell<Matrix>,
    view_matrix: Cell<Matrix>,
    rotation_sin_cos: Cell<(f32, f32)>,
    view_revision: Cell<u64>,
    view_source: Cell<Option<(ComponentId, u64)>>,

    blend_mode: Option<BlendMode>,
    scissor: Option<Rectangle>,
    visual: Box<dyn Visual>,
    pointer: PointerSignals,
}

impl Sprite {
    /// Create a sprite around any visual
    pub fn new(visual: impl Visual) -> Self {
        Self::from_boxed(Box::new(visual))
    }

    /// Create a sprite around a boxed visual
    pub fn from_boxed(visual: Box<dyn Visual>) -> Self {
        let flags = Rc::new(Cell::new(
            SpriteFlags::VISIBLE
                | SpriteFlags::POINTER_ENABLED
                | SpriteFlags::PIXEL_SNAPPING
                | SpriteFlags::LOCAL_DIRTY
                | SpriteFlags::VIEW_DIRTY,
        ));

        let sprite = Self {
            x: AnimatedFloat::new(0.0),
            y: AnimatedFloat::new(0.0),
            rotation: AnimatedFloat::new(0.0),
            scale_x: AnimatedFloat::new(1.0),
            scale_y: AnimatedFloat::new(1.0),
            anchor_x: AnimatedFloat::new(0.0),
            anchor_y: AnimatedFloat::new(0.0),
            alpha: AnimatedFloat::new(1.0),
            flags,
            local_matrix: Cell::new(Matrix::IDENTITY),
            view_matrix: Cell::new(Matrix::IDENTITY),
            rotation_sin_cos: Cell::new((0.0, 1.0)),
            view_revision: Cell::new(0),
            view_source: Cell::new(None),
            blend_mode: None,
            scissor: None,
            visual,
            pointer: PointerSignals::default(),
        };

        let transform_dirty = SpriteFlags::LOCAL_DIRTY | SpriteFlags::VIEW_DIRTY;
        for float in [
            &sprite.x,
            &sprite.y,
            &sprite.scale_x,
            &sprite.scale_y,
            &sprite.anchor_x,
            &sprite.anchor_y,
        ] {
            sprite.mark_on_change(float, transform_dirty);
        }
        sprite.mark_on_change(&sprite.rotation, transform_dirty | SpriteFlags::ROTATION_DIRTY);
        sprite
    }

    /// Solid rectangle sprite
    pub fn fill(color: u32, width: f32, height: f32) -> Self {
        Self::new(FillVisual::new(color, width, height))
    }

    /// Texture sprite
    pub fn image(texture: Rc<dyn Texture>) -> Self {
        Self::new(ImageVisual::new(Some(texture)))
    }

    /// Sprite with no content, used to group and transform children
    pub fn empty() -> Self {
        Self::new(EmptyVisual)
    }

    fn mark_on_change(&self, float: &AnimatedFloat, bits: SpriteFlags) {
        let flags = Rc::clone(&self.flags);
        // The connection lives as long as the float; dropping the handle keeps it
        let _ = float.changed().connect(move |_| flags.set(flags.get() | bits));
    }

    // ---------------------------------------------------------------------
    // Chained setters
    // ---------------------------------------------------------------------

    /// Set the position
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x.set(x);
        self.y.set(y);
        self
    }

    /// Set a uniform scale
    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        self.set_scale_xy(scale, scale)
    }

    /// Set the horizontal and vertical scale
    pub fn set_scale_xy(&mut self, scale_x: f32, scale_y: f32) -> &mut Self {
        self.scale_x.set(scale_x);
        self.scale_y.set(scale_y);
        self
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) -> &mut Self {
        self.rotation.set(degrees);
        self
    }

    /// Set the anchor point
    pub fn set_anchor(&mut self, x: f32, y: f32) -> &mut Self {
        self.anchor_x.set(x);
        self.anchor_y.set(y);
        self
    }

    /// Anchor at the middle of the natural size
    pub fn center_anchor(&mut self) -> &mut Self {
        let (w, h) = (self.natural_width(), self.natural_height());
        self.set_anchor(w / 2.0, h / 2.0)
    }

    /// Set the opacity
    pub fn set_alpha(&mut self, alpha: f32) -> &mut Self {
        self.alpha.set(alpha);
        self
    }

    /// Show or hide the sprite and its subtree
    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.set_flag(SpriteFlags::VISIBLE, visible)
    }

    /// Allow or block pointer events for the sprite and its subtree
    pub fn set_pointer_enabled(&mut self, enabled: bool) -> &mut Self {
        self.set_flag(SpriteFlags::POINTER_ENABLED, enabled)
    }

    /// Shorthand for `set_pointer_enabled(false)`
    pub fn disable_pointer(&mut self) -> &mut Self {
        self.set_pointer_enabled(false)
    }

    /// Round the rendered translation to whole pixels (on by default)
    pub fn set_pixel_snapping(&mut self, snapping: bool) -> &mut Self {
        self.set_flag(SpriteFlags::PIXEL_SNAPPING, snapping)
    }

    /// Override the blend mode for this subtree
    pub fn set_blend_mode(&mut self, mode: Option<BlendMode>) -> &mut Self {
        self.blend_mode = mode;
        self
    }

    /// Clip this subtree to a rectangle in local coordinates
    pub fn set_scissor(&mut self, scissor: Option<Rectangle>) -> &mut Self {
        self.scissor = scissor;
        self
    }

    /// Replace the visual content
    pub fn set_visual(&mut self, visual: impl Visual) -> &mut Self {
        self.visual = Box::new(visual);
        self
    }

    fn set_flag(&mut self, flag: SpriteFlags, on: bool) -> &mut Self {
        let mut flags = self.flags.get();
        flags.set(flag, on);
        self.flags.set(flags);
        self
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Current flag bits
    pub fn flags(&self) -> SpriteFlags {
        self.flags.get()
    }

    /// Whether the sprite is visible
    pub fn is_visible(&self) -> bool {
        self.flags().contains(SpriteFlags::VISIBLE)
    }

    /// Whether the sprite accepts pointer events
    pub fn is_pointer_enabled(&self) -> bool {
        self.flags().contains(SpriteFlags::POINTER_ENABLED)
    }

    /// Whether rendering rounds the translation
    pub fn is_pixel_snapping(&self) -> bool {
        self.flags().contains(SpriteFlags::PIXEL_SNAPPING)
    }

    /// Blend mode override
    pub fn blend_mode(&self) -> Option<BlendMode> {
        self.blend_mode
    }

    /// Scissor rectangle in local coordinates
    pub fn scissor(&self) -> Option<Rectangle> {
        self.scissor
    }

    /// The visual content
    pub fn visual(&self) -> &dyn Visual {
        self.visual.as_ref()
    }

    /// The visual content as a concrete type
    pub fn visual_as<V: Visual>(&self) -> Option<&V> {
        let visual: &dyn Visual = &*self.visual;
        visual.as_any().downcast_ref::<V>()
    }

    /// The visual content as a concrete type, mutably
    pub fn visual_as_mut<V: Visual>(&mut self) -> Option<&mut V> {
        let visual: &mut dyn Visual = &mut *self.visual;
        visual.as_any_mut().downcast_mut::<V>()
    }

    /// Whether a local-space point lies within `[0, width) x [0, height)`
    pub fn contains_local(&self, local_x: f32, local_y: f32) -> bool {
        local_x >= 0.0
            && local_x < self.natural_width()
            && local_y >= 0.0
            && local_y < self.natural_height()
    }

    // ---------------------------------------------------------------------
    // Matrices
    // ---------------------------------------------------------------------

    /// Transform from this sprite's space to its parent's space
    pub fn local_matrix(&self) -> Matrix {
        let mut flags = self.flags.get();
        if !flags.contains(SpriteFlags::LOCAL_DIRTY) {
            return self.local_matrix.get();
        }

        let x = self.x.get();
        let y = self.y.get();
        let scale_x = self.scale_x.get();
        let scale_y = self.scale_y.get();
        let anchor_x = self.anchor_x.get();
        let anchor_y = self.anchor_y.get();
        let rotation = self.rotation.get();

        let matrix = if rotation == 0.0 {
            Matrix::new(scale_x, 0.0, 0.0, scale_y, x - scale_x * anchor_x, y - scale_y * anchor_y)
        } else {
            if flags.contains(SpriteFlags::ROTATION_DIRTY) {
                self.rotation_sin_cos.set(deg_to_rad(rotation).sin_cos());
                flags.remove(SpriteFlags::ROTATION_DIRTY);
            }
            let (sin, cos) = self.rotation_sin_cos.get();
            let m00 = scale_x * cos;
            let m10 = scale_x * sin;
            let m01 = -scale_y * sin;
            let m11 = scale_y * cos;
            Matrix::new(
                m00,
                m10,
                m01,
                m11,
                x - (m00 * anchor_x + m01 * anchor_y),
                y - (m10 * anchor_x + m11 * anchor_y),
            )
        };

        flags.remove(SpriteFlags::LOCAL_DIRTY);
        self.flags.set(flags);
        self.local_matrix.set(matrix);
        matrix
    }

    /// View matrix given the nearest visual ancestor's id, view matrix and
    /// view revision
    fn view_matrix_from(&self, parent: Option<(ComponentId, Matrix, u64)>) -> Matrix {
        let source = parent.map(|(id, _, revision)| (id, revision));
        let flags = self.flags.get();
        let stale = flags.intersects(SpriteFlags::VIEW_DIRTY | SpriteFlags::LOCAL_DIRTY)
            || self.view_source.get() != source;
        if !stale {
            return self.view_matrix.get();
        }

        let local = self.local_matrix();
        let view = match parent {
            Some((_, parent_view, _)) => Matrix::multiply(&parent_view, &local),
            None => local,
        };
        self.view_matrix.set(view);
        self.view_source.set(source);
        self.view_revision.set(self.view_revision.get().wrapping_add(1));
        self.flags.set(self.flags.get() - SpriteFlags::VIEW_DIRTY);
        view
    }

    /// Number of times the view matrix has been rebuilt
    pub fn view_revision(&self) -> u64 {
        self.view_revision.get()
    }

    // ---------------------------------------------------------------------
    // Pointer signals
    // ---------------------------------------------------------------------

    /// Emitted when a pointer button is pressed over this sprite or a child
    pub fn pointer_down(&self) -> &Signal1<PointerEvent> {
        self.pointer.down.get_or_init(Signal1::new)
    }

    /// Emitted when the pointer moves over this sprite or a child
    pub fn pointer_move(&self) -> &Signal1<PointerEvent> {
        self.pointer.moved.get_or_init(Signal1::new)
    }

    /// Emitted when a pointer button is released over this sprite or a child
    pub fn pointer_up(&self) -> &Signal1<PointerEvent> {
        self.pointer.up.get_or_init(Signal1::new)
    }

    /// Emitted when the pointer starts hovering this sprite
    pub fn pointer_in(&self) -> &Signal1<PointerEvent> {
        self.pointer.entered.get_or_init(Signal1::new)
    }

    /// Emitted when the pointer stops hovering this sprite
    pub fn pointer_out(&self) -> &Signal1<PointerEvent> {
        self.pointer.exited.get_or_init(Signal1::new)
    }

    /// A pointer signal if anything ever connected to it
    pub fn pointer_signal(&self, which: PointerSignal) -> Option<&Signal1<PointerEvent>> {
        match which {
            PointerSignal::Down => self.pointer.down.get(),
            PointerSignal::Move => self.pointer.moved.get(),
            PointerSignal::Up => self.pointer.up.get(),
            PointerSignal::In => self.pointer.entered.get(),
            PointerSignal::Out => self.pointer.exited.get(),
        }
    }

    fn animated_floats(&mut self) -> [&mut AnimatedFloat; 8] {
        [
            &mut self.x,
            &mut self.y,
            &mut self.rotation,
            &mut self.scale_x,
            &mut self.scale_y,
            &mut self.anchor_x,
            &mut self.anchor_y,
            &mut self.alpha,
        ]
    }
}

impl NaturalSize for Sprite {
    fn natural_width(&self) -> f32 {
        self.visual.natural_width()
    }

    fn natural_height(&self) -> f32 {
        self.visual.natural_height()
    }
}

impl Drawable for Sprite {
    fn draw(&self, surface: &mut dyn Surface) {
        self.visual.draw(surface);
    }
}

impl Component for Sprite {
    fn on_update(&mut self, _ctx: &mut Context<'_>, dt: f32) {
        for float in self.animated_floats() {
            float.update(dt);
        }
    }

    fn dispose(&mut self, _ctx: &mut Context<'_>) {
        for signal in [
            &self.pointer.down,
            &self.pointer.moved,
            &self.pointer.up,
            &self.pointer.entered,
            &self.pointer.exited,
        ] {
            if let Some(signal) = signal.get() {
                signal.disconnect_all();
            }
        }
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("x", &self.x.get())
            .field("y", &self.y.get())
            .field("rotation", &self.rotation.get())
            .field("scale", &(self.scale_x.get(), self.scale_y.get()))
            .field("alpha", &self.alpha.get())
            .field("flags", &self.flags.get())
            .finish_non_exhaustive()
    }
}

/// Sprite component of the nearest ancestor of `entity` that has one
pub fn parent_sprite(world: &World, entity: EntityId) -> Option<ComponentId> {
    world
        .ancestors(entity)
        .find_map(|ancestor| world.component_id::<Sprite>(ancestor))
}

/// Transform from a sprite's space to the root's space.
///
/// Returns `None` for a stale handle, a non-sprite component or a sprite that
/// is currently running one of its own hooks.
pub fn view_matrix(world: &World, sprite: ComponentId) -> Option<Matrix> {
    let this = world.component_as::<Sprite>(sprite)?;
    let owner = world.owner(sprite)?;
    let parent = parent_sprite(world, owner).and_then(|parent_id| {
        let parent_view = view_matrix(world, parent_id)?;
        let revision = world.component_as::<Sprite>(parent_id)?.view_revision();
        Some((parent_id, parent_view, revision))
    });
    Some(this.view_matrix_from(parent))
}

/// Map a root-space point into a sprite's local space
pub fn view_to_local(world: &World, sprite: ComponentId, x: f32, y: f32) -> Option<crate::foundation::math::Point> {
    view_matrix(world, sprite)?.inverse_transform(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn attach(world: &mut World, parent: Option<EntityId>, sprite: Sprite) -> (EntityId, ComponentId) {
        let entity = world.create_entity();
        let id = world.add_component(entity, sprite);
        if let Some(parent) = parent {
            world.add_child(parent, entity, true);
        }
        (entity, id)
    }

    #[test]
    fn test_axis_aligned_local_matrix() {
        let mut sprite = Sprite::fill(0, 10.0, 10.0);
        sprite.set_xy(100.0, 50.0).set_scale_xy(2.0, 3.0).set_anchor(5.0, 5.0);
        let m = sprite.local_matrix();
        assert_eq!(m, Matrix::new(2.0, 0.0, 0.0, 3.0, 90.0, 35.0));
        assert!(!sprite.flags().contains(SpriteFlags::LOCAL_DIRTY));
    }

    #[test]
    fn test_rotated_local_matrix_pivots_on_anchor() {
        let mut sprite = Sprite::fill(0, 10.0, 10.0);
        sprite.set_xy(20.0, 20.0).center_anchor().set_rotation(90.0);

        // The anchor maps onto (x, y)
        let pivot = sprite.local_matrix().transform(5.0, 5.0);
        assert_relative_eq!(pivot.x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(pivot.y, 20.0, epsilon = 1e-4);

        // Local +x points down after a clockwise quarter turn
        let right = sprite.local_matrix().transform(10.0, 5.0);
        assert_relative_eq!(right.x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(right.y, 25.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rotation_survives_later_recompute() {
        let mut sprite = Sprite::empty();
        sprite.set_rotation(90.0);
        sprite.local_matrix();
        sprite.set_xy(1.0, 0.0);
        let m = sprite.local_matrix();
        assert_relative_eq!(m.m10, 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.m01, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_change_listeners_set_dirty_bits() {
        let mut sprite = Sprite::empty();
        sprite.local_matrix();
        assert!(!sprite.flags().contains(SpriteFlags::LOCAL_DIRTY));

        sprite.alpha.set(0.5);
        assert!(!sprite.flags().contains(SpriteFlags::LOCAL_DIRTY));

        sprite.rotation.set(45.0);
        assert!(sprite.flags().contains(
            SpriteFlags::LOCAL_DIRTY | SpriteFlags::VIEW_DIRTY | SpriteFlags::ROTATION_DIRTY
        ));
    }

    #[test]
    fn test_view_matrix_composes_ancestors() {
        let mut world = World::new();
        let mut parent = Sprite::empty();
        parent.set_xy(100.0, 0.0).set_scale(2.0);
        let (root, _) = attach(&mut world, None, parent);

        // Entity without a sprite in between
        let group = world.create_entity();
        world.add_child(root, group, true);

        let mut child = Sprite::fill(0, 4.0, 4.0);
        child.set_xy(10.0, 5.0);
        let (_, child_id) = attach(&mut world, Some(group), child);

        let view = view_matrix(&world, child_id).unwrap();
        let p = view.transform(0.0, 0.0);
        assert_eq!((p.x, p.y), (120.0, 10.0));
    }

    #[test]
    fn test_parent_move_refreshes_child_view() {
        let mut world = World::new();
        let (root, root_id) = attach(&mut world, None, Sprite::empty());
        let mut child = Sprite::empty();
        child.set_xy(1.0, 1.0);
        let (_, child_id) = attach(&mut world, Some(root), child);

        assert_eq!(view_matrix(&world, child_id).unwrap().m02, 1.0);

        world.get_mut::<Sprite>(root).unwrap().set_xy(50.0, 0.0);
        assert_eq!(view_matrix(&world, child_id).unwrap().m02, 51.0);

        let revision = world.component_as::<Sprite>(root_id).unwrap().view_revision();
        view_matrix(&world, child_id);
        assert_eq!(
            world.component_as::<Sprite>(root_id).unwrap().view_revision(),
            revision
        );
    }

    #[test]
    fn test_reparent_refreshes_view() {
        let mut world = World::new();
        let mut a = Sprite::empty();
        a.set_xy(10.0, 0.0);
        let (a_entity, _) = attach(&mut world, None, a);
        let mut b = Sprite::empty();
        b.set_xy(0.0, 20.0);
        let (b_entity, _) = attach(&mut world, None, b);
        let (child, child_id) = attach(&mut world, Some(a_entity), Sprite::empty());

        assert_eq!(view_matrix(&world, child_id).unwrap().transform(0.0, 0.0).x, 10.0);
        world.add_child(b_entity, child, true);
        let p = view_matrix(&world, child_id).unwrap().transform(0.0, 0.0);
        assert_eq!((p.x, p.y), (0.0, 20.0));
    }

    #[test]
    fn test_no_visual_ancestor_uses_local() {
        let mut world = World::new();
        let mut sprite = Sprite::empty();
        sprite.set_xy(3.0, 4.0).set_rotation(30.0);
        let (_, id) = attach(&mut world, None, sprite);
        let local = world.component_as::<Sprite>(id).unwrap().local_matrix();
        assert_eq!(view_matrix(&world, id), Some(local));
    }

    #[test]
    fn test_update_steps_tweens() {
        let mut world = World::new();
        let (entity, id) = attach(&mut world, None, Sprite::empty());
        world
            .get_mut::<Sprite>(entity)
            .unwrap()
            .x
            .animate_to_with(10.0, 1.0, crate::animation::ease::linear);
        world.update_component(id, 0.5);
        assert_eq!(world.get::<Sprite>(entity).unwrap().x.get(), 5.0);
        assert!(world.get::<Sprite>(entity).unwrap().flags().contains(SpriteFlags::LOCAL_DIRTY));
    }

    #[test]
    fn test_contains_local_is_half_open() {
        let sprite = Sprite::fill(0, 50.0, 50.0);
        assert!(sprite.contains_local(0.0, 0.0));
        assert!(sprite.contains_local(49.9, 49.9));
        assert!(!sprite.contains_local(50.0, 10.0));
        assert!(!sprite.contains_local(-0.1, 10.0));
    }

    #[test]
    fn test_visual_downcast() {
        let mut sprite = Sprite::fill(0xff00ff, 8.0, 8.0);
        sprite.visual_as_mut::<FillVisual>().unwrap().width = 16.0;
        assert_eq!(sprite.natural_width(), 16.0);
        assert!(sprite.visual_as::<EmptyVisual>().is_none());
    }
}
