//! Animated scene changes

use crate::animation::{ease, EaseFunction};
use crate::display::Sprite;
use crate::ecs::{EntityId, World};

/// Animates the swap between two scenes.
///
/// `init` runs once when the director starts the transition, `update` runs
/// every frame until it returns `true`, then `complete` runs exactly once.
/// `complete` also runs early if another stack operation interrupts the
/// transition, and must leave both scenes in their resting state.
pub trait Transition {
    /// Prepare the scenes; `width`/`height` is the director's stage size
    fn init(&mut self, world: &mut World, from: EntityId, to: EntityId, width: f32, height: f32);

    /// Advance by `dt` seconds, returning `true` once finished
    fn update(&mut self, world: &mut World, dt: f32) -> bool;

    /// Snap to the final state
    fn complete(&mut self, world: &mut World);
}

/// Eased progress over a fixed duration, shared by the tweened transitions
#[derive(Debug, Clone, Copy)]
pub struct TweenClock {
    duration: f32,
    elapsed: f32,
    ease: EaseFunction,
}

impl TweenClock {
    /// Create a clock lasting `duration` seconds
    pub fn new(duration: f32, ease: EaseFunction) -> Self {
        Self { duration, elapsed: 0.0, ease }
    }

    /// Restart from zero
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance and report whether the duration has passed
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.ease)((self.elapsed / self.duration).clamp(0.0, 1.0))
    }

    /// Interpolate between two values at the current progress
    pub fn interp(&self, from: f32, to: f32) -> f32 {
        from + (to - from) * self.progress()
    }
}

/// Sprite of a scene entity, added if the scene has none
fn scene_sprite(world: &mut World, scene: EntityId) -> Option<&mut Sprite> {
    if !world.has::<Sprite>(scene) {
        world.add_component(scene, Sprite::empty());
    }
    world.get_mut::<Sprite>(scene)
}

/// Fades the incoming scene in over the outgoing one
#[derive(Debug)]
pub struct FadeTransition {
    clock: TweenClock,
    to: Option<EntityId>,
}

impl FadeTransition {
    /// Fade with the default quad-out easing
    pub fn new(duration: f32) -> Self {
        Self::with_ease(duration, ease::quad_out)
    }

    /// Fade with a custom easing
    pub fn with_ease(duration: f32, ease: EaseFunction) -> Self {
        Self { clock: TweenClock::new(duration, ease), to: None }
    }

    fn set_alpha(&self, world: &mut World, alpha: f32) {
        if let Some(sprite) = self.to.and_then(|to| world.get_mut::<Sprite>(to)) {
            sprite.alpha.set(alpha);
        }
    }
}

impl Transition for FadeTransition {
    fn init(&mut self, world: &mut World, _from: EntityId, to: EntityId, _width: f32, _height: f32) {
        self.clock.reset();
        self.to = Some(to);
        if let Some(sprite) = scene_sprite(world, to) {
            sprite.alpha.set(0.0);
        }
    }

    fn update(&mut self, world: &mut World, dt: f32) -> bool {
        let done = self.clock.advance(dt);
        self.set_alpha(world, self.clock.interp(0.0, 1.0));
        done
    }

    fn complete(&mut self, world: &mut World) {
        self.set_alpha(world, 1.0);
    }
}

/// Direction the scenes travel in a [`SlideTransition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Incoming scene enters from the right edge
    #[default]
    Left,
    /// Incoming scene enters from the left edge
    Right,
    /// Incoming scene enters from the bottom edge
    Up,
    /// Incoming scene enters from the top edge
    Down,
}

/// Slides the incoming scene in while pushing the outgoing scene out
#[derive(Debug)]
pub struct SlideTransition {
    clock: TweenClock,
    direction: SlideDirection,
    offset: (f32, f32),
    scenes: Option<(EntityId, EntityId)>,
}

impl SlideTransition {
    /// Slide with the default quad-out easing
    pub fn new(duration: f32, direction: SlideDirection) -> Self {
        Self::with_ease(duration, direction, ease::quad_out)
    }

    /// Slide with a custom easing
    pub fn with_ease(duration: f32, direction: SlideDirection, ease: EaseFunction) -> Self {
        Self {
            clock: TweenClock::new(duration, ease),
            direction,
            offset: (0.0, 0.0),
            scenes: None,
        }
    }

    /// Configured direction
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    fn place(&self, world: &mut World, from_xy: (f32, f32), to_xy: (f32, f32)) {
        let Some((from, to)) = self.scenes else {
            return;
        };
        if let Some(sprite) = world.get_mut::<Sprite>(from) {
            sprite.set_xy(from_xy.0, from_xy.1);
        }
        if let Some(sprite) = world.get_mut::<Sprite>(to) {
            sprite.set_xy(to_xy.0, to_xy.1);
        }
    }
}

impl Transition for SlideTransition {
    fn init(&mut self, world: &mut World, from: EntityId, to: EntityId, width: f32, height: f32) {
        self.clock.reset();
        self.offset = match self.direction {
            SlideDirection::Left => (width, 0.0),
            SlideDirection::Right => (-width, 0.0),
            SlideDirection::Up => (0.0, height),
            SlideDirection::Down => (0.0, -height),
        };
        scene_sprite(world, from);
        scene_sprite(world, to);
        self.scenes = Some((from, to));
        self.place(world, (0.0, 0.0), self.offset);
    }

    fn update(&mut self, world: &mut World, dt: f32) -> bool {
        let done = self.clock.advance(dt);
        let (x, y) = self.offset;
        let from_xy = (self.clock.interp(0.0, -x), self.clock.interp(0.0, -y));
        let to_xy = (self.clock.interp(x, 0.0), self.clock.interp(y, 0.0));
        self.place(world, from_xy, to_xy);
        done
    }

    fn complete(&mut self, world: &mut World) {
        self.place(world, (0.0, 0.0), (0.0, 0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_progress() {
        let mut clock = TweenClock::new(2.0, ease::linear);
        assert!(!clock.advance(0.5));
        assert_relative_eq!(clock.interp(10.0, 20.0), 12.5);
        assert!(clock.advance(2.0));
        assert_relative_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_clock_is_done() {
        let mut clock = TweenClock::new(0.0, ease::linear);
        assert!(clock.advance(0.0));
        assert_relative_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn test_fade_adds_sprite_and_fades_in() {
        let mut world = World::new();
        let from = world.create_entity();
        let to = world.create_entity();
        let mut fade = FadeTransition::with_ease(1.0, ease::linear);

        fade.init(&mut world, from, to, 800.0, 600.0);
        assert_eq!(world.get::<Sprite>(to).unwrap().alpha.get(), 0.0);
        assert!(!world.has::<Sprite>(from));

        assert!(!fade.update(&mut world, 0.25));
        assert_relative_eq!(world.get::<Sprite>(to).unwrap().alpha.get(), 0.25);
        assert!(fade.update(&mut world, 1.0));
        fade.complete(&mut world);
        assert_eq!(world.get::<Sprite>(to).unwrap().alpha.get(), 1.0);
    }

    #[test]
    fn test_slide_moves_both_scenes() {
        let mut world = World::new();
        let from = world.create_entity();
        let to = world.create_entity();
        let mut slide = SlideTransition::with_ease(1.0, SlideDirection::Left, ease::linear);

        slide.init(&mut world, from, to, 800.0, 600.0);
        assert_eq!(world.get::<Sprite>(to).unwrap().x.get(), 800.0);

        slide.update(&mut world, 0.5);
        assert_relative_eq!(world.get::<Sprite>(from).unwrap().x.get(), -400.0);
        assert_relative_eq!(world.get::<Sprite>(to).unwrap().x.get(), 400.0);

        slide.complete(&mut world);
        assert_eq!(world.get::<Sprite>(from).unwrap().x.get(), 0.0);
        assert_eq!(world.get::<Sprite>(to).unwrap().x.get(), 0.0);
    }

    #[test]
    fn test_slide_down_uses_height() {
        let mut world = World::new();
        let from = world.create_entity();
        let to = world.create_entity();
        let mut slide = SlideTransition::new(1.0, SlideDirection::Down);
        slide.init(&mut world, from, to, 800.0, 600.0);
        let sprite = world.get::<Sprite>(to).unwrap();
        assert_eq!((sprite.x.get(), sprite.y.get()), (0.0, -600.0));
    }
}
