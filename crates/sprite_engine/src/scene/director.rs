//! Scene stack manager

use super::{Scene, Transition};
use crate::ecs::{Component, Context, EntityId, World};

const DEFAULT_WIDTH: f32 = 800.0;
const DEFAULT_HEIGHT: f32 = 600.0;

/// What happens to the outgoing scene once a stack change finishes
#[derive(Debug, Clone, Copy)]
enum Completion {
    /// Still on the stack, just no longer on top
    Hide(EntityId),
    /// Popped off the stack
    HideAndDispose(EntityId),
}

struct Transitor {
    transition: Box<dyn Transition>,
    completion: Completion,
}

/// Manages a stack of scene entities.
///
/// Stack operations need the rest of the world, so they take it as an
/// argument. From outside the director's own hooks, reach the component
/// through [`with_director`]:
///
/// ```
/// use sprite_engine::ecs::World;
/// use sprite_engine::scene::{with_director, Director};
///
/// let mut world = World::new();
/// let stage = world.create_entity();
/// world.add_component(stage, Director::new());
///
/// let menu = world.create_entity();
/// with_director(&mut world, stage, |director, world| {
///     director.push_scene(world, menu, None);
/// });
/// ```
pub struct Director {
    scenes: Vec<EntityId>,
    occluded: Vec<EntityId>,
    root: Option<EntityId>,
    transitor: Option<Transitor>,
    width: f32,
    height: f32,
}

impl Director {
    /// Create a director with an 800x600 stage
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            occluded: Vec::new(),
            root: None,
            transitor: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Set the stage size handed to transitions. Non-positive dimensions
    /// fall back to the defaults.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = if width > 0.0 { width } else { DEFAULT_WIDTH };
        self.height = if height > 0.0 { height } else { DEFAULT_HEIGHT };
        self
    }

    /// Stage width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Stage height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The stack, bottom first
    pub fn scenes(&self) -> &[EntityId] {
        &self.scenes
    }

    /// Scenes rendered beneath the top scene, bottom first
    pub fn occluded_scenes(&self) -> &[EntityId] {
        &self.occluded
    }

    /// The top of the stack
    pub fn top_scene(&self) -> Option<EntityId> {
        self.scenes.last().copied()
    }

    /// Entity holding the top scene as its only child
    pub fn root(&self) -> Option<EntityId> {
        self.root
    }

    /// Whether a transition is in progress
    pub fn is_transitioning(&self) -> bool {
        self.transitor.is_some()
    }

    /// Push a scene on top of the stack. A scene already on the stack is
    /// moved to the top.
    pub fn push_scene(&mut self, world: &mut World, scene: EntityId, transition: Option<Box<dyn Transition>>) {
        log::debug!("Director push {:?}", scene);
        self.complete_transition(world);

        match self.top_scene() {
            Some(old_top) if old_top != scene => {
                self.play_transition(world, old_top, scene, transition, Completion::Hide(old_top));
            }
            Some(_) => {}
            None => {
                self.add(world, scene);
                self.invalidate_visibility(world);
            }
        }
    }

    /// Pop and dispose the top scene
    pub fn pop_scene(&mut self, world: &mut World, transition: Option<Box<dyn Transition>>) {
        self.complete_transition(world);

        let Some(old_top) = self.scenes.pop() else {
            return;
        };
        log::debug!("Director pop {:?}", old_top);

        match self.top_scene() {
            Some(new_top) => {
                self.play_transition(world, old_top, new_top, transition, Completion::HideAndDispose(old_top));
            }
            None => {
                self.hide_and_dispose(world, old_top);
                self.invalidate_visibility(world);
            }
        }
    }

    /// Pop and dispose scenes until `scene` is on top. A scene that is not on
    /// the stack ends up alone on it.
    pub fn unwind_to_scene(&mut self, world: &mut World, scene: EntityId, transition: Option<Box<dyn Transition>>) {
        self.complete_transition(world);

        let Some(old_top) = self.top_scene() else {
            self.push_scene(world, scene, transition);
            return;
        };
        if old_top == scene {
            return;
        }
        log::debug!("Director unwind to {:?}", scene);

        self.scenes.pop();
        while let Some(&below) = self.scenes.last() {
            if below == scene {
                break;
            }
            self.scenes.pop();
            world.dispose_entity(below);
        }

        self.play_transition(world, old_top, scene, transition, Completion::HideAndDispose(old_top));
    }

    /// Finish the running transition immediately
    pub fn complete_transition(&mut self, world: &mut World) {
        let Some(mut transitor) = self.transitor.take() else {
            return;
        };
        transitor.transition.complete(world);
        self.finish(world, transitor.completion);
        self.invalidate_visibility(world);
        log::debug!("Director transition complete");
    }

    fn root_entity(&mut self, world: &mut World) -> EntityId {
        match self.root {
            Some(root) if world.contains(root) => root,
            _ => {
                let root = world.create_entity();
                self.root = Some(root);
                root
            }
        }
    }

    /// Make `scene` the top of the stack and the root's only scene child
    fn add(&mut self, world: &mut World, scene: EntityId) {
        let root = self.root_entity(world);
        if let Some(old_top) = self.top_scene() {
            world.remove_child(root, old_top);
        }
        self.scenes.retain(|&s| s != scene);
        self.scenes.push(scene);
        world.add_child(root, scene, true);
    }

    fn play_transition(
        &mut self,
        world: &mut World,
        from: EntityId,
        to: EntityId,
        transition: Option<Box<dyn Transition>>,
        completion: Completion,
    ) {
        if let Some(root) = self.root {
            world.remove_child(root, from);
        }
        self.add(world, to);

        match transition {
            Some(mut transition) => {
                log::debug!("Director transition {:?} -> {:?}", from, to);
                transition.init(world, from, to, self.width, self.height);
                self.recompute_occluded(world);
                // The outgoing scene keeps rendering underneath until done
                if !self.occluded.contains(&from) {
                    self.occluded.push(from);
                }
                self.transitor = Some(Transitor { transition, completion });
            }
            None => {
                self.finish(world, completion);
                self.invalidate_visibility(world);
            }
        }
    }

    fn finish(&mut self, world: &mut World, completion: Completion) {
        match completion {
            Completion::Hide(scene) => hide(world, scene),
            Completion::HideAndDispose(scene) => self.hide_and_dispose(world, scene),
        }
    }

    fn hide_and_dispose(&mut self, world: &mut World, scene: EntityId) {
        hide(world, scene);
        self.occluded.retain(|&s| s != scene);
        world.dispose_entity(scene);
    }

    /// Recompute which scenes show through, then announce the top scene
    fn invalidate_visibility(&mut self, world: &mut World) {
        self.recompute_occluded(world);
        if let Some(top) = self.top_scene() {
            show(world, top);
        }
    }

    /// Occluded scenes run from the topmost opaque scene (inclusive) up to
    /// the top scene (exclusive). A scene without a [`Scene`] component is
    /// opaque.
    fn recompute_occluded(&mut self, world: &World) {
        self.occluded.clear();
        let len = self.scenes.len();
        if len == 0 {
            return;
        }

        let mut ii = len;
        while ii > 0 {
            ii -= 1;
            let opaque = world.get::<Scene>(self.scenes[ii]).map_or(true, |s| s.opaque);
            if opaque {
                break;
            }
        }
        self.occluded.extend_from_slice(&self.scenes[ii..len - 1]);
    }
}

fn show(world: &World, scene: EntityId) {
    if let Some(s) = world.get::<Scene>(scene) {
        s.shown.emit();
    }
}

fn hide(world: &World, scene: EntityId) {
    if let Some(s) = world.get::<Scene>(scene) {
        s.hidden.emit();
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Director {
    fn on_added(&mut self, ctx: &mut Context<'_>) {
        let root = self.root_entity(ctx.world);
        ctx.world.add_child(ctx.owner, root, true);
    }

    fn on_removed(&mut self, ctx: &mut Context<'_>) {
        self.complete_transition(ctx.world);
        for scene in std::mem::take(&mut self.scenes) {
            ctx.world.dispose_entity(scene);
        }
        self.occluded.clear();
        if let Some(root) = self.root.take() {
            ctx.world.dispose_entity(root);
        }
    }

    fn on_update(&mut self, ctx: &mut Context<'_>, dt: f32) {
        let finished = match self.transitor.as_mut() {
            Some(transitor) => transitor.transition.update(ctx.world, dt),
            None => false,
        };
        if finished {
            self.complete_transition(ctx.world);
        }
    }
}

impl std::fmt::Debug for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("scenes", &self.scenes)
            .field("occluded", &self.occluded)
            .field("root", &self.root)
            .field("transitioning", &self.is_transitioning())
            .field("size", &(self.width, self.height))
            .finish()
    }
}

/// Run `f` with the [`Director`] attached to `entity`.
///
/// Returns `None` if the entity has no director or the director is busy
/// running one of its own hooks.
pub fn with_director<R>(
    world: &mut World,
    entity: EntityId,
    f: impl FnOnce(&mut Director, &mut World) -> R,
) -> Option<R> {
    world.with_component::<Director, _>(entity, |director, ctx| f(director, &mut *ctx.world))
}
