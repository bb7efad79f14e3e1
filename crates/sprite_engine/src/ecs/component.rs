//! Component trait and lifecycle context

use super::{ComponentId, EntityId, World};
use crate::display::Drawable;
use std::any::{Any, TypeId};

/// Upcasting helpers so components can be downcast to their concrete type
pub trait AsAny: Any {
    /// Borrow as `dyn Any`
    fn as_any(&self) -> &dyn Any;
    /// Mutably borrow as `dyn Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Convert a box into `Box<dyn Any>`
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// World access handed to component hooks
pub struct Context<'w> {
    /// The world the component lives in
    pub world: &'w mut World,
    /// The entity the component is (or was, during `on_removed`) attached to
    pub owner: EntityId,
    /// The component's own handle
    pub id: ComponentId,
}

/// A unit of behavior attached to an entity.
///
/// Hooks run with the component temporarily checked out of the world, so
/// a hook can freely edit the tree through [`Context::world`] but cannot
/// look itself up there.
///
/// Lifecycle:
/// - `on_added` right after the component is linked to its owner
/// - `on_start` once, right before the first `on_update`
/// - `on_update` every frame while the owner is in the updated tree
/// - `on_removed` right after the component is unlinked
/// - `dispose` after `on_removed` when the component is destroyed rather than
///   merely removed
#[allow(unused_variables)]
pub trait Component: AsAny {
    /// Called after the component is attached
    fn on_added(&mut self, ctx: &mut Context<'_>) {}

    /// Called after the component is detached
    fn on_removed(&mut self, ctx: &mut Context<'_>) {}

    /// Called once before the first update
    fn on_start(&mut self, ctx: &mut Context<'_>) {}

    /// Called every frame with the frame delta in seconds
    fn on_update(&mut self, ctx: &mut Context<'_>, dt: f32) {}

    /// Release resources when the component is destroyed
    fn dispose(&mut self, ctx: &mut Context<'_>) {}

    /// Drawing capability, for components that render something
    fn as_drawable(&self) -> Option<&dyn Drawable> {
        None
    }
}

/// Concrete type of a boxed component
pub(crate) fn component_type(component: &dyn Component) -> TypeId {
    component.as_any().type_id()
}

/// Arena slot holding one component and its intrusive link
pub(crate) struct ComponentSlot {
    pub(crate) owner: Option<EntityId>,
    pub(crate) next: Option<ComponentId>,
    pub(crate) type_id: TypeId,
    pub(crate) started: bool,
    /// `None` while a hook of this component is running
    pub(crate) instance: Option<Box<dyn Component>>,
    /// Entity the component was unlinked from while checked out
    pub(crate) detached_from: Option<EntityId>,
    pub(crate) pending_removed: bool,
    pub(crate) pending_dispose: bool,
    pub(crate) disposed: bool,
}

impl ComponentSlot {
    pub(crate) fn new(type_id: TypeId) -> Self {
        Self {
            owner: None,
            next: None,
            type_id,
            started: false,
            instance: None,
            detached_from: None,
            pending_removed: false,
            pending_dispose: false,
            disposed: false,
        }
    }
}
