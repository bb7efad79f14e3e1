//! Entity handles and tree links

use super::{Component, World};
use slotmap::new_key_type;

new_key_type! {
    /// Generation-checked handle to an entity in a [`World`]
    pub struct EntityId;

    /// Generation-checked handle to a component attached through a [`World`]
    pub struct ComponentId;
}

/// Intrusive links of one entity.
///
/// Children form a singly linked list through `next`; components form a
/// singly linked list through the component slots.
#[derive(Debug, Default)]
pub(crate) struct EntityNode {
    pub(crate) parent: Option<EntityId>,
    pub(crate) first_child: Option<EntityId>,
    pub(crate) next: Option<EntityId>,
    pub(crate) first_component: Option<ComponentId>,
    pub(crate) disposing: bool,
}

/// Iterator over the direct children of an entity, first to last
pub struct Children<'w> {
    pub(crate) world: &'w World,
    pub(crate) next: Option<EntityId>,
}

impl Iterator for Children<'_> {
    type Item = EntityId;

    fn next(&mut self) -> Option<EntityId> {
        let current = self.next?;
        self.next = self.world.next_sibling(current);
        Some(current)
    }
}

/// Iterator over the components of an entity, most recently added first
pub struct Components<'w> {
    pub(crate) world: &'w World,
    pub(crate) next: Option<ComponentId>,
}

impl Iterator for Components<'_> {
    type Item = ComponentId;

    fn next(&mut self) -> Option<ComponentId> {
        let current = self.next?;
        self.next = self.world.next_component(current);
        Some(current)
    }
}

/// Iterator from an entity's parent up to the root
pub struct Ancestors<'w> {
    pub(crate) world: &'w World,
    pub(crate) next: Option<EntityId>,
}

impl Iterator for Ancestors<'_> {
    type Item = EntityId;

    fn next(&mut self) -> Option<EntityId> {
        let current = self.next?;
        self.next = self.world.parent(current);
        Some(current)
    }
}

/// Chaining builder over one entity, returned by [`World::entity`]
///
/// ```
/// # use sprite_engine::ecs::World;
/// let mut world = World::new();
/// let root = world.create_entity();
/// let child = world.create_entity();
/// world.entity(root).add_child(child);
/// assert_eq!(world.parent(child), Some(root));
/// ```
pub struct EntityMut<'w> {
    world: &'w mut World,
    id: EntityId,
}

impl<'w> EntityMut<'w> {
    pub(crate) fn new(world: &'w mut World, id: EntityId) -> Self {
        Self { world, id }
    }

    /// The entity being edited
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Access the world directly
    pub fn world(&mut self) -> &mut World {
        self.world
    }

    /// Attach a component, replacing any component of the same type
    pub fn add<T: Component>(&mut self, component: T) -> &mut Self {
        self.world.add_component(self.id, component);
        self
    }

    /// Attach `child` as the last child
    pub fn add_child(&mut self, child: EntityId) -> &mut Self {
        self.world.add_child(self.id, child, true);
        self
    }

    /// Attach `child` as the first child
    pub fn add_child_first(&mut self, child: EntityId) -> &mut Self {
        self.world.add_child(self.id, child, false);
        self
    }

    /// Detach `child` if it is a child of this entity
    pub fn remove_child(&mut self, child: EntityId) -> &mut Self {
        self.world.remove_child(self.id, child);
        self
    }

    /// Detach the component of type `T` and return it
    pub fn remove<T: Component>(&mut self) -> Option<Box<T>> {
        self.world.remove_component::<T>(self.id)
    }

    /// Component of type `T`
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.world.get::<T>(self.id)
    }

    /// Mutable component of type `T`
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.world.get_mut::<T>(self.id)
    }

    /// Dispose the entity, its children and its components
    pub fn dispose(self) {
        self.world.dispose_entity(self.id);
    }
}
