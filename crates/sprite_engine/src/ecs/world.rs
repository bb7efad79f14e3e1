//! World: owner of every entity and component

use super::component::{component_type, ComponentSlot};
use super::entity::{Ancestors, Children, Components, EntityMut, EntityNode};
use super::{Component, ComponentId, Context, EntityId};
use slotmap::SlotMap;
use std::any::TypeId;
use std::fmt;

/// Arena of entities and components plus the links between them
pub struct World {
    entities: SlotMap<EntityId, EntityNode>,
    components: SlotMap<ComponentId, ComponentSlot>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            components: SlotMap::with_key(),
        }
    }

    /// Create a standalone entity with no parent, children or components
    pub fn create_entity(&mut self) -> EntityId {
        self.entities.insert(EntityNode::default())
    }

    /// Chaining access to one entity
    pub fn entity(&mut self, entity: EntityId) -> EntityMut<'_> {
        EntityMut::new(self, entity)
    }

    /// Whether the entity exists and has not been disposed
    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of live component slots
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    // ---------------------------------------------------------------------
    // Tree links
    // ---------------------------------------------------------------------

    /// Parent of an entity
    pub fn parent(&self, entity: EntityId) -> Option<EntityId> {
        self.entities.get(entity)?.parent
    }

    /// First child of an entity
    pub fn first_child(&self, entity: EntityId) -> Option<EntityId> {
        self.entities.get(entity)?.first_child
    }

    /// Next sibling of an entity
    pub fn next_sibling(&self, entity: EntityId) -> Option<EntityId> {
        self.entities.get(entity)?.next
    }

    /// Iterate the direct children of an entity
    pub fn children(&self, entity: EntityId) -> Children<'_> {
        Children {
            world: self,
            next: self.first_child(entity),
        }
    }

    /// Iterate from the parent of `entity` up to the root
    pub fn ancestors(&self, entity: EntityId) -> Ancestors<'_> {
        Ancestors {
            world: self,
            next: self.parent(entity),
        }
    }

    /// Whether `ancestor` is `entity` itself or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: EntityId, entity: EntityId) -> bool {
        ancestor == entity || self.ancestors(entity).any(|e| e == ancestor)
    }

    /// Attach `child` to `parent`, at the tail when `append` is true and at
    /// the head otherwise. A child that already has a parent is moved.
    ///
    /// Returns false without changing anything if either entity is disposed
    /// or being disposed, or if the move would make an entity its own
    /// ancestor.
    pub fn add_child(&mut self, parent: EntityId, child: EntityId, append: bool) -> bool {
        if !self.is_live(parent) || !self.is_live(child) {
            log::warn!("add_child on a disposed entity ({parent:?} <- {child:?})");
            return false;
        }
        if self.is_ancestor_or_self(child, parent) {
            log::warn!("Refusing to attach {child:?} beneath itself ({parent:?})");
            return false;
        }

        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child);
        }

        if append {
            let mut tail = None;
            let mut cursor = self.first_child(parent);
            while let Some(node) = cursor {
                tail = Some(node);
                cursor = self.next_sibling(node);
            }
            match tail {
                Some(tail) => self.entities[tail].next = Some(child),
                None => self.entities[parent].first_child = Some(child),
            }
        } else {
            let head = self.entities[parent].first_child;
            self.entities[child].next = head;
            self.entities[parent].first_child = Some(child);
        }
        self.entities[child].parent = Some(parent);
        true
    }

    fn is_live(&self, entity: EntityId) -> bool {
        self.entities.get(entity).is_some_and(|node| !node.disposing)
    }

    /// Detach `child` from `parent` without disposing it. Returns false if
    /// `child` was not a child of `parent`.
    pub fn remove_child(&mut self, parent: EntityId, child: EntityId) -> bool {
        let mut prev: Option<EntityId> = None;
        let mut cursor = self.first_child(parent);
        while let Some(node) = cursor {
            let next = self.next_sibling(node);
            if node == child {
                match prev {
                    Some(prev) => self.entities[prev].next = next,
                    None => self.entities[parent].first_child = next,
                }
                let removed = &mut self.entities[child];
                removed.parent = None;
                removed.next = None;
                return true;
            }
            prev = Some(node);
            cursor = next;
        }
        false
    }

    /// Dispose an entity: detach it from its parent, dispose every child,
    /// then remove and dispose every component, head first. Disposing an
    /// entity twice is a no-op.
    pub fn dispose_entity(&mut self, entity: EntityId) {
        match self.entities.get_mut(entity) {
            Some(node) if !node.disposing => node.disposing = true,
            _ => return,
        }
        log::trace!("Disposing entity {entity:?}");

        if let Some(parent) = self.parent(entity) {
            self.remove_child(parent, entity);
        }
        while let Some(child) = self.first_child(entity) {
            self.dispose_entity(child);
            // A child that could not be disposed (already mid-disposal) is
            // still unlinked so the loop advances.
            self.remove_child(entity, child);
        }
        while let Some(component) = self.first_component(entity) {
            self.dispose_component(component);
        }
        self.entities.remove(entity);
    }

    // ---------------------------------------------------------------------
    // Components
    // ---------------------------------------------------------------------

    /// Head of an entity's component list
    pub fn first_component(&self, entity: EntityId) -> Option<ComponentId> {
        self.entities.get(entity)?.first_component
    }

    /// Next component in the owner's list
    pub fn next_component(&self, component: ComponentId) -> Option<ComponentId> {
        self.components.get(component)?.next
    }

    /// Iterate an entity's components, most recently added first
    pub fn components(&self, entity: EntityId) -> Components<'_> {
        Components {
            world: self,
            next: self.first_component(entity),
        }
    }

    /// Entity a component is attached to
    pub fn owner(&self, component: ComponentId) -> Option<EntityId> {
        self.components.get(component)?.owner
    }

    /// Attach a component, replacing any component of the same concrete type.
    ///
    /// The replaced component receives `on_removed` and is dropped; the new
    /// component becomes the head of the list and receives `on_added`.
    /// Adding to a disposed entity drops the component, logs a warning and
    /// returns a null handle.
    pub fn add_component<T: Component>(&mut self, entity: EntityId, component: T) -> ComponentId {
        log::trace!("Adding {} to {entity:?}", std::any::type_name::<T>());
        self.add_boxed(entity, Box::new(component))
    }

    /// Attach an already boxed component. See [`World::add_component`].
    pub fn add_boxed(&mut self, entity: EntityId, component: Box<dyn Component>) -> ComponentId {
        if !self.contains(entity) {
            log::warn!("add_component on disposed entity {entity:?}");
            return ComponentId::default();
        }

        let type_id = component_type(&*component);
        if let Some(existing) = self.component_id_by_type(entity, type_id) {
            self.detach(existing, false);
        }

        // The entity may have been disposed by the replaced component's hook
        if !self.contains(entity) {
            return ComponentId::default();
        }

        let mut slot = ComponentSlot::new(type_id);
        slot.owner = Some(entity);
        slot.next = self.entities[entity].first_component;
        let id = self.components.insert(slot);
        self.entities[entity].first_component = Some(id);

        let mut component = component;
        {
            let mut ctx = Context { world: self, owner: entity, id };
            component.on_added(&mut ctx);
        }
        self.check_in(id, component);
        id
    }

    /// Detach the component of type `T` from `entity`, calling its
    /// `on_removed`, and hand it back.
    ///
    /// Returns `None` if no such component exists, or if the component is
    /// currently running one of its own hooks. In the latter case it is still
    /// detached and its `on_removed` runs when the hook returns.
    pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> Option<Box<T>> {
        let id = self.component_id::<T>(entity)?;
        let removed = self.detach(id, false)?;
        removed.into_any().downcast::<T>().ok()
    }

    /// Detach a component by handle without disposing it
    pub fn remove_component_by_id(&mut self, component: ComponentId) -> Option<Box<dyn Component>> {
        self.detach(component, false)
    }

    /// Detach a component and destroy it: `on_removed` then `dispose`.
    /// Disposing twice, or disposing a stale handle, is a no-op.
    pub fn dispose_component(&mut self, component: ComponentId) {
        self.detach(component, true);
    }

    /// Handle of the component of exact type `T`
    pub fn component_id<T: Component>(&self, entity: EntityId) -> Option<ComponentId> {
        self.component_id_by_type(entity, TypeId::of::<T>())
    }

    fn component_id_by_type(&self, entity: EntityId, type_id: TypeId) -> Option<ComponentId> {
        self.components(entity)
            .find(|&id| self.components.get(id).is_some_and(|slot| slot.type_id == type_id))
    }

    /// Whether `entity` has a component of exact type `T`
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.component_id::<T>(entity).is_some()
    }

    /// Component of exact type `T`. `None` while that component is running
    /// one of its own hooks.
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        self.component_as::<T>(self.component_id::<T>(entity)?)
    }

    /// Mutable component of exact type `T`
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        let id = self.component_id::<T>(entity)?;
        self.component_as_mut::<T>(id)
    }

    /// Component by handle
    pub fn component(&self, component: ComponentId) -> Option<&dyn Component> {
        self.components.get(component)?.instance.as_deref()
    }

    /// Mutable component by handle
    pub fn component_mut(&mut self, component: ComponentId) -> Option<&mut dyn Component> {
        match self.components.get_mut(component)?.instance.as_mut() {
            Some(instance) => Some(instance.as_mut()),
            None => None,
        }
    }

    /// Component by handle, downcast to `T`
    pub fn component_as<T: Component>(&self, component: ComponentId) -> Option<&T> {
        self.component(component)?.as_any().downcast_ref::<T>()
    }

    /// Mutable component by handle, downcast to `T`
    pub fn component_as_mut<T: Component>(&mut self, component: ComponentId) -> Option<&mut T> {
        self.component_mut(component)?.as_any_mut().downcast_mut::<T>()
    }

    /// Whether a component is checked out for one of its hooks
    pub fn is_busy(&self, component: ComponentId) -> bool {
        self.components.get(component).is_some_and(|slot| slot.instance.is_none())
    }

    /// Run `f` with the component of type `T` and a context giving access to
    /// the rest of the world.
    pub fn with_component<T, R>(
        &mut self,
        entity: EntityId,
        f: impl FnOnce(&mut T, &mut Context<'_>) -> R,
    ) -> Option<R>
    where
        T: Component,
    {
        let id = self.component_id::<T>(entity)?;
        self.with_component_id(id, |component, ctx| {
            component.as_any_mut().downcast_mut::<T>().map(|c| f(c, ctx))
        })
        .flatten()
    }

    /// Run `f` with an attached component checked out of the world
    pub fn with_component_id<R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&mut dyn Component, &mut Context<'_>) -> R,
    ) -> Option<R> {
        let slot = self.components.get_mut(id)?;
        let owner = slot.owner?;
        let mut instance = slot.instance.take()?;
        let result = {
            let mut ctx = Context { world: self, owner, id };
            f(instance.as_mut(), &mut ctx)
        };
        self.check_in(id, instance);
        Some(result)
    }

    /// Run one frame of a component: `on_start` the first time, then
    /// `on_update`. Detached, busy or stale components are skipped.
    pub fn update_component(&mut self, id: ComponentId, dt: f32) {
        let first = match self.components.get_mut(id) {
            Some(slot) if slot.owner.is_some() && slot.instance.is_some() => {
                !std::mem::replace(&mut slot.started, true)
            }
            _ => return,
        };
        self.with_component_id(id, |component, ctx| {
            if first {
                component.on_start(ctx);
                if ctx.world.owner(ctx.id) != Some(ctx.owner) {
                    return;
                }
            }
            component.on_update(ctx, dt);
        });
    }

    /// Unlink a component and run its removal hooks, or queue them if the
    /// component is busy. Returns the instance once it is fully detached.
    fn detach(&mut self, id: ComponentId, dispose: bool) -> Option<Box<dyn Component>> {
        let owner = self.components.get(id)?.owner;
        if let Some(owner) = owner {
            self.unlink(owner, id);
        }

        let slot = self.components.get_mut(id)?;
        if let Some(owner) = owner {
            slot.detached_from = Some(owner);
            slot.pending_removed = true;
        }
        if dispose && !slot.disposed {
            slot.disposed = true;
            slot.pending_dispose = true;
        }

        // A detached slot only survives while its component is busy, in
        // which case the queued hooks run at check-in.
        let instance = slot.instance.take()?;
        self.check_in(id, instance)
    }

    /// Splice a component out of its owner's list
    fn unlink(&mut self, owner: EntityId, id: ComponentId) {
        let next = self.components.get(id).and_then(|slot| slot.next);
        let mut prev: Option<ComponentId> = None;
        let mut cursor = self.first_component(owner);
        while let Some(current) = cursor {
            if current == id {
                match prev {
                    Some(prev) => self.components[prev].next = next,
                    None => self.entities[owner].first_component = next,
                }
                break;
            }
            prev = Some(current);
            cursor = self.next_component(current);
        }
        let slot = &mut self.components[id];
        slot.owner = None;
        slot.next = None;
        slot.started = false;
    }

    /// Return a checked-out component to its slot, first running any removal
    /// or disposal requested while it was busy. A component that ends up
    /// detached has its slot freed and is returned.
    fn check_in(&mut self, id: ComponentId, mut instance: Box<dyn Component>) -> Option<Box<dyn Component>> {
        loop {
            let slot = self.components.get_mut(id)?;
            if !slot.pending_removed && !slot.pending_dispose {
                if slot.owner.is_some() {
                    slot.instance = Some(instance);
                    return None;
                }
                self.components.remove(id);
                return Some(instance);
            }

            let removed = std::mem::take(&mut slot.pending_removed);
            let dispose = std::mem::take(&mut slot.pending_dispose);
            let owner = slot.detached_from.unwrap_or_default();

            let mut ctx = Context { world: self, owner, id };
            if removed {
                instance.on_removed(&mut ctx);
            }
            if dispose {
                instance.dispose(&mut ctx);
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.entities.len())
            .field("components", &self.components.len())
            .finish()
    }
}
