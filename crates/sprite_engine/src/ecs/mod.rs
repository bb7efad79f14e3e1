//! Entity/component graph
//!
//! Entities form a tree through intrusive parent, first-child and
//! next-sibling links. Each entity owns a singly linked list of components,
//! at most one per concrete type. Both live in generation-checked arenas
//! owned by [`World`], so stale handles to disposed entities or components
//! are simply ignored.

pub mod component;
pub mod entity;
pub mod world;

#[cfg(test)]
mod tests;

pub use component::{AsAny, Component, Context};
pub use entity::{Ancestors, Children, ComponentId, Components, EntityId, EntityMut};
pub use world::World;
