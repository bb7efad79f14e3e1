use crate::ecs::{Component, Context, EntityId, World};
use crate::main_loop::MainLoop;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Named {
    name: &'static str,
    log: Log,
}

impl Component for Named {
    fn on_update(&mut self, _ctx: &mut Context<'_>, _dt: f32) {
        self.log.borrow_mut().push(self.name.to_string());
    }
}

/// Disposes a target entity on its first update
struct Killer {
    target: EntityId,
}

impl Component for Killer {
    fn on_update(&mut self, ctx: &mut Context<'_>, _dt: f32) {
        ctx.world.dispose_entity(self.target);
    }
}

/// Appends a new child carrying a logger on every update
struct Spawner {
    log: Log,
}

impl Component for Spawner {
    fn on_update(&mut self, ctx: &mut Context<'_>, _dt: f32) {
        let child = ctx.world.create_entity();
        ctx.world.add_component(child, Named { name: "spawned", log: Rc::clone(&self.log) });
        ctx.world.add_child(ctx.owner, child, true);
    }
}

fn named(world: &mut World, parent: EntityId, name: &'static str, log: &Log) -> EntityId {
    let entity = world.create_entity();
    world.add_component(entity, Named { name, log: Rc::clone(log) });
    world.add_child(parent, entity, true);
    entity
}

#[test]
fn test_disposed_sibling_is_skipped() {
    let mut world = World::new();
    let log: Log = Rc::default();
    let root = world.create_entity();
    let first = world.create_entity();
    world.add_child(root, first, true);
    let victim = named(&mut world, root, "victim", &log);
    let after = named(&mut world, root, "after", &log);
    world.add_component(first, Killer { target: victim });

    MainLoop::new().step(&mut world, root, 0.016);
    assert_eq!(*log.borrow(), vec!["after"]);
    assert!(!world.contains(victim));
    assert!(world.contains(after));
}

#[test]
fn test_spawned_children_wait_a_frame() {
    let mut world = World::new();
    let log: Log = Rc::default();
    let root = world.create_entity();
    world.add_component(root, Spawner { log: Rc::clone(&log) });

    let main_loop = MainLoop::new();
    main_loop.step(&mut world, root, 0.016);
    assert!(log.borrow().is_empty());
    assert_eq!(world.children(root).count(), 1);

    main_loop.step(&mut world, root, 0.016);
    assert_eq!(*log.borrow(), vec!["spawned"]);
    assert_eq!(world.children(root).count(), 2);
}

#[test]
fn test_self_disposing_root_stops_traversal() {
    let mut world = World::new();
    let log: Log = Rc::default();
    let root = world.create_entity();
    named(&mut world, root, "child", &log);
    world.add_component(root, Killer { target: root });

    MainLoop::new().step(&mut world, root, 0.016);
    assert!(log.borrow().is_empty());
    assert_eq!(world.entity_count(), 0);
}
