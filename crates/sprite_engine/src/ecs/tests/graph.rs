//! Tree structure tests: child ordering, reparenting and acyclicity

use crate::ecs::{Component, Context, EntityId, World};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_prepend_order() {
        let mut world = World::new();
        let root = world.create_entity();
        let a = world.create_entity();
        let b = world.create_entity();
        let c = world.create_entity();

        world.add_child(root, a, true);
        world.add_child(root, b, true);
        world.add_child(root, c, false);

        let order: Vec<_> = world.children(root).collect();
        assert_eq!(order, vec![c, a, b]);
        assert_eq!(world.parent(b), Some(root));
    }

    #[test]
    fn test_move_between_parents() {
        let mut world = World::new();
        let first = world.create_entity();
        let second = world.create_entity();
        let child = world.create_entity();
        let sibling = world.create_entity();

        world.entity(first).add_child(child).add_child(sibling);
        world.add_child(second, child, true);

        assert_eq!(world.children(first).collect::<Vec<_>>(), vec![sibling]);
        assert_eq!(world.children(second).collect::<Vec<_>>(), vec![child]);
        assert_eq!(world.parent(child), Some(second));
        assert_eq!(world.next_sibling(child), None);
    }

    #[test]
    fn test_remove_child_is_not_dispose() {
        let mut world = World::new();
        let root = world.create_entity();
        let a = world.create_entity();
        let b = world.create_entity();
        world.entity(root).add_child(a).add_child(b);

        assert!(world.remove_child(root, a));
        assert!(world.contains(a));
        assert_eq!(world.parent(a), None);
        assert_eq!(world.next_sibling(a), None);
        assert_eq!(world.first_child(root), Some(b));

        // Not a child: no-op
        assert!(!world.remove_child(root, a));
        assert!(!world.remove_child(b, root));
    }

    #[test]
    fn test_cycles_are_refused() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let c = world.create_entity();
        world.entity(a).add_child(b);
        world.entity(b).add_child(c);

        assert!(!world.add_child(c, a, true));
        assert!(!world.add_child(b, b, true));
        assert!(!world.add_child(c, b, false));

        assert_eq!(world.parent(a), None);
        assert_eq!(world.parent(b), Some(a));
        assert_eq!(world.ancestors(c).collect::<Vec<_>>(), vec![b, a]);
    }

    #[test]
    fn test_random_edits_stay_acyclic() {
        let mut world = World::new();
        let nodes: Vec<_> = (0..8).map(|_| world.create_entity()).collect();

        // Deterministic pseudo-random sequence of attach/detach operations
        let mut seed = 0x2545_f491_u32;
        for _ in 0..400 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let parent = nodes[(seed % 8) as usize];
            let child = nodes[((seed >> 8) % 8) as usize];
            if seed & 0x1000 == 0 {
                world.add_child(parent, child, seed & 0x2000 == 0);
            } else {
                world.remove_child(parent, child);
            }

            for &node in &nodes {
                assert!(world.ancestors(node).all(|a| a != node));
                assert!(world.ancestors(node).count() < nodes.len());
            }
        }
    }

    #[test]
    fn test_dispose_clears_back_pointers() {
        let mut world = World::new();
        let root = world.create_entity();
        let mid = world.create_entity();
        let leaf = world.create_entity();
        let keep = world.create_entity();
        world.entity(root).add_child(mid).add_child(keep);
        world.entity(mid).add_child(leaf);

        world.dispose_entity(mid);

        assert!(!world.contains(mid));
        assert!(!world.contains(leaf));
        assert_eq!(world.children(root).collect::<Vec<_>>(), vec![keep]);
        assert_eq!(world.entity_count(), 2);

        world.dispose_entity(mid);
        assert_eq!(world.entity_count(), 2);
        assert!(!world.add_child(root, mid, true));
    }

    /// Tries to hang a new child under its owner while being torn down
    struct Adopter {
        accepted: std::rc::Rc<std::cell::Cell<bool>>,
    }

    impl Component for Adopter {
        fn on_removed(&mut self, ctx: &mut Context<'_>) {
            let child = ctx.world.create_entity();
            self.accepted.set(ctx.world.add_child(ctx.owner, child, true));
            ctx.world.dispose_entity(child);
        }
    }

    #[test]
    fn test_dying_parent_refuses_children() {
        let mut world = World::new();
        let root = world.create_entity();
        let accepted = std::rc::Rc::new(std::cell::Cell::new(true));
        world.add_component(root, Adopter { accepted: std::rc::Rc::clone(&accepted) });

        world.dispose_entity(root);

        assert!(!accepted.get());
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_orphan_survives_refused_attach() {
        let mut world = World::new();
        let parent = world.create_entity();
        let orphan = world.create_entity();

        struct Attach(EntityId);
        impl Component for Attach {
            fn on_removed(&mut self, ctx: &mut Context<'_>) {
                ctx.world.add_child(ctx.owner, self.0, true);
            }
        }
        world.add_component(parent, Attach(orphan));

        world.dispose_entity(parent);

        assert!(world.contains(orphan));
        assert_eq!(world.parent(orphan), None);
        assert_eq!(world.entity_count(), 1);
    }
}
