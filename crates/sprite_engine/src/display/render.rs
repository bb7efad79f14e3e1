//! Per-frame drawing walk

use super::{Sprite, Surface};
use crate::ecs::{EntityId, World};
use crate::scene::Director;

/// Draw the subtree rooted at `entity` onto `surface`.
///
/// A sprite that is invisible or fully transparent skips its whole subtree.
/// Otherwise its state (alpha, blend mode, local matrix, scissor) is pushed
/// for the duration of the subtree. Each node draws its drawable components,
/// then the scenes its [`Director`] lists as occluded, then its children in
/// order, so later siblings land on top.
pub fn render(world: &World, entity: EntityId, surface: &mut dyn Surface) {
    let sprite = world.get::<Sprite>(entity);
    if let Some(sprite) = sprite {
        let alpha = sprite.alpha.get();
        if !sprite.is_visible() || alpha <= 0.0 {
            return;
        }

        surface.save();
        if alpha < 1.0 {
            surface.multiply_alpha(alpha);
        }
        if let Some(mode) = sprite.blend_mode() {
            surface.set_blend_mode(mode);
        }

        let mut matrix = sprite.local_matrix();
        if sprite.is_pixel_snapping() {
            matrix.m02 = matrix.m02.round();
            matrix.m12 = matrix.m12.round();
        }
        surface.transform(&matrix);

        if let Some(scissor) = sprite.scissor() {
            surface.apply_scissor(&scissor);
        }
    }

    for id in world.components(entity) {
        if let Some(drawable) = world.component(id).and_then(|c| c.as_drawable()) {
            drawable.draw(surface);
        }
    }

    if let Some(director) = world.get::<Director>(entity) {
        for &scene in director.occluded_scenes() {
            render(world, scene, surface);
        }
    }

    for child in world.children(entity) {
        render(world, child, surface);
    }

    if sprite.is_some() {
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{BlendMode, CommandList, DrawKind};
    use crate::foundation::math::Rectangle;

    fn fill(world: &mut World, parent: Option<EntityId>, color: u32) -> EntityId {
        let entity = world.create_entity();
        world.add_component(entity, Sprite::fill(color, 10.0, 10.0));
        if let Some(parent) = parent {
            world.add_child(parent, entity, true);
        }
        entity
    }

    fn colors(list: &CommandList) -> Vec<u32> {
        list.commands()
            .iter()
            .filter_map(|c| match c.kind {
                DrawKind::FillRect { color, .. } => Some(color),
                DrawKind::Texture { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_draws_parent_before_children_in_order() {
        let mut world = World::new();
        let root = fill(&mut world, None, 1);
        fill(&mut world, Some(root), 2);
        fill(&mut world, Some(root), 3);

        let mut list = CommandList::new();
        render(&world, root, &mut list);
        assert_eq!(colors(&list), vec![1, 2, 3]);
        assert_eq!(list.depth(), 0);
    }

    #[test]
    fn test_invisible_and_transparent_prune_subtree() {
        let mut world = World::new();
        let root = fill(&mut world, None, 1);
        let hidden = fill(&mut world, Some(root), 2);
        fill(&mut world, Some(hidden), 3);
        let clear = fill(&mut world, Some(root), 4);
        fill(&mut world, Some(clear), 5);
        world.get_mut::<Sprite>(hidden).unwrap().set_visible(false);
        world.get_mut::<Sprite>(clear).unwrap().set_alpha(0.0);

        let mut list = CommandList::new();
        render(&world, root, &mut list);
        assert_eq!(colors(&list), vec![1]);
    }

    #[test]
    fn test_state_accumulates_down_the_tree() {
        let mut world = World::new();
        let root = fill(&mut world, None, 1);
        world
            .get_mut::<Sprite>(root)
            .unwrap()
            .set_xy(100.0, 0.0)
            .set_alpha(0.5)
            .set_blend_mode(Some(BlendMode::Add));
        let child = fill(&mut world, Some(root), 2);
        world.get_mut::<Sprite>(child).unwrap().set_xy(5.0, 5.0).set_alpha(0.5);

        let mut list = CommandList::new();
        render(&world, root, &mut list);
        let state = list.commands()[1].state;
        assert_eq!(state.matrix.transform(0.0, 0.0).x, 105.0);
        assert_eq!(state.alpha, 0.25);
        assert_eq!(state.blend_mode, BlendMode::Add);
    }

    #[test]
    fn test_pixel_snapping_rounds_translation() {
        let mut world = World::new();
        let root = fill(&mut world, None, 1);
        let sprite = world.get_mut::<Sprite>(root).unwrap();
        assert!(sprite.is_pixel_snapping());
        sprite.set_xy(10.4, 7.6);

        let mut list = CommandList::new();
        render(&world, root, &mut list);
        let matrix = list.commands()[0].state.matrix;
        assert_eq!((matrix.m02, matrix.m12), (10.0, 8.0));

        world.get_mut::<Sprite>(root).unwrap().set_pixel_snapping(false);
        let mut list = CommandList::new();
        render(&world, root, &mut list);
        let matrix = list.commands()[0].state.matrix;
        assert_eq!((matrix.m02, matrix.m12), (10.4, 7.6));
    }

    #[test]
    fn test_scissor_clips_in_surface_space() {
        let mut world = World::new();
        let root = fill(&mut world, None, 1);
        world
            .get_mut::<Sprite>(root)
            .unwrap()
            .set_xy(50.0, 50.0)
            .set_scissor(Some(Rectangle::new(0.0, 0.0, 5.0, 5.0)));

        let mut list = CommandList::new();
        render(&world, root, &mut list);
        assert_eq!(
            list.commands()[0].state.scissor,
            Some(Rectangle::new(50.0, 50.0, 5.0, 5.0))
        );
    }

    #[test]
    fn test_entity_without_sprite_still_renders_children() {
        let mut world = World::new();
        let group = world.create_entity();
        fill(&mut world, Some(group), 7);

        let mut list = CommandList::new();
        render(&world, group, &mut list);
        assert_eq!(colors(&list), vec![7]);
    }
}
