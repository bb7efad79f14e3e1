use crate::display::{render, CommandList, DrawKind, Sprite};
use crate::ecs::{Component, Context, EntityId, World};
use crate::main_loop::MainLoop;
use crate::scene::{with_director, Director, FadeTransition, Scene};
use std::cell::RefCell;
use std::rc::Rc;

type Ticks = Rc<RefCell<Vec<&'static str>>>;

struct Ticker {
    name: &'static str,
    ticks: Ticks,
}

impl Component for Ticker {
    fn on_update(&mut self, _ctx: &mut Context<'_>, _dt: f32) {
        self.ticks.borrow_mut().push(self.name);
    }
}

struct Stage {
    world: World,
    root: EntityId,
    ticks: Ticks,
}

impl Stage {
    fn new() -> Self {
        let mut world = World::new();
        let root = world.create_entity();
        world.add_component(root, Director::new());
        Self { world, root, ticks: Rc::default() }
    }

    /// Scene entity drawing a fill of `color` and logging its updates
    fn scene(&mut self, name: &'static str, color: u32, opaque: bool) -> EntityId {
        let entity = self.world.create_entity();
        self.world.add_component(entity, Scene::new(opaque));
        self.world.add_component(entity, Sprite::fill(color, 10.0, 10.0));
        self.world.add_component(entity, Ticker { name, ticks: Rc::clone(&self.ticks) });
        entity
    }

    fn push(&mut self, scene: EntityId) {
        with_director(&mut self.world, self.root, |d, w| d.push_scene(w, scene, None));
    }

    fn frame(&mut self) -> Vec<&'static str> {
        self.ticks.borrow_mut().clear();
        MainLoop::new().step(&mut self.world, self.root, 0.016);
        self.ticks.borrow().clone()
    }

    fn drawn_colors(&self) -> Vec<u32> {
        let mut list = CommandList::new();
        render(&self.world, self.root, &mut list);
        list.commands()
            .iter()
            .filter_map(|c| match c.kind {
                DrawKind::FillRect { color, .. } => Some(color),
                DrawKind::Texture { .. } => None,
            })
            .collect()
    }
}

#[test]
fn test_only_top_scene_updates() {
    let mut stage = Stage::new();
    let menu = stage.scene("menu", 1, true);
    let game = stage.scene("game", 2, true);
    let pause = stage.scene("pause", 3, false);
    stage.push(menu);
    stage.push(game);
    stage.push(pause);

    assert_eq!(stage.frame(), vec!["pause"]);
    assert_eq!(stage.drawn_colors(), vec![2, 3]);

    with_director(&mut stage.world, stage.root, |d, w| d.pop_scene(w, None));
    assert_eq!(stage.frame(), vec!["game"]);
    assert_eq!(stage.drawn_colors(), vec![2]);
}

#[test]
fn test_fade_renders_both_scenes_until_done() {
    let mut stage = Stage::new();
    let menu = stage.scene("menu", 1, true);
    let game = stage.scene("game", 2, true);
    stage.push(menu);
    with_director(&mut stage.world, stage.root, |d, w| {
        d.push_scene(w, game, Some(Box::new(FadeTransition::new(0.05))));
    });

    // Alpha is 0 before the first update, so only the outgoing scene shows
    assert_eq!(stage.drawn_colors(), vec![1]);
    assert_eq!(stage.frame(), vec!["game"]);
    assert_eq!(stage.drawn_colors(), vec![1, 2]);

    for _ in 0..5 {
        stage.frame();
    }
    let director = stage.world.get::<Director>(stage.root).unwrap();
    assert!(!director.is_transitioning());
    assert_eq!(stage.drawn_colors(), vec![2]);
}

#[test]
fn test_disposing_stage_disposes_scenes() {
    let mut stage = Stage::new();
    let menu = stage.scene("menu", 1, true);
    let game = stage.scene("game", 2, true);
    stage.push(menu);
    stage.push(game);

    stage.world.dispose_entity(stage.root);
    assert!(!stage.world.contains(menu));
    assert!(!stage.world.contains(game));
    assert_eq!(stage.world.entity_count(), 0);
}
