//! Sprite demo application
//!
//! Runs a short headless session: a title scene fades into a play scene
//! where a button spins when clicked and a box bounces on a scripted loop.
//! Configuration is read from `demo.toml` when present.

use sprite_engine::foundation::logging;
use sprite_engine::prelude::*;
use sprite_engine::script::Repeat;
use std::cell::Cell;
use std::rc::Rc;

const CONFIG_PATH: &str = "demo.toml";
const FRAMES: u64 = 180;

struct DemoApp {
    frame: u64,
    clicks: Rc<Cell<u32>>,
    button: Option<EntityId>,
}

impl DemoApp {
    fn new() -> Self {
        Self { frame: 0, clicks: Rc::new(Cell::new(0)), button: None }
    }

    fn title_scene(world: &mut World) -> EntityId {
        let scene = world.create_entity();
        world.add_component(scene, Scene::new(true));
        world.add_component(scene, Sprite::fill(0x20_20_40, 800.0, 600.0));
        scene
    }

    fn play_scene(&mut self, world: &mut World) -> EntityId {
        let scene = world.create_entity();
        world.add_component(scene, Scene::new(true));
        world.add_component(scene, Sprite::fill(0x10_30_10, 800.0, 600.0));

        let button = world.create_entity();
        let mut sprite = Sprite::fill(0xff_80_00, 120.0, 40.0);
        sprite.set_xy(400.0, 300.0).center_anchor();
        let clicks = Rc::clone(&self.clicks);
        // The listener lives as long as the sprite's signal
        let _ = sprite.pointer_down().connect(move |event: &PointerEvent| {
            clicks.set(clicks.get() + 1);
            log::info!("Button clicked at ({:.1}, {:.1})", event.local_x, event.local_y);
        });
        world.add_component(button, sprite);
        world.add_child(scene, button, true);
        self.button = Some(button);

        let bouncer = world.create_entity();
        let mut sprite = Sprite::fill(0x40_80_ff, 30.0, 30.0);
        sprite.set_xy(100.0, 500.0);
        world.add_component(bouncer, sprite);
        let mut script = Script::new();
        script.run(Repeat::forever(Sequence::new(vec![
            Box::new(CallFunction::new(|ctx: &mut Context<'_>| {
                if let Some(sprite) = ctx.world.get_mut::<Sprite>(ctx.owner) {
                    sprite.y.animate_to_with(400.0, 0.4, ease::quad_out);
                }
            })),
            Box::new(Delay::new(0.4)),
            Box::new(CallFunction::new(|ctx: &mut Context<'_>| {
                if let Some(sprite) = ctx.world.get_mut::<Sprite>(ctx.owner) {
                    sprite.y.animate_to_with(500.0, 0.4, ease::quad_in);
                }
            })),
            Box::new(Delay::new(0.4)),
        ])));
        world.add_component(bouncer, script);
        world.add_child(scene, bouncer, true);

        scene
    }

    fn spin_button(&self, engine: &mut Engine) {
        let Some(button) = self.button else {
            return;
        };
        if let Some(sprite) = engine.world_mut().get_mut::<Sprite>(button) {
            sprite.rotation.animate_by(360.0, 0.5);
        }
    }
}

impl Application for DemoApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Initializing sprite demo...");
        if engine.create_director().is_none() {
            return Err(AppError::Custom("director already present".to_string()));
        }

        let root = engine.root();
        let world = engine.world_mut();
        let title = Self::title_scene(world);
        with_director(world, root, |director, world| director.push_scene(world, title, None));
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        self.frame += 1;
        match self.frame {
            30 => {
                log::info!("Fading into the play scene");
                let root = engine.root();
                let world = engine.world_mut();
                let play = self.play_scene(world);
                with_director(world, root, |director, world| {
                    director.push_scene(world, play, Some(Box::new(FadeTransition::new(0.5))));
                });
            }
            90 => {
                engine.handle_event(&AppEvent::PointerDown { x: 400.0, y: 300.0, button: MouseButton::Left });
                engine.handle_event(&AppEvent::PointerUp { x: 400.0, y: 300.0, button: MouseButton::Left });
                if self.clicks.get() > 0 {
                    self.spin_button(engine);
                }
            }
            FRAMES => engine.quit(),
            _ => {}
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "Demo finished after {} frames ({:.2}s), {} click(s), {} live entities",
            self.frame,
            engine.time(),
            self.clicks.get(),
            engine.world().entity_count()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::load_or_default(CONFIG_PATH)?;
    logging::init_with_level(&config.log_level);

    let mut app = DemoApp::new();
    Engine::run(config, Box::new(HeadlessPlatform::default()), &mut app)?;
    Ok(())
}
