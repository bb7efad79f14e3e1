//! # Sprite Engine
//!
//! A 2D game engine core built around an entity tree.
//!
//! ## Features
//!
//! - **Entity Tree**: entities own ordered children and typed components
//!   with lifecycle hooks
//! - **Reactive Values**: signals and watched values
//! - **Tweening**: animated floats with easing functions
//! - **Sprites**: 2D transforms, hit testing and a render walk
//! - **Scene Director**: a scene stack with animated transitions
//! - **Headless Platform**: deterministic frame stepping for tools and tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let root = engine.root();
//!         let world = engine.world_mut();
//!         let box_entity = world.create_entity();
//!         world.add_component(box_entity, Sprite::fill(0xff0000, 50.0, 50.0));
//!         world.add_child(root, box_entity, true);
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         if engine.time() > 5.0 {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, Box::new(HeadlessPlatform::default()), &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod animation;
pub mod assets;
pub mod config;
pub mod display;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod input;
pub mod main_loop;
pub mod platform;
pub mod scene;
pub mod script;

mod application;
mod engine;

#[cfg(test)]
mod tests;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{ease, AnimatedFloat},
        assets::{AssetPack, Manifest},
        config::Config,
        display::{hit_test, render, Sprite},
        ecs::{Component, ComponentId, Context, EntityId, World},
        events::{Disposable, Signal0, Signal1, Signal2, Value},
        foundation::math::{Matrix, Point, Rectangle},
        input::{MouseButton, PointerEvent},
        main_loop::MainLoop,
        platform::{HeadlessPlatform, Platform},
        scene::{with_director, Director, FadeTransition, Scene, SlideDirection, SlideTransition},
        script::{CallFunction, Delay, Script, Sequence},
        AppError, AppEvent, Application, Engine, EngineConfig, EngineError,
    };
}
