//! Core engine implementation

use crate::{
    application::{AppEvent, Application},
    assets::{AssetError, AssetPack, Manifest},
    config::{Config, ConfigError},
    display::render,
    ecs::{ComponentId, EntityId, World},
    input::Pointer,
    main_loop::MainLoop,
    platform::Platform,
    scene::Director,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main engine struct
///
/// Owns the entity tree, the update driver and the pointer dispatcher, and
/// talks to the host through a [`Platform`]. Time and asset loading need a
/// platform, so they panic until [`Engine::init`] has been called.
pub struct Engine {
    world: World,
    root: EntityId,
    main_loop: MainLoop,
    pointer: Pointer,
    platform: Option<Box<dyn Platform>>,
    config: EngineConfig,
    running: bool,
    hidden: bool,
}

impl Engine {
    /// Create an engine with an empty root entity
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Creating engine ({}x{} stage)",
            config.stage_width,
            config.stage_height
        );

        let mut world = World::new();
        let root = world.create_entity();

        Ok(Self {
            world,
            root,
            main_loop: MainLoop::with_max_frame_time(config.max_frame_time),
            pointer: Pointer::new(),
            platform: None,
            config,
            running: true,
            hidden: false,
        })
    }

    /// Attach the platform. Later calls are ignored.
    pub fn init(&mut self, mut platform: Box<dyn Platform>) -> Result<(), EngineError> {
        if self.platform.is_some() {
            log::debug!("Engine::init called again, ignoring");
            return Ok(());
        }
        platform.init()?;
        self.platform = Some(platform);
        log::info!("Engine initialized");
        Ok(())
    }

    /// Whether [`Engine::init`] has run
    pub fn is_initialized(&self) -> bool {
        self.platform.is_some()
    }

    fn platform(&self) -> &dyn Platform {
        match &self.platform {
            Some(platform) => platform.as_ref(),
            None => panic!("Engine::init must be called before using the platform"),
        }
    }

    fn platform_mut(&mut self) -> &mut dyn Platform {
        match &mut self.platform {
            Some(platform) => platform.as_mut(),
            None => panic!("Engine::init must be called before using the platform"),
        }
    }

    /// Platform time in seconds.
    ///
    /// # Panics
    /// If called before [`Engine::init`].
    pub fn time(&self) -> f64 {
        self.platform().time()
    }

    /// Load the assets listed in a manifest.
    ///
    /// # Panics
    /// If called before [`Engine::init`].
    pub fn load_asset_pack(&mut self, manifest: &Manifest) -> Result<Box<dyn AssetPack>, AssetError> {
        self.platform_mut().load_asset_pack(manifest)
    }

    /// Run the engine main loop with the given application until
    /// [`Engine::quit`] is called or the window is closed
    pub fn run<T: Application>(config: EngineConfig, platform: Box<dyn Platform>, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;
        engine.init(platform)?;

        // Initialize application
        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");

        while engine.running {
            for event in engine.poll_events() {
                app.handle_event(&mut engine, &event)
                    .map_err(|e| EngineError::Application(format!("App event: {e}")))?;
            }
            if !engine.running {
                break;
            }

            let delta_time = engine.update();
            app.update(&mut engine, delta_time)
                .map_err(|e| EngineError::Application(format!("App update: {e}")))?;

            engine.render_frame();
        }

        // Cleanup
        app.cleanup(&mut engine);
        engine.shutdown();

        log::info!("Engine shutdown complete");
        Ok(())
    }

    /// Run one frame without an application: events, update, render
    pub fn step(&mut self) {
        for event in self.poll_events() {
            self.handle_event(&event);
        }
        self.update();
        self.render_frame();
    }

    /// Drain the platform's pending events
    pub fn poll_events(&mut self) -> Vec<AppEvent> {
        self.platform_mut().poll_events()
    }

    /// Advance the tree to the current platform time. Returns the delta used,
    /// 0 when the frame was skipped or the app is hidden.
    pub fn update(&mut self) -> f32 {
        let now = self.time();
        if self.hidden {
            return 0.0;
        }
        self.main_loop.update(&mut self.world, self.root, now)
    }

    /// Draw the tree onto the platform surface
    pub fn render_frame(&mut self) {
        let Some(platform) = self.platform.as_mut() else {
            panic!("Engine::init must be called before rendering");
        };
        platform.begin_frame();
        render(&self.world, self.root, platform.surface());
        platform.end_frame();
    }

    /// Apply an event to the engine: pointer events go to the dispatcher,
    /// close stops the loop, resize updates the stage size
    pub fn handle_event(&mut self, event: &AppEvent) {
        match *event {
            AppEvent::WindowCloseRequested => {
                self.quit();
            }
            AppEvent::WindowResized { width, height } => {
                self.resize(width, height);
            }
            AppEvent::VisibilityChanged { hidden } => {
                log::debug!("Visibility changed, hidden = {hidden}");
                self.hidden = hidden;
            }
            AppEvent::PointerDown { x, y, button } => {
                self.pointer.submit_down(&self.world, self.root, x, y, button);
            }
            AppEvent::PointerMoved { x, y } => {
                self.pointer.submit_move(&self.world, self.root, x, y);
            }
            AppEvent::PointerUp { x, y, button } => {
                self.pointer.submit_up(&self.world, self.root, x, y, button);
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize to {width}x{height}");
            return;
        }
        self.config.stage_width = width;
        self.config.stage_height = height;
        if let Some(director) = self.world.get_mut::<Director>(self.root) {
            director.set_size(width as f32, height as f32);
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the loop keeps running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Dispose everything under the root
    fn shutdown(&mut self) {
        self.world.dispose_entity(self.root);
        self.root = self.world.create_entity();
    }

    /// Root of the entity tree
    pub fn root(&self) -> EntityId {
        self.root
    }

    /// Get the entity world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the entity world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Pointer dispatcher
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Update driver
    pub fn main_loop(&self) -> &MainLoop {
        &self.main_loop
    }

    /// Active configuration, including the current stage size
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add a [`Director`] sized to the stage to the root entity. Returns
    /// `None` if the root already has one.
    pub fn create_director(&mut self) -> Option<ComponentId> {
        if self.world.has::<Director>(self.root) {
            log::warn!("Root already has a director");
            return None;
        }
        let mut director = Director::new();
        director.set_size(self.config.stage_width as f32, self.config.stage_height as f32);
        Some(self.world.add_component(self.root, director))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("root", &self.root)
            .field("world", &self.world)
            .field("initialized", &self.is_initialized())
            .field("running", &self.running)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stage width in pixels
    pub stage_width: u32,

    /// Stage height in pixels
    pub stage_height: u32,

    /// Longest frame delta handed to components, in seconds
    pub max_frame_time: f32,

    /// Default log filter for binaries, e.g. `"info"` or `"sprite_engine=debug"`
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stage_width: 800,
            stage_height: 600,
            max_frame_time: crate::main_loop::DEFAULT_MAX_FRAME_TIME,
            log_level: "info".to_string(),
        }
    }
}

impl Config for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.stage_width == 0 || self.stage_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "stage size must be non-zero, got {}x{}",
                self.stage_width, self.stage_height
            )));
        }
        if self.max_frame_time.is_nan() || self.max_frame_time <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_frame_time must be positive, got {}",
                self.max_frame_time
            )));
        }
        Ok(())
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Asset system error
    #[error("Asset system error: {0}")]
    Asset(#[from] AssetError),

    /// Application error
    #[error("Application error: {0}")]
    Application(String),
}
