//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::input::MouseButton;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a game with [`Engine::run`].
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is initialized. Build the initial scene
    /// graph and load assets here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the entity tree has been updated.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Delta used for this frame in seconds, 0 if skipped
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called for every platform event before the frame update.
    fn handle_event(&mut self, engine: &mut Engine, event: &AppEvent) -> Result<(), AppError> {
        // Default implementation forwards to engine
        engine.handle_event(event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the main loop exits.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(#[from] crate::assets::AssetError),
}

/// Platform events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Stage was resized
    WindowResized {
        /// New stage width
        width: u32,
        /// New stage height
        height: u32,
    },

    /// Window close requested
    WindowCloseRequested,

    /// App was hidden or shown again
    VisibilityChanged {
        /// Whether the app is now hidden
        hidden: bool,
    },

    /// Pointer button pressed
    PointerDown {
        /// Viewport X
        x: f32,
        /// Viewport Y
        y: f32,
        /// Button pressed
        button: MouseButton,
    },

    /// Pointer moved
    PointerMoved {
        /// Viewport X
        x: f32,
        /// Viewport Y
        y: f32,
    },

    /// Pointer button released
    PointerUp {
        /// Viewport X
        x: f32,
        /// Viewport Y
        y: f32,
        /// Button released
        button: MouseButton,
    },
}
