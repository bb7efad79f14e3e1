//! Platform abstraction
//!
//! The engine core never talks to a window system, clock or file system
//! directly. A [`Platform`] supplies time, events, asset packs and the
//! surface frames are drawn onto.

use crate::application::AppEvent;
use crate::assets::{AssetError, AssetPack, Manifest, MemoryAssetPack};
use crate::display::{CommandList, Surface, Texture};
use crate::engine::EngineError;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Services the engine needs from its host
pub trait Platform {
    /// One-time setup, called by [`Engine::init`](crate::engine::Engine::init)
    fn init(&mut self) -> Result<(), EngineError>;

    /// Monotonic time in seconds
    fn time(&self) -> f64;

    /// Load every asset listed in a manifest
    fn load_asset_pack(&mut self, manifest: &Manifest) -> Result<Box<dyn AssetPack>, AssetError>;

    /// Drain pending events
    fn poll_events(&mut self) -> Vec<AppEvent>;

    /// Surface the next frame is drawn onto
    fn surface(&mut self) -> &mut dyn Surface;

    /// Called before a frame is drawn
    fn begin_frame(&mut self) {}

    /// Called after a frame is drawn
    fn end_frame(&mut self) {}
}

/// Platform without a window.
///
/// Time advances by a fixed step at the end of every frame, events are
/// queued by hand, assets come from memory and frames are recorded into a
/// [`CommandList`].
#[derive(Debug)]
pub struct HeadlessPlatform {
    now: f64,
    frame_step: f64,
    events: VecDeque<AppEvent>,
    surface: CommandList,
    textures: HashMap<String, Rc<dyn Texture>>,
    files: HashMap<String, Vec<u8>>,
    frames: u64,
}

impl HeadlessPlatform {
    /// Create a platform whose clock advances `frame_step` seconds per frame
    pub fn new(frame_step: f64) -> Self {
        Self {
            now: 0.0,
            frame_step,
            events: VecDeque::new(),
            surface: CommandList::new(),
            textures: HashMap::new(),
            files: HashMap::new(),
            frames: 0,
        }
    }

    /// Queue an event for the next poll
    pub fn push_event(&mut self, event: AppEvent) -> &mut Self {
        self.events.push_back(event);
        self
    }

    /// Move the clock forward without drawing a frame
    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }

    /// Make a texture available to asset packs
    pub fn insert_texture(&mut self, name: &str, texture: Rc<dyn Texture>) -> &mut Self {
        self.textures.insert(name.to_string(), texture);
        self
    }

    /// Make a data file available to asset packs
    pub fn insert_file(&mut self, name: &str, contents: impl Into<Vec<u8>>) -> &mut Self {
        self.files.insert(name.to_string(), contents.into());
        self
    }

    /// Draw calls of the last frame
    pub fn commands(&self) -> &CommandList {
        &self.surface
    }

    /// Number of frames drawn
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl Platform for HeadlessPlatform {
    fn init(&mut self) -> Result<(), EngineError> {
        if self.frame_step <= 0.0 {
            return Err(EngineError::InitializationFailed(format!(
                "headless frame step must be positive, got {}",
                self.frame_step
            )));
        }
        log::info!("Headless platform ready ({} s per frame)", self.frame_step);
        Ok(())
    }

    fn time(&self) -> f64 {
        self.now
    }

    fn load_asset_pack(&mut self, manifest: &Manifest) -> Result<Box<dyn AssetPack>, AssetError> {
        let mut pack = MemoryAssetPack::new(manifest.clone());
        for entry in manifest.entries() {
            if entry.format.is_image() {
                let texture = self
                    .textures
                    .get(&entry.name)
                    .ok_or_else(|| AssetError::NotFound(entry.name.clone()))?;
                pack.insert_texture(&entry.name, Rc::clone(texture));
            } else {
                let contents = self
                    .files
                    .get(&entry.name)
                    .ok_or_else(|| AssetError::NotFound(entry.name.clone()))?;
                pack.insert_file(&entry.name, contents.clone());
            }
        }
        log::debug!("Loaded asset pack with {} entries", manifest.entries().len());
        Ok(Box::new(pack))
    }

    fn poll_events(&mut self) -> Vec<AppEvent> {
        self.events.drain(..).collect()
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.surface
    }

    fn begin_frame(&mut self) {
        self.surface.clear();
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        self.now += self.frame_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::BlankTexture;

    #[test]
    fn test_clock_advances_per_frame() {
        let mut platform = HeadlessPlatform::new(0.5);
        platform.init().unwrap();
        assert_eq!(platform.time(), 0.0);
        platform.begin_frame();
        platform.end_frame();
        platform.advance(0.25);
        assert_eq!(platform.time(), 0.75);
        assert_eq!(platform.frame_count(), 1);
    }

    #[test]
    fn test_rejects_non_positive_step() {
        assert!(HeadlessPlatform::new(0.0).init().is_err());
    }

    #[test]
    fn test_events_drain_in_order() {
        let mut platform = HeadlessPlatform::default();
        platform
            .push_event(AppEvent::PointerMoved { x: 1.0, y: 2.0 })
            .push_event(AppEvent::WindowCloseRequested);
        let events = platform.poll_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], AppEvent::WindowCloseRequested);
        assert!(platform.poll_events().is_empty());
    }

    #[test]
    fn test_asset_pack_from_manifest() {
        let mut platform = HeadlessPlatform::default();
        platform
            .insert_texture("hero.png", Rc::new(BlankTexture::new(8, 8)))
            .insert_file("level.txt", "abc");

        let mut manifest = Manifest::new();
        manifest.add("hero.png", 0).add("level.txt", 3);
        let pack = platform.load_asset_pack(&manifest).unwrap();
        assert_eq!(pack.require_texture("hero.png").unwrap().height(), 8);
        assert_eq!(pack.require_text("level.txt").unwrap(), "abc");

        manifest.add("missing.png", 0);
        assert!(matches!(
            platform.load_asset_pack(&manifest),
            Err(AssetError::NotFound(name)) if name == "missing.png"
        ));
    }
}
