//! Asset packs
//!
//! A [`Manifest`] lists the assets a game needs; the platform loads it into
//! an [`AssetPack`] from which textures and data files are looked up by
//! name.

mod manifest;
mod memory;

pub use manifest::{AssetEntry, AssetFormat, Manifest};
pub use memory::MemoryAssetPack;

use crate::display::Texture;
use std::rc::Rc;
use thiserror::Error;

/// Loaded assets, looked up by name
pub trait AssetPack {
    /// A texture, if the pack has one by that name
    fn get_texture(&self, name: &str) -> Option<Rc<dyn Texture>>;

    /// Raw contents of a data file
    fn get_file(&self, name: &str) -> Option<&[u8]>;

    /// The manifest this pack was loaded from
    fn manifest(&self) -> &Manifest;

    /// A texture that must exist
    fn require_texture(&self, name: &str) -> Result<Rc<dyn Texture>, AssetError> {
        self.get_texture(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// A data file that must exist
    fn require_file(&self, name: &str) -> Result<&[u8], AssetError> {
        self.get_file(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// A data file that must exist and hold UTF-8 text
    fn require_text(&self, name: &str) -> Result<&str, AssetError> {
        std::str::from_utf8(self.require_file(name)?)
            .map_err(|e| AssetError::Load(format!("{name}: {e}")))
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    Load(String),
}
