//! In-memory asset pack

use super::{AssetPack, Manifest};
use crate::display::Texture;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Asset pack backed by maps, filled by the platform or by hand
#[derive(Default)]
pub struct MemoryAssetPack {
    manifest: Manifest,
    textures: HashMap<String, Rc<dyn Texture>>,
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetPack {
    /// Create an empty pack for a manifest
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            textures: HashMap::new(),
            files: HashMap::new(),
        }
    }

    /// Store a texture
    pub fn insert_texture(&mut self, name: &str, texture: Rc<dyn Texture>) -> &mut Self {
        self.textures.insert(name.to_string(), texture);
        self
    }

    /// Store a data file
    pub fn insert_file(&mut self, name: &str, contents: impl Into<Vec<u8>>) -> &mut Self {
        self.files.insert(name.to_string(), contents.into());
        self
    }

    /// Dispose every texture and forget all assets
    pub fn dispose(&mut self) {
        for texture in self.textures.values() {
            texture.dispose();
        }
        self.textures.clear();
        self.files.clear();
    }
}

impl AssetPack for MemoryAssetPack {
    fn get_texture(&self, name: &str) -> Option<Rc<dyn Texture>> {
        self.textures.get(name).cloned()
    }

    fn get_file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

impl fmt::Debug for MemoryAssetPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryAssetPack")
            .field("textures", &self.textures.len())
            .field("files", &self.files.len())
            .finish()
    }
}
