//! Asset manifest

use serde::{Deserialize, Serialize};

/// Asset format, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpg,
    /// GIF image
    Gif,
    /// WebP image
    Webp,
    /// MP3 audio
    Mp3,
    /// Ogg audio
    Ogg,
    /// WAV audio
    Wav,
    /// Anything else
    Data,
}

impl AssetFormat {
    /// Infer a format from a file name
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Self::Png,
            Some("jpg" | "jpeg") => Self::Jpg,
            Some("gif") => Self::Gif,
            Some("webp") => Self::Webp,
            Some("mp3") => Self::Mp3,
            Some("ogg") => Self::Ogg,
            Some("wav") => Self::Wav,
            _ => Self::Data,
        }
    }

    /// Whether the format is an image
    pub fn is_image(self) -> bool {
        matches!(self, Self::Png | Self::Jpg | Self::Gif | Self::Webp)
    }
}

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Lookup name
    pub name: String,
    /// Location relative to the manifest base
    pub url: String,
    /// Content format
    pub format: AssetFormat,
    /// Size hint in bytes, zero if unknown
    #[serde(default)]
    pub bytes: u64,
}

/// List of assets to load as one pack.
///
/// Serializes as RON or TOML like any other config file:
///
/// ```
/// use sprite_engine::assets::Manifest;
///
/// let mut manifest = Manifest::new();
/// manifest.add("hero.png", 1024);
/// assert!(manifest.exists("hero.png"));
/// assert_eq!(manifest.full_url("hero.png").as_deref(), Some("hero.png"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    entries: Vec<AssetEntry>,
    #[serde(default)]
    local_base: Option<String>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry whose url is its name
    pub fn add(&mut self, name: &str, bytes: u64) -> &mut Self {
        self.add_entry(AssetEntry {
            name: name.to_string(),
            url: name.to_string(),
            format: AssetFormat::from_name(name),
            bytes,
        })
    }

    /// Add an entry, replacing any entry with the same name
    pub fn add_entry(&mut self, entry: AssetEntry) -> &mut Self {
        self.entries.retain(|e| e.name != entry.name);
        self.entries.push(entry);
        self
    }

    /// Whether an entry exists
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entry by name
    pub fn get(&self, name: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    /// Directory prepended to every url
    pub fn set_local_base(&mut self, base: impl Into<String>) -> &mut Self {
        self.local_base = Some(base.into());
        self
    }

    /// Url of an entry with the base applied
    pub fn full_url(&self, name: &str) -> Option<String> {
        let entry = self.get(name)?;
        Some(match &self.local_base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), entry.url),
            None => entry.url.clone(),
        })
    }

    /// Total of the size hints
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inference() {
        assert_eq!(AssetFormat::from_name("a/b/hero.PNG"), AssetFormat::Png);
        assert_eq!(AssetFormat::from_name("tiles.jpeg"), AssetFormat::Jpg);
        assert_eq!(AssetFormat::from_name("level.json"), AssetFormat::Data);
        assert_eq!(AssetFormat::from_name("README"), AssetFormat::Data);
        assert!(AssetFormat::Webp.is_image());
        assert!(!AssetFormat::Wav.is_image());
    }

    #[test]
    fn test_add_replaces_same_name() {
        let mut manifest = Manifest::new();
        manifest.add("a.png", 10).add("b.txt", 5).add("a.png", 20);
        assert_eq!(manifest.entries().len(), 2);
        assert_eq!(manifest.get("a.png").unwrap().bytes, 20);
        assert_eq!(manifest.total_bytes(), 25);
    }

    #[test]
    fn test_full_url_with_base() {
        let mut manifest = Manifest::new();
        manifest.add("ui/button.png", 0).set_local_base("assets/");
        assert_eq!(manifest.full_url("ui/button.png").unwrap(), "assets/ui/button.png");
        assert!(manifest.full_url("missing").is_none());
    }

    #[test]
    fn test_ron_round_trip() {
        let mut manifest = Manifest::new();
        manifest.add("hero.png", 1024);
        let text = ron::to_string(&manifest).unwrap();
        let back: Manifest = ron::from_str(&text).unwrap();
        assert_eq!(back, manifest);
    }
}
