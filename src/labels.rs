//! Human-readable catalog for wallpaper kinds.
//!
//! Labels live in an injected lookup table instead of metadata attached to
//! the enum, so hosts can swap in a localized catalog without touching the
//! type definitions.

use std::collections::HashMap;

use crate::record::WallpaperKind;

/// Kind-to-label lookup table injected into descriptor construction.
#[derive(Debug, Clone)]
pub struct KindLabels {
    labels: HashMap<WallpaperKind, String>,
}

impl KindLabels {
    pub fn new(labels: HashMap<WallpaperKind, String>) -> Self {
        Self { labels }
    }

    /// Never returns an empty label: kinds missing from the table fall back
    /// to their identifier so the library view always has text to show.
    pub fn label_for(&self, kind: WallpaperKind) -> String {
        self.labels
            .get(&kind)
            .filter(|label| !label.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("{:?}", kind))
    }
}

impl Default for KindLabels {
    /// Built-in English catalog.
    fn default() -> Self {
        Self::new(HashMap::from([
            (WallpaperKind::Image, "Image".to_string()),
            (WallpaperKind::Gif, "Animated gif".to_string()),
            (WallpaperKind::Video, "Video".to_string()),
            (WallpaperKind::VideoStream, "Video stream".to_string()),
            (WallpaperKind::Web, "Web page".to_string()),
            (WallpaperKind::WebAudio, "Audio visualizer".to_string()),
            (WallpaperKind::Url, "Web address".to_string()),
            (WallpaperKind::App, "Application".to_string()),
            (WallpaperKind::Godot, "Godot scene".to_string()),
            (WallpaperKind::Unity, "Unity scene".to_string()),
            (WallpaperKind::UnityAudio, "Unity audio visualizer".to_string()),
            (WallpaperKind::Bizhawk, "Emulator".to_string()),
        ]))
    }
}
