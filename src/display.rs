//! Renderer mode and representative library image selection.

use std::path::{Path, PathBuf};

/// Library rendering preference persisted between sessions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RendererMode {
    /// Favor animated preview clips in the library view.
    #[default]
    Normal,
    /// Static thumbnails only.
    Lite,
}

/// Chooses the image shown for an item in the library view.
///
/// Normal mode prefers a preview clip that exists on disk and falls back to
/// the thumbnail; lite mode always takes the thumbnail. The choice is made
/// once when a descriptor is built and is not re-evaluated when the renderer
/// setting changes later.
pub fn select_display_image(
    preview_clip: Option<&Path>,
    thumbnail: Option<&Path>,
    mode: RendererMode,
) -> Option<PathBuf> {
    match mode {
        RendererMode::Normal => match preview_clip {
            Some(preview) if preview.exists() => Some(preview.to_path_buf()),
            _ => thumbnail.map(Path::to_path_buf),
        },
        RendererMode::Lite => thumbnail.map(Path::to_path_buf),
    }
}
