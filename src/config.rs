//! Persistent application configuration model and defaults.

use crate::display::RendererMode;

/// Root configuration persisted to `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    /// Library view preferences.
    pub ui: UiConfig,
}

/// Library view preferences persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UiConfig {
    /// Renderer preference read once per descriptor construction; existing
    /// descriptors keep the image they selected when this changes.
    #[serde(default)]
    pub renderer: RendererMode,
}
