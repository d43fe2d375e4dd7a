//! Comment-preserving load/save for the settings file.

use std::path::{Path, PathBuf};

use log::warn;
use toml_edit::{value, DocumentMut, Item, Table};

use crate::config::Config;
use crate::display::RendererMode;

/// Platform config file location, `<config dir>/wallshelf/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wallshelf").join("config.toml"))
}

fn set_table_value_preserving_decor(table: &mut Table, key: &str, item: Item) {
    let existing_value_decor = table
        .get(key)
        .and_then(|current| current.as_value().map(|value| value.decor().clone()));
    table[key] = item;
    if let Some(existing_value_decor) = existing_value_decor {
        if let Some(next_value) = table[key].as_value_mut() {
            *next_value.decor_mut() = existing_value_decor;
        }
    }
}

fn ensure_section_table(document: &mut DocumentMut, key: &str) {
    let root = document.as_table_mut();
    let should_replace = !matches!(root.get(key), Some(item) if item.is_table());
    if should_replace {
        root.insert(key, Item::Table(Table::new()));
    }
}

fn write_config_to_document(document: &mut DocumentMut, previous: &Config, config: &Config) {
    ensure_section_table(document, "ui");

    let ui = document["ui"].as_table_mut().expect("ui should be a table");
    if !ui.contains_key("renderer") || previous.ui.renderer != config.ui.renderer {
        let renderer = match config.ui.renderer {
            RendererMode::Normal => "normal",
            RendererMode::Lite => "lite",
        };
        set_table_value_preserving_decor(ui, "renderer", value(renderer));
    }
}

/// Re-serializes `config` into the existing file text, touching only the
/// values that changed so user comments and formatting survive.
pub fn serialize_config_with_preserved_comments(
    existing_text: &str,
    config: &Config,
) -> Result<String, String> {
    let previous = toml::from_str::<Config>(existing_text)
        .map_err(|err| format!("failed to parse existing config as Config: {}", err))?;
    let mut document = existing_text
        .parse::<DocumentMut>()
        .map_err(|err| format!("failed to parse existing config as TOML document: {}", err))?;
    write_config_to_document(&mut document, &previous, config);
    Ok(document.to_string())
}

pub fn persist_config_file(config: &Config, path: &Path) {
    let existing_text = std::fs::read_to_string(path).ok();
    let config_text = if let Some(existing_text) = existing_text {
        match serialize_config_with_preserved_comments(&existing_text, config) {
            Ok(updated_text) => Some(updated_text),
            Err(err) => {
                warn!(
                    "Failed to preserve config comments for {} ({}). Falling back to plain serialization.",
                    path.display(),
                    err
                );
                toml::to_string(config).ok()
            }
        }
    } else {
        toml::to_string(config).ok()
    };

    let Some(config_text) = config_text else {
        log::error!("Failed to serialize config for {}", path.display());
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config directory {}: {}", parent.display(), err);
            return;
        }
    }
    if let Err(err) = std::fs::write(path, config_text) {
        log::error!("Failed to persist config to {}: {}", path.display(), err);
    }
}

/// Loads settings, falling back to defaults on a missing or broken file so
/// the library still opens.
pub fn load_config_file(path: &Path) -> Config {
    let config_content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "Failed to read config file {}. Using defaults. error={}",
                path.display(),
                err
            );
            return Config::default();
        }
    };

    match toml::from_str::<Config>(&config_content) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "Failed to parse config file {}. Using defaults. error={}",
                path.display(),
                err
            );
            Config::default()
        }
    }
}
