// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves layout catalogs and gesture settings from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::size::Orientation;

/// One catalog entry as written in the config file.
///
/// This is the serde mirror of a layout definition; validation happens when
/// the entries are assembled into a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Display name; derived from the grid shape when omitted
    pub name: Option<String>,
    pub columns: u16,
    pub rows: u16,
    /// Smallest tile count this entry is meant for
    #[serde(default = "default_min_tiles")]
    pub min_tiles: usize,
    /// Largest tile count one page holds; defaults to columns * rows
    pub max_tiles: Option<usize>,
    /// Minimum viewport width in pixels for this entry to apply
    #[serde(default)]
    pub min_width: f32,
    /// Minimum viewport height in pixels for this entry to apply
    #[serde(default)]
    pub min_height: f32,
    /// Restrict the entry to one viewport orientation
    pub orientation: Option<Orientation>,
}

fn default_min_tiles() -> usize {
    1
}

/// Swipe gesture tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    /// Minimum horizontal travel in pixels for a swipe to count
    pub min_distance: f32,
    /// Maximum vertical travel, as a ratio of the horizontal travel
    pub max_cross_ratio: f32,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            min_distance: 48.0,
            max_cross_ratio: 0.6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Custom layout catalog; the built-in catalog is used when empty
    pub catalog: Vec<LayoutEntry>,

    /// Swipe gesture settings
    pub swipe: SwipeSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/vidgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vidgrid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}
