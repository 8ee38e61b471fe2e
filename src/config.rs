//! Configuration file handling.
//!
//! Loads defaults from `<config_dir>/asciiframe/config.toml` or a custom
//! path. A missing file means built-in defaults; a file that exists but
//! fails to parse is an error the user should see.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::engine::{charset, ConvertOptions, DitherMode};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertSection,
}

/// `[convert]` section: defaults for the pipeline options. Every field is
/// optional; unset fields keep the built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ConvertSection {
    pub columns: Option<u32>,
    /// Named set or literal glyph string.
    pub charset: Option<String>,
    /// Dither selector name; unknown names degrade to "none".
    pub dither: Option<String>,
    pub invert: Option<bool>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub gamma: Option<f32>,
    pub saturation: Option<f32>,
    pub edges: Option<bool>,
    pub color: Option<bool>,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// Returns the default config when the file doesn't exist, and an error
    /// when it exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Conversion options with this config's values layered over the
    /// built-in defaults. CLI flags layer on top of the result.
    pub fn base_options(&self) -> ConvertOptions {
        let defaults = ConvertOptions::default();
        let section = &self.convert;
        ConvertOptions {
            columns: section.columns.unwrap_or(defaults.columns),
            charset: section
                .charset
                .as_deref()
                .map(|name| charset::resolve(name).to_string())
                .unwrap_or(defaults.charset),
            dither: section
                .dither
                .as_deref()
                .map(DitherMode::from_name)
                .unwrap_or(defaults.dither),
            invert: section.invert.unwrap_or(defaults.invert),
            brightness: section.brightness.unwrap_or(defaults.brightness),
            contrast: section.contrast.unwrap_or(defaults.contrast),
            gamma: section.gamma.unwrap_or(defaults.gamma),
            saturation: section.saturation.unwrap_or(defaults.saturation),
            edges: section.edges.unwrap_or(defaults.edges),
            color: section.color.unwrap_or(defaults.color),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("asciiframe/config.toml")
}

/// Default config file contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciiframe configuration

[convert]
# Output width in character cells
columns = 120
# Built-in set (standard, simple, blocks, binary, matrix, edges)
# or a literal glyph string, densest character first
charset = "standard"
# Dithering: none, ordered, floyd, atkinson, stucki, sierra
dither = "none"
# Invert tone for light terminals / light backgrounds
invert = false
# 1.0 is neutral for all four scalars
brightness = 1.0
contrast = 1.0
gamma = 1.0
saturation = 1.0
# Replace tone with Sobel edge magnitude
edges = false
# Emit color markup alongside the text grid
color = false
"#;
