use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use keepsake_types::ui::UiOptions;

/// User configuration, loaded from `~/.keepsake/config.toml`.
///
/// Every section and field is optional; an absent file is not an error.
#[derive(Debug, Default, Deserialize)]
pub struct KeepsakeConfig {
    pub app: Option<AppConfig>,
    pub content: Option<ContentConfig>,
    pub audio: Option<AudioConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for flakes, reels and decorations.
    #[serde(default)]
    pub ascii_only: bool,
    /// Collapse transition offsets and ambient motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// Path to a content document overriding the embedded default.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AudioConfig {
    /// Audio files paired positionally with the content table's tracks.
    #[serde(default)]
    pub tracks: Vec<PathBuf>,
}

impl KeepsakeConfig {
    /// Resolve the config file location: `KEEPSAKE_CONFIG` if set,
    /// otherwise `~/.keepsake/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = env::var_os("KEEPSAKE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".keepsake").join("config.toml"))
    }

    /// Load the config, returning `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn content_path(&self) -> Option<&Path> {
        self.content.as_ref()?.path.as_deref()
    }

    #[must_use]
    pub fn track_paths(&self) -> Vec<PathBuf> {
        self.audio
            .as_ref()
            .map(|audio| audio.tracks.clone())
            .unwrap_or_default()
    }
}
