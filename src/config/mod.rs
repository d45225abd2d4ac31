//! Window, frame and asset settings.
//!
//! Configuration is cosmetic: nothing here changes the rules or the screen
//! flow. Values are loaded from an optional JSON file and validated with
//! Stillwater's `Validation`, so every bad value is reported at once.
//!
//! # Example
//!
//! ```rust
//! use roshambo::config::Config;
//!
//! let config = Config::default().validated().unwrap();
//! assert_eq!((config.window_width, config.window_height), (600, 400));
//! assert_eq!((config.frame_width, config.frame_height), (100, 100));
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::effects::SoundCue;
use crate::rules::Move;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::Level;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "roshambo.json";

/// Game settings. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,

    /// Size every move frame is scaled to
    pub frame_width: u32,
    pub frame_height: u32,

    /// Root holding `GIF/` and `Sound_Effects/`. When unset the built-in
    /// terminal art and bell are used.
    pub assets_dir: Option<PathBuf>,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 600,
            window_height: 400,
            frame_width: 100,
            frame_height: 100,
            assets_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a config file if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check every value, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let dimensions = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
        ];

        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        for (field, value) in dimensions {
            checks.push(if value == 0 {
                Validation::fail(ConfigViolation::ZeroDimension { field })
            } else {
                Validation::success(())
            });
        }

        checks.push(match Level::from_str(&self.log_level) {
            Ok(_) => Validation::success(()),
            Err(_) => Validation::fail(ConfigViolation::UnknownLogLevel(self.log_level.clone())),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Return the config if it is valid, otherwise every violation.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Tracing level, falling back to INFO for unparseable values.
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    /// Path of a move's animation, when an asset directory is configured.
    pub fn image_path(&self, m: Move) -> Option<PathBuf> {
        self.assets_dir
            .as_ref()
            .map(|dir| dir.join("GIF").join(format!("{}.gif", m.name())))
    }

    /// Path of a sound cue, when an asset directory is configured.
    pub fn sound_path(&self, cue: SoundCue) -> Option<PathBuf> {
        self.assets_dir
            .as_ref()
            .map(|dir| dir.join("Sound_Effects").join(cue.file_name()))
    }

    /// Every asset file the game needs, in a stable order.
    pub fn asset_paths(&self) -> Vec<PathBuf> {
        let images = Move::ALL.iter().filter_map(|m| self.image_path(*m));
        let sounds = SoundCue::ALL.iter().filter_map(|c| self.sound_path(*c));
        images.chain(sounds).collect()
    }
}
