//! User configuration.
//!
//! Stored as JSON at `<config dir>/config.json`. A missing file means
//! defaults; every field defaults individually so partial files work.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// How numbers are presented on the display line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display text longer than this switches to exponential form (4 - 32).
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Fraction digits used in exponential form (1 - 12).
    #[serde(default = "default_exponent_digits")]
    pub exponent_digits: usize,

    /// Significant digits kept for computed values (0 - 17, 0 = raw).
    #[serde(default = "default_significant_digits")]
    pub significant_digits: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            exponent_digits: default_exponent_digits(),
            significant_digits: default_significant_digits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Palette name, resolved by the front end.
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_max_len() -> usize {
    12
}

fn default_exponent_digits() -> usize {
    6
}

fn default_significant_digits() -> u32 {
    15
}

fn default_theme() -> String {
    "Default".to_string()
}

impl Config {
    /// `<config dir>/abacus/config.json` for the current platform.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "DrTomLLC", "abacus").ok_or(CoreError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from `path`, or defaults if there is no file yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            tracing::debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&raw).map_err(|source| CoreError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate_and_clamp();

        tracing::info!("Loaded config from {}", path.display());
        tracing::debug!("Config: {:?}", config);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CoreError::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).map_err(|source| CoreError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn validate_and_clamp(&mut self) {
        let d = &mut self.display;

        if !(4..=32).contains(&d.max_len) {
            tracing::warn!("Invalid max_len {}, clamping to 4-32 range", d.max_len);
            d.max_len = d.max_len.clamp(4, 32);
        }

        if !(1..=12).contains(&d.exponent_digits) {
            tracing::warn!(
                "Invalid exponent_digits {}, clamping to 1-12 range",
                d.exponent_digits
            );
            d.exponent_digits = d.exponent_digits.clamp(1, 12);
        }

        if d.significant_digits > 17 {
            tracing::warn!(
                "Invalid significant_digits {}, clamping to 17",
                d.significant_digits
            );
            d.significant_digits = 17;
        }
    }
}
