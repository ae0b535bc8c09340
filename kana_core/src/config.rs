//! Configuration file support for Kanaflip.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/kanaflip/config.toml`.
//! Study state itself is never persisted; the config file only carries
//! preferences the user wants every session to start from.

use crate::types::StudyMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub study: StudyConfig,

    #[serde(default)]
    pub sound: SoundConfig,

    #[serde(default)]
    pub celebration: CelebrationConfig,
}

/// Session start-up preferences
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default)]
pub struct StudyConfig {
    #[serde(default)]
    pub default_mode: StudyMode,

    #[serde(default)]
    pub shuffled: bool,
}

/// Sound playback configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_sound_enabled")]
    pub enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
        }
    }
}

/// Streak celebration configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CelebrationConfig {
    /// Celebrate every Nth consecutive correct answer
    #[serde(default = "default_streak_interval")]
    pub streak_interval: u32,

    /// How long the celebratory display stays up
    #[serde(default = "default_display_seconds")]
    pub display_seconds: u64,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            streak_interval: default_streak_interval(),
            display_seconds: default_display_seconds(),
        }
    }
}

// Default value functions
fn default_sound_enabled() -> bool {
    true
}

fn default_streak_interval() -> u32 {
    5
}

fn default_display_seconds() -> u64 {
    3
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("kanaflip").join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.celebration.streak_interval == 0 {
            return Err(Error::Config(
                "celebration.streak_interval must be at least 1".into(),
            ));
        }
        if self.celebration.display_seconds == 0 {
            return Err(Error::Config(
                "celebration.display_seconds must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
