//! Configuration types for the persona engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Classifier artifact locations.
    pub artifacts: ArtifactConfig,
    /// Speech synthesis settings.
    pub voice: VoiceConfig,
    /// Microphone capture settings.
    pub capture: CaptureConfig,
    /// Expression portrait gallery settings.
    pub gallery: GalleryConfig,
}

/// Where the pre-trained scaler and classifier are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Feature scaler (per-dimension mean/scale), JSON.
    pub scaler_path: PathBuf,
    /// Linear classifier (labels, weights, biases), JSON.
    pub model_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("bourguiba_scaler.json"),
            model_path: PathBuf::from("bourguiba_model.json"),
        }
    }
}

/// Speech synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Speaking rate in words per minute.
    pub rate_wpm: u32,
    /// Playback volume in `[0, 1]`.
    pub volume: f32,
    /// Preferred voice language tag; the synthesizer picks the first
    /// matching installed voice, or its default when none matches.
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            rate_wpm: 125,
            volume: 1.0,
            language: "fr".to_owned(),
        }
    }
}

/// Microphone capture configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Ambient-noise calibration window in seconds before listening.
    pub ambient_noise_secs: f32,
    /// Maximum seconds to wait for speech to start.
    pub timeout_secs: u32,
    /// Maximum seconds of speech per phrase.
    pub phrase_limit_secs: u32,
    /// Recognition language tag.
    pub language: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            ambient_noise_secs: 1.0,
            timeout_secs: 10,
            phrase_limit_secs: 5,
            language: "fr-FR".to_owned(),
        }
    }
}

/// Expression portrait gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory holding the portrait files.
    pub dir: PathBuf,
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            width: 400,
            height: 400,
        }
    }
}

impl PersonaConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::PersonaError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot
    /// be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PersonaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/bourguiba/config.toml`.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("bourguiba").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("bourguiba")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/bourguiba-config/config.toml")
        }
    }
}
