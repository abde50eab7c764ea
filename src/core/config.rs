//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("portfolio-i18n");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, writing defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Host document language tag, or "auto" to read it from the environment
    #[serde(default = "default_document_lang")]
    pub document_lang: String,
    /// Default log filter for the binaries
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_document_lang() -> String { "auto".to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            document_lang: default_document_lang(),
            log_level: default_log_level(),
        }
    }
}

impl GeneralConfig {
    /// Resolve the document language tag, reading the environment for "auto"
    pub fn resolved_document_lang(&self) -> Option<String> {
        match self.document_lang.trim() {
            "" => None,
            "auto" => crate::i18n::detect_document_lang(),
            tag => Some(tag.to_string()),
        }
    }
}

/// Translation layer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Storage entry holding the last chosen language
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Preference backend: "sqlite" or "memory"
    #[serde(default = "default_storage")]
    pub storage: String,
}

fn default_storage_key() -> String { "i18nextLng".to_string() }
fn default_storage() -> String { "sqlite".to_string() }

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage: default_storage(),
        }
    }
}
