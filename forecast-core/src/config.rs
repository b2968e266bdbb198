use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{UnknownUnits, WeatherError},
    model::{Units, WeatherQuery},
};

/// City used when neither a flag nor the config names one.
pub const FALLBACK_CITY: &str = "London";

/// Keys stored in `config.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ApiKey,
    DefaultCity,
    Units,
}

/// Top-level configuration stored on disk.
///
/// Example YAML:
/// ```yaml
/// api_key: abc123
/// default_city: Paris
/// units: metric
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub default_city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
}

impl Config {
    /// Value for `key`, or an empty string when unset.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::ApiKey => self.api_key.clone(),
            ConfigKey::DefaultCity => self.default_city.clone(),
            ConfigKey::Units => self.units.map(|u| u.to_string()).unwrap_or_default(),
        }
    }

    /// Set `key` to `value`. An empty units value clears the setting.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), UnknownUnits> {
        match key {
            ConfigKey::ApiKey => self.api_key = value.to_string(),
            ConfigKey::DefaultCity => self.default_city = value.to_string(),
            ConfigKey::Units if value.is_empty() => self.units = None,
            ConfigKey::Units => self.units = Some(value.parse()?),
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// City to use when no `--city` was given.
    pub fn city_or_fallback(&self) -> &str {
        if self.default_city.is_empty() {
            FALLBACK_CITY
        } else {
            &self.default_city
        }
    }

    /// Build a query from optional command-line overrides, filling the gaps
    /// from this config. Fails before any network traffic if no API key is set.
    pub fn resolve_query(
        &self,
        city: Option<&str>,
        units: Option<Units>,
    ) -> Result<WeatherQuery, WeatherError> {
        if !self.has_api_key() {
            return Err(WeatherError::MissingApiKey);
        }

        let city = match city {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => self.city_or_fallback().to_string(),
        };

        Ok(WeatherQuery {
            city,
            units: units.or(self.units).unwrap_or_default(),
            api_key: self.api_key.clone(),
        })
    }
}

/// File-backed storage for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at `<home>/.forecast/config.yaml`.
    pub fn default_location() -> Result<Self> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(Self::at(dirs.home_dir().join(".forecast").join("config.yaml")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load config from disk. `Ok(None)` means the file does not exist yet.
    pub fn load(&self) -> Result<Option<Config>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file yet");
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file: {}", self.path.display()))?;

        // An empty file is a valid, empty config.
        if contents.trim().is_empty() {
            return Ok(Some(Config::default()));
        }

        let cfg: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "loaded config");
        Ok(Some(cfg))
    }

    /// Save config to disk, creating the parent directory as needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        fs::write(&self.path, yaml)
            .with_context(|| format!("Failed to write config file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
