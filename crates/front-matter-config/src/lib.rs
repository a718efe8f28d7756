use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value in config file at {config_path}: {reason}")]
    ConfigInvalidValue {
        config_path: PathBuf,
        reason: String,
    },
}

/// Delimiter settings for front matter recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatterSettings {
    /// Character repeated to form the delimiter lines.
    pub marker: char,
    /// Minimum number of markers on the opening line.
    pub min_markers: usize,
}

impl FrontMatterSettings {
    /// Checks the settings can build a recognizer.
    pub fn validate(&self) -> Result<(), String> {
        if !self.marker.is_ascii_punctuation() {
            return Err(format!(
                "front_matter.marker must be an ASCII punctuation character, got {:?}",
                self.marker
            ));
        }
        if self.min_markers == 0 {
            return Err("front_matter.min_markers must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for FrontMatterSettings {
    fn default() -> Self {
        Self {
            marker: '-',
            min_markers: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub front_matter: FrontMatterSettings,
    /// Document parsed when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_document: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config
            .front_matter
            .validate()
            .map_err(|reason| ConfigError::ConfigInvalidValue {
                config_path: config_path.to_path_buf(),
                reason,
            })?;

        // Expand shell variables and tilde in the default document path
        config.default_document = config
            .default_document
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/front-matter");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
