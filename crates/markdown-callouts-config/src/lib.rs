use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Nesting cap used when the file does not set one.
pub const DEFAULT_MAX_NESTING: usize = 32;

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

    #[error("Invalid config file at {config_path}: {message}")]
    ConfigInvalid {
        config_path: PathBuf,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory browsed when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,

    #[serde(default = "default_max_nesting")]
    pub max_nesting: usize,

    #[serde(default)]
    pub callouts: CalloutConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutConfig {
    /// When false, `> [!kind]` blocks render as plain blockquotes.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Glyph for kinds with no built-in or configured icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_icon: Option<String>,

    /// Per-kind icon overrides, keyed by lowercase kind.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,
}

fn default_max_nesting() -> usize {
    DEFAULT_MAX_NESTING
}

fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_path: None,
            max_nesting: DEFAULT_MAX_NESTING,
            callouts: CalloutConfig::default(),
        }
    }
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_icon: None,
            icons: BTreeMap::new(),
        }
    }
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

        let mut config = Self::parse(&content, config_path)?;

        // Expand shell variables and tilde in the notes path
        if let Some(notes_path) = config.notes_path.take() {
            config.notes_path = Some(Self::expand_path(&notes_path).unwrap_or(notes_path));
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// The file's settings, or defaults when there is no file.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let invalid = |message: String| ConfigError::ConfigInvalid {
            config_path: config_path.to_path_buf(),
            message,
        };
        if config.max_nesting == 0 {
            return Err(invalid("max_nesting must be at least 1".to_string()));
        }
        if let Some((kind, _)) = config.callouts.icons.iter().find(|(_, icon)| icon.is_empty()) {
            return Err(invalid(format!("icon for '{kind}' is empty")));
        }
        Ok(config)
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
        let config_dir = shellexpand::tilde("~/.config/markdown-callouts");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
