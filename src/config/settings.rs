//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{DraftdeskError, APP_NAME};

/// Environment variables checked for the Gemini API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["DRAFTDESK_GEMINI_API_KEY", "GEMINI_API_KEY"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Text generation settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// TUI settings
    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Load a `.env` file from the working directory before reading the environment
    #[serde(default = "default_true")]
    pub load_dotenv: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key; usually supplied through GEMINI_API_KEY instead
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint override (empty = public Gemini endpoint)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds (0 = transport default)
    #[serde(default)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Mode shown when the TUI opens (schedule, email)
    #[serde(default = "default_start_mode")]
    pub start_mode: String,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_start_mode() -> String {
    "schedule".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            load_dotenv: true,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: 0,
        }
    }
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            start_mode: default_start_mode(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load settings from an explicit path, falling back to defaults if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            toml::from_str::<Settings>(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?
        } else {
            tracing::debug!("No config file found, using defaults");
            Self::default()
        };

        if settings.general.load_dotenv {
            match dotenvy::dotenv() {
                Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
                Err(e) if e.not_found() => {}
                Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
            }
        }

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_with(|var| std::env::var(var).ok());
    }

    /// A non-empty API key variable replaces any key read from the file.
    fn apply_env_overrides_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let key = API_KEY_ENV_VARS
            .into_iter()
            .filter_map(|var| lookup(var))
            .find(|key| !key.trim().is_empty());

        if let Some(key) = key {
            self.llm.api_key = key;
        }
    }

    /// The configured API key, or a configuration error if none was supplied.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        let key = self.llm.api_key.trim();
        if key.is_empty() {
            return Err(DraftdeskError::Config(format!(
                "Please set GEMINI_API_KEY in your environment or .env file (or llm.api_key in {}).",
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".to_string())
            )));
        }
        Ok(key)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
