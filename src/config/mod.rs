// ABOUTME: Configuration management for setupwiz
// Loads ~/.setupwiz/config/config.toml; every field has a default so a missing file is fine

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted wizard state (default: ~/.setupwiz/state)
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Custom step catalog in TOML; the builtin checklist is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Sidebar width in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Whether to show each step's estimated time
    #[serde(default = "default_true")]
    pub show_estimated_time: bool,

    /// Whether detailed instructions start expanded on each visit
    #[serde(default)]
    pub expand_instructions_by_default: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            show_estimated_time: default_true(),
            expand_instructions_by_default: false,
        }
    }
}

fn default_log_filter() -> String {
    "setupwiz=info".to_string()
}

fn default_sidebar_width() -> u16 {
    34
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_dir: None,
            catalog_path: None,
            log_filter: default_log_filter(),
            ui: UiPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Base directory for config, state, and logs
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".setupwiz"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config").join("config.toml"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from a specific file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// State directory, honouring the config override
    pub fn resolved_state_dir(&self) -> Result<PathBuf> {
        match &self.state_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::base_dir()?.join("state")),
        }
    }

    pub fn log_dir() -> PathBuf {
        Self::base_dir()
            .map(|base| base.join("logs"))
            .unwrap_or_else(|_| PathBuf::from(".setupwiz/logs"))
    }
}
