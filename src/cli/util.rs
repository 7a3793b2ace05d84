// ABOUTME: Shared CLI utilities - resolves where the catalog and saved progress come from
//
// Command-line flags win over config values; config values win over defaults.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use super::Cli;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::storage::{FileStore, MemoryStore, WizardStorage};
use crate::wizard::WizardController;

/// Resolved sources for a wizard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSource {
    pub catalog_path: Option<PathBuf>,
    /// `None` means in-memory storage
    pub state_dir: Option<PathBuf>,
}

impl WizardSource {
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Result<Self> {
        let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
        let state_dir = if cli.ephemeral {
            None
        } else {
            match &cli.state_dir {
                Some(dir) => Some(dir.clone()),
                None => Some(config.resolved_state_dir()?),
            }
        };

        Ok(Self {
            catalog_path,
            state_dir,
        })
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load step catalog {}", path.display())),
            None => Catalog::builtin().context("Builtin step catalog is invalid"),
        }
    }

    pub fn storage(&self) -> WizardStorage {
        match &self.state_dir {
            Some(dir) => WizardStorage::new(FileStore::new(dir)),
            None => WizardStorage::new(MemoryStore::new()),
        }
    }

    /// Load the catalog and hydrate the controller from saved progress
    pub fn open_wizard(&self) -> Result<WizardController> {
        let catalog = self.catalog()?;
        match &self.state_dir {
            Some(dir) => info!("Using saved progress in {}", dir.display()),
            None => info!("Using in-memory progress"),
        }
        Ok(WizardController::new(catalog, self.storage()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["setupwiz", "--state-dir", "/a", "--catalog", "/c.toml"])
            .unwrap();
        let config = AppConfig {
            state_dir: Some(PathBuf::from("/b")),
            catalog_path: Some(PathBuf::from("/d.toml")),
            ..AppConfig::default()
        };

        let source = WizardSource::resolve(&cli, &config).unwrap();
        assert_eq!(source.state_dir, Some(PathBuf::from("/a")));
        assert_eq!(source.catalog_path, Some(PathBuf::from("/c.toml")));
    }

    #[test]
    fn test_config_used_when_no_flags() {
        let cli = Cli::try_parse_from(["setupwiz"]).unwrap();
        let config = AppConfig {
            state_dir: Some(PathBuf::from("/b")),
            ..AppConfig::default()
        };

        let source = WizardSource::resolve(&cli, &config).unwrap();
        assert_eq!(source.state_dir, Some(PathBuf::from("/b")));
        assert!(source.catalog_path.is_none());
    }

    #[test]
    fn test_ephemeral_has_no_state_dir() {
        let cli = Cli::try_parse_from(["setupwiz", "--ephemeral", "--state-dir", "/a"]).unwrap();
        let source = WizardSource::resolve(&cli, &AppConfig::default()).unwrap();
        assert!(source.state_dir.is_none());
    }

    #[test]
    fn test_open_wizard_persists_to_state_dir() {
        let dir = TempDir::new().unwrap();
        let source = WizardSource {
            catalog_path: None,
            state_dir: Some(dir.path().to_path_buf()),
        };

        let mut wizard = source.open_wizard().unwrap();
        wizard.mark_current_completed();
        assert!(dir.path().join("setupWizardState.json").exists());

        let reopened = source.open_wizard().unwrap();
        assert_eq!(reopened.state(), wizard.state());
    }

    #[test]
    fn test_missing_catalog_is_error() {
        let source = WizardSource {
            catalog_path: Some(PathBuf::from("/definitely/not/here.toml")),
            state_dir: None,
        };
        assert!(source.open_wizard().is_err());
    }
}
