//! User configuration persistence
//!
//! Stores user preferences in `~/.config/pantry/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::ActivationFlag;

/// Which list page opens by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultList {
    #[default]
    Shopping,
    Stock,
}

impl DefaultList {
    /// The flag that counts as "active" on this list
    pub fn flag(self) -> ActivationFlag {
        match self {
            DefaultList::Shopping => ActivationFlag::OnShoppingList,
            DefaultList::Stock => ActivationFlag::InStock,
        }
    }
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryConfig {
    #[serde(default)]
    pub default_list: DefaultList,
    /// Seed a few demo items when the catalog is empty
    #[serde(default = "default_seed_demo_items")]
    pub seed_demo_items: bool,
    /// Catalog file location; defaults to `~/.config/pantry/catalog.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_seed_demo_items() -> bool {
    true
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            default_list: DefaultList::default(),
            seed_demo_items: default_seed_demo_items(),
            catalog_path: None,
        }
    }
}

impl PantryConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Where the catalog lives: the override, else the default location
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path
            .clone()
            .or_else(crate::config_paths::catalog_file)
    }
}
