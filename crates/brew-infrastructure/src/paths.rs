//! Path management for brew configuration files.
//!
//! ```text
//! ~/.config/brew/
//! ├── config.toml      # AppConfig
//! └── catalog.toml     # Optional custom menu
//! ```

use brew_core::{BrewError, Result};
use std::path::PathBuf;

pub struct BrewPaths;

impl BrewPaths {
    /// Platform config directory joined with `brew` (e.g. `~/.config/brew/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("brew"))
            .ok_or_else(|| BrewError::config("Cannot find config directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn catalog_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("catalog.toml"))
    }
}
