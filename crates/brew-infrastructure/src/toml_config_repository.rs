//! TOML-backed application config.

use crate::paths::BrewPaths;
use crate::storage::TomlFile;
use brew_core::{AppConfig, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads and saves [`AppConfig`] from `config.toml`.
pub struct TomlConfigRepository {
    file: TomlFile,
}

impl TomlConfigRepository {
    /// Repository for the default path (~/.config/brew/config.toml)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(BrewPaths::config_file()?))
    }

    /// Repository for a custom path (CLI override, tests)
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            file: TomlFile::new(config_path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the config; a missing or empty file yields the defaults.
    pub fn load(&self) -> Result<AppConfig> {
        match self.file.read::<AppConfig>()? {
            Some(mut config) => {
                if let Some(catalog) = config.catalog_path.take() {
                    config.catalog_path = Some(self.resolve(catalog));
                }
                debug!(path = %self.path().display(), "loaded config");
                Ok(config)
            }
            None => {
                warn!(path = %self.path().display(), "no config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        self.file.write(config)
    }

    /// Points the config at a catalog file, keeping the other settings.
    pub fn set_catalog_path(&self, catalog_path: Option<PathBuf>) -> Result<()> {
        self.file
            .update(|config: &mut AppConfig| config.catalog_path = catalog_path)
    }

    /// Relative catalog paths are relative to the config file.
    fn resolve(&self, catalog: PathBuf) -> PathBuf {
        if catalog.is_relative() {
            if let Some(dir) = self.path().parent() {
                return dir.join(catalog);
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlConfigRepository::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(repo.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlConfigRepository::with_path(temp_dir.path().join("config.toml"));
        let config = AppConfig {
            catalog_path: Some(temp_dir.path().join("menu.toml")),
            currency_symbol: "$".to_string(),
        };

        repo.save(&config).unwrap();
        assert_eq!(repo.load().unwrap(), config);
    }

    #[test]
    fn test_relative_catalog_path_resolves_next_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "catalog_path = \"menu.toml\"\n").unwrap();

        let config = TomlConfigRepository::with_path(config_path).load().unwrap();
        assert_eq!(config.catalog_path, Some(temp_dir.path().join("menu.toml")));
    }

    #[test]
    fn test_set_catalog_path_keeps_currency() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "currency_symbol = \"€\"\n").unwrap();
        let repo = TomlConfigRepository::with_path(config_path);

        repo.set_catalog_path(Some(PathBuf::from("/srv/menu.toml"))).unwrap();
        let config = repo.load().unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.toml")));

        repo.set_catalog_path(None).unwrap();
        assert_eq!(repo.load().unwrap().catalog_path, None);
    }

    #[test]
    fn test_set_catalog_path_creates_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlConfigRepository::with_path(temp_dir.path().join("brew").join("config.toml"));

        repo.set_catalog_path(Some(PathBuf::from("menu.toml"))).unwrap();

        let config = repo.load().unwrap();
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(
            config.catalog_path,
            Some(temp_dir.path().join("brew").join("menu.toml"))
        );
    }
}
