//! TOML-based CatalogRepository implementation.
//!
//! ```toml
//! [[entry]]
//! category = "beverage"
//! name = "Latte"
//! keywords = ["latte"]
//! pricing = { kind = "per_size", prices = { Tall = 370, Grande = 410, Venti = 450 } }
//!
//! [[entry]]
//! category = "size"
//! name = "Tall"
//! keywords = ["tall", "small"]
//! ```
//!
//! File order is catalog iteration order.

use crate::paths::BrewPaths;
use crate::storage::TomlFile;
use brew_core::{
    AppConfig, BrewError, Catalog, CatalogEntry, CatalogRepository, Result, default_catalog,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "entry", default)]
    entries: Vec<CatalogEntry>,
}

/// Loads a catalog from a TOML file.
///
/// Responsibilities:
/// - Read the file via TomlFile
/// - Deserialize entries and validate through `Catalog::new`
pub struct TomlCatalogRepository {
    file: TomlFile,
}

impl TomlCatalogRepository {
    /// Repository for the default path (~/.config/brew/catalog.toml)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(BrewPaths::catalog_file()?))
    }

    pub fn with_path(catalog_path: PathBuf) -> Self {
        Self {
            file: TomlFile::new(catalog_path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl CatalogRepository for TomlCatalogRepository {
    fn load(&self) -> Result<Catalog> {
        let file: CatalogFile = self
            .file
            .read()?
            .ok_or_else(|| BrewError::not_found("catalog", self.path().display().to_string()))?;

        if file.entries.is_empty() {
            return Err(BrewError::invalid_catalog(format!(
                "{} defines no entries",
                self.path().display()
            )));
        }

        let catalog = Catalog::new(file.entries)?;
        debug!(path = %self.path().display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

/// Picks the catalog named by `config`, or the built-in one.
pub fn resolve_catalog(config: &AppConfig) -> Result<Arc<Catalog>> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = TomlCatalogRepository::with_path(path.clone()).load()?;
            info!(path = %path.display(), "using custom catalog");
            Ok(Arc::new(catalog))
        }
        None => Ok(default_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{Category, Pricing};
    use tempfile::TempDir;

    const MENU: &str = r#"
[[entry]]
category = "size"
name = "Small"
keywords = ["small"]

[[entry]]
category = "size"
name = "Large"
keywords = ["large", "big"]

[[entry]]
category = "beverage"
name = "Chai"
keywords = ["chai"]
pricing = { kind = "per_size", prices = { Small = 120, Large = 160 } }

[[entry]]
category = "extra"
name = "Ginger"
keywords = ["ginger"]
pricing = { kind = "surcharge", amount = 20 }
"#;

    fn write(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = TomlCatalogRepository::with_path(write(&temp_dir, MENU))
            .load()
            .unwrap();

        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Small", "Large", "Chai", "Ginger"]);
        assert_eq!(
            catalog.find(Category::Extra, "Ginger").unwrap().pricing,
            Pricing::Surcharge { amount: 20 }
        );
        assert_eq!(
            catalog.find(Category::Size, "Large").unwrap().pricing,
            Pricing::Included
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlCatalogRepository::with_path(temp_dir.path().join("none.toml"));
        assert!(repo.load().unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "[[entry]]\ncategory = \"milk\"\nname = \"Oat\"\nkeywords = [\"OAT\"]\n",
        );
        let err = TomlCatalogRepository::with_path(path).load().unwrap_err();
        assert!(err.is_invalid_catalog());
    }

    #[test]
    fn test_unknown_category_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "[[entry]]\ncategory = \"pastry\"\nname = \"Scone\"\nkeywords = [\"scone\"]\n",
        );
        let err = TomlCatalogRepository::with_path(path).load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let catalog = resolve_catalog(&AppConfig::default()).unwrap();
        assert!(Arc::ptr_eq(&catalog, &default_catalog()));
    }
}
