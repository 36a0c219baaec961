use anyhow::{Context, Result};
use brew_core::{AppConfig, Catalog};
use brew_infrastructure::{TomlConfigRepository, resolve_catalog};
use std::path::Path;
use std::sync::Arc;

pub fn config_repository(config: Option<&Path>) -> Result<TomlConfigRepository> {
    match config {
        Some(path) => Ok(TomlConfigRepository::with_path(path.to_path_buf())),
        None => TomlConfigRepository::new().context("Failed to locate config directory"),
    }
}

/// Loads the config and the catalog it names.
pub fn load_context(config: Option<&Path>) -> Result<(AppConfig, Arc<Catalog>)> {
    let repo = config_repository(config)?;
    let app_config = repo
        .load()
        .with_context(|| format!("Failed to load config {}", repo.path().display()))?;
    let catalog = resolve_catalog(&app_config).context("Failed to load catalog")?;
    Ok((app_config, catalog))
}
