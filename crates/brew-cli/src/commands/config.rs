use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::utils::config_repository;

pub fn show(config: Option<&Path>) -> Result<()> {
    let repo = config_repository(config)?;
    let app_config = repo.load()?;

    println!("config file:     {}", repo.path().display());
    match &app_config.catalog_path {
        Some(path) => println!("catalog:         {}", path.display()),
        None => println!("catalog:         (built-in)"),
    }
    println!("currency symbol: {}", app_config.currency_symbol);
    Ok(())
}

pub fn set_catalog(config: Option<&Path>, path: Option<PathBuf>) -> Result<()> {
    let repo = config_repository(config)?;
    let path = match path {
        Some(path) => Some(
            std::fs::canonicalize(&path)
                .with_context(|| format!("Cannot resolve {}", path.display()))?,
        ),
        None => None,
    };
    repo.set_catalog_path(path.clone())?;

    match path {
        Some(path) => println!("Catalog set to {}", path.display()),
        None => println!("Using the built-in catalog"),
    }
    Ok(())
}
