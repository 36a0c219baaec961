use anyhow::{Context, Result};
use brew_core::{CatalogRepository, Category};
use brew_infrastructure::TomlCatalogRepository;
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let catalog = TomlCatalogRepository::with_path(path.to_path_buf())
        .load()
        .with_context(|| format!("{} is not a valid catalog", path.display()))?;

    println!("{} {}", "✓".green(), path.display());
    for category in Category::all() {
        println!("  {:<9} {}", category.to_string(), catalog.entries_in(category).count());
    }
    Ok(())
}
