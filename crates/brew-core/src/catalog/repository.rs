//! Catalog repository trait.
//!
//! Defines the interface for loading a menu from storage.

use super::model::Catalog;
use crate::error::Result;

/// An abstract source of catalogs.
///
/// Decouples the core from where the menu lives (built-in table, TOML file).
/// Implementations must return a catalog that went through [`Catalog::new`],
/// so callers can rely on its validation.
pub trait CatalogRepository: Send + Sync {
    /// Loads the catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(Catalog)`: A validated catalog
    /// - `Err(BrewError)`: Storage or validation failure
    fn load(&self) -> Result<Catalog>;
}
