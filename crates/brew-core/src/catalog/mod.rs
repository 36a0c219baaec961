//! Catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: `Category`, `CatalogEntry`, `Pricing`, and the validated `Catalog`
//! - `preset`: the built-in barista menu
//! - `repository`: trait for loading a catalog from storage

mod model;
mod preset;
mod repository;

pub use model::{Catalog, CatalogEntry, Category, Pricing};
pub use preset::{default_catalog, default_entries};
pub use repository::CatalogRepository;
