pub mod paths;
pub mod storage;
pub mod toml_catalog_repository;
pub mod toml_config_repository;
pub mod transcript_file;

pub use crate::paths::BrewPaths;
pub use crate::toml_catalog_repository::{TomlCatalogRepository, resolve_catalog};
pub use crate::toml_config_repository::TomlConfigRepository;
pub use crate::transcript_file::load_transcript;
