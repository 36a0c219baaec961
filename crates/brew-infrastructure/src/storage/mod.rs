//! Storage layer.

pub mod toml_file;

pub use toml_file::TomlFile;
