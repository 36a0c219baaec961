//! Typed TOML file access with atomic writes.

use brew_core::{BrewError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One TOML document on disk.
///
/// Writes go through a sibling temp file and a rename, so readers never see
/// a half-written document. Read-modify-write cycles hold an exclusive lock
/// on `<name>.lock`.
pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file is missing or blank.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(toml::from_str(&content)?))
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        let content = toml::to_string_pretty(value)?;
        self.ensure_parent()?;

        let tmp_path = self.tmp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Applies `change` to the stored document under an exclusive lock.
    /// A missing file starts from `T::default()`.
    pub fn update<T, F>(&self, change: F) -> Result<()>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T),
    {
        let _lock = self.lock()?;
        let mut value = self.read()?.unwrap_or_default();
        change(&mut value);
        self.write(&value)
    }

    // Released when the returned handle is dropped.
    fn lock(&self) -> Result<File> {
        use fs2::FileExt;

        self.ensure_parent()?;
        let lock_path = self.path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;
        file.lock_exclusive().map_err(|err| {
            BrewError::io(format!("failed to lock {}: {err}", lock_path.display()))
        })?;
        Ok(file)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| BrewError::io(format!("{} has no file name", self.path.display())))?;
        Ok(self
            .path
            .with_file_name(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}
