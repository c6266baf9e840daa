//! Temporary on-disk migration directories.

use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// A migration root directory that is deleted when dropped.
///
/// Files and subdirectories are written synchronously so tests can lay out a tree in a
/// few lines before handing `path()` to the migrator.
pub struct MigrationTree {
    dir: TempDir,
}

impl MigrationTree {
    /// Creates an empty migration root in the system temp directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root directory path to pass to the migrator.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Checkpoint key the migrator records for the root directory.
    pub fn key(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// Checkpoint key the migrator records for a subdirectory of the root.
    pub fn subdir_key(&self, subdir: &str) -> String {
        self.path().join(subdir).to_string_lossy().into_owned()
    }

    /// Writes a file directly inside the root.
    ///
    /// # Arguments
    /// - `name` - File name, e.g. `"0001-init.sql"`
    /// - `contents` - File contents
    pub fn file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Writes a file at a path relative to the root, creating parent directories.
    ///
    /// # Arguments
    /// - `relative` - Path such as `"plugins/0001-init.sql"`
    /// - `contents` - File contents
    pub fn nested_file(&self, relative: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Creates an empty subdirectory of the root.
    pub fn subdir(&self, name: &str) -> std::io::Result<PathBuf> {
        let path = self.path().join(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}
