//! Discovery of migration files inside a single directory.

use regex::Regex;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use tokio::fs;

use crate::error::MigrationError;

/// `<index>-<label>.sql` where the label is made of ASCII word characters.
static FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)-[A-Za-z0-9_]+\.sql$").expect("migration file pattern is valid")
});

/// What to do when two files in the same directory parse to the same index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateIndex {
    /// The file that sorts last by name replaces the earlier one. A warning is logged.
    #[default]
    Replace,
    /// Abort with `MigrationError::DuplicateIndex`.
    Reject,
}

/// Result of scanning one migration directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Migration files keyed by their numeric index, in ascending order.
    pub files: BTreeMap<i32, PathBuf>,
    /// Immediate subdirectories, sorted by name. Empty unless subdirectories were requested.
    pub subdirs: Vec<PathBuf>,
}

/// Parses the numeric index out of a migration file name.
///
/// Returns `None` for names that do not look like `<index>-<label>.sql` and for indices
/// that do not fit into the `INT` column used for checkpoints.
///
/// # Arguments
/// - `name` - Bare file name, without any directory components
///
/// # Returns
/// - `Some(index)` - Name is a valid migration file name
/// - `None` - File should be ignored
pub fn parse_file_name(name: &str) -> Option<i32> {
    let captures = FILE_NAME.captures(name)?;

    match captures[1].parse::<i32>() {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::warn!("Ignoring \"{}\": index does not fit a 32-bit integer ({})", name, e);
            None
        }
    }
}

/// Lists a migration directory and classifies its entries.
///
/// Entries are visited in file name order so the outcome does not depend on the order
/// the filesystem returns them in. Files that are not migrations are ignored.
///
/// # Arguments
/// - `dir` - Directory to scan
/// - `include_subdirs` - Whether immediate subdirectories should be collected
/// - `duplicates` - Policy for files sharing an index
///
/// # Returns
/// - `Ok(DirectoryListing)` - Files by index plus collected subdirectories
/// - `Err(MigrationError::ReadDir)` - Directory or one of its entries could not be read
/// - `Err(MigrationError::DuplicateIndex)` - Duplicate index under `DuplicateIndex::Reject`
pub async fn scan_directory(
    dir: &Path,
    include_subdirs: bool,
    duplicates: DuplicateIndex,
) -> Result<DirectoryListing, MigrationError> {
    let read_dir_error = |source| MigrationError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_dir_error)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
        paths.push(entry.path());
    }
    paths.sort();

    let mut listing = DirectoryListing::default();

    for path in paths {
        // Follows symlinks, so a linked directory counts as a directory
        let metadata = fs::metadata(&path)
            .await
            .map_err(|source| MigrationError::ReadDir {
                path: path.clone(),
                source,
            })?;

        if metadata.is_dir() {
            if include_subdirs {
                listing.subdirs.push(path);
            }
            continue;
        }

        let Some(index) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_file_name)
        else {
            tracing::debug!("Ignoring \"{}\": not a migration file", path.display());
            continue;
        };

        if let Some(previous) = listing.files.insert(index, path.clone()) {
            match duplicates {
                DuplicateIndex::Replace => {
                    tracing::warn!(
                        "\"{}\" replaces \"{}\" as migration {}",
                        path.display(),
                        previous.display(),
                        index
                    );
                }
                DuplicateIndex::Reject => {
                    return Err(MigrationError::DuplicateIndex {
                        dir: dir.to_path_buf(),
                        index,
                        first: previous,
                        second: path,
                    });
                }
            }
        }
    }

    Ok(listing)
}
