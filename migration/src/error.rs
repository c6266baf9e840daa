use sea_orm::DbErr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a migration run.
///
/// None of these are retried. When one is raised while a file's transaction is open,
/// the transaction has already been rolled back by the time the caller sees it.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// A migration directory or one of its entries could not be listed or inspected.
    #[error("Failed to read migration directory {}: {source}", .path.display())]
    ReadDir {
        /// The directory or entry that failed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A migration file could not be read. No transaction was started for it.
    #[error("Failed to read migration file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SQL inside a migration file failed to execute.
    #[error("Migration file {} failed: {source}", .path.display())]
    Execute {
        path: PathBuf,
        #[source]
        source: DbErr,
    },

    /// The checkpoint row for a directory could not be written.
    #[error("Failed to record index {index} as last run for '{dir}': {source}")]
    Checkpoint {
        dir: String,
        index: i32,
        #[source]
        source: DbErr,
    },

    /// Two files in one directory share an index while duplicates are rejected.
    #[error(
        "Duplicate migration index {index} in {}: {} and {}",
        .dir.display(),
        .first.display(),
        .second.display()
    )]
    DuplicateIndex {
        dir: PathBuf,
        index: i32,
        first: PathBuf,
        second: PathBuf,
    },

    /// Connection, transaction or bookkeeping query failure.
    #[error(transparent)]
    Database(#[from] DbErr),
}
