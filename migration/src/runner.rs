use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::{
    checkpoint::MigrationDirRepository,
    error::MigrationError,
    scan::{scan_directory, DuplicateIndex},
};

/// Summary of a successful migration run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Directories processed, including the root.
    pub directories: usize,
    /// Files executed and committed during this run.
    pub applied: usize,
    /// Files skipped because their directory checkpoint already covered them.
    pub skipped: usize,
}

/// Applies a tree of SQL migration files to a database.
///
/// The database connection is owned by the caller and only borrowed for the run; the
/// migrator never closes it.
pub struct Migrator<'a> {
    db: &'a DatabaseConnection,
    duplicates: DuplicateIndex,
}

impl<'a> Migrator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            duplicates: DuplicateIndex::default(),
        }
    }

    /// Sets how files sharing an index within one directory are handled.
    pub fn duplicates(mut self, duplicates: DuplicateIndex) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Runs all pending migrations below `root`.
    ///
    /// Files directly in `root` are applied first, then every immediate subdirectory of
    /// `root` in name order. Deeper subdirectories are ignored.
    ///
    /// # Arguments
    /// - `root` - Root migrations directory
    ///
    /// # Returns
    /// - `Ok(MigrationReport)` - Every pending file was applied
    /// - `Err(MigrationError)` - The run stopped at the first failure; files committed
    ///   before it remain applied
    pub async fn run(&self, root: impl AsRef<Path>) -> Result<MigrationReport, MigrationError> {
        let root = root.as_ref();

        MigrationDirRepository::new(self.db).create_table().await?;

        let mut report = MigrationReport::default();

        let subdirs = self.process_directory(root, true, &mut report).await?;
        for subdir in subdirs {
            self.process_directory(&subdir, false, &mut report).await?;
        }

        tracing::info!(
            "Migrations complete: {} applied, {} skipped across {} directories",
            report.applied,
            report.skipped,
            report.directories
        );

        Ok(report)
    }

    /// Applies the pending files of one directory.
    ///
    /// Returns the subdirectories collected while scanning, which is always empty when
    /// `include_subdirs` is false.
    async fn process_directory(
        &self,
        dir: &Path,
        include_subdirs: bool,
        report: &mut MigrationReport,
    ) -> Result<Vec<PathBuf>, MigrationError> {
        let listing = scan_directory(dir, include_subdirs, self.duplicates).await?;
        let key = directory_key(dir);

        let last_run = MigrationDirRepository::new(self.db)
            .last_run(&key)
            .await?
            .unwrap_or(-1);

        for (&index, file) in &listing.files {
            if index <= last_run {
                tracing::info!("Skipping \"{}\" as it has already been run", file.display());
                report.skipped += 1;
                continue;
            }

            tracing::info!("Running file \"{}\"", file.display());
            self.apply_file(&key, index, file).await?;
            report.applied += 1;
        }

        report.directories += 1;

        Ok(listing.subdirs)
    }

    /// Executes one file and advances the directory checkpoint in a single transaction.
    async fn apply_file(&self, key: &str, index: i32, file: &Path) -> Result<(), MigrationError> {
        let sql = fs::read_to_string(file)
            .await
            .map_err(|source| MigrationError::ReadFile {
                path: file.to_path_buf(),
                source,
            })?;

        let txn = self.db.begin().await?;

        let result = execute_file(&txn, key, index, file, &sql).await;

        match result {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(err) => {
                if let Err(e) = txn.rollback().await {
                    tracing::error!(
                        "Failed to roll back migration \"{}\": {}",
                        file.display(),
                        e
                    );
                }
                Err(err)
            }
        }
    }
}

async fn execute_file(
    txn: &DatabaseTransaction,
    key: &str,
    index: i32,
    file: &Path,
    sql: &str,
) -> Result<(), MigrationError> {
    txn.execute_unprepared(sql)
        .await
        .map_err(|source| MigrationError::Execute {
            path: file.to_path_buf(),
            source,
        })?;

    MigrationDirRepository::new(txn)
        .upsert(key, index)
        .await
        .map_err(|source| MigrationError::Checkpoint {
            dir: key.to_string(),
            index,
            source,
        })?;

    Ok(())
}

/// Key under which a directory's checkpoint is stored.
///
/// Trailing separators, repeated separators and `.` components are dropped, so
/// `migrations`, `migrations/` and `./migrations` share one checkpoint. `..` is kept
/// as written since resolving it would require touching the filesystem.
pub fn directory_key(dir: &Path) -> String {
    let normalized: PathBuf = dir
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        return ".".to_string();
    }

    normalized.to_string_lossy().into_owned()
}
