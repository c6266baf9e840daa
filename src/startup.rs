use migration::{DuplicateIndex, Migrator};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;

use crate::{config::Config, error::AppError};

/// Connects to the database named by `DATABASE_URL`.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connection pool ready for use
/// - `Err(AppError::ConfigErr)` - `DATABASE_URL` is not set
/// - `Err(AppError::DbErr)` - Failed to connect to database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(config.database_url()?);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Applies every pending SQL migration below `dir` and closes the connection pool.
///
/// The pool is closed whether or not the run succeeded. Files committed before a failure
/// stay applied; the failure itself is returned so the process exits unsuccessfully.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
/// - `dir` - Root migrations directory
/// - `strict` - Reject directories containing two files with the same index
///
/// # Returns
/// - `Ok(())` - All pending migrations were applied
/// - `Err(AppError)` - Connection failed or the run aborted
pub async fn migrate(config: &Config, dir: &Path, strict: bool) -> Result<(), AppError> {
    let db = connect_to_database(config).await?;

    let duplicates = if strict {
        DuplicateIndex::Reject
    } else {
        DuplicateIndex::Replace
    };

    tracing::info!("Running migrations from \"{}\"", dir.display());

    let result = Migrator::new(&db).duplicates(duplicates).run(dir).await;

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    let report = result?;
    tracing::info!(
        "Applied {} migration files ({} already applied)",
        report.applied,
        report.skipped
    );

    Ok(())
}
