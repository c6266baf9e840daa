//! Migration directory checkpoint factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating `migration_dirs` checkpoint rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::migration_dir::MigrationDirFactory;
///
/// let dir = MigrationDirFactory::new(&db)
///     .path("migrations")
///     .last_run(3)
///     .build()
///     .await?;
/// ```
pub struct MigrationDirFactory<'a> {
    db: &'a DatabaseConnection,
    path: String,
    last_run: i32,
}

impl<'a> MigrationDirFactory<'a> {
    /// Creates a new MigrationDirFactory with default values.
    ///
    /// Defaults:
    /// - path: `"migrations/dir_{id}"` where id is auto-incremented
    /// - last_run: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            path: format!("migrations/dir_{}", next_id()),
            last_run: 0,
        }
    }

    /// Sets the directory key.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the highest applied index.
    pub fn last_run(mut self, last_run: i32) -> Self {
        self.last_run = last_run;
        self
    }

    /// Builds and inserts the checkpoint row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::migration_dir::Model)` - Created checkpoint
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::migration_dir::Model, DbErr> {
        entity::migration_dir::ActiveModel {
            path: ActiveValue::Set(self.path),
            last_run: ActiveValue::Set(self.last_run),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a checkpoint row with default values.
///
/// Shorthand for `MigrationDirFactory::new(db).build().await`.
pub async fn create_migration_dir(
    db: &DatabaseConnection,
) -> Result<entity::migration_dir::Model, DbErr> {
    MigrationDirFactory::new(db).build().await
}
