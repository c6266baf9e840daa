use entity::{migration_dir, prelude::MigrationDir};
use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, Schema};

/// Access to the `migration_dirs` checkpoint table.
///
/// Generic over the connection so checkpoints can be written on the same transaction
/// as the migration file they belong to.
pub struct MigrationDirRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MigrationDirRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the `migration_dirs` table unless it already exists.
    ///
    /// The statement is generated for the connection's backend, so this works on both
    /// PostgreSQL and SQLite.
    pub async fn create_table(&self) -> Result<(), DbErr> {
        let schema = Schema::new(self.db.get_database_backend());
        let mut stmt = schema.create_table_from_entity(MigrationDir);
        stmt.if_not_exists();

        self.db.execute(&stmt).await?;

        Ok(())
    }

    /// Gets the highest index applied for a directory.
    ///
    /// # Arguments
    /// - `path` - Directory key as recorded by the runner
    ///
    /// # Returns
    /// - `Ok(Some(index))` - Directory has a checkpoint
    /// - `Ok(None)` - Nothing has been applied in this directory yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn last_run(&self, path: &str) -> Result<Option<i32>, DbErr> {
        let row = MigrationDir::find_by_id(path.to_string()).one(self.db).await?;

        Ok(row.map(|dir| dir.last_run))
    }

    /// Records `last_run` for a directory, inserting or overwriting its checkpoint.
    pub async fn upsert(&self, path: &str, last_run: i32) -> Result<(), DbErr> {
        MigrationDir::insert(migration_dir::ActiveModel {
            path: ActiveValue::Set(path.to_string()),
            last_run: ActiveValue::Set(last_run),
        })
        .on_conflict(
            OnConflict::column(migration_dir::Column::Path)
                .update_column(migration_dir::Column::LastRun)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets every recorded checkpoint.
    pub async fn get_all(&self) -> Result<Vec<migration_dir::Model>, DbErr> {
        MigrationDir::find().all(self.db).await
    }
}
