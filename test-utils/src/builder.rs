use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables or raw SQL, then call `build()`
/// to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_migration_dirs()
///     .with_sql("CREATE TABLE applied (name TEXT NOT NULL)")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models.
    ///
    /// Executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL executed after the entity tables have been created.
    sql: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            sql: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the `migration_dirs` checkpoint table.
    ///
    /// Use this when a test seeds checkpoints before running the migrator. The migrator
    /// creates the table itself otherwise.
    pub fn with_migration_dirs(self) -> Self {
        self.with_table(MigrationDir)
    }

    /// Adds raw SQL to run once the entity tables exist.
    ///
    /// # Arguments
    /// - `sql` - One or more SQL statements
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql.push(sql.into());
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements and then the raw SQL, each in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_sql(self.sql).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
