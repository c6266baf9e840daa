//! Warden Test Utils
//!
//! Provides shared testing utilities for the warden workspace. This crate offers a builder
//! for test contexts backed by in-memory SQLite databases, on-disk migration tree fixtures
//! and factories for Serenity API objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database factories inserting checkpoint rows
//! - **fixture**: Temporary migration directory trees
//! - **serenity**: Serenity `Guild`, `Role`, `Member`, `User` and channel factories
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture::MigrationTree};
//!
//! #[tokio::test]
//! async fn applies_files() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_migration_dirs().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let tree = MigrationTree::new()?;
//!     tree.file("0001-init.sql", "CREATE TABLE t (id INTEGER);")?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
