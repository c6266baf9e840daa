//! Factory methods for creating test data.
//!
//! Factories insert rows into the test database with sensible defaults, reducing
//! boilerplate in tests. Each factory offers a builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Seed a checkpoint saying index 1 has already been applied
//! factory::migration_dir::MigrationDirFactory::new(&db)
//!     .path(tree.key())
//!     .last_run(1)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod migration_dir;

pub use migration_dir::{create_migration_dir, MigrationDirFactory};
