//! Test fixtures that live outside the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::{self, MigrationTree};
//!
//! let tree = MigrationTree::new()?;
//! tree.file("0001-init.sql", &fixture::applied::create_and_record("init"))?;
//! tree.file("0002-next.sql", &fixture::applied::record("next"))?;
//! ```

pub mod applied;
pub mod migration_tree;

pub use migration_tree::MigrationTree;
