//! Directory-based SQL migration runner.
//!
//! Migrations are plain `.sql` files named `<index>-<label>.sql` stored in a root
//! directory and, optionally, in the root's immediate subdirectories. Each directory
//! keeps its own checkpoint row in `migration_dirs` holding the highest index that has
//! been applied, so running the migrator again only executes files that are new.
//!
//! # Processing order
//!
//! 1. The `migration_dirs` table is created if it does not exist yet.
//! 2. Files directly inside the root are applied in ascending index order.
//! 3. Each immediate subdirectory of the root is then processed the same way, in
//!    file name order. Subdirectories of those are never visited.
//!
//! Every file runs inside its own transaction together with the checkpoint update, so
//! a file and its checkpoint are committed or rolled back as a unit. The first failure
//! aborts the whole run; files committed before it stay applied.
//!
//! # Example
//!
//! ```rust,ignore
//! use migration::Migrator;
//!
//! let report = Migrator::new(&db).run("migrations").await?;
//! tracing::info!("Applied {} migration files", report.applied);
//! ```

pub mod checkpoint;
pub mod error;
pub mod runner;
pub mod scan;

#[cfg(test)]
mod test;

pub use checkpoint::MigrationDirRepository;
pub use error::MigrationError;
pub use runner::{directory_key, MigrationReport, Migrator};
pub use scan::{parse_file_name, scan_directory, DirectoryListing, DuplicateIndex};
