pub use super::migration_dir::Entity as MigrationDir;
