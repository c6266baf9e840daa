//! SeaORM entities for the bot's own bookkeeping tables.

pub mod migration_dir;
pub mod prelude;
