//! Warden, a small Discord moderation bot.
//!
//! The crate is split into:
//!
//! - **Bot** (`bot/`) - Serenity client setup and gateway event handlers
//! - **Discord helpers** (`discord/`) - Cache-first lookups, permission checks and
//!   formatting of users, roles and REST errors
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection and the SQL migration command
//! - **Error** (`error/`) - Application error types
//!
//! The SQL migration runner itself lives in the `migration` workspace crate.

pub mod bot;
pub mod config;
pub mod discord;
pub mod error;
pub mod startup;
