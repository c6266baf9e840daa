//! Error types for the bot binary.
//!
//! `AppError` is the top-level error type returned by startup and command code. It wraps
//! the domain-specific errors of each layer so `?` can be used throughout, and is logged
//! once in `main` before the process exits with a failure status.

pub mod config;
pub mod discord;

use thiserror::Error;

use crate::error::{config::ConfigError, discord::DiscordError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database connection error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Migration run aborted.
    #[error(transparent)]
    MigrationErr(#[from] migration::MigrationError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Helper could not resolve cached Discord state.
    #[error(transparent)]
    DiscordCacheErr(#[from] DiscordError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
