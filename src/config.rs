use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

pub struct Config {
    pub database_url: Option<String>,
    pub discord_bot_token: Option<String>,

    /// Root folder holding the SQL migration tree.
    pub migrations_dir: PathBuf,
    /// Treat two migration files with the same index as an error.
    pub migrations_strict: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let migrations_strict = match lookup("MIGRATIONS_STRICT") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "MIGRATIONS_STRICT".to_string(),
                value,
            })?,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL"),
            discord_bot_token: lookup("DISCORD_BOT_TOKEN"),
            migrations_dir: lookup("MIGRATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MIGRATIONS_DIR)),
            migrations_strict,
        })
    }

    /// Gets the database URL, which is only required when running migrations.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
    }

    /// Gets the bot token, which is only required when connecting to Discord.
    pub fn bot_token(&self) -> Result<&str, ConfigError> {
        self.discord_bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn uses_defaults_for_optional_vars() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/bot")]))
            .unwrap();

        assert_eq!(config.database_url().unwrap(), "postgres://localhost/bot");
        assert_eq!(config.migrations_dir, PathBuf::from("migrations"));
        assert!(!config.migrations_strict);
        assert!(config.discord_bot_token.is_none());
    }

    #[test]
    fn reads_all_vars() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/bot"),
            ("DISCORD_BOT_TOKEN", "token"),
            ("MIGRATIONS_DIR", "db/migrations"),
            ("MIGRATIONS_STRICT", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token().unwrap(), "token");
        assert_eq!(config.migrations_dir, PathBuf::from("db/migrations"));
        assert!(config.migrations_strict);
    }

    #[test]
    fn database_url_required_for_migrate() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert!(matches!(
            config.database_url(),
            Err(ConfigError::MissingEnvVar(ref name)) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn bot_config_loads_without_database_url() {
        let config = Config::from_lookup(lookup(&[("DISCORD_BOT_TOKEN", "token")])).unwrap();

        assert!(config.database_url.is_none());
        assert_eq!(config.bot_token().unwrap(), "token");
    }

    #[test]
    fn invalid_strict_flag_fails() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/bot"),
            ("MIGRATIONS_STRICT", "maybe"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn bot_token_required_for_bot() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert!(matches!(
            config.bot_token(),
            Err(ConfigError::MissingEnvVar(ref name)) if name == "DISCORD_BOT_TOKEN"
        ));
    }
}
