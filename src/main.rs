use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

use warden::{bot, config::Config, error::AppError, startup};

const DEFAULT_LOG_FILTER: &str = "warden=info,migration=info,sqlx=warn";

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Discord moderation bot and SQL migration runner")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending SQL migrations, then exit
    Migrate {
        /// Root migrations directory (defaults to MIGRATIONS_DIR or "migrations")
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Fail when two files in one directory share an index
        #[arg(long)]
        strict: bool,
    },
    /// Connect the bot to Discord and run until shutdown
    Bot,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    let config = Config::from_env()?;

    match command {
        Command::Migrate { dir, strict } => {
            let dir = dir.unwrap_or_else(|| config.migrations_dir.clone());
            startup::migrate(&config, &dir, strict || config.migrations_strict).await
        }
        Command::Bot => {
            let client = bot::start::init_bot(&config).await?;
            bot::start::start_bot(client).await
        }
    }
}
