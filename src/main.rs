//! rosterctl Entry Point
//!
//! Resolves connection settings (flags over profile over defaults), opens the
//! single long-lived MySQL connection, then hands control to the interaction
//! loop. Logs go to stderr; stdout belongs to the prompts and tables.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rosterctl::action;
use rosterctl::config::{self, Overrides};
use rosterctl::{Gateway, TerminalPrompter};

/// Interactive terminal CLI for managing an employee database
#[derive(Parser)]
#[command(name = "rosterctl")]
#[command(about = "Interactive terminal CLI for managing an employee database")]
#[command(version)]
struct Cli {
    /// MySQL server hostname
    #[arg(long)]
    host: Option<String>,

    /// MySQL server port
    #[arg(long)]
    port: Option<u16>,

    /// MySQL user
    #[arg(long)]
    user: Option<String>,

    /// MySQL password (a profile with password_env is the safer option)
    #[arg(long)]
    password: Option<String>,

    /// Database name
    #[arg(long)]
    database: Option<String>,

    /// Path to a JSON connection profile
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(path) => Some(config::load_profile(path)?),
        None => match config::default_profile_path() {
            Some(path) if path.exists() => Some(config::load_profile(&path)?),
            _ => None,
        },
    };

    let overrides = Overrides {
        host: cli.host,
        port: cli.port,
        user: cli.user,
        password: cli.password,
        database: cli.database,
    };
    let settings = config::resolve_connection(profile.as_ref(), &overrides)?;

    let mut gateway = Gateway::connect(&settings).await?;
    let mut prompter = TerminalPrompter::new();

    action::run(&mut gateway, &mut prompter).await?;

    if let Err(err) = gateway.disconnect().await {
        tracing::warn!(code = err.error_code(), "{err}");
    }

    Ok(())
}
