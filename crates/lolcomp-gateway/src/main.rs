//! lolcomp CLI: HTTP gateway, one-shot rolls, and saved-composition admin.
//!
//! Logging: set `RUST_LOG` (e.g. `lolcomp_gateway=debug`) to adjust what is
//! written to stderr.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lolcomp_gateway::{load_settings, settings_path};

use crate::cli::{Cli, Command};
use crate::commands::{run_compositions_mode, run_gateway_mode, run_roll_mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let settings = load_settings(&settings_path(cli.config.clone()));

    match cli.command {
        Command::Gateway { bind } => run_gateway_mode(bind, &settings).await,
        Command::Roll { tags, count, json } => run_roll_mode(tags, count, json, &settings).await,
        Command::Compositions { action } => run_compositions_mode(action, &settings).await,
    }
}
