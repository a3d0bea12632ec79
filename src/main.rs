use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use medusa_commerce::{server, ConfigLoader};

mod cli;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Structured logging; stderr so `config` output on stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,medusa_commerce=debug".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => server::serve().await,
        Commands::Config { dir, pretty } => {
            let dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("cannot resolve working directory")?,
            };
            let loader = ConfigLoader::from_process(&dir);
            let env_file = loader.env_file_path();
            debug!(env = %loader.app_env(), file = %env_file.display(), "Assembling platform config");
            let config = loader.load();
            info!(plugins = config.plugins.len(), "Platform config assembled");

            let json = if pretty {
                serde_json::to_string_pretty(&config)
            } else {
                serde_json::to_string(&config)
            }
            .context("failed to serialize platform config")?;

            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write platform config")?;
            Ok(())
        }
    }
}
