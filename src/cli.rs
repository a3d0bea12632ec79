use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "medusa-commerce")]
#[command(about = "Health probe and platform configuration for Medusa commerce")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the health server on port 9000 (default)
    Serve,
    /// Assemble the platform configuration and print it as JSON
    Config {
        /// Directory holding the .env.* files
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
