//! kindred - CLI for the kindred community platform.
//!
//! This is a thin wrapper over the `kindred` libraries: the local story
//! store, the hosted content API, and the reconciliation layer that merges
//! the two.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{community, guides, showcase, stories};
use config::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let ctx = Context::from_cli(&cli);

    match cli.command {
        Commands::Stories(cmd) => stories::handle(cmd, &ctx).await,
        Commands::Community(cmd) => community::handle(cmd, &ctx).await,
        Commands::Showcase(cmd) => showcase::handle(cmd, &ctx).await,
        Commands::Guides(cmd) => guides::handle(cmd, &ctx).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
