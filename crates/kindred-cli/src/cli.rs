//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::community::CommunityCommand;
use crate::commands::guides::GuidesCommand;
use crate::commands::showcase::ShowcaseCommand;
use crate::commands::stories::StoriesCommand;

/// CLI for the kindred community platform.
#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Content API base URL (defaults to $KINDRED_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Content API key (defaults to $KINDRED_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Path of the local story store (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Success stories, local and published
    Stories(StoriesCommand),

    /// Member profiles and the discussion forum
    Community(CommunityCommand),

    /// The business and product showcase
    Showcase(ShowcaseCommand),

    /// Guides and the support scheme directory
    Guides(GuidesCommand),
}
