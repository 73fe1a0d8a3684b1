//! Guides subcommand implementations.

mod list;
mod schemes;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Context;

#[derive(Args, Debug)]
pub struct GuidesCommand {
    #[command(subcommand)]
    pub command: GuidesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GuidesSubcommand {
    /// List published guides
    List(list::ListArgs),

    /// Browse the support scheme directory
    Schemes(schemes::SchemesArgs),
}

pub async fn handle(cmd: GuidesCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        GuidesSubcommand::List(args) => list::run(args, ctx).await,
        GuidesSubcommand::Schemes(args) => schemes::run(args, ctx).await,
    }
}
