//! Story subcommand implementations.

mod clear;
mod delete;
mod list;
mod publish;
mod show;
mod submit;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Context;

#[derive(Args, Debug)]
pub struct StoriesCommand {
    #[command(subcommand)]
    pub command: StoriesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StoriesSubcommand {
    /// List stories, local and published merged
    List(list::ListArgs),

    /// Show a single story
    Show(show::ShowArgs),

    /// Submit a new local story
    Submit(submit::SubmitArgs),

    /// Update a local story
    Update(update::UpdateArgs),

    /// Delete a local story
    Delete(delete::DeleteArgs),

    /// Delete every local story
    Clear(clear::ClearArgs),

    /// Publish a local story to the community
    Publish(publish::PublishArgs),
}

pub async fn handle(cmd: StoriesCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        StoriesSubcommand::List(args) => list::run(args, ctx).await,
        StoriesSubcommand::Show(args) => show::run(args, ctx).await,
        StoriesSubcommand::Submit(args) => submit::run(args, ctx).await,
        StoriesSubcommand::Update(args) => update::run(args, ctx).await,
        StoriesSubcommand::Delete(args) => delete::run(args, ctx).await,
        StoriesSubcommand::Clear(args) => clear::run(args, ctx).await,
        StoriesSubcommand::Publish(args) => publish::run(args, ctx).await,
    }
}
