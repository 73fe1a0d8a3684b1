//! List replies command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use kindred_core::RecordId;

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct RepliesArgs {
    /// Topic id
    pub topic_id: String,

    /// Output replies as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: RepliesArgs, ctx: &Context) -> Result<()> {
    let topic_id = RecordId::new(&args.topic_id).context("Invalid topic id")?;

    let remote = ctx.remote()?;
    let replies = fetch_or_empty(remote.forum_replies(&topic_id).await, "replies");

    if replies.is_empty() {
        eprintln!("{}", "No replies found.".dimmed());
        return Ok(());
    }

    for reply in &replies {
        if args.json {
            output::json(reply)?;
        } else {
            println!(
                "{}  {}  {}",
                reply.created_at.as_str().dimmed(),
                reply.author.bold(),
                reply.content
            );
        }
    }

    Ok(())
}
