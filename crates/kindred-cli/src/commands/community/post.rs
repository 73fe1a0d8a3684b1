//! Post reply command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use kindred_core::RecordId;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Topic id
    pub topic_id: String,

    /// Reply content
    #[arg(long)]
    pub content: String,

    /// Author display name (omitted replies show as "Anonymous")
    #[arg(long)]
    pub author: Option<String>,
}

pub async fn run(args: PostArgs, ctx: &Context) -> Result<()> {
    let topic_id = RecordId::new(&args.topic_id).context("Invalid topic id")?;

    if args.content.trim().is_empty() {
        bail!("Reply content must not be empty");
    }

    let remote = ctx.remote()?;
    remote
        .post_reply(&topic_id, args.content.trim(), args.author.as_deref())
        .await
        .context("Failed to post reply")?;

    output::success("Posted reply");

    Ok(())
}
