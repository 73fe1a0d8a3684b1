//! Publish story command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use kindred_core::RecordId;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Local story id
    pub id: String,

    /// Delete the local copy after publishing
    #[arg(long)]
    pub remove_local: bool,
}

pub async fn run(args: PublishArgs, ctx: &Context) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid story id")?;

    let mut store = ctx.store()?;
    let Some(story) = store.get(&id).cloned() else {
        bail!("No local story with id {}", id);
    };

    let remote = ctx.remote()?;
    remote
        .publish_story(&story)
        .await
        .context("Failed to publish story")?;

    output::success(&format!("Published story: {}", story.title));

    if args.remove_local {
        store.delete(&id)?;
        output::success("Removed local copy");
    }

    Ok(())
}
