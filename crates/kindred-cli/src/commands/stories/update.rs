//! Update story command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use kindred_core::RecordId;
use kindred_store::{StoryPatch, StoryStore};

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Local story id
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New excerpt
    #[arg(long)]
    pub excerpt: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,

    /// New author name
    #[arg(long)]
    pub author: Option<String>,

    /// New cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Replacement tag set (repeatable; replaces all tags)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid story id")?;

    if !StoryStore::is_owned(&id) {
        bail!("Only local stories can be updated; {} is a published id", id);
    }

    let patch = StoryPatch {
        title: args.title,
        excerpt: args.excerpt,
        body: args.body,
        author: args.author,
        image: args.image,
        tags: if args.tags.is_empty() {
            None
        } else {
            Some(args.tags)
        },
    };

    let mut store = ctx.store()?;
    if !store.update(&id, patch)? {
        bail!("No local story with id {}", id);
    }

    output::success(&format!("Updated story {}", id));

    Ok(())
}
