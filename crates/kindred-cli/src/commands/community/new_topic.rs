//! New topic command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct NewTopicArgs {
    /// Topic title (5 to 100 characters)
    #[arg(long)]
    pub title: String,

    /// Topic description (20 to 1000 characters)
    #[arg(long)]
    pub description: String,

    /// Topic category
    #[arg(long, default_value = "General")]
    pub category: String,

    /// Author display name (omitted topics show as "Unknown")
    #[arg(long)]
    pub author: Option<String>,
}

pub async fn run(args: NewTopicArgs, ctx: &Context) -> Result<()> {
    let mut errors = 0usize;

    // Rules count characters, not bytes.
    let title = args.title.trim();
    let title_chars = title.chars().count();
    if !(5..=100).contains(&title_chars) {
        output::error("title must be between 5 and 100 characters");
        errors += 1;
    }

    let description = args.description.trim();
    let description_chars = description.chars().count();
    if !(20..=1000).contains(&description_chars) {
        output::error("description must be between 20 and 1000 characters");
        errors += 1;
    }

    if errors > 0 {
        bail!("Topic rejected: {} field(s) failed validation", errors);
    }

    let remote = ctx.remote()?;
    remote
        .create_topic(title, description, &args.category, args.author.as_deref())
        .await
        .context("Failed to create topic")?;

    output::success(&format!("Opened topic: {}", title));

    Ok(())
}
