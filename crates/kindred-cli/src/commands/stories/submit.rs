//! Submit story command implementation.

use anyhow::{Result, bail};
use clap::Args;

use kindred_store::StoryDraft;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Story title (at least 10 characters)
    #[arg(long)]
    pub title: String,

    /// Short excerpt (at least 50 characters)
    #[arg(long)]
    pub excerpt: String,

    /// Full story body (at least 200 characters)
    #[arg(long)]
    pub body: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

pub async fn run(args: SubmitArgs, ctx: &Context) -> Result<()> {
    let draft = StoryDraft {
        title: args.title,
        excerpt: args.excerpt,
        body: args.body,
        author: args.author,
        image: args.image,
        tags: args.tags,
    };

    if let Err(errors) = draft.validate() {
        for error in &errors {
            output::error(&error.to_string());
        }
        bail!("Story rejected: {} field(s) failed validation", errors.len());
    }

    let mut store = ctx.store()?;
    let story = store.add(draft)?;

    println!("{}", story.id);
    output::success(&format!("Submitted story: {}", story.title));

    Ok(())
}
