//! Show story command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use kindred_core::{RecordId, Story};

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Story id (local or published)
    pub id: String,

    /// Output the story as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid story id")?;

    // Local copies shadow published ones sharing an id.
    let story = match ctx.store()?.get(&id) {
        Some(story) => story.clone(),
        None if id.is_owned() => bail!("No local story with id {}", id),
        None => {
            let remote = ctx.remote()?;
            match remote.story(&id).await.context("Failed to fetch story")? {
                Some(story) => story,
                None => bail!("No story with id {}", id),
            }
        }
    };

    if args.json {
        return output::json_pretty(&story);
    }

    print_story(&story);
    Ok(())
}

fn print_story(story: &Story) {
    output::field("Id", story.id.as_str());
    output::field("Title", &story.title);
    output::field("Author", &story.author);
    output::field("Created", story.created_at.as_str());
    output::field("Likes", &story.likes.to_string());
    if !story.tags.is_empty() {
        output::field("Tags", &story.tags.join(", "));
    }
    if let Some(image) = &story.image {
        output::field("Image", image);
    }
    println!();
    println!("{}", story.excerpt);
    println!();
    println!("{}", story.body);
}
