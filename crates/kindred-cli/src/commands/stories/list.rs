//! List stories command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{SortMode, StoryQuery, StoryView};

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over title, excerpt, and author
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only stories carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Sort order: newest, oldest, or popular
    #[arg(long, default_value_t = SortMode::Newest)]
    pub sort: SortMode,

    /// List the distinct tags instead of the stories
    #[arg(long)]
    pub tags: bool,

    /// Skip the remote fetch and list local stories only
    #[arg(long)]
    pub local: bool,

    /// Output stories as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let local = store.stories().to_vec();

    let remote = if args.local {
        Vec::new()
    } else {
        match ctx.remote() {
            Ok(remote) => fetch_or_empty(remote.stories().await, "stories"),
            Err(e) => {
                output::error(&format!("{:#}", e));
                Vec::new()
            }
        }
    };

    let mut view = StoryView::new(local, remote);

    if args.tags {
        for tag in view.tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    view.set_query(StoryQuery {
        search: args.search,
        tag: args.tag,
        sort: args.sort,
    });

    let results = view.results();
    if results.is_empty() {
        eprintln!("{}", "No stories found.".dimmed());
        return Ok(());
    }

    for story in results {
        if args.json {
            output::json(story)?;
        } else {
            let marker = if story.id.is_owned() {
                "local".yellow()
            } else {
                "published".green()
            };
            println!(
                "{}  {}  {}  by {}  [{}]",
                story.id.as_str().dimmed(),
                marker,
                story.title.bold(),
                story.author,
                story.tags.join(", ")
            );
        }
    }

    Ok(())
}
