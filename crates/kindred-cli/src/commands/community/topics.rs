//! List topics command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{SortMode, TopicQuery, facets};

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct TopicsArgs {
    /// Free-text search over title, description, and category
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort order: newest, oldest, or popular (by reply count)
    #[arg(long, default_value_t = SortMode::Newest)]
    pub sort: SortMode,

    /// List the distinct categories instead of the topics
    #[arg(long)]
    pub categories: bool,

    /// Output topics as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: TopicsArgs, ctx: &Context) -> Result<()> {
    let remote = ctx.remote()?;
    let topics = fetch_or_empty(remote.forum_topics().await, "forum topics");

    if args.categories {
        for category in facets(topics.iter().map(|t| t.category.as_str())) {
            println!("{}", category);
        }
        return Ok(());
    }

    let query = TopicQuery {
        search: args.search,
        sort: args.sort,
    };

    let results = query.apply(&topics);
    if results.is_empty() {
        eprintln!("{}", "No topics found.".dimmed());
        return Ok(());
    }

    for topic in &results {
        if args.json {
            output::json(topic)?;
        } else {
            println!(
                "{}  {}  by {}  [{}]  {} replies",
                topic.id.as_str().dimmed(),
                topic.title.bold(),
                topic.author,
                topic.category,
                topic.replies
            );
        }
    }

    Ok(())
}
