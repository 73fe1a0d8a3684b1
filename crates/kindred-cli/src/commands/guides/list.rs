//! List guides command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{GuideQuery, facets};

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over title, excerpt, and content
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only guides in this category
    #[arg(long)]
    pub category: Option<String>,

    /// List the distinct categories instead of the guides
    #[arg(long)]
    pub categories: bool,

    /// Output guides as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let remote = ctx.remote()?;
    let guides = fetch_or_empty(remote.guides().await, "guides");

    if args.categories {
        for category in facets(guides.iter().map(|g| g.category.as_str())) {
            println!("{}", category);
        }
        return Ok(());
    }

    let query = GuideQuery {
        search: args.search,
        category: args.category,
    };

    let results = query.apply(&guides);
    if results.is_empty() {
        eprintln!("{}", "No guides found.".dimmed());
        return Ok(());
    }

    for guide in &results {
        if args.json {
            output::json(guide)?;
        } else {
            println!(
                "{}  {}  [{}]  {} min read",
                guide.id.as_str().dimmed(),
                guide.title.bold(),
                guide.category,
                guide.read_time
            );
        }
    }

    Ok(())
}
