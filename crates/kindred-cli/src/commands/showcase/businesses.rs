//! List businesses command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{BusinessQuery, facets};

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct BusinessesArgs {
    /// Free-text search over name, owner, and description
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only businesses in this category
    #[arg(long)]
    pub category: Option<String>,

    /// List the distinct categories instead of the businesses
    #[arg(long)]
    pub categories: bool,

    /// Output businesses as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: BusinessesArgs, ctx: &Context) -> Result<()> {
    let remote = ctx.remote()?;
    let businesses = fetch_or_empty(remote.businesses().await, "businesses");

    if args.categories {
        for category in facets(businesses.iter().map(|b| b.category.as_str())) {
            println!("{}", category);
        }
        return Ok(());
    }

    let query = BusinessQuery {
        search: args.search,
        category: args.category,
    };

    let results = query.apply(&businesses);
    if results.is_empty() {
        eprintln!("{}", "No businesses found.".dimmed());
        return Ok(());
    }

    for business in &results {
        if args.json {
            output::json(business)?;
        } else {
            println!(
                "{}  {}  by {}  [{}]",
                business.id.as_str().dimmed(),
                business.name.bold(),
                business.owner,
                business.category
            );
        }
    }

    Ok(())
}
