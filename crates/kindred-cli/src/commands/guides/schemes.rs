//! Scheme directory command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{Scheme, SchemeQuery};

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SchemesArgs {
    /// Free-text search over name, eligibility, and benefit
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only schemes in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output schemes as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

/// The directory ships with the binary; no fetch involved.
pub async fn run(args: SchemesArgs, _ctx: &Context) -> Result<()> {
    let schemes = Scheme::builtin();

    let query = SchemeQuery {
        search: args.search,
        category: args.category,
    };

    let results = query.apply(&schemes);
    if results.is_empty() {
        eprintln!("{}", "No schemes found.".dimmed());
        return Ok(());
    }

    for scheme in &results {
        if args.json {
            output::json(scheme)?;
        } else {
            println!(
                "{}  {}  [{}]",
                scheme.id.as_str().dimmed(),
                scheme.name.bold(),
                scheme.category
            );
            output::field("  Eligibility", &scheme.eligibility);
            output::field("  Benefit", &scheme.benefit);
            output::field("  Link", &scheme.link);
        }
    }

    Ok(())
}
