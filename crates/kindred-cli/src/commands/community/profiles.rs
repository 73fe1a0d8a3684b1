//! List profiles command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{ProfileKind, ProfileQuery, facets};

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Free-text search over name, bio, and skills
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only mentors or only mentees
    #[arg(long)]
    pub kind: Option<ProfileKind>,

    /// Only profiles in this location
    #[arg(long)]
    pub location: Option<String>,

    /// List the distinct locations instead of the profiles
    #[arg(long)]
    pub locations: bool,

    /// Output profiles as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ProfilesArgs, ctx: &Context) -> Result<()> {
    let remote = ctx.remote()?;
    let profiles = fetch_or_empty(remote.profiles().await, "profiles");

    if args.locations {
        for location in facets(profiles.iter().filter_map(|p| p.city())) {
            println!("{}", location);
        }
        return Ok(());
    }

    let query = ProfileQuery {
        search: args.search,
        kind: args.kind,
        location: args.location,
    };

    let results = query.apply(&profiles);
    if results.is_empty() {
        eprintln!("{}", "No profiles found.".dimmed());
        return Ok(());
    }

    for profile in &results {
        if args.json {
            output::json(profile)?;
        } else {
            println!(
                "{}  {}  {} ({})  {}",
                profile.id.as_str().dimmed(),
                profile.name.bold(),
                profile.kind,
                profile.availability,
                profile.location
            );
        }
    }

    Ok(())
}
