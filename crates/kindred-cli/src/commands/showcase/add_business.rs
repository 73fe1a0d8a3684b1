//! Add business command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct AddBusinessArgs {
    /// Business name
    #[arg(long)]
    pub name: String,

    /// Owner name
    #[arg(long)]
    pub owner: String,

    /// What the business does
    #[arg(long, default_value = "")]
    pub description: String,

    /// Business category
    #[arg(long, default_value = "General")]
    pub category: String,

    /// Logo URL
    #[arg(long)]
    pub logo: Option<String>,

    /// Contact address
    #[arg(long, default_value = "")]
    pub contact: String,
}

pub async fn run(args: AddBusinessArgs, ctx: &Context) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("Business name must not be empty");
    }
    if args.owner.trim().is_empty() {
        bail!("Owner name must not be empty");
    }

    let remote = ctx.remote()?;
    remote
        .add_business(
            args.name.trim(),
            args.owner.trim(),
            &args.description,
            &args.category,
            args.logo.as_deref(),
            &args.contact,
        )
        .await
        .context("Failed to list business")?;

    output::success(&format!("Listed business: {}", args.name.trim()));

    Ok(())
}
