//! Add product command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct AddProductArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// What the product is
    #[arg(long, default_value = "")]
    pub description: String,

    /// Product category
    #[arg(long, default_value = "General")]
    pub category: String,

    /// Product image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Display price, as shown to buyers
    #[arg(long)]
    pub price: Option<String>,

    /// Id of the selling business
    #[arg(long)]
    pub business_id: Option<String>,
}

pub async fn run(args: AddProductArgs, ctx: &Context) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("Product name must not be empty");
    }

    let remote = ctx.remote()?;
    remote
        .add_product(
            args.name.trim(),
            &args.description,
            &args.category,
            args.image.as_deref(),
            args.price.as_deref(),
            args.business_id.as_deref(),
        )
        .await
        .context("Failed to list product")?;

    output::success(&format!("Listed product: {}", args.name.trim()));

    Ok(())
}
