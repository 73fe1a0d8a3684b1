//! List products command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use kindred_core::{ProductQuery, facets};

use crate::commands::fetch_or_empty;
use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ProductsArgs {
    /// Free-text search over name and description
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only products in this category
    #[arg(long)]
    pub category: Option<String>,

    /// List the distinct categories instead of the products
    #[arg(long)]
    pub categories: bool,

    /// Output products as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let remote = ctx.remote()?;
    let products = fetch_or_empty(remote.products().await, "products");

    if args.categories {
        for category in facets(products.iter().map(|p| p.category.as_str())) {
            println!("{}", category);
        }
        return Ok(());
    }

    let query = ProductQuery {
        search: args.search,
        category: args.category,
    };

    let results = query.apply(&products);
    if results.is_empty() {
        eprintln!("{}", "No products found.".dimmed());
        return Ok(());
    }

    for product in &results {
        if args.json {
            output::json(product)?;
        } else {
            let price = product.price.as_deref().unwrap_or("-");
            let seller = product.seller.as_deref().unwrap_or("-");
            println!(
                "{}  {}  {}  sold by {}  [{}]",
                product.id.as_str().dimmed(),
                product.name.bold(),
                price,
                seller,
                product.category
            );
        }
    }

    Ok(())
}
