//! Showcase subcommand implementations.

mod add_business;
mod add_product;
mod businesses;
mod products;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Context;

#[derive(Args, Debug)]
pub struct ShowcaseCommand {
    #[command(subcommand)]
    pub command: ShowcaseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ShowcaseSubcommand {
    /// List business listings
    Businesses(businesses::BusinessesArgs),

    /// List products
    Products(products::ProductsArgs),

    /// List a new business
    AddBusiness(add_business::AddBusinessArgs),

    /// List a new product
    AddProduct(add_product::AddProductArgs),
}

pub async fn handle(cmd: ShowcaseCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        ShowcaseSubcommand::Businesses(args) => businesses::run(args, ctx).await,
        ShowcaseSubcommand::Products(args) => products::run(args, ctx).await,
        ShowcaseSubcommand::AddBusiness(args) => add_business::run(args, ctx).await,
        ShowcaseSubcommand::AddProduct(args) => add_product::run(args, ctx).await,
    }
}
