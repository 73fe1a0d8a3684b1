//! Clear stories command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ClearArgs {}

pub async fn run(_args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store()?;
    let count = store.stories().len();

    store.clear()?;

    output::success(&format!("Cleared {} local story(ies)", count));

    Ok(())
}
