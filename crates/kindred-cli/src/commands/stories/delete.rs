//! Delete story command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use kindred_core::RecordId;
use kindred_store::StoryStore;

use crate::config::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Story id (local or published)
    pub id: String,
}

pub async fn run(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid story id")?;

    // Owned ids live in the local store; anything else is a published
    // record and the delete goes to the remote source.
    if StoryStore::is_owned(&id) {
        let mut store = ctx.store()?;
        if !store.delete(&id)? {
            bail!("No local story with id {}", id);
        }
    } else {
        let remote = ctx.remote()?;
        remote
            .delete_story(&id)
            .await
            .context("Failed to delete published story")?;
    }

    output::success(&format!("Deleted story {}", id));

    Ok(())
}
