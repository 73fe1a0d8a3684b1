//! Command context: API endpoint and store location resolution.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;

use kindred_core::ApiUrl;
use kindred_remote::RemoteSource;
use kindred_store::StoryStore;

use crate::cli::Cli;

/// Resolved configuration shared by every command.
///
/// Flags win over environment variables; the store path falls back to the
/// platform data directory. Nothing is validated until a command actually
/// needs it, so purely local commands run without any API configuration.
#[derive(Debug)]
pub struct Context {
    api_url: Option<String>,
    api_key: Option<String>,
    store_path: Option<PathBuf>,
}

impl Context {
    /// Resolve the context from parsed arguments and the environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli
                .api_url
                .clone()
                .or_else(|| std::env::var("KINDRED_API_URL").ok()),
            api_key: cli
                .api_key
                .clone()
                .or_else(|| std::env::var("KINDRED_API_KEY").ok()),
            store_path: cli
                .store
                .clone()
                .map(PathBuf::from)
                .or_else(|| std::env::var_os("KINDRED_STORE").map(PathBuf::from)),
        }
    }

    /// Open the local story store.
    pub fn store(&self) -> Result<StoryStore> {
        let path = match &self.store_path {
            Some(path) => path.clone(),
            None => default_store_path()?,
        };
        Ok(StoryStore::open(path))
    }

    /// Connect to the hosted content API.
    pub fn remote(&self) -> Result<RemoteSource> {
        let url = self
            .api_url
            .as_deref()
            .context("No API endpoint configured. Pass --api-url or set KINDRED_API_URL.")?;
        let key = self
            .api_key
            .as_deref()
            .context("No API key configured. Pass --api-key or set KINDRED_API_KEY.")?;

        let base = ApiUrl::new(url).context("Invalid API URL")?;
        Ok(RemoteSource::new(base, key))
    }
}

/// The default story store location under the platform data directory.
fn default_store_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "kindred").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("user-stories.json"))
}
