//! kindred-remote - Hosted table API client.

mod client;
mod source;

pub use client::ApiClient;
pub use source::RemoteSource;
