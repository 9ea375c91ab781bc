//! Error type shared by the core and the web frontend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The request never produced a response (network error, CORS, bad URL).
    #[error("failed to fetch {url}: {reason}")]
    AssetFetch { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    AssetStatus { url: String, status: u16 },

    #[error("malformed reaction manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("malformed viewer config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("progress value out of range: {0}")]
    InvalidProgress(String),
}
