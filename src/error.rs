//! Error types for the news client.
//!
//! The taxonomy mirrors how failures are handled:
//! - [`Error::MissingApiKey`] and config-file problems are fatal and surface
//!   immediately at startup.
//! - Transport, status, and parse errors are captured inside a
//!   [`FeedOutcome::Failed`](crate::models::FeedOutcome) so feed callers can
//!   still render an empty page while keeping the reason available.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The upstream API credential was not supplied by flag, environment,
    /// or config file. Fatal: no request can be built without it.
    #[error("missing NewsAPI credential: set NEWS_API_KEY or api_key in the config file")]
    MissingApiKey,

    #[error("config file {path}: {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status code.
    #[error("upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("malformed upstream body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
