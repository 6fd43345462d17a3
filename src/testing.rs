//! Test support: a canned [`Fetch`] implementation so client and resolver
//! tests run against scripted upstream responses instead of the network.

use std::sync::Mutex;

use url::Url;

use crate::error::{Error, Result};
use crate::fetch::Fetch;

/// An empty-but-valid upstream response body.
pub const EMPTY_FEED_BODY: &str = r#"{"status":"ok","totalResults":0,"articles":[]}"#;

enum Canned {
    Body(String),
    Status(u16),
}

/// Scripted fetcher: each rule pairs a substring of the request URL with a
/// canned body or failure status. The first matching rule wins; unmatched
/// requests get an empty feed. Requested URLs are recorded for assertions.
pub struct StubFetcher {
    rules: Vec<(String, Canned)>,
    pub calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        StubFetcher {
            rules: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Respond to URLs containing `needle` with `body`.
    pub fn on(mut self, needle: &str, body: &str) -> Self {
        self.rules
            .push((needle.to_string(), Canned::Body(body.to_string())));
        self
    }

    /// Respond to URLs containing `needle` with a non-success HTTP status.
    pub fn on_status(mut self, needle: &str, status: u16) -> Self {
        self.rules
            .push((needle.to_string(), Canned::Status(status)));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Fetch for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let requested = url.as_str().to_string();
        self.calls.lock().unwrap().push(requested.clone());

        for (needle, canned) in &self.rules {
            if requested.contains(needle.as_str()) {
                return match canned {
                    Canned::Body(body) => Ok(body.clone()),
                    Canned::Status(status) => Err(Error::UpstreamStatus { status: *status }),
                };
            }
        }
        Ok(EMPTY_FEED_BODY.to_string())
    }
}
