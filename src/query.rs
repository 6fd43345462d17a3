//! Query builder: translates a high-level article request into the upstream
//! API's URL and parameter schema.
//!
//! Two upstream operations are supported:
//!
//! | Operation | Path | Fixed parameters |
//! |-----------|------|------------------|
//! | Headlines | `/top-headlines` | `pageSize=9` |
//! | Search | `/everything` | `pageSize=9`, `sortBy=publishedAt`, `language=en` |
//!
//! The credential is appended as the `apiKey` query parameter, which is why
//! full request URLs must never appear in logs.

use url::Url;

use crate::config::NewsApiConfig;
use crate::error::Result;
use crate::models::{Category, PAGE_SIZE};

/// Search results are pinned to one language.
const SEARCH_LANGUAGE: &str = "en";

/// Search results are always ordered most recent first.
const SEARCH_SORT: &str = "publishedAt";

/// A high-level request for one page of articles.
#[derive(Debug, Clone)]
pub enum ArticleRequest {
    /// Top headlines for a country, optionally restricted to a category.
    Headlines {
        country: String,
        category: Option<Category>,
        page: u32,
    },
    /// Full-text search of the broader article index.
    Search { query: String, page: u32 },
}

impl ArticleRequest {
    /// The requested page, clamped to the 1-based invariant.
    pub fn page(&self) -> u32 {
        match self {
            ArticleRequest::Headlines { page, .. } | ArticleRequest::Search { page, .. } => {
                (*page).max(1)
            }
        }
    }

    /// Build the upstream request URL.
    ///
    /// The config is guaranteed to carry a credential (enforced at
    /// [`AppConfig::resolve`](crate::config::AppConfig::resolve)), so this
    /// only fails on an unparseable base URL.
    pub fn to_url(&self, config: &NewsApiConfig) -> Result<Url> {
        let base = config.base_url.trim_end_matches('/');
        let page = self.page();

        let mut url = match self {
            ArticleRequest::Headlines {
                country, category, ..
            } => {
                let mut url = Url::parse(&format!("{base}/top-headlines"))?;
                {
                    let mut pairs = url.query_pairs_mut();
                    pairs.append_pair("country", country);
                    if let Some(category) = category {
                        pairs.append_pair("category", category.as_str());
                    }
                }
                url
            }
            ArticleRequest::Search { query, .. } => {
                let mut url = Url::parse(&format!("{base}/everything"))?;
                url.query_pairs_mut()
                    .append_pair("q", query)
                    .append_pair("sortBy", SEARCH_SORT)
                    .append_pair("language", SEARCH_LANGUAGE);
                url
            }
        };

        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &PAGE_SIZE.to_string())
            .append_pair("apiKey", &config.api_key);
        Ok(url)
    }
}
