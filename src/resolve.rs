//! Article resolver: best-effort lookup of a single article by its encoded
//! id.
//!
//! The upstream API has no fetch-by-id operation, so the resolver decodes
//! the id back to its source URL and hunts for it through up to three
//! sequential lookups, stopping at the first hit:
//!
//! 1. Search with the full URL as the query text; accept an exact URL match.
//! 2. Search with a title fragment derived from the URL's last path segment
//!    (`-`/`_` become spaces); accept an exact URL match or a
//!    case-insensitive fragment match in a candidate's title.
//! 3. Scan the current unfiltered top headlines for an exact URL match.
//!
//! Correctness depends entirely on the article still being present in recent
//! search or headline results; anything older than the upstream retention
//! window is unreachable by this path. Stage-level fetch failures count as
//! "no match at this stage" and the hunt continues.

use tracing::{debug, info, instrument};
use url::Url;

use crate::client::NewsClient;
use crate::fetch::Fetch;
use crate::models::NormalizedArticle;

/// Stage 3 scans this country's headlines, matching the feed default.
const HEADLINES_COUNTRY: &str = "us";

impl<F: Fetch> NewsClient<F> {
    /// Resolve an article by its percent-encoded URL id.
    ///
    /// Returns `None` for ids that do not decode, and after all three
    /// lookup stages miss. Upstream failures never surface here.
    #[instrument(level = "info", skip(self))]
    pub async fn article_by_id(&self, id: &str) -> Option<NormalizedArticle> {
        let decoded = match urlencoding::decode(id) {
            Ok(cow) => cow.into_owned(),
            Err(e) => {
                debug!(error = %e, "Article id does not percent-decode");
                return None;
            }
        };

        let page = self.search_news(&decoded, 1).await.into_page();
        if let Some(article) = take_exact_url(page.articles, &decoded) {
            info!(stage = 1, "Resolved article via URL search");
            return Some(article);
        }
        debug!(stage = 1, "No exact URL match in search results");

        if let Some(fragment) = title_fragment(&decoded) {
            let page = self.search_news(&fragment, 1).await.into_page();
            if let Some(article) = take_fragment_match(page.articles, &decoded, &fragment) {
                info!(stage = 2, %fragment, "Resolved article via title fragment");
                return Some(article);
            }
            debug!(stage = 2, %fragment, "No fragment match in search results");
        }

        let page = self
            .top_headlines(HEADLINES_COUNTRY, None, 1)
            .await
            .into_page();
        match take_exact_url(page.articles, &decoded) {
            Some(article) => {
                info!(stage = 3, "Resolved article via top headlines");
                Some(article)
            }
            None => {
                info!("Article not found after all lookup stages");
                None
            }
        }
    }
}

fn take_exact_url(articles: Vec<NormalizedArticle>, url: &str) -> Option<NormalizedArticle> {
    articles.into_iter().find(|a| a.url.as_deref() == Some(url))
}

fn take_fragment_match(
    articles: Vec<NormalizedArticle>,
    url: &str,
    fragment: &str,
) -> Option<NormalizedArticle> {
    let needle = fragment.to_lowercase();
    articles
        .into_iter()
        .find(|a| a.url.as_deref() == Some(url) || a.title.to_lowercase().contains(&needle))
}

/// Derive a searchable title fragment from an article URL: the last
/// non-empty path segment with separator characters mapped to spaces.
fn title_fragment(article_url: &str) -> Option<String> {
    let parsed = Url::parse(article_url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).next_back()?;
    let fragment = segment.replace(['-', '_'], " ").trim().to_string();
    if fragment.is_empty() { None } else { Some(fragment) }
}
