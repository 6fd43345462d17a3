//! The news client: feed entry points over the query builder, transport,
//! and normalizer.
//!
//! Both feed operations return a [`FeedOutcome`] rather than raising:
//! transport, status, and parse failures are logged, tagged with their
//! reason, and still render as the neutral empty page. The only fatal
//! condition is a missing credential, which is rejected before a client can
//! be constructed (see [`crate::config`]).

use tracing::{info, instrument, warn};

use crate::config::NewsApiConfig;
use crate::error::Result;
use crate::fetch::{Fetch, HttpFetcher};
use crate::models::{Category, FeedOutcome, FeedPage};
use crate::normalize;
use crate::query::ArticleRequest;
use crate::utils::truncate_for_log;

/// Client for a NewsAPI-compatible upstream.
///
/// Generic over the transport so tests can script responses; production
/// code uses the [`HttpFetcher`] default.
#[derive(Debug)]
pub struct NewsClient<F = HttpFetcher> {
    config: NewsApiConfig,
    fetcher: F,
}

impl NewsClient<HttpFetcher> {
    pub fn new(config: NewsApiConfig) -> Self {
        NewsClient::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetch> NewsClient<F> {
    pub fn with_fetcher(config: NewsApiConfig, fetcher: F) -> Self {
        NewsClient { config, fetcher }
    }

    /// One page of top headlines for a country, optionally restricted to a
    /// category. Omitting the category means all categories.
    #[instrument(level = "info", skip(self))]
    pub async fn top_headlines(
        &self,
        country: &str,
        category: Option<Category>,
        page: u32,
    ) -> FeedOutcome {
        self.run(ArticleRequest::Headlines {
            country: country.to_string(),
            category,
            page,
        })
        .await
    }

    /// One page of full-text search results, most recent first.
    #[instrument(level = "info", skip(self))]
    pub async fn search_news(&self, query: &str, page: u32) -> FeedOutcome {
        self.run(ArticleRequest::Search {
            query: query.to_string(),
            page,
        })
        .await
    }

    async fn run(&self, request: ArticleRequest) -> FeedOutcome {
        match self.fetch_feed(&request).await {
            Ok(page) => {
                info!(
                    articles = page.articles.len(),
                    total_results = page.pagination.total_results,
                    page = page.pagination.current_page,
                    "Feed fetched"
                );
                FeedOutcome::Fetched(page)
            }
            Err(reason) => {
                warn!(error = %reason, "Feed fetch failed; serving empty state");
                FeedOutcome::Failed { reason }
            }
        }
    }

    async fn fetch_feed(&self, request: &ArticleRequest) -> Result<FeedPage> {
        let url = request.to_url(&self.config)?;
        let body = self.fetcher.fetch(&url).await?;
        match normalize::normalize_body(&body, request.page()) {
            Ok(page) => Ok(page),
            Err(e) => {
                warn!(
                    error = %e,
                    body_preview = %truncate_for_log(&body, 200),
                    "Upstream body failed to parse"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
impl<F> NewsClient<F> {
    /// Test access to the underlying fetcher.
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::PaginationInfo;
    use crate::testing::StubFetcher;

    fn config() -> NewsApiConfig {
        NewsApiConfig {
            api_key: "test-key".to_string(),
            base_url: "https://newsapi.test/v2".to_string(),
        }
    }

    fn headlines_body_27() -> String {
        let article = r#"{"title": "Headline", "url": "https://example.com/h1",
                          "urlToImage": "https://cdn.example.com/h1.jpg",
                          "source": {"name": "Example"},
                          "publishedAt": "2025-05-06T10:00:00Z"}"#;
        format!(r#"{{"status":"ok","totalResults":27,"articles":[{article}]}}"#)
    }

    #[tokio::test]
    async fn test_headlines_end_to_end_pagination() {
        let fetcher = StubFetcher::new().on("top-headlines", &headlines_body_27());
        let client = NewsClient::with_fetcher(config(), fetcher);

        let outcome = client.top_headlines("us", None, 1).await;
        assert!(!outcome.is_failed());

        let page = outcome.into_page();
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].source.name.as_deref(), Some("Example"));
    }

    #[tokio::test]
    async fn test_search_on_http_500_yields_failed_empty_state() {
        let fetcher = StubFetcher::new().on_status("everything", 500);
        let client = NewsClient::with_fetcher(config(), fetcher);

        let outcome = client.search_news("anything", 1).await;
        assert!(outcome.is_failed());
        assert!(matches!(
            outcome.failure(),
            Some(Error::UpstreamStatus { status: 500 })
        ));

        let page = outcome.into_page();
        assert!(page.articles.is_empty());
        assert_eq!(
            page.pagination,
            PaginationInfo {
                current_page: 1,
                total_pages: 1,
                total_results: 0,
                has_next_page: false,
                has_prev_page: false,
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_yields_failed_outcome() {
        let fetcher = StubFetcher::new().on("everything", "<html>gateway timeout</html>");
        let client = NewsClient::with_fetcher(config(), fetcher);

        let outcome = client.search_news("anything", 1).await;
        assert!(matches!(outcome.failure(), Some(Error::Parse(_))));
        assert!(outcome.into_page().articles.is_empty());
    }

    #[tokio::test]
    async fn test_request_url_carries_credential_and_page_size() {
        let fetcher = StubFetcher::new();
        let client = NewsClient::with_fetcher(config(), fetcher);

        let _ = client.search_news("rust", 2).await;
        let calls = client.fetcher().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("apiKey=test-key"));
        assert!(calls[0].contains("pageSize=9"));
        assert!(calls[0].contains("page=2"));
        assert!(calls[0].contains("sortBy=publishedAt"));
    }
}
