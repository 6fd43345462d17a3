//! Response normalizer: maps raw upstream payloads into the internal article
//! shape and derives pagination.
//!
//! Normalization performs four repairs, in order:
//!
//! 1. Articles titled exactly `[Removed]` (the upstream tombstone for
//!    withdrawn content) are dropped.
//! 2. Each article gets a stable `id`: the percent-encoded source URL, which
//!    decodes back to the original URL exactly. URL-less articles get a
//!    deterministic token hashed from title and publish timestamp, so the
//!    same underlying content keeps the same id across repeated fetches.
//! 3. Each article gets a usable `image`: the original `urlToImage` unless
//!    it is missing or hosted on a domain known to serve broken images, in
//!    which case a fixed placeholder is substituted.
//! 4. Pagination is derived from `totalResults` and the fixed page size.
//!
//! Parse failures propagate as [`Error::Parse`](crate::error::Error); the
//! client layer converts them into a failed feed outcome.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;
use crate::models::{FeedPage, NewsApiResponse, NormalizedArticle, PaginationInfo, RawArticle};

/// Upstream placeholder title for withdrawn articles.
pub const REMOVED_TITLE: &str = "[Removed]";

/// Substitute image for missing or known-broken article images.
pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/800x400/e5e7eb/6b7280?text=News+Article";

/// Image hosts that consistently serve broken or hotlink-blocked images.
const BAD_IMAGE_HOSTS: &[&str] = &["biztoc.com"];

/// Parse a raw response body and normalize it for `requested_page`.
pub fn normalize_body(body: &str, requested_page: u32) -> Result<FeedPage> {
    let response: NewsApiResponse = serde_json::from_str(body)?;
    Ok(normalize_response(response, requested_page))
}

/// Normalize an already-parsed upstream response.
pub fn normalize_response(response: NewsApiResponse, requested_page: u32) -> FeedPage {
    let total_results = response.total_results;
    let received = response.articles.len();
    let status = response.status.as_deref().unwrap_or("");

    let articles: Vec<NormalizedArticle> = response
        .articles
        .into_iter()
        .filter(|raw| raw.title.as_deref() != Some(REMOVED_TITLE))
        .map(normalize_article)
        .collect();

    debug!(
        status,
        received,
        kept = articles.len(),
        total_results,
        requested_page,
        "Normalized upstream response"
    );

    FeedPage {
        pagination: PaginationInfo::for_page(requested_page.max(1), total_results),
        articles,
    }
}

fn normalize_article(raw: RawArticle) -> NormalizedArticle {
    let id = derive_id(&raw);
    let image = repair_image(raw.url_to_image.as_deref());
    NormalizedArticle {
        id,
        title: raw.title.unwrap_or_default(),
        description: raw.description,
        content: raw.content,
        url: raw.url,
        image,
        source: raw.source,
        author: raw.author,
        published_at: raw.published_at,
    }
}

/// Derive the article id.
///
/// With a URL present the id is its percent-encoded form, reversible via
/// [`urlencoding::decode`]. Without one, a SHA-256 of title and publish
/// timestamp yields a token that is stable across fetches but cannot be
/// resolved back to an article page.
pub(crate) fn derive_id(raw: &RawArticle) -> String {
    match raw.url.as_deref() {
        Some(url) if !url.is_empty() => urlencoding::encode(url).into_owned(),
        _ => fallback_id(
            raw.title.as_deref().unwrap_or_default(),
            raw.published_at.as_deref().unwrap_or_default(),
        ),
    }
}

fn fallback_id(title: &str, published_at: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"\n");
    hasher.update(published_at.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("article-{}", &digest[..16])
}

fn repair_image(url_to_image: Option<&str>) -> String {
    match url_to_image {
        Some(url) if !url.is_empty() && !is_bad_image_host(url) => url.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

fn is_bad_image_host(image_url: &str) -> bool {
    let Ok(parsed) = url::Url::parse(image_url) else {
        // Unparseable image URLs render broken anyway.
        return true;
    };
    let Some(host) = parsed.host_str() else {
        return true;
    };
    BAD_IMAGE_HOSTS
        .iter()
        .any(|bad| host == *bad || host.ends_with(&format!(".{bad}")))
}
