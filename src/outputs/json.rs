//! JSON output for feeds and single articles.

use crate::error::Result;
use crate::models::{FeedPage, NormalizedArticle};

/// Serialize a feed page, pagination included, as pretty JSON.
pub fn feed_to_json(page: &FeedPage) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

/// Serialize a single resolved article as pretty JSON.
pub fn article_to_json(article: &NormalizedArticle) -> Result<String> {
    Ok(serde_json::to_string_pretty(article)?)
}
