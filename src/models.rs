//! Data models for upstream article payloads and their normalized forms.
//!
//! This module defines the shapes flowing through the client:
//! - [`RawArticle`] / [`NewsApiResponse`]: the upstream NewsAPI wire schema,
//!   where every article field may be absent or null
//! - [`NormalizedArticle`]: the internal article shape with a derived `id`
//!   and a repaired `image` field
//! - [`PaginationInfo`]: page arithmetic derived from `totalResults`
//! - [`FeedPage`] / [`FeedOutcome`]: one page of normalized articles, tagged
//!   with whether the fetch actually succeeded
//!
//! The wire schema uses camelCase field names, hence the serde
//! `rename_all = "camelCase"` attributes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed page size for every feed request.
///
/// The value 9 matches the original 3x3 card grid this client replaced; it is
/// also the divisor for all pagination arithmetic.
pub const PAGE_SIZE: u32 = 9;

/// Headline categories accepted by the upstream `top-headlines` operation.
///
/// Omitting the category means "all categories" — there is deliberately no
/// `All` variant; callers pass `Option<Category>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Technology,
    Sports,
    Health,
    Entertainment,
    Science,
}

impl Category {
    /// The query-parameter value the upstream API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Science => "science",
        }
    }

    /// Human-readable label for headings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Science => "Science",
        }
    }
}

/// The `source` object attached to each upstream article.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArticleSource {
    pub name: Option<String>,
}

/// A raw article exactly as the upstream API returns it.
///
/// Every field is optional: the API routinely returns nulls, and withdrawn
/// articles arrive as tombstones with the literal title `[Removed]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    pub author: Option<String>,
    pub published_at: Option<String>,
}

/// Envelope for both upstream operations (`top-headlines` and `everything`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// An article after normalization.
///
/// Compared to [`RawArticle`] this adds:
/// - `id`: the percent-encoded source URL, or a deterministic hash token
///   when the article has no URL (see [`crate::normalize`])
/// - `image`: the original `urlToImage`, or a placeholder when the image is
///   missing or hosted on a known-broken domain
///
/// Instances are created fresh on every response and never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedArticle {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub image: String,
    pub source: ArticleSource,
    pub author: Option<String>,
    pub published_at: Option<String>,
}

/// Page arithmetic for one feed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationInfo {
    /// Derive pagination for `current_page` from the upstream result count.
    ///
    /// `total_pages` is `ceil(total_results / PAGE_SIZE)` with a floor of 1,
    /// so an empty result set still reads as "page 1 of 1".
    pub fn for_page(current_page: u32, total_results: u32) -> Self {
        let total_pages = total_results.div_ceil(PAGE_SIZE).max(1);
        PaginationInfo {
            current_page,
            total_pages,
            total_results,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }

    /// The neutral block served when a fetch fails: page 1 of 1, no results.
    pub fn empty() -> Self {
        PaginationInfo::for_page(1, 0)
    }
}

/// One renderable page of news: articles plus pagination.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub articles: Vec<NormalizedArticle>,
    pub pagination: PaginationInfo,
}

impl FeedPage {
    /// The empty state: no articles, neutral pagination.
    pub fn empty() -> Self {
        FeedPage {
            articles: Vec::new(),
            pagination: PaginationInfo::empty(),
        }
    }
}

/// Result of a feed fetch.
///
/// Historically this client collapsed upstream failures into an empty page,
/// leaving callers unable to tell "no results" from "the API is down". The
/// tag keeps that distinction while [`FeedOutcome::into_page`] preserves the
/// old render-an-empty-state behavior for callers that only display.
#[derive(Debug)]
pub enum FeedOutcome {
    Fetched(FeedPage),
    Failed { reason: Error },
}

impl FeedOutcome {
    /// The page to render: the fetched data, or the empty state on failure.
    pub fn into_page(self) -> FeedPage {
        match self {
            FeedOutcome::Fetched(page) => page,
            FeedOutcome::Failed { .. } => FeedPage::empty(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FeedOutcome::Failed { .. })
    }

    /// The failure reason, if the fetch did not succeed.
    pub fn failure(&self) -> Option<&Error> {
        match self {
            FeedOutcome::Fetched(_) => None,
            FeedOutcome::Failed { reason } => Some(reason),
        }
    }
}
