//! # News Portal
//!
//! A terminal client for a NewsAPI-compatible backend: browse top headlines
//! by country and category, run full-text searches, and pull up a single
//! article by the encoded id shown in feed output.
//!
//! ## Usage
//!
//! ```sh
//! export NEWS_API_KEY=...
//! news_portal headlines --category technology
//! news_portal search "rust language" --page 2
//! news_portal article https%3A%2F%2Fexample.com%2Fstory
//! ```
//!
//! ## Architecture
//!
//! Each command is one request/response cycle through three layers:
//! 1. **Query builder**: translates the request into the upstream parameter
//!    schema (fixed page size of 9)
//! 2. **Transport**: a single HTTP call, no retries
//! 3. **Normalizer**: tombstone filtering, id derivation, image repair, and
//!    pagination arithmetic
//!
//! Feed commands never fail past the client boundary: upstream errors are
//! tagged in the outcome and rendered as the empty state. The article
//! command resolves through up to three sequential lookups before reporting
//! "not found".

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod client;
mod config;
mod error;
mod fetch;
mod models;
mod normalize;
mod outputs;
mod query;
mod resolve;
#[cfg(test)]
mod testing;
mod theme;
mod utils;

use cli::{Cli, Command};
use client::NewsClient;
use config::AppConfig;
use error::Result;
use models::FeedOutcome;
use theme::{Theme, ThemeContext};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args.config, json = args.json, "Parsed CLI arguments");

    let config = match AppConfig::resolve(
        args.config.as_deref(),
        args.api_key,
        args.base_url,
        args.theme,
    ) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration is unusable");
            eprintln!("error: {e}");
            return Err(e);
        }
    };

    let theme = Theme::resolve(config.theme, theme::system_prefers_dark());
    let theme_ctx = ThemeContext::new(theme);
    let client = NewsClient::new(config.api);

    match args.command {
        Command::Headlines {
            country,
            category,
            page,
        } => {
            let heading = match category {
                Some(category) => format!("{} News", category.label()),
                None => "Latest News".to_string(),
            };
            let outcome = client.top_headlines(&country, category, page).await;
            print_feed(&heading, outcome, args.json, &theme_ctx)?;
        }
        Command::Search { query, page } => {
            let heading = format!("Search Results for \"{query}\"");
            let outcome = client.search_news(&query, page).await;
            print_feed(&heading, outcome, args.json, &theme_ctx)?;
        }
        Command::Article { id } => match client.article_by_id(&id).await {
            Some(article) => {
                info!(title = %article.title, "Article resolved");
                if args.json {
                    println!("{}", outputs::json::article_to_json(&article)?);
                } else {
                    println!("{}", outputs::text::render_article(&article, &theme_ctx));
                }
            }
            None => {
                println!("Article not found.");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Print a feed outcome in the requested format.
///
/// Failed fetches still render the empty page; the reason goes to stderr so
/// piped JSON stays clean.
fn print_feed(
    heading: &str,
    outcome: FeedOutcome,
    json: bool,
    theme: &ThemeContext,
) -> Result<()> {
    if let Some(reason) = outcome.failure() {
        warn!(error = %reason, "Feed fetch failed; rendering empty state");
        eprintln!("warning: news fetch failed ({reason}); showing empty results");
    }
    let page = outcome.into_page();
    if json {
        println!("{}", outputs::json::feed_to_json(&page)?);
    } else {
        println!("{}", outputs::text::render_feed(heading, &page, theme));
    }
    Ok(())
}
