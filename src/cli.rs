//! Command-line interface definitions for the news portal client.
//!
//! All options can be provided via command-line flags or environment
//! variables; the API credential usually comes from `NEWS_API_KEY`.

use clap::{Parser, Subcommand};

use crate::models::Category;
use crate::theme::Theme;

/// Command-line arguments for the news portal client.
///
/// # Examples
///
/// ```sh
/// # Front page of US headlines
/// news_portal headlines
///
/// # Second page of technology headlines
/// news_portal headlines --category technology --page 2
///
/// # Full-text search
/// news_portal search "quantum computing" --page 1
///
/// # Resolve an article by its encoded id
/// news_portal article https%3A%2F%2Fexample.com%2Fstory
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file (api_key, base_url, theme)
    #[arg(short, long)]
    pub config: Option<String>,

    /// NewsAPI credential
    #[arg(long, env = "NEWS_API_KEY")]
    pub api_key: Option<String>,

    /// Override the upstream API base URL
    #[arg(long, env = "NEWS_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Emit JSON instead of the text front page
    #[arg(long)]
    pub json: bool,

    /// Color theme for text output (defaults to the terminal's hint)
    #[arg(long, value_enum, env = "NEWS_PORTAL_THEME")]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse current top headlines
    Headlines {
        /// Two-letter country code
        #[arg(long, default_value = "us")]
        country: String,

        /// Restrict to one category; omit for all categories
        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Search the full article index, most recent first
    Search {
        /// Free-text query
        query: String,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Look up a single article by its encoded id
    Article {
        /// Percent-encoded article URL, as emitted in feed output
        id: String,
    },
}
