//! Configuration for the upstream news API and display preferences.
//!
//! Settings are layered: command-line flags and environment variables win
//! over the optional YAML config file. The API credential is the only
//! required setting; its absence is fatal before any request is built.

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::theme::Theme;

/// Default upstream endpoint (NewsAPI v2).
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Shape of the optional YAML config file.
///
/// ```yaml
/// api_key: "..."
/// base_url: "https://newsapi.org/v2"
/// theme: dark
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub theme: Option<Theme>,
}

/// Everything the client needs to talk to the upstream API.
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: NewsApiConfig,
    /// Stored theme preference, if any; the effective theme is resolved in
    /// combination with the terminal hint at startup.
    pub theme: Option<Theme>,
}

impl AppConfig {
    /// Layer CLI/env values over the optional config file.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] / [`Error::ConfigFile`] if an explicitly named config
    ///   file cannot be read or parsed
    /// - [`Error::MissingApiKey`] if no credential is present in any layer
    pub fn resolve(
        config_path: Option<&str>,
        api_key: Option<String>,
        base_url: Option<String>,
        theme: Option<Theme>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                let parsed: FileConfig =
                    serde_yaml::from_str(&contents).map_err(|source| Error::ConfigFile {
                        path: path.to_string(),
                        source,
                    })?;
                info!(path, "Loaded configuration file");
                parsed
            }
            None => FileConfig::default(),
        };

        let api_key = api_key
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;
        let base_url = base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let theme = theme.or(file.theme);

        debug!(%base_url, ?theme, "Resolved configuration");
        Ok(AppConfig {
            api: NewsApiConfig { api_key, base_url },
            theme,
        })
    }
}
