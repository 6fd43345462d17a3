//! Terminal color theme, resolved once at startup and injected into the
//! renderer rather than held as process-global state.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve the effective theme: an explicit preference (flag, env, or
    /// config file) wins; otherwise fall back to the terminal's own
    /// light/dark hint.
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
        let theme = stored.unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });
        debug!(?stored, system_prefers_dark, ?theme, "Resolved theme");
        theme
    }
}

/// Best-effort detection of a dark terminal background.
///
/// Reads the `COLORFGBG` convention ("fg;bg", background codes 0-6 and 8 are
/// dark). Terminals that don't set it get the light default.
pub fn system_prefers_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => colorfgbg_is_dark(&value),
        Err(_) => false,
    }
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}

/// ANSI styling handles for the text renderer.
///
/// Constructed from the resolved [`Theme`] and passed down explicitly; the
/// renderer never consults the environment itself.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        ThemeContext { theme }
    }

    /// Style for headlines and section headers.
    pub fn heading(&self) -> &'static str {
        match self.theme {
            Theme::Light => "\x1b[1;34m",
            Theme::Dark => "\x1b[1;96m",
        }
    }

    /// Style for secondary metadata (source, dates, ids).
    pub fn dim(&self) -> &'static str {
        match self.theme {
            Theme::Light => "\x1b[90m",
            Theme::Dark => "\x1b[37m",
        }
    }

    pub fn reset(&self) -> &'static str {
        "\x1b[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins_over_system() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_system_preference_used_when_nothing_stored() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_colorfgbg_dark_backgrounds() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("7;default;0"));
        assert!(colorfgbg_is_dark("15;8"));
    }

    #[test]
    fn test_colorfgbg_light_backgrounds() {
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("0;7"));
        assert!(!colorfgbg_is_dark("garbage"));
        assert!(!colorfgbg_is_dark(""));
    }

    #[test]
    fn test_theme_context_styles_differ_by_theme() {
        let light = ThemeContext::new(Theme::Light);
        let dark = ThemeContext::new(Theme::Dark);
        assert_ne!(light.heading(), dark.heading());
        assert_eq!(light.reset(), dark.reset());
    }
}
