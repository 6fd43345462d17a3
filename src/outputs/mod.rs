//! Output rendering for feeds and single articles.
//!
//! Two formats are supported:
//! - [`text`]: a themed front page for the terminal
//! - [`json`]: pretty-printed JSON matching the camelCase wire shapes

pub mod json;
pub mod text;
