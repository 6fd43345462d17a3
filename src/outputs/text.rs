//! Themed text rendering: the terminal's version of the front page.

use crate::models::{FeedPage, NormalizedArticle};
use crate::theme::ThemeContext;
use crate::utils::{clean_content, format_date, strip_html};

/// Render one feed page under a heading.
pub fn render_feed(heading: &str, page: &FeedPage, theme: &ThemeContext) -> String {
    let mut out = String::new();
    let p = &page.pagination;

    out.push_str(&format!(
        "{}{}{}\n",
        theme.heading(),
        heading,
        theme.reset()
    ));
    out.push_str(&format!(
        "{}{} results — page {} of {}{}\n\n",
        theme.dim(),
        p.total_results,
        p.current_page,
        p.total_pages,
        theme.reset()
    ));

    if page.articles.is_empty() {
        out.push_str("No articles found.\n");
        return out;
    }

    for (i, article) in page.articles.iter().enumerate() {
        out.push_str(&render_card(i + 1, article, theme));
        out.push('\n');
    }

    if p.has_next_page {
        out.push_str(&format!(
            "{}more: --page {}{}\n",
            theme.dim(),
            p.current_page + 1,
            theme.reset()
        ));
    }
    out
}

/// Render a resolved article in full.
pub fn render_article(article: &NormalizedArticle, theme: &ThemeContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}\n",
        theme.heading(),
        article.title,
        theme.reset()
    ));
    out.push_str(&format!(
        "{}{}{}\n\n",
        theme.dim(),
        byline(article),
        theme.reset()
    ));

    if let Some(description) = &article.description {
        out.push_str(&strip_html(description));
        out.push_str("\n\n");
    }
    if let Some(content) = &article.content {
        out.push_str(&clean_content(&strip_html(content)));
        out.push_str("\n\n");
    }
    if let Some(url) = &article.url {
        out.push_str(&format!("Read the full article: {url}\n"));
    }
    out.push_str(&format!("{}image: {}{}\n", theme.dim(), article.image, theme.reset()));
    out
}

fn render_card(index: usize, article: &NormalizedArticle, theme: &ThemeContext) -> String {
    let mut out = format!("{index}. {}\n", article.title);
    out.push_str(&format!(
        "   {}{}{}\n",
        theme.dim(),
        byline(article),
        theme.reset()
    ));
    if let Some(description) = &article.description {
        out.push_str(&format!("   {}\n", strip_html(description)));
    }
    out.push_str(&format!(
        "   {}id: {}{}\n",
        theme.dim(),
        article.id,
        theme.reset()
    ));
    out
}

fn byline(article: &NormalizedArticle) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(name) = &article.source.name {
        parts.push(name.clone());
    }
    if let Some(published_at) = &article.published_at {
        parts.push(format_date(published_at));
    }
    if let Some(author) = &article.author {
        parts.push(format!("By {author}"));
    }
    parts.join(" · ")
}
