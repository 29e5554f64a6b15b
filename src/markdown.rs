//! Markdown summary rendering + HTML sanitization
//!
//! The executive summaries arrive as Markdown from the offline report
//! pipeline. They are rendered with `comrak` and then passed through an
//! `ammonia` allowlist: the pipeline is internal, but the summaries
//! transit a web server, so script/style content is stripped anyway.

use std::collections::HashSet;
use std::sync::LazyLock;

use ammonia::Builder;
use comrak::{markdown_to_html, Options};

static COMRAK_OPTIONS: LazyLock<Options<'static>> = LazyLock::new(|| {
    let mut opts = Options::default();

    // Summaries use GFM tables and the occasional strikethrough.
    opts.extension.table = true;
    opts.extension.strikethrough = true;

    // Render embedded HTML, then sanitize it below.
    opts.render.r#unsafe = true;

    opts
});

static HTML_SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut b = Builder::new();
    b.link_rel(None);

    // Headings, tables, emphasis, lists, code, links and inline chart
    // images are what the report summaries actually contain.
    b.tags(
        [
            "a", "b", "blockquote", "br", "code", "em", "h1", "h2", "h3", "h4", "h5", "h6",
            "hr", "i", "img", "li", "ol", "p", "pre", "strong", "table", "tbody", "td", "th",
            "thead", "tr", "ul", "del", "span",
        ]
        .into_iter()
        .collect::<HashSet<&'static str>>(),
    );

    b.clean_content_tags(["script", "style"].into_iter().collect::<HashSet<_>>());

    b.add_tag_attributes("a", &["href", "title"]);
    b.add_tag_attributes("img", &["src", "alt", "title", "width", "height"]);
    b.add_tag_attributes("code", &["class"]);

    b.url_schemes(["http", "https", "data"].into_iter().collect::<HashSet<_>>());

    b
});

/// Render a Markdown summary to sanitized HTML.
/// Whitespace-only input renders as the empty string.
pub fn render_summary_html(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let html = markdown_to_html(markdown, &COMRAK_OPTIONS);
    HTML_SANITIZER.clean(&html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(render_summary_html(""), "");
        assert_eq!(render_summary_html("   \n\n"), "");
    }

    #[test]
    fn headings_render() {
        let html = render_summary_html("## Executive Summary\n### Key Metrics");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<h3>"));
    }

    #[test]
    fn bold_and_italic() {
        let html = render_summary_html("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn gfm_tables_render() {
        let md = "| Metric | Value |\n|---|---|\n| Total | 312 |";
        let html = render_summary_html(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>"));
    }

    #[test]
    fn inline_chart_images_preserved() {
        let html = render_summary_html("![Hourly Patterns](https://cdn.example.com/hourly.png)");
        assert!(html.contains("<img"));
        assert!(html.contains("src=\"https://cdn.example.com/hourly.png\""));
    }

    #[test]
    fn bullet_summaries_render_as_lists() {
        let html = render_summary_html("- Answer rate held at 90%\n- Abandonment spiked at 11:30");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn script_tags_stripped() {
        let html = render_summary_html("<script>alert('xss')</script>ok");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert"));
        assert!(html.contains("ok"));
    }

    #[test]
    fn event_handlers_stripped() {
        let html = render_summary_html("<a onclick=\"alert(1)\" href=\"https://x.test\">x</a>");
        assert!(!html.contains("onclick"));
        assert!(html.contains("<a"));
    }

    #[test]
    fn javascript_urls_stripped() {
        let html = render_summary_html("<a href=\"javascript:alert(1)\">bad</a>");
        assert!(!html.contains("javascript:"));
    }
}
