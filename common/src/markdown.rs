//! Markdown rendering for chat bubbles

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Relative URLs and http(s)/mailto destinations may be linked
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let end = url.find(['/', '?', '#']).unwrap_or(url.len());
    match url[..end].find(':') {
        None => true,
        Some(colon) => SAFE_SCHEMES
            .iter()
            .any(|scheme| url[..colon].eq_ignore_ascii_case(scheme)),
    }
}

fn sanitize(dest_url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest_url) {
        dest_url
    } else {
        CowStr::Borrowed("")
    }
}

/// Render markdown to HTML; embedded raw HTML is shown as text and
/// link or image destinations with other schemes are emptied
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_list() {
        let html = render_markdown("- Neem oil\n- Crop rotation\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Neem oil</li>"));
    }

    #[test]
    fn test_emphasis() {
        let html = render_markdown("Water **early morning**.");
        assert_eq!(html.trim(), "<p>Water <strong>early morning</strong>.</p>");
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script"));
    }

    #[test]
    fn test_inline_html_escaped() {
        let html = render_markdown("click <img src=x onerror=alert(1)> here");
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_script_link_emptied() {
        let html = render_markdown("[buy now](javascript:alert(document.cookie))");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(html.contains("<a href=\"\">buy now</a>"));

        let html = render_markdown("<JaVaScript:alert(1)>");
        assert!(!html.to_lowercase().contains("href=\"javascript:"));

        let html = render_markdown("![leaf](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!html.contains("data:"));
    }

    #[test]
    fn test_safe_links_kept() {
        let html = render_markdown("See [KVK](https://kvk.icar.gov.in/) or [notes](care/neem.md).");
        assert!(html.contains("href=\"https://kvk.icar.gov.in/\""));
        assert!(html.contains("href=\"care/neem.md\""));

        let html = render_markdown("<MAILTO:help@example.org>");
        assert!(html.contains("href=\"MAILTO:help@example.org\""));
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.org"));
        assert!(is_safe_url(" HTTP://example.org"));
        assert!(is_safe_url("/remedies?q=a:b"));
        assert!(is_safe_url("#top"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("  vbscript:msgbox"));
        assert!(!is_safe_url("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(render_markdown("hello").trim(), "<p>hello</p>");
    }
}
