//! Turning a fetched web page into plain job-description text.
//!
//! Non-content elements are removed with a streaming rewriter first, the
//! remaining text nodes are joined with spaces, whitespace runs are
//! collapsed and the result is truncated to a fixed number of characters.

use scraper::Html;

/// Elements whose whole subtree is dropped before text extraction.
pub const DEFAULT_REMOVED_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "header", "noscript"];

/// Upper bound on extracted page text, in characters.
pub const DEFAULT_MAX_CHARS: usize = 20_000;

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Tag names removed together with their content
    pub removed_tags: Vec<String>,
    /// Maximum number of characters kept
    pub max_chars: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            removed_tags: DEFAULT_REMOVED_TAGS.iter().map(|t| t.to_string()).collect(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Extracts bounded, whitespace-normalised text from an HTML page.
pub fn page_text(html: &str, config: &PreprocessConfig) -> String {
    let stripped = strip_markup(html, config);
    let document = Html::parse_document(&stripped);
    let joined = document.root_element().text().collect::<Vec<_>>().join(" ");

    truncate_chars(&collapse_whitespace(&joined), config.max_chars)
}

/// Removes the configured elements and everything inside them.
///
/// Tag names that are not valid element selectors are ignored. If the
/// rewriter fails the input is returned unchanged.
pub fn strip_markup(html: &str, config: &PreprocessConfig) -> String {
    let handlers: Vec<_> = config
        .removed_tags
        .iter()
        .filter(|tag| is_tag_name(tag))
        .map(|tag| {
            lol_html::element!(tag.as_str(), |el| {
                el.remove();
                Ok(())
            })
        })
        .collect();

    if handlers.is_empty() {
        return html.to_string();
    }

    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings { element_content_handlers: handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    match rewriter.write(html.as_bytes()) {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    match rewriter.end() {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    output
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

fn is_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '-'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
            <head><title>Backend Engineer</title><style>body{color:red;}</style></head>
            <body>
                <header>Site header kubernetes</header>
                <nav><a href="/">Home</a> <a href="/jobs">Jobs with react</a></nav>
                <main>
                    <h1>Backend   Engineer</h1>
                    <p>We need Python and
                       AWS experience.</p>
                </main>
                <script>var stack = "javascript";</script>
                <noscript>Enable JavaScript</noscript>
                <footer>Footer linux</footer>
            </body>
        </html>
    "#;

    #[test]
    fn test_page_text_drops_non_content() {
        let text = page_text(PAGE, &PreprocessConfig::default());

        assert!(text.contains("We need Python and AWS experience."));
        assert!(!text.contains("kubernetes"));
        assert!(!text.contains("react"));
        assert!(!text.to_lowercase().contains("javascript"));
        assert!(!text.contains("linux"));
        assert!(!text.contains("color:red"));
    }

    #[test]
    fn test_page_text_collapses_whitespace() {
        let text = page_text(PAGE, &PreprocessConfig::default());
        assert!(text.contains("Backend Engineer"));
        assert!(!text.contains("  "));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_page_text_truncates() {
        let config = PreprocessConfig { max_chars: 10, ..Default::default() };
        let text = page_text("<p>abcdefghijklmnopqrstuvwxyz</p>", &config);
        assert_eq!(text, "abcdefghij");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b   c "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_invalid_tag_names_ignored() {
        let config = PreprocessConfig { removed_tags: vec!["[[bad".to_string(), "".to_string()], max_chars: 100 };
        let html = "<p>kept</p>";
        assert_eq!(strip_markup(html, &config), html);
    }

    #[test]
    fn test_is_tag_name() {
        assert!(is_tag_name("nav"));
        assert!(is_tag_name("h1"));
        assert!(!is_tag_name("1h"));
        assert!(!is_tag_name("a b"));
    }
}
