// markdown-renderer-rs/src/inline.rs
// Inline passes: emphasis, links and code spans

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));

// The opening marker must be followed by a non-space character so a `* `
// bullet marker is never taken as the start of an italic run.
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^\s*][^*\n]*)\*").expect("valid italic pattern"));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid code span pattern"));

/// `**bold**` then `*italic*`
pub(crate) fn emphasis(html: &str) -> String {
    let html = BOLD.replace_all(html, "<strong>${1}</strong>");
    ITALIC.replace_all(&html, "<em>${1}</em>").into_owned()
}

const ALLOWED_SCHEMES: [&str; 3] = ["http:", "https:", "mailto:"];

/// `[text](url)` becomes a new-tab anchor. Targets with any other scheme
/// (`javascript:`, `data:`, ...) are reduced to their text.
pub(crate) fn links(html: &str) -> String {
    LINK.replace_all(html, |caps: &Captures| {
        let (text, href) = (&caps[1], &caps[2]);
        if is_allowed_href(href) {
            format!(r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#, href, text)
        } else {
            text.to_string()
        }
    })
    .into_owned()
}

// A scheme is whatever precedes the first `:` when no `/`, `?` or `#` comes
// before it; hrefs without one are relative and allowed.
fn is_allowed_href(href: &str) -> bool {
    let href = href.trim().to_ascii_lowercase();
    match href.find(':') {
        Some(colon) if !href[..colon].contains(&['/', '?', '#'][..]) => ALLOWED_SCHEMES
            .iter()
            .any(|scheme| href.starts_with(scheme)),
        _ => true,
    }
}

pub(crate) fn code_spans(html: &str) -> String {
    CODE_SPAN.replace_all(html, "<code>${1}</code>").into_owned()
}
