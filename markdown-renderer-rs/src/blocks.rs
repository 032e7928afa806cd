// markdown-renderer-rs/src/blocks.rs
// Block passes: headings, lists, fenced code, rules and paragraph wrapping

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADING_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("valid h3 pattern"));
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("valid h2 pattern"));

/// A `* ` item followed by any lines indented by two or more spaces
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\* (.*(?:\n {2,}.*)*)").expect("valid list item pattern"));
static CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n {2,}").expect("valid continuation pattern"));
static ITEM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(<li>.*</li>\s*)+").expect("valid item run pattern"));
static ADJACENT_LISTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"</ul>\s*<ul>").expect("valid list join pattern"));

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(\w*)\n([\s\S]*?)\n```").expect("valid fenced code pattern"));

static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---$").expect("valid rule pattern"));

static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>\s*</p>").expect("valid paragraph pattern"));

/// Tags that mark a line as already structured
const STRUCTURAL_PREFIXES: [&str; 5] = ["<h", "<ul", "<li", "<pre", "<hr"];

pub(crate) fn headings(html: &str) -> String {
    let html = HEADING_3.replace_all(html, "<h3>${1}</h3>");
    HEADING_2.replace_all(&html, "<h2>${1}</h2>").into_owned()
}

/// Convert bullet items, wrap each run of items in one `<ul>`, then merge
/// lists separated only by whitespace.
pub(crate) fn lists(html: &str) -> String {
    let html = LIST_ITEM.replace_all(html, |caps: &Captures| {
        let content = CONTINUATION.replace_all(&caps[1], "<br>");
        format!("<li>{}</li>", content.trim())
    });

    // The run swallows the whitespace after its last item; it is put back
    // after `</ul>` so following lines keep their own line.
    let html = ITEM_RUN.replace_all(&html, |caps: &Captures| {
        let run = &caps[0];
        let items = run.trim_end();
        format!("<ul>{}</ul>{}", items, &run[items.len()..])
    });

    ADJACENT_LISTS.replace_all(&html, "").into_owned()
}

pub(crate) fn code_blocks(html: &str) -> String {
    FENCED_CODE
        .replace_all(html, |caps: &Captures| {
            let lang = match &caps[1] {
                "" => "plaintext",
                lang => lang,
            };
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                caps[2].trim()
            )
        })
        .into_owned()
}

pub(crate) fn rules(html: &str) -> String {
    RULE.replace_all(html, "<hr>").into_owned()
}

/// Wrap every line that is not blank, not structural and not inside a
/// `<pre>` block in `<p>`.
pub(crate) fn paragraphs(html: &str) -> String {
    let mut in_pre = false;

    html.split('\n')
        .map(|line| {
            let trimmed = line.trim();

            if in_pre {
                if trimmed.contains("</pre>") {
                    in_pre = false;
                }
                return line.to_string();
            }

            if trimmed.starts_with("<pre") {
                in_pre = !trimmed.contains("</pre>");
                return line.to_string();
            }

            if trimmed.is_empty() || STRUCTURAL_PREFIXES.iter().any(|tag| trimmed.starts_with(tag)) {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn drop_empty_paragraphs(html: &str) -> String {
    EMPTY_PARAGRAPH.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_are_wrapped_once() {
        assert_eq!(
            lists("* alpha\n* beta\n\nafter"),
            "<ul><li>alpha</li>\n<li>beta</li></ul>\n\nafter"
        );
    }

    #[test]
    fn test_list_continuation_lines_join_with_break() {
        assert_eq!(
            lists("* first line\n  second line\n    third\n* next"),
            "<ul><li>first line<br>second line<br>third</li>\n<li>next</li></ul>"
        );
    }

    #[test]
    fn test_separate_item_runs_make_separate_lists() {
        let html = lists("* a\ntext\n* b");
        assert_eq!(html, "<ul><li>a</li></ul>\ntext\n<ul><li>b</li></ul>");
    }

    #[test]
    fn test_items_split_by_blank_line_share_one_list() {
        assert_eq!(lists("* a\n\n* b"), "<ul><li>a</li>\n\n<li>b</li></ul>");
    }

    #[test]
    fn test_adjacent_list_containers_collapse() {
        assert_eq!(
            ADJACENT_LISTS.replace_all("<ul><li>a</li></ul>\n<ul><li>b</li></ul>", ""),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_paragraphs_skip_structural_and_pre_lines() {
        let html = "<h2>T</h2>\nplain\n<pre><code>x\ny</code></pre>\n\n<hr>\n  <li>z</li>";
        assert_eq!(
            paragraphs(html),
            "<h2>T</h2>\n<p>plain</p>\n<pre><code>x\ny</code></pre>\n\n<hr>\n  <li>z</li>"
        );
    }

    #[test]
    fn test_drop_empty_paragraphs() {
        assert_eq!(drop_empty_paragraphs("<p></p>a<p> \t </p>b"), "ab");
    }

    #[test]
    fn test_rule_requires_whole_line() {
        assert_eq!(rules("---\n--- not a rule\n----"), "<hr>\n--- not a rule\n----");
    }
}
