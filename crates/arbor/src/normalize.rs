//! Best-effort conversion of markdown-flavoured text into strict outline syntax.
//!
//! The normalizer is the fallback used when the outline parser rejects its
//! input. It never fails: it keeps whatever reads like topic text and emits
//! it as `<indent>- <title>` lines under a root title.
//!
//! Rules, applied line by line:
//!
//! - Blank lines, horizontal rules and code fences are dropped.
//! - The first line with content becomes the root title, stripped of
//!   block-quote and heading markers, of every stacked list marker and of
//!   inline emphasis and code.
//! - A heading `#…` on a later line is indented by one level per extra `#`.
//! - A list item (`-`, `*`, `+`, `1.`, `1)`) keeps the indentation written
//!   before its marker.
//! - Any other line keeps its own leading whitespace as indentation.
//! - Footnote references, bracket tags such as `[x]` or `[A1]`, and link
//!   targets are removed; `[label](target)` keeps its label.
//! - Tabs in indentation become two spaces; inner whitespace runs collapse.
//!
//! ```
//! assert_eq!(
//!     arbor::normalize("# Title\n## Sub\n- item"),
//!     "Title\n  - Sub\n- item"
//! );
//! assert_eq!(arbor::normalize(" \n\t\n"), "");
//! ```

mod regexes;

use log::debug;

use regexes::{
    re_annotation_tag, re_blockquote, re_bold, re_code_fence, re_footnote, re_heading, re_italic,
    re_link, re_ordered_list, re_unordered_list,
};

/// Rewrites arbitrary text into outline syntax.
///
/// Returns an empty string when no line carries any topic text.
pub fn normalize(text: &str) -> String {
    let mut lines = text
        .lines()
        .map(strip_blockquote)
        .filter(|line| !line.trim().is_empty() && !is_structural(line));

    let Some(root) = lines.by_ref().map(clean_root).find(|title| !title.is_empty()) else {
        debug!("Nothing to normalize");
        return String::new();
    };

    let mut output = vec![root];
    output.extend(lines.filter_map(normalize_line));

    debug!(lines = output.len(); "Outline normalized");
    output.join("\n")
}

fn strip_blockquote(line: &str) -> &str {
    match re_blockquote().find(line) {
        Some(prefix) => &line[prefix.end()..],
        None => line,
    }
}

/// Horizontal rules and code fences carry no topic text.
fn is_structural(line: &str) -> bool {
    regexes::re_horizontal_rule().is_match(line.trim()) || re_code_fence().is_match(line)
}

/// Splits a line into its indentation and content.
fn split_indent(line: &str) -> (String, &str) {
    if let Some(caps) = re_heading().captures(line) {
        let level = caps[1].len() - 1;
        let content = caps.get(2).map_or("", |m| m.as_str());
        return ("  ".repeat(level), content);
    }

    if let Some(caps) = re_unordered_list()
        .captures(line)
        .or_else(|| re_ordered_list().captures(line))
    {
        let content = caps.get(2).map_or("", |m| m.as_str());
        return (expand_indent(&caps[1]), content);
    }

    let content = line.trim_start();
    (expand_indent(&line[..line.len() - content.len()]), content)
}

fn expand_indent(indent: &str) -> String {
    indent
        .chars()
        .map(|ch| if ch == '\t' { "  " } else { " " })
        .collect()
}

fn normalize_line(line: &str) -> Option<String> {
    let (indent, content) = split_indent(line);
    let cleaned = clean_inline(content);
    (!cleaned.is_empty()).then(|| format!("{indent}- {cleaned}"))
}

/// Drops every marker the root title may carry.
///
/// Returns an empty string when nothing but markers is left, so the line
/// cannot be read back as a list item.
fn clean_root(line: &str) -> String {
    let (_, content) = split_indent(line);
    let text = re_bold().replace_all(content, "${1}${2}");
    let text = re_italic().replace_all(&text, "${1}");
    let text = text.replace('`', "");
    strip_list_markers(&clean_inline(&text)).to_string()
}

/// Removes stacked list markers such as `- - item` or `1. - item`.
fn strip_list_markers(mut content: &str) -> &str {
    loop {
        let trimmed = content.trim_start();
        if matches!(trimmed, "-" | "*" | "+") {
            return "";
        }
        match re_unordered_list()
            .captures(trimmed)
            .or_else(|| re_ordered_list().captures(trimmed))
            .and_then(|caps| caps.get(2))
        {
            Some(rest) => content = rest.as_str(),
            None => return trimmed,
        }
    }
}

fn clean_inline(content: &str) -> String {
    let text = re_footnote().replace_all(content, "");
    let text = re_link().replace_all(&text, "${1}");
    let text = re_annotation_tag().replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
