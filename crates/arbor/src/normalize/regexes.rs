//! Compiled regular expressions used by the normalizer.
//!
//! Each accessor uses a `OnceLock` to compile the pattern at most once.

use regex::Regex;
use std::sync::OnceLock;

pub(super) fn re_blockquote() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:>\s?)+")
            .expect("re_blockquote: pattern is valid and should always compile")
    })
}

pub(super) fn re_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(#{1,6})\s+(.*)$")
            .expect("re_heading: pattern is valid and should always compile")
    })
}

pub(super) fn re_unordered_list() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\s*)[-*+]\s+(.*)$")
            .expect("re_unordered_list: pattern is valid and should always compile")
    })
}

pub(super) fn re_ordered_list() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\s*)\d+[.)]\s+(.*)$")
            .expect("re_ordered_list: pattern is valid and should always compile")
    })
}

pub(super) fn re_horizontal_rule() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:-[\s-]*-[\s-]*-[\s-]*|\*[\s*]*\*[\s*]*\*[\s*]*|_[\s_]*_[\s_]*_[\s_]*)$")
            .expect("re_horizontal_rule: pattern is valid and should always compile")
    })
}

pub(super) fn re_code_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:```|~~~)")
            .expect("re_code_fence: pattern is valid and should always compile")
    })
}

/// `[^note]`, optionally followed by a `(target)`.
pub(super) fn re_footnote() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[\^[^\]]*\](?:\([^)]*\))?")
            .expect("re_footnote: pattern is valid and should always compile")
    })
}

/// `[label](target)` and `![alt](target)`; group 1 is the label.
pub(super) fn re_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!?\[([^\]]*)\]\([^)]*\)")
            .expect("re_link: pattern is valid and should always compile")
    })
}

/// Short bracket tags such as `[x]`, `[ ]`, `[A1]` or `[12]`.
pub(super) fn re_annotation_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[(?:[A-Za-z]{0,2}\d*| )\]")
            .expect("re_annotation_tag: pattern is valid and should always compile")
    })
}

pub(super) fn re_bold() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*(.+?)\*\*|__(.+?)__")
            .expect("re_bold: pattern is valid and should always compile")
    })
}

pub(super) fn re_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*")
            .expect("re_italic: pattern is valid and should always compile")
    })
}
