//! Grammar tests for the outline parser.

use proptest::prelude::*;

use arbor_core::topic::Topic;

use crate::{
    OutlineParser, StrictParser,
    error::{ErrorCode, ParseError},
    parse,
};

/// Helper to parse a source string and assert success
fn assert_parses(source: &str) -> Topic {
    match parse(source) {
        Ok(topic) => topic,
        Err(err) => panic!("Expected parsing to succeed, but got error: {err}"),
    }
}

/// Helper to parse a source string and assert failure
fn assert_parse_fails(source: &str) -> ParseError {
    match parse(source) {
        Ok(topic) => panic!("Expected parsing to fail, but got {topic:?}"),
        Err(err) => err,
    }
}

fn codes(err: &ParseError) -> Vec<ErrorCode> {
    err.diagnostics()
        .iter()
        .filter_map(|diag| diag.code())
        .collect()
}

fn titles(topic: &Topic) -> Vec<&str> {
    topic
        .attached()
        .iter()
        .map(|child| child.title().unwrap_or_default())
        .collect()
}

#[test]
fn test_root_only() {
    let topic = assert_parses("Just a root");

    assert_eq!(topic.title(), Some("Just a root"));
    assert!(topic.attached().is_empty());
}

#[test]
fn test_root_title_is_trimmed() {
    let topic = assert_parses("\n\n   Root   \n- A");

    assert_eq!(topic.title(), Some("Root"));
}

#[test]
fn test_nested_outline() {
    let topic = assert_parses("Root\n- A\n- B\n  - B1");

    assert_eq!(titles(&topic), vec!["A", "B"]);
    assert!(topic.attached()[0].attached().is_empty());
    assert_eq!(titles(&topic.attached()[1]), vec!["B1"]);
}

#[test]
fn test_blank_lines_are_ignored() {
    let topic = assert_parses("Root\n\n- A\n   \n  - A1\n\n- B\n");

    assert_eq!(titles(&topic), vec!["A", "B"]);
    assert_eq!(titles(&topic.attached()[0]), vec!["A1"]);
}

#[test]
fn test_windows_line_endings() {
    let topic = assert_parses("Root\r\n- A\r\n  - A1\r\n");

    assert_eq!(titles(&topic), vec!["A"]);
    assert_eq!(titles(&topic.attached()[0]), vec!["A1"]);
}

#[test]
fn test_any_consistent_indent_unit() {
    let two = assert_parses("Root\n- A\n  - A1\n    - A1a");
    let four = assert_parses("Root\n- A\n    - A1\n        - A1a");

    assert_eq!(two, four);
}

#[test]
fn test_first_item_may_be_indented() {
    let topic = assert_parses("Root\n  - A\n  - B");

    assert_eq!(titles(&topic), vec!["A", "B"]);
}

#[test]
fn test_dedent_returns_to_matching_level() {
    let topic = assert_parses("Root\n- A\n  - A1\n    - A1a\n- B");

    assert_eq!(titles(&topic), vec!["A", "B"]);
    assert_eq!(titles(&topic.attached()[0].attached()[0]), vec!["A1a"]);
}

#[test]
fn test_uneven_dedent_attaches_to_shallower_topic() {
    // "A2" sits between the levels of "A" and "A1"
    let topic = assert_parses("Root\n- A\n    - A1\n  - A2");

    assert_eq!(titles(&topic), vec!["A"]);
    assert_eq!(titles(&topic.attached()[0]), vec!["A1", "A2"]);
}

#[test]
fn test_item_titles_are_trimmed() {
    let topic = assert_parses("Root\n-    padded   ");

    assert_eq!(titles(&topic), vec!["padded"]);
}

#[test]
fn test_dash_inside_title_is_kept() {
    let topic = assert_parses("Root\n- Q1 - Q2 plan");

    assert_eq!(titles(&topic), vec!["Q1 - Q2 plan"]);
}

#[test]
fn test_parsed_topics_have_no_detached_children() {
    let topic = assert_parses("Root\n- A");

    assert!(topic.detached().is_empty());
    assert!(topic.attached()[0].detached().is_empty());
}

#[test]
fn test_empty_input_has_no_root() {
    for source in ["", "   ", "\n\n\t\n"] {
        let err = assert_parse_fails(source);
        assert_eq!(codes(&err), vec![ErrorCode::E103]);
    }
}

#[test]
fn test_missing_marker() {
    let err = assert_parse_fails("Root\n- A\n  Not an item");

    assert_eq!(codes(&err), vec![ErrorCode::E100]);
    let span = err.diagnostics()[0].labels()[0].span();
    assert_eq!(span.start(), 11);
    assert_eq!(span.end(), 22);
}

#[test]
fn test_dash_without_space_is_missing_marker() {
    let err = assert_parse_fails("Root\n-A");

    assert_eq!(codes(&err), vec![ErrorCode::E100]);
}

#[test]
fn test_empty_title() {
    let err = assert_parse_fails("Root\n- A\n  -   \n- B");

    assert_eq!(codes(&err), vec![ErrorCode::E101]);
    let span = err.diagnostics()[0].labels()[0].span();
    assert_eq!(span.start(), 11);
    assert_eq!(span.end(), 13);
}

#[test]
fn test_lone_dash_is_empty_title() {
    let err = assert_parse_fails("Root\n-");

    assert_eq!(codes(&err), vec![ErrorCode::E101]);
}

#[test]
fn test_tab_indentation() {
    let err = assert_parse_fails("Root\n- A\n\t- A1");

    assert_eq!(codes(&err), vec![ErrorCode::E102]);
}

#[test]
fn test_root_list_item() {
    let err = assert_parse_fails("- Root\n- A");

    assert_eq!(codes(&err), vec![ErrorCode::E104]);
}

#[test]
fn test_every_bad_line_is_reported() {
    let err = assert_parse_fails("# Title\n## Sub\n- item\n\tprose\n-");

    assert_eq!(
        codes(&err),
        vec![
            ErrorCode::E100,
            ErrorCode::E102,
            ErrorCode::E100,
            ErrorCode::E101
        ]
    );
    assert!(err.to_string().contains("(+3 more)"));
}

#[test]
fn test_diagnostics_carry_help() {
    let err = assert_parse_fails("Root\nprose");

    let diag = &err.diagnostics()[0];
    assert!(diag.severity().is_error());
    assert!(diag.help().is_some());
    assert_eq!(diag.to_string(), "error[E100]: missing list marker");
}

#[test]
fn test_strict_parser_matches_free_function() {
    let source = "Root\n- A\n  - A1";

    assert_eq!(StrictParser.parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_closure_parser() {
    let fixed = |_: &str| -> Result<Topic, ParseError> { Ok(Topic::new("fixed")) };

    assert_eq!(fixed.parse("anything").unwrap().title(), Some("fixed"));
}

fn count_topics(topic: &Topic) -> usize {
    1 + topic.attached().iter().map(count_topics).sum::<usize>()
}

fn depth(topic: &Topic) -> usize {
    topic
        .attached()
        .iter()
        .map(|child| 1 + depth(child))
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn every_item_line_becomes_one_topic(levels in prop::collection::vec(0usize..4, 0..40)) {
        // Build an outline whose depth never jumps by more than one level
        let mut source = String::from("Root");
        let mut limit = 0usize;
        let mut deepest = 0usize;
        for (index, level) in levels.iter().enumerate() {
            let level = (*level).min(limit);
            source.push_str(&format!("\n{}- Item {index}", "  ".repeat(level)));
            limit = level + 1;
            deepest = deepest.max(level + 1);
        }

        let topic = parse(&source).unwrap();
        prop_assert_eq!(count_topics(&topic), levels.len() + 1);
        prop_assert_eq!(depth(&topic), deepest);
    }

    #[test]
    fn parse_never_panics(source in "[ \\-a-z\\t\\n#]{0,80}") {
        let _ = parse(&source);
    }
}
