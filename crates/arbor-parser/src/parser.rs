//! Line-oriented outline parser.
//!
//! Each line is split into its shape (indentation, optional list marker and
//! title) with `winnow` combinators, then the lines are folded into a
//! [`Topic`] tree with an indentation stack. Nesting is relative: an item
//! belongs to the nearest preceding item that is indented strictly less, so
//! any consistent indent unit works.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, eof, opt, terminated},
    error::{ContextError, ErrMode},
    token::{rest, take_while},
};

use arbor_core::topic::Topic;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

const MARKER_HELP: &str = "write child topics as `- title`, indented under their parent";

/// The syntactic pieces of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineShape<'src> {
    indent: &'src str,
    marker: Option<&'src str>,
    title: &'src str,
}

/// A non-blank source line with its byte offset in the whole source.
#[derive(Debug, Clone, Copy)]
struct SourceLine<'src> {
    text: &'src str,
    offset: usize,
}

impl SourceLine<'_> {
    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.offset + start..self.offset + end)
    }

    /// Span of the line without leading and trailing whitespace.
    fn content_span(&self) -> Span {
        let start = self.text.len() - self.text.trim_start().len();
        let end = self.text.trim_end().len();
        self.span(start, end.max(start))
    }
}

/// An item line accepted into the tree.
#[derive(Debug)]
struct PendingTopic<'src> {
    title: &'src str,
    parent: usize,
}

/// One open nesting level while folding lines into the tree.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// `None` for the root, which encloses every indentation.
    indent: Option<usize>,
    index: usize,
    span: Span,
}

fn indentation<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(0.., [' ', '\t']).parse_next(input)
}

/// `- ` or a lone `-` at the end of the line.
fn list_marker<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    terminated('-', alt((' '.void(), eof.void())))
        .take()
        .parse_next(input)
}

fn line_shape<'src>(input: &mut Input<'src>) -> IResult<LineShape<'src>> {
    let indent = indentation(input)?;
    let marker = opt(list_marker).parse_next(input)?;
    let title = rest.parse_next(input)?;
    Ok(LineShape {
        indent,
        marker,
        title,
    })
}

/// Splits the source into non-blank lines, keeping byte offsets.
fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split('\n').filter_map(move |raw| {
        let line = SourceLine {
            text: raw.strip_suffix('\r').unwrap_or(raw),
            offset,
        };
        offset += raw.len() + 1;
        (!line.text.trim().is_empty()).then_some(line)
    })
}

fn shape_of<'src>(line: &SourceLine<'src>) -> Option<LineShape<'src>> {
    let mut input = line.text;
    line_shape(&mut input).ok()
}

/// Parses outline text into a topic tree.
///
/// Every malformed line is reported; the tree is only returned when no
/// error was found.
pub(crate) fn parse_outline(source: &str) -> Result<Topic, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut lines = source_lines(source);

    let Some(root_line) = lines.next() else {
        return Err(Diagnostic::error("outline has no root topic")
            .with_code(ErrorCode::E103)
            .with_label(Span::new(0..source.len()), "no non-blank line found")
            .with_help("start the outline with a line holding the root title")
            .into());
    };

    let root_span = root_line.content_span();
    let root_title = match shape_of(&root_line) {
        Some(shape) if shape.marker.is_some() => {
            collector.emit(
                Diagnostic::error("root line is a list item")
                    .with_code(ErrorCode::E104)
                    .with_label(root_span, "expected a plain title")
                    .with_help("remove the `- ` marker from the first line"),
            );
            shape.title.trim()
        }
        _ => root_line.text.trim(),
    };

    let mut pending: Vec<PendingTopic<'_>> = Vec::new();
    let mut stack = vec![Frame {
        indent: None,
        index: 0,
        span: root_span,
    }];

    for line in lines {
        let Some(shape) = shape_of(&line) else {
            collector.emit(
                Diagnostic::error("unreadable outline line")
                    .with_code(ErrorCode::E100)
                    .with_label(line.content_span(), "could not read this line")
                    .with_help(MARKER_HELP),
            );
            continue;
        };
        trace!(offset = line.offset, shape:?; "Outline line");

        let indent_len = shape.indent.len();
        let mut valid = true;

        if shape.indent.contains('\t') {
            collector.emit(
                Diagnostic::error("tab in indentation")
                    .with_code(ErrorCode::E102)
                    .with_label(line.span(0, indent_len), "tab used here")
                    .with_help("indent with spaces only"),
            );
            valid = false;
        }

        let Some(marker) = shape.marker else {
            collector.emit(
                Diagnostic::error("missing list marker")
                    .with_code(ErrorCode::E100)
                    .with_label(line.content_span(), "expected `- ` before the title")
                    .with_help(MARKER_HELP),
            );
            continue;
        };

        let title = shape.title.trim();
        if title.is_empty() {
            let marker_end = indent_len + marker.len();
            collector.emit(
                Diagnostic::error("empty topic title")
                    .with_code(ErrorCode::E101)
                    .with_label(line.span(indent_len, marker_end), "nothing follows this marker")
                    .with_help("add a title or remove the line"),
            );
            valid = false;
        }

        if !valid {
            continue;
        }

        let mut last_closed = None;
        while let Some(frame) = stack.last().copied() {
            match frame.indent {
                Some(open) if open >= indent_len => {
                    last_closed = Some(open);
                    stack.pop();
                }
                _ => break,
            }
        }
        let Some(parent) = stack.last().copied() else {
            // The root frame is never popped.
            continue;
        };

        if last_closed.is_some_and(|closed| closed != indent_len) {
            collector.emit(
                Diagnostic::warning("indentation does not match an enclosing level")
                    .with_label(line.content_span(), "attached to the nearest shallower topic")
                    .with_secondary_label(parent.span, "parent topic")
                    .with_help("align the item with a sibling or with its parent's children"),
            );
        }

        pending.push(PendingTopic {
            title,
            parent: parent.index,
        });
        stack.push(Frame {
            indent: Some(indent_len),
            index: pending.len(),
            span: line.content_span(),
        });
    }

    collector.finish()?;

    let topic = assemble(root_title, pending);
    debug!(root = root_title; "Outline parsed");
    Ok(topic)
}

/// Builds the owned tree from the flat item list.
///
/// Index 0 is the root; item `i` of `pending` has index `i + 1`. A parent
/// always precedes its children, so walking the items backwards finishes
/// every child before its parent is built.
fn assemble(root_title: &str, pending: Vec<PendingTopic<'_>>) -> Topic {
    let mut children: Vec<Vec<Topic>> = (0..=pending.len()).map(|_| Vec::new()).collect();

    for (position, item) in pending.iter().enumerate().rev() {
        let index = position + 1;
        let mut topic = Topic::new(item.title);
        for child in std::mem::take(&mut children[index]).into_iter().rev() {
            topic.push_child(child);
        }
        children[item.parent].push(topic);
    }

    let mut root = Topic::new(root_title);
    for child in std::mem::take(&mut children[0]).into_iter().rev() {
        root.push_child(child);
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(line: &str) -> LineShape<'_> {
        let mut input = line;
        line_shape(&mut input).unwrap()
    }

    #[test]
    fn test_line_shape_item() {
        let parsed = shape("    - Milestones");
        assert_eq!(parsed.indent, "    ");
        assert_eq!(parsed.marker, Some("- "));
        assert_eq!(parsed.title, "Milestones");
    }

    #[test]
    fn test_line_shape_plain_text() {
        let parsed = shape("  plain");
        assert_eq!(parsed.indent, "  ");
        assert_eq!(parsed.marker, None);
        assert_eq!(parsed.title, "plain");
    }

    #[test]
    fn test_line_shape_dash_without_space_is_not_a_marker() {
        let parsed = shape("-dash");
        assert_eq!(parsed.marker, None);
        assert_eq!(parsed.title, "-dash");
    }

    #[test]
    fn test_line_shape_lone_dash() {
        let parsed = shape("  -");
        assert_eq!(parsed.marker, Some("-"));
        assert_eq!(parsed.title, "");
    }

    #[test]
    fn test_source_lines_skip_blank_and_track_offsets() {
        let lines: Vec<_> = source_lines("Root\r\n\n  \n- A").collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Root");
        assert_eq!(lines[0].offset, 0);
        assert_eq!(lines[1].text, "- A");
        assert_eq!(lines[1].offset, 10);
    }

    #[test]
    fn test_assemble_preserves_order() {
        let pending = vec![
            PendingTopic {
                title: "A",
                parent: 0,
            },
            PendingTopic {
                title: "A1",
                parent: 1,
            },
            PendingTopic {
                title: "A2",
                parent: 1,
            },
            PendingTopic {
                title: "B",
                parent: 0,
            },
        ];

        let root = assemble("Root", pending);
        let titles: Vec<_> = root.attached().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec![Some("A"), Some("B")]);

        let nested: Vec<_> = root.attached()[0]
            .attached()
            .iter()
            .map(|t| t.title())
            .collect();
        assert_eq!(nested, vec![Some("A1"), Some("A2")]);
    }
}
