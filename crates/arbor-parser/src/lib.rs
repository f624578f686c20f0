//! Strict outline parser for Arbor.
//!
//! The outline grammar is line based:
//!
//! ```text
//! Product roadmap          <- root title (first non-blank line)
//! - Discovery              <- `<indent>- <title>` for every other line
//!   - Interviews
//! - Delivery
//! ```
//!
//! Blank lines are ignored. Indentation must use spaces; an item becomes a
//! child of the nearest preceding item indented strictly less than itself.
//!
//! # Example
//!
//! ```
//! let topic = arbor_parser::parse("Root\n- A\n- B\n  - B1").unwrap();
//!
//! assert_eq!(topic.title(), Some("Root"));
//! assert_eq!(topic.attached().len(), 2);
//! assert_eq!(topic.attached()[1].attached()[0].title(), Some("B1"));
//! ```

pub mod error;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

use arbor_core::topic::Topic;

pub use error::ParseError;
pub use span::Span;

/// A parser turning outline text into a [`Topic`] tree.
///
/// The diagram pipeline is driven through this trait so an alternative
/// grammar can be plugged in. Closures with the matching signature implement
/// it as well.
pub trait OutlineParser {
    /// Parses `source` into a topic tree, or reports why it cannot.
    fn parse(&self, source: &str) -> Result<Topic, ParseError>;
}

impl<F> OutlineParser for F
where
    F: Fn(&str) -> Result<Topic, ParseError>,
{
    fn parse(&self, source: &str) -> Result<Topic, ParseError> {
        self(source)
    }
}

/// The built-in `- title` outline grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictParser;

impl OutlineParser for StrictParser {
    fn parse(&self, source: &str) -> Result<Topic, ParseError> {
        parser::parse_outline(source)
    }
}

/// Parses outline text with the [`StrictParser`].
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per malformed line.
pub fn parse(source: &str) -> Result<Topic, ParseError> {
    StrictParser.parse(source)
}
