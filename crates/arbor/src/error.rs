//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`] which wraps the
//! error conditions of one render call.

use std::io;

use thiserror::Error;

use arbor_parser::ParseError;

/// The main error type for Arbor operations.
///
/// # Diagnostic Variants
///
/// `ParseFailure` keeps the text the parser rejected next to the error, so
/// the spans of its diagnostics can be shown against the right source.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("outline is empty: nothing to render")]
    EmptyInput,

    #[error("{err}")]
    ParseFailure { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<crate::export::Error> for ArborError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Unpositioned(title) => {
                Self::Layout(format!("topic `{title}` has not been laid out"))
            }
            crate::export::Error::Style(message) => Self::Config(message),
        }
    }
}

impl ArborError {
    /// Create a new `ParseFailure` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::ParseFailure {
            err,
            src: src.into(),
        }
    }
}
