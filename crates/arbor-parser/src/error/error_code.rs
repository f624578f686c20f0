//! Error codes for outline diagnostics.
//!
//! All codes belong to the `E1xx` parser range.

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Missing list marker.
    ///
    /// A line after the root title does not start with `- `.
    E100,

    /// Empty topic title.
    ///
    /// A list marker is followed by nothing but whitespace.
    E101,

    /// Tab in indentation.
    ///
    /// Indentation must be made of spaces only.
    E102,

    /// Missing root topic.
    ///
    /// The outline contains no non-blank line.
    E103,

    /// Root line is a list item.
    ///
    /// The first non-blank line must be a plain title, not `- title`.
    E104,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "missing list marker",
            ErrorCode::E101 => "empty topic title",
            ErrorCode::E102 => "tab in indentation",
            ErrorCode::E103 => "missing root topic",
            ErrorCode::E104 => "root line is a list item",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
