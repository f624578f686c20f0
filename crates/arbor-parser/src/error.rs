//! Error and diagnostic system for the outline parser.
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, labeled source
//! locations and help text. The diagnostics of one parse are wrapped in a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use arbor_parser::error::{Diagnostic, ErrorCode};
//! # use arbor_parser::Span;
//!
//! let diag = Diagnostic::error("missing list marker")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(5..15), "expected `- ` before the title")
//!     .with_help("write child topics as `- title`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
