//! Document export for laid-out diagrams.

pub mod svg;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("topic `{0}` has no position")]
    Unpositioned(String),

    #[error("{0}")]
    Style(String),
}
