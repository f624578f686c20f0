//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arbor outline
//! diagram pipeline. It includes:
//!
//! - **Topics**: The read-only topic tree produced by outline parsers ([`topic`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG drawables for nodes and connectors ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod topic;
