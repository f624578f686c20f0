//! Drawable Components for Diagram Rendering
//!
//! This module provides drawable abstractions for rendering outline diagrams.
//! Topic nodes implement the [`Drawable`] trait, which provides a consistent
//! interface for rendering to layered SVG output and reporting size.
//! Connectors are drawn between two points by [`ConnectorDrawer`].
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are emitted in a
//! fixed order during final SVG generation: background, connectors, nodes.
mod connector;
mod layer;
mod node;
mod stroke;
mod text;

pub use connector::{ConnectorDefinition, ConnectorDrawer};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use node::{NodeBox, NodeDefinition};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{Text, TextDefinition, escape_text};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// # Arguments
    ///
    /// * `position` - The top-left corner where this drawable should be rendered
    ///
    /// # Returns
    ///
    /// A [`LayeredOutput`] containing the SVG nodes organized by layer.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
