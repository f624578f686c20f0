//! Layer-based rendering system for SVG output.
//!
//! This module provides a type-safe layer system that allows drawable components
//! to specify which z-order layer their SVG elements should be rendered to.
//!
//! # Overview
//!
//! The layer system consists of:
//! - [`RenderLayer`]: An enum defining available rendering layers in order
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use arbor_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let bg = Rectangle::new().set("fill", "white");
//! output.add_to_layer(RenderLayer::Background, Box::new(bg));
//!
//! let node = Rectangle::new().set("rx", 10);
//! output.add_to_layer(RenderLayer::Node, Box::new(node));
//!
//! // Every layer is emitted, even the empty connector layer
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 3);
//! ```

use log::trace;
use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
/// The `Ord` derive uses declaration order, so the first variant renders first (bottom),
/// and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background - renders first
    Background,
    /// Parent-to-child connector curves
    Connector,
    /// Topic node shapes and their labels
    Node,
}

impl RenderLayer {
    /// All layers, bottom to top.
    pub const ALL: [RenderLayer; 3] = [
        RenderLayer::Background,
        RenderLayer::Connector,
        RenderLayer::Node,
    ];

    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Connector => "connectors",
            Self::Node => "nodes",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// This struct collects SVG nodes and organizes them by layer. When rendered,
/// nodes are emitted in layer order (bottom to top), ensuring correct z-ordering.
/// Within a layer, nodes keep the order in which they were added.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    ///
    /// Nodes from the other output are appended after the existing nodes of
    /// the same layer.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes collected for `layer`.
    pub fn len_of(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Every layer in [`RenderLayer::ALL`] becomes one `<g>` element with a
    /// `data-layer` attribute identifying it, so the document structure is the
    /// same regardless of content. Empty layers produce empty groups.
    pub fn render(self) -> Vec<SvgNode> {
        let mut buckets: Vec<Vec<SvgNode>> = RenderLayer::ALL.iter().map(|_| Vec::new()).collect();
        for (layer, node) in self.items {
            buckets[layer as usize].push(node);
        }

        trace!(
            background = buckets[0].len(),
            connectors = buckets[1].len(),
            nodes = buckets[2].len();
            "Rendering layer groups"
        );

        RenderLayer::ALL
            .iter()
            .zip(buckets)
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
