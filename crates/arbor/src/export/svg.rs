//! SVG rendering of laid-out diagrams.
//!
//! The document holds three layer groups in a fixed order: the background
//! rectangle, the connector curves, then the topic nodes with their labels.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use arbor_core::{
    color::Color,
    draw::{
        ConnectorDefinition, ConnectorDrawer, Drawable, LayeredOutput, NodeBox, NodeDefinition,
        RenderLayer, StrokeDefinition, TextDefinition,
    },
    geometry::{Bounds, Size},
};

use super::Error;
use crate::{
    config::{LayoutConfig, StyleConfig},
    structure::{Diagram, DiagramNode},
};

/// Smallest canvas height, so short outlines still get a usable document.
pub const MIN_CANVAS_HEIGHT: f32 = 240.0;

/// Renders diagrams to SVG with a fixed layout and style.
#[derive(Debug, Clone)]
pub struct Svg {
    layout: LayoutConfig,
    background: Color,
    root_node: NodeDefinition,
    topic_node: NodeDefinition,
    connector: ConnectorDefinition,
}

fn text_definition(style: &StyleConfig, color: Color) -> TextDefinition {
    let mut text = TextDefinition::new();
    text.set_font_family(style.font_family());
    text.set_font_size(style.font_size());
    text.set_color(Some(color));
    text
}

impl Svg {
    /// Resolves the style into drawable definitions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if a configured color cannot be parsed.
    pub fn new(layout: LayoutConfig, style: &StyleConfig) -> Result<Self, Error> {
        let root_node = NodeDefinition::new(
            "topic root",
            style.root_fill().map_err(Error::Style)?,
            StrokeDefinition::new(style.root_stroke().map_err(Error::Style)?, 1.5),
        )
        .with_corner_radius(style.corner_radius())
        .with_text(text_definition(
            style,
            style.root_text().map_err(Error::Style)?,
        ));

        let topic_node = NodeDefinition::new(
            "topic",
            style.node_fill().map_err(Error::Style)?,
            StrokeDefinition::new(style.node_stroke().map_err(Error::Style)?, 1.5),
        )
        .with_corner_radius(style.corner_radius())
        .with_text(text_definition(
            style,
            style.node_text().map_err(Error::Style)?,
        ));

        let connector = ConnectorDefinition::new(
            StrokeDefinition::new(
                style.connector_color().map_err(Error::Style)?,
                style.connector_width(),
            )
            .with_cap(style.connector_cap().map_err(Error::Style)?),
        );

        Ok(Self {
            layout,
            background: style.background_color().map_err(Error::Style)?,
            root_node,
            topic_node,
            connector,
        })
    }

    /// Computes the canvas size of a diagram.
    ///
    /// The width covers the deepest column plus the widest node; the height
    /// covers every leaf row, but never drops below [`MIN_CANVAS_HEIGHT`].
    pub fn calculate_canvas_size(&self, diagram: &Diagram) -> Size {
        let layout = &self.layout;
        let width = 2.0 * layout.padding_x()
            + diagram.max_depth() as f32 * layout.horizontal_gap()
            + diagram.root().max_width();
        let rows = diagram.leaf_count().saturating_sub(1) as f32;
        let height = (2.0 * layout.padding_y()
            + rows * layout.vertical_gap()
            + layout.node_height())
        .max(MIN_CANVAS_HEIGHT);
        Size::new(width, height)
    }

    /// Renders a laid-out diagram to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unpositioned`] if a node has not been laid out.
    pub fn render_diagram(&self, diagram: &Diagram) -> Result<Document, Error> {
        let size = self.calculate_canvas_size(diagram);
        debug!(width = size.width(), height = size.height(); "Canvas size");

        let mut output = LayeredOutput::new();
        output.merge(self.render_background(size));
        output.merge(self.render_connectors(diagram)?);
        output.merge(self.render_nodes(diagram)?);

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());

        let doc = output
            .render()
            .into_iter()
            .fold(doc, |doc, layer| doc.add(layer));

        info!(nodes = diagram.node_count(); "Diagram rendered");
        Ok(doc)
    }

    fn render_background(&self, size: Size) -> LayeredOutput {
        let rect = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.background.to_string())
            .set("fill-opacity", self.background.alpha());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
        output
    }

    fn render_connectors(&self, diagram: &Diagram) -> Result<LayeredOutput, Error> {
        let drawer = ConnectorDrawer::new(&self.connector);
        let mut output = LayeredOutput::new();
        for link in diagram.links() {
            let from = self.node_bounds(link.parent())?.right_center();
            let to = self.node_bounds(link.child())?.left_center();
            output.merge(drawer.draw(from, to));
        }
        Ok(output)
    }

    fn render_nodes(&self, diagram: &Diagram) -> Result<LayeredOutput, Error> {
        let mut output = LayeredOutput::new();
        for (index, node) in diagram.nodes().enumerate() {
            let definition = if index == 0 {
                &self.root_node
            } else {
                &self.topic_node
            };
            let bounds = self.node_bounds(node)?;

            let mut node_box = NodeBox::new(definition, node.title(), bounds.to_size());
            if let Some(full_title) = node.full_title() {
                node_box = node_box.with_tooltip(full_title);
            }
            output.merge(node_box.render_to_layers(bounds.min_point()));
        }
        Ok(output)
    }

    fn node_bounds(&self, node: &DiagramNode) -> Result<Bounds, Error> {
        node.bounds(self.layout.node_height())
            .ok_or_else(|| Error::Unpositioned(node.title().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use arbor_core::topic::Topic;

    use super::*;
    use crate::{layout::LayoutEngine, structure::TreeAdapter};

    fn diagram_for(topic: &Topic) -> Diagram {
        let mut diagram = TreeAdapter::new().adapt(topic);
        LayoutEngine::new(LayoutConfig::default()).layout(&mut diagram);
        diagram
    }

    fn svg() -> Svg {
        Svg::new(LayoutConfig::default(), &StyleConfig::default()).unwrap()
    }

    fn sample() -> Topic {
        Topic::new("Root")
            .with_child(Topic::new("A"))
            .with_child(Topic::new("B").with_child(Topic::new("B1")))
    }

    #[test]
    fn test_canvas_size_small_outline() {
        let size = svg().calculate_canvas_size(&diagram_for(&sample()));

        assert_approx_eq!(f32, size.width(), 80.0 + 440.0 + 92.0);
        assert_approx_eq!(f32, size.height(), 240.0);
    }

    #[test]
    fn test_canvas_height_grows_with_leaves() {
        let topic = (0..5).fold(Topic::new("Root"), |topic, i| {
            topic.with_child(Topic::new(format!("Leaf {i}")))
        });
        let size = svg().calculate_canvas_size(&diagram_for(&topic));

        assert_approx_eq!(f32, size.height(), 80.0 + 4.0 * 56.0 + 40.0);
    }

    #[test]
    fn test_canvas_width_uses_widest_node() {
        let topic = Topic::new("Root").with_child(Topic::new("x".repeat(40)));
        let size = svg().calculate_canvas_size(&diagram_for(&topic));

        assert_approx_eq!(f32, size.width(), 80.0 + 220.0 + 260.0);
    }

    #[test]
    fn test_every_node_fits_in_canvas() {
        let diagram = diagram_for(&sample());
        let size = svg().calculate_canvas_size(&diagram);

        let content = diagram
            .nodes()
            .filter_map(|node| node.bounds(40.0))
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap();
        assert!(content.max_x() <= size.width());
        assert!(content.max_y() <= size.height());
    }

    #[test]
    fn test_render_document_structure() {
        let doc = svg().render_diagram(&diagram_for(&sample())).unwrap();
        let text = doc.to_string();

        assert!(text.contains("viewBox=\"0 0 612 240\""));
        assert!(text.contains("width=\"612\""));
        let background = text.find("data-layer=\"background\"").unwrap();
        let connectors = text.find("data-layer=\"connectors\"").unwrap();
        let nodes = text.find("data-layer=\"nodes\"").unwrap();
        assert!(background < connectors && connectors < nodes);
        assert_eq!(text.matches("<path").count(), 3);
        assert_eq!(text.matches("class=\"topic root\"").count(), 1);
        assert_eq!(text.matches("class=\"topic\"").count(), 3);
    }

    #[test]
    fn test_connector_joins_parent_and_child_edges() {
        let doc = svg().render_diagram(&diagram_for(&sample())).unwrap();
        let text = doc.to_string();

        // Root right edge (132, 88) to A left edge (260, 60)
        assert!(text.contains("M 132 88 C 162 88, 230 60, 260 60"));
    }

    #[test]
    fn test_truncated_title_has_tooltip() {
        let long = "An unusually long topic title that will be shortened";
        let doc = svg()
            .render_diagram(&diagram_for(&Topic::new("Root").with_child(Topic::new(long))))
            .unwrap();
        let text = doc.to_string();

        assert!(text.contains("<title>"));
        assert!(text.contains(long));
    }

    #[test]
    fn test_labels_are_escaped() {
        let doc = svg()
            .render_diagram(&diagram_for(&Topic::new("R&D <core>")))
            .unwrap();
        let text = doc.to_string();

        assert!(text.contains("R&amp;D &lt;core&gt;"));
        assert!(!text.contains("<core>"));
    }

    #[test]
    fn test_unpositioned_diagram_is_rejected() {
        let diagram = TreeAdapter::new().adapt(&sample());
        let err = svg().render_diagram(&diagram).unwrap_err();

        assert!(matches!(err, Error::Unpositioned(_)));
    }

    #[test]
    fn test_connector_cap_and_corner_radius_follow_style() {
        let text = svg().render_diagram(&diagram_for(&sample())).unwrap().to_string();
        assert_eq!(text.matches("stroke-linecap=\"round\"").count(), 3);
        assert_eq!(text.matches("rx=\"10\"").count(), 4);

        let style = StyleConfig::default().with_connector_cap("square");
        let text = Svg::new(LayoutConfig::default(), &style)
            .unwrap()
            .render_diagram(&diagram_for(&sample()))
            .unwrap()
            .to_string();
        assert_eq!(text.matches("stroke-linecap=\"square\"").count(), 3);
    }

    #[test]
    fn test_invalid_connector_cap_is_rejected() {
        let style = StyleConfig::default().with_connector_cap("pointy");
        let err = Svg::new(LayoutConfig::default(), &style).unwrap_err();

        assert!(matches!(err, Error::Style(_)));
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let style = StyleConfig::default().with_background_color("nope");
        let err = Svg::new(LayoutConfig::default(), &style).unwrap_err();

        assert!(matches!(err, Error::Style(_)));
    }
}
