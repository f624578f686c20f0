//! Topic node drawables.
//!
//! A topic node is a rounded rectangle with a centred label. The visual
//! properties live in a shared [`NodeDefinition`]; each rendered node is a
//! [`NodeBox`] that borrows its definition and label.

use svg::{
    Node as _,
    node::{Blob, element as svg_element},
};

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition, escape_text,
    },
    geometry::{Point, Size},
};

/// Shared style for a family of topic nodes (for example, the root node or
/// every non-root node).
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefinition {
    class: String,
    fill: Color,
    stroke: StrokeDefinition,
    corner_radius: f32,
    text: TextDefinition,
}

impl NodeDefinition {
    /// Creates a definition with the given CSS class, fill and stroke.
    ///
    /// The corner radius defaults to 10 and the label uses the default
    /// [`TextDefinition`].
    pub fn new(class: impl Into<String>, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            class: class.into(),
            fill,
            stroke,
            corner_radius: 10.0,
            text: TextDefinition::default(),
        }
    }

    /// Sets the corner radius (builder style).
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the label style (builder style).
    pub fn with_text(mut self, text: TextDefinition) -> Self {
        self.text = text;
        self
    }

    /// Returns the CSS class attached to every node using this definition.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the border stroke.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Returns the label style.
    pub fn text(&self) -> &TextDefinition {
        &self.text
    }
}

/// A single positioned-on-render topic node.
#[derive(Debug, Clone)]
pub struct NodeBox<'a> {
    definition: &'a NodeDefinition,
    label: &'a str,
    tooltip: Option<&'a str>,
    size: Size,
}

impl<'a> NodeBox<'a> {
    /// Creates a node box of the given size showing `label`.
    pub fn new(definition: &'a NodeDefinition, label: &'a str, size: Size) -> Self {
        Self {
            definition,
            label,
            tooltip: None,
            size,
        }
    }

    /// Attaches a hover tooltip, used to carry the full text of a shortened label.
    pub fn with_tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

impl Drawable for NodeBox<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let bounds = position.to_bounds(self.size);
        let fill = self.definition.fill();

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", self.definition.corner_radius())
            .set("ry", self.definition.corner_radius())
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha());
        let rect = apply_stroke!(rect, self.definition.stroke());

        let label = Text::new(self.definition.text(), self.label).render(bounds.center());

        let mut group = svg_element::Group::new().set("class", self.definition.class());
        if let Some(tooltip) = self.tooltip {
            let mut title = svg_element::Element::new("title");
            title.append(Blob::new(escape_text(tooltip)));
            group = group.add(title);
        }
        let group = group.add(rect).add(label);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Node, Box::new(group));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> NodeDefinition {
        NodeDefinition::new(
            "topic",
            Color::new("white").unwrap(),
            StrokeDefinition::new(Color::new("gray").unwrap(), 1.5),
        )
    }

    fn render(node: &NodeBox<'_>, position: Point) -> String {
        node.render_to_layers(position)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_node_definition_builders() {
        let def = definition().with_corner_radius(4.0);

        assert_eq!(def.class(), "topic");
        assert_eq!(def.corner_radius(), 4.0);
        assert_eq!(def.stroke().width(), 1.5);
    }

    #[test]
    fn test_node_renders_to_node_layer_only() {
        let def = definition();
        let node = NodeBox::new(&def, "Root", Size::new(92.0, 40.0));
        let output = node.render_to_layers(Point::new(40.0, 40.0));

        assert_eq!(output.len_of(RenderLayer::Node), 1);
        assert_eq!(output.len_of(RenderLayer::Background), 0);
        assert_eq!(output.len_of(RenderLayer::Connector), 0);
    }

    #[test]
    fn test_node_rect_uses_top_left_position() {
        let def = definition();
        let node = NodeBox::new(&def, "Root", Size::new(92.0, 40.0));
        let svg = render(&node, Point::new(40.0, 96.0));

        assert!(svg.contains("x=\"40\""));
        assert!(svg.contains("y=\"96\""));
        assert!(svg.contains("width=\"92\""));
        assert!(svg.contains("height=\"40\""));
        assert!(svg.contains("rx=\"10\""));
        // Label is centred in the rectangle
        assert!(svg.contains("x=\"86\""));
        assert!(svg.contains("y=\"116\""));
        assert!(svg.contains("class=\"topic\""));
    }

    #[test]
    fn test_node_tooltip_is_optional() {
        let def = definition();
        let plain = NodeBox::new(&def, "Short", Size::new(92.0, 40.0));
        assert!(!render(&plain, Point::default()).contains("<title>"));

        let with_tooltip = NodeBox::new(&def, "Long…", Size::new(260.0, 40.0))
            .with_tooltip("Long title that was shortened");
        let svg = render(&with_tooltip, Point::default());
        assert!(svg.contains("<title>"));
        assert!(svg.contains("Long title that was shortened"));
    }

    #[test]
    fn test_node_size() {
        let def = definition();
        let node = NodeBox::new(&def, "Root", Size::new(120.0, 40.0));

        assert_eq!(node.size(), Size::new(120.0, 40.0));
    }
}
