//! Parent-to-child connector curves.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// Visual style of a connector curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorDefinition {
    stroke: StrokeDefinition,
    control_offset: f32,
}

impl ConnectorDefinition {
    /// Creates a connector style with the default horizontal control offset of 30.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            control_offset: 30.0,
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn control_offset(&self) -> f32 {
        self.control_offset
    }
}

impl Default for ConnectorDefinition {
    fn default() -> Self {
        Self::new(StrokeDefinition::default())
    }
}

/// Draws cubic Bézier connectors using a shared [`ConnectorDefinition`].
///
/// The curve leaves `from` heading right and enters `to` heading right, so
/// a parent's right edge flows smoothly into its child's left edge.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorDrawer<'a> {
    definition: &'a ConnectorDefinition,
}

impl<'a> ConnectorDrawer<'a> {
    pub fn new(definition: &'a ConnectorDefinition) -> Self {
        Self { definition }
    }

    /// Returns the SVG path data for a connector between two points.
    pub fn path_data(&self, from: Point, to: Point) -> String {
        let offset = self.definition.control_offset();
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            from.x(),
            from.y(),
            from.x() + offset,
            from.y(),
            to.x() - offset,
            to.y(),
            to.x(),
            to.y()
        )
    }

    /// Draws a connector from `from` to `to` on the connector layer.
    pub fn draw(&self, from: Point, to: Point) -> LayeredOutput {
        let path = svg_element::Path::new()
            .set("d", self.path_data(from, to))
            .set("fill", "none");
        let path = apply_stroke!(path, self.definition.stroke());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Connector, Box::new(path));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_path_data_offsets_control_points() {
        let definition = ConnectorDefinition::default();
        let drawer = ConnectorDrawer::new(&definition);

        let data = drawer.path_data(Point::new(132.0, 60.0), Point::new(260.0, 116.0));
        assert_eq!(data, "M 132 60 C 162 60, 230 116, 260 116");
    }

    #[test]
    fn test_backwards_connector_keeps_offsets() {
        let definition = ConnectorDefinition::default();
        let drawer = ConnectorDrawer::new(&definition);

        let data = drawer.path_data(Point::new(100.0, 50.0), Point::new(0.0, 0.0));
        assert_eq!(data, "M 100 50 C 130 50, -30 0, 0 0");
    }

    #[test]
    fn test_draw_emits_unfilled_path_on_connector_layer() {
        let definition =
            ConnectorDefinition::new(StrokeDefinition::new(Color::new("gray").unwrap(), 2.0));
        let output =
            ConnectorDrawer::new(&definition).draw(Point::new(10.0, 10.0), Point::new(90.0, 10.0));

        assert_eq!(output.len_of(RenderLayer::Connector), 1);
        assert_eq!(output.len_of(RenderLayer::Node), 0);

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("M 10 10 C 40 10, 60 10, 90 10"));
    }
}
