//! Tidy tree layout.
//!
//! Every node gets a depth-based x and a children-derived y:
//!
//! - `x = padding_x + depth * horizontal_gap`
//! - a leaf takes the next free row: `y = padding_y + leaf_index * vertical_gap`
//! - an internal node sits halfway between its first and last child
//!
//! Only the first and last child decide a parent's row, not the mean of all
//! children. Leaves are visited in order, so sibling subtrees never overlap.
//! Both passes use explicit stacks; outline depth never grows the call stack.
//! Positions are the top-left corners of node rectangles.

use log::{debug, trace};

use arbor_core::geometry::Point;

use crate::{
    config::LayoutConfig,
    structure::{Diagram, DiagramNode},
};

/// Assigns positions to every node of a [`Diagram`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Positions every node in place.
    ///
    /// The result depends only on the tree shape and child order, so laying
    /// out the same tree twice yields the same coordinates.
    pub fn layout(&self, diagram: &mut Diagram) {
        let rows = self.rows(diagram.root());
        debug!(
            leaves = diagram.leaf_count(),
            depth = diagram.max_depth();
            "Laying out diagram"
        );

        let mut pending = vec![(diagram.root_mut(), 0)];
        let mut index = 0;
        while let Some((node, depth)) = pending.pop() {
            let x = self.config.padding_x() + depth as f32 * self.config.horizontal_gap();
            let y = rows[index];
            index += 1;

            trace!(title = node.title(), x = x, y = y; "Placed node");
            node.set_position(Point::new(x, y));
            pending.extend(
                node.children_mut()
                    .iter_mut()
                    .rev()
                    .map(|child| (child, depth + 1)),
            );
        }
        debug!(nodes = index; "Diagram laid out");
    }

    /// Computes the y of every node, listed in depth-first pre-order.
    fn rows(&self, root: &DiagramNode) -> Vec<f32> {
        // A node's first child directly follows it in pre-order
        let mut order = Vec::new();
        let mut last_child = Vec::new();
        let mut pending = vec![(root, None)];
        while let Some((node, parent)) = pending.pop() {
            let index = order.len();
            order.push(node);
            last_child.push(index);
            if let Some(parent) = parent {
                last_child[parent] = index;
            }
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (child, Some(index))),
            );
        }

        let mut rows = vec![0.0; order.len()];
        let mut next_leaf = 0;
        for (index, node) in order.iter().enumerate() {
            if node.is_leaf() {
                rows[index] =
                    self.config.padding_y() + next_leaf as f32 * self.config.vertical_gap();
                next_leaf += 1;
            }
        }
        for (index, node) in order.iter().enumerate().rev() {
            if !node.is_leaf() {
                rows[index] = (rows[index + 1] + rows[last_child[index]]) / 2.0;
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use arbor_core::topic::Topic;

    use super::*;
    use crate::structure::TreeAdapter;

    fn laid_out(topic: &Topic) -> Diagram {
        let mut diagram = TreeAdapter::new().adapt(topic);
        LayoutEngine::new(LayoutConfig::default()).layout(&mut diagram);
        diagram
    }

    fn position(node: &DiagramNode) -> Point {
        node.position().unwrap()
    }

    #[test]
    fn test_root_only() {
        let diagram = laid_out(&Topic::new("Root"));

        assert_approx_eq!(f32, position(diagram.root()).x(), 40.0);
        assert_approx_eq!(f32, position(diagram.root()).y(), 40.0);
    }

    #[test]
    fn test_nested_layout() {
        // Root
        // - A
        // - B
        //   - B1
        let topic = Topic::new("Root")
            .with_child(Topic::new("A"))
            .with_child(Topic::new("B").with_child(Topic::new("B1")));
        let diagram = laid_out(&topic);

        let root = diagram.root();
        let a = &root.children()[0];
        let b = &root.children()[1];
        let b1 = &b.children()[0];

        assert_approx_eq!(f32, position(a).x(), 260.0);
        assert_approx_eq!(f32, position(a).y(), 40.0);
        assert_approx_eq!(f32, position(b1).x(), 480.0);
        assert_approx_eq!(f32, position(b1).y(), 96.0);
        assert_approx_eq!(f32, position(b).y(), 96.0);
        assert_approx_eq!(f32, position(root).x(), 40.0);
        assert_approx_eq!(f32, position(root).y(), 68.0);
    }

    #[test]
    fn test_parent_uses_extremes_not_mean() {
        let topic = Topic::new("Root")
            .with_child(Topic::new("A"))
            .with_child(Topic::new("B"))
            .with_child(
                Topic::new("C")
                    .with_child(Topic::new("C1"))
                    .with_child(Topic::new("C2"))
                    .with_child(Topic::new("C3")),
            );
        let diagram = laid_out(&topic);

        let children = diagram.root().children();
        assert_approx_eq!(f32, position(&children[0]).y(), 40.0);
        assert_approx_eq!(f32, position(&children[1]).y(), 96.0);
        assert_approx_eq!(f32, position(&children[2]).y(), 208.0);
        // The mean of the three rows would be about 114.7
        assert_approx_eq!(f32, position(diagram.root()).y(), 124.0);
    }

    #[test]
    fn test_leaves_are_evenly_spaced_in_order() {
        let topic = Topic::new("Root")
            .with_child(Topic::new("A").with_child(Topic::new("A1")))
            .with_child(Topic::new("B"))
            .with_child(Topic::new("C").with_child(Topic::new("C1")));
        let diagram = laid_out(&topic);

        let leaf_rows: Vec<f32> = diagram
            .nodes()
            .filter(|node| node.is_leaf())
            .map(|node| position(node).y())
            .collect();
        assert_eq!(leaf_rows, vec![40.0, 96.0, 152.0]);
    }

    #[test]
    fn test_custom_spacing() {
        let mut diagram = TreeAdapter::new().adapt(
            &Topic::new("Root")
                .with_child(Topic::new("A"))
                .with_child(Topic::new("B")),
        );
        LayoutEngine::new(LayoutConfig::new(10.0, 20.0, 100.0, 30.0, 40.0)).layout(&mut diagram);

        let b = &diagram.root().children()[1];
        assert_approx_eq!(f32, position(b).x(), 110.0);
        assert_approx_eq!(f32, position(b).y(), 50.0);
        assert_approx_eq!(f32, position(diagram.root()).y(), 35.0);
    }

    fn arb_topic() -> impl Strategy<Value = Topic> {
        let leaf = "[a-z]{1,8}".prop_map(|title| Topic::new(title));
        leaf.prop_recursive(5, 64, 4, |inner| {
            ("[a-z]{1,8}", prop::collection::vec(inner, 1..4)).prop_map(|(title, children)| {
                children
                    .into_iter()
                    .fold(Topic::new(title), |topic, child| topic.with_child(child))
            })
        })
    }

    fn check_node(node: &DiagramNode) -> Result<(), TestCaseError> {
        let here = position(node);
        for child in node.children() {
            prop_assert!((position(child).x() - here.x() - 220.0).abs() < 1e-3);
            check_node(child)?;
        }
        if let (Some(first), Some(last)) = (node.children().first(), node.children().last()) {
            let (low, high) = (
                position(first).y().min(position(last).y()),
                position(first).y().max(position(last).y()),
            );
            prop_assert!(low <= here.y() && here.y() <= high);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn layout_invariants_hold(topic in arb_topic()) {
            let diagram = laid_out(&topic);

            prop_assert!(diagram.nodes().all(|node| node.position().is_some()));
            prop_assert_eq!(diagram.nodes().count(), diagram.node_count());
            check_node(diagram.root())?;
        }

        #[test]
        fn layout_is_deterministic(topic in arb_topic()) {
            prop_assert_eq!(laid_out(&topic), laid_out(&topic));
        }
    }

    #[test]
    fn test_deep_chain_is_laid_out() {
        let topic = (0..10_000).rev().fold(Topic::new("leaf"), |child, level| {
            Topic::new(format!("level {level}")).with_child(child)
        });
        let diagram = laid_out(&topic);

        assert_eq!(diagram.max_depth(), 10_000);
        assert_eq!(diagram.node_count(), 10_001);

        let deepest = diagram.nodes().last().unwrap();
        assert_eq!(deepest.title(), "leaf");
        assert_approx_eq!(f32, position(deepest).x(), 40.0 + 10_000.0 * 220.0);
        assert_approx_eq!(f32, position(deepest).y(), 40.0);
        assert_approx_eq!(f32, position(diagram.root()).y(), 40.0);
    }
}
