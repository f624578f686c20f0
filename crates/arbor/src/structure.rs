//! Owned, display-ready diagram tree.
//!
//! [`TreeAdapter`] copies a parsed [`Topic`] tree into [`DiagramNode`]s. It is
//! the only place that interprets the loosely-typed parts of a topic (absent
//! titles, absent children lists); everything downstream works on sanitized
//! titles and estimated widths.

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use arbor_core::{
    geometry::{Bounds, Point, Size},
    topic::Topic,
};

/// Title used for topics without a usable title.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

/// Maximum number of user-perceived characters shown in a node.
pub const MAX_TITLE_CHARS: usize = 34;

/// Marker appended to a shortened title.
pub const ELLIPSIS: &str = "…";

const MIN_NODE_WIDTH: f32 = 92.0;
const MAX_NODE_WIDTH: f32 = 260.0;
const WIDTH_BASE: f32 = 44.0;
const WIDTH_PER_CHAR: f32 = 9.0;

/// One topic of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    title: String,
    full_title: Option<String>,
    width: f32,
    children: Vec<DiagramNode>,
    position: Option<Point>,
}

impl DiagramNode {
    /// Returns the displayed (possibly shortened) title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the sanitized title before shortening, if it was shortened.
    pub fn full_title(&self) -> Option<&str> {
        self.full_title.as_deref()
    }

    pub fn is_truncated(&self) -> bool {
        self.full_title.is_some()
    }

    /// Returns the estimated node width.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn children(&self) -> &[DiagramNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the top-left corner assigned by the layout, if any.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [DiagramNode] {
        &mut self.children
    }

    /// Returns the node rectangle for a given node height, once positioned.
    pub fn bounds(&self, height: f32) -> Option<Bounds> {
        self.position
            .map(|position| position.to_bounds(Size::new(self.width, height)))
    }

    /// Number of leaves in this subtree; 1 for a leaf.
    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Height of this subtree in edges; 0 for a leaf.
    pub fn max_depth(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Widest node of this subtree.
    pub fn max_width(&self) -> f32 {
        self.walk()
            .map(|(node, _)| node.width)
            .fold(self.width, f32::max)
    }

    /// Pre-order walk of this subtree with each node's depth below `self`.
    fn walk(&self) -> impl Iterator<Item = (&DiagramNode, usize)> {
        let mut pending = vec![(self, 0)];
        std::iter::from_fn(move || {
            let (node, depth) = pending.pop()?;
            pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
            Some((node, depth))
        })
    }
}

// Tears deep trees down without one stack frame per level.
impl Drop for DiagramNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A parent-to-child pairing, used to draw one connector.
#[derive(Debug, Clone, Copy)]
pub struct Link<'a> {
    parent: &'a DiagramNode,
    child: &'a DiagramNode,
}

impl<'a> Link<'a> {
    pub fn parent(&self) -> &'a DiagramNode {
        self.parent
    }

    pub fn child(&self) -> &'a DiagramNode {
        self.child
    }
}

/// Depth-first iterator over the links of a diagram.
#[derive(Debug)]
pub struct Links<'a> {
    stack: Vec<Link<'a>>,
}

impl<'a> Links<'a> {
    fn below(parent: &'a DiagramNode) -> impl Iterator<Item = Link<'a>> {
        parent
            .children
            .iter()
            .rev()
            .map(move |child| Link { parent, child })
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.stack.pop()?;
        self.stack.extend(Links::below(link.child));
        Some(link)
    }
}

/// A complete diagram: the node tree plus its derived shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    root: DiagramNode,
    leaf_count: usize,
    max_depth: usize,
}

impl Diagram {
    fn new(root: DiagramNode) -> Self {
        let leaf_count = root.leaf_count();
        let max_depth = root.max_depth();
        Self {
            root,
            leaf_count,
            max_depth,
        }
    }

    pub fn root(&self) -> &DiagramNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut DiagramNode {
        &mut self.root
    }

    /// Number of leaves in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Depth of the deepest leaf; 0 for a root without children.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of nodes in the whole tree.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Iterates over every parent-to-child link, depth first.
    pub fn links(&self) -> Links<'_> {
        Links {
            stack: Links::below(&self.root).collect(),
        }
    }

    /// Iterates over every node, depth first, parents before children.
    pub fn nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        std::iter::once(&self.root).chain(self.links().map(|link| link.child()))
    }
}

/// Converts parsed topics into an owned [`Diagram`].
///
/// Only attached children are visited; detached branches never reach the
/// diagram.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeAdapter;

impl TreeAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the diagram for `topic`.
    ///
    /// The topic tree is walked with an explicit stack, so outline depth is
    /// bounded by memory rather than by the call stack.
    pub fn adapt(&self, topic: &Topic) -> Diagram {
        let diagram = Diagram::new(adapt_tree(topic));
        debug!(
            nodes = diagram.node_count(),
            leaves = diagram.leaf_count(),
            depth = diagram.max_depth();
            "Diagram structure built"
        );
        diagram
    }
}

/// Copies the attached branch of `root`.
///
/// Descendants are listed in pre-order with their parent's index; entry `i`
/// has index `i + 1` and the root has index 0. Walking the list backwards
/// finishes every child before its parent is built.
fn adapt_tree(root: &Topic) -> DiagramNode {
    let mut order: Vec<(&Topic, usize)> = Vec::new();
    let mut pending: Vec<(&Topic, usize)> =
        root.attached().iter().rev().map(|child| (child, 0)).collect();
    while let Some((topic, parent)) = pending.pop() {
        order.push((topic, parent));
        let index = order.len();
        pending.extend(topic.attached().iter().rev().map(|child| (child, index)));
    }

    let mut children: Vec<Vec<DiagramNode>> = (0..=order.len()).map(|_| Vec::new()).collect();
    for (position, &(topic, parent)) in order.iter().enumerate().rev() {
        let adapted = std::mem::take(&mut children[position + 1]);
        children[parent].push(adapt_node(topic, adapted));
    }

    let adapted = std::mem::take(&mut children[0]);
    adapt_node(root, adapted)
}

/// Builds one node; `reversed_children` arrive last sibling first.
fn adapt_node(topic: &Topic, mut reversed_children: Vec<DiagramNode>) -> DiagramNode {
    let sanitized = sanitize_title(topic.title().unwrap_or_default());
    let sanitized = if sanitized.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        sanitized
    };

    let (title, full_title) = match truncate_title(&sanitized) {
        Some(short) => (short, Some(sanitized)),
        None => (sanitized, None),
    };
    let width = estimate_width(grapheme_count(&title));

    reversed_children.reverse();
    DiagramNode {
        title,
        full_title,
        width,
        children: reversed_children,
        position: None,
    }
}

/// Removes control characters and collapses whitespace runs to single spaces.
pub fn sanitize_title(raw: &str) -> String {
    let visible: String = raw
        .chars()
        .filter(|ch| !ch.is_control() || ch.is_whitespace())
        .collect();
    visible.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shortens `title` to [`MAX_TITLE_CHARS`] graphemes, ellipsis included.
///
/// Returns `None` when the title already fits.
pub fn truncate_title(title: &str) -> Option<String> {
    if grapheme_count(title) <= MAX_TITLE_CHARS {
        return None;
    }
    let kept: String = title.graphemes(true).take(MAX_TITLE_CHARS - 1).collect();
    Some(format!("{kept}{ELLIPSIS}"))
}

/// Estimated width of a node showing `chars` user-perceived characters.
pub fn estimate_width(chars: usize) -> f32 {
    (WIDTH_BASE + WIDTH_PER_CHAR * chars as f32).clamp(MIN_NODE_WIDTH, MAX_NODE_WIDTH)
}

fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}
