//! Topic tree produced by outline parsers.
//!
//! A [`Topic`] is the hand-off format between a parser and the diagram
//! pipeline. It mirrors what outline tools typically emit: the title may be
//! missing, the children list may be missing, and children are split into an
//! *attached* set (part of the visible tree) and a *detached* set (floating or
//! collapsed topics).
//!
//! The diagram pipeline only ever reads a `Topic`; it copies the attached
//! branch into its own node tree and never looks at detached topics.
//!
//! # Example
//!
//! ```
//! # use arbor_core::topic::Topic;
//! let root = Topic::new("Plan")
//!     .with_child(Topic::new("Research"))
//!     .with_child(Topic::new("Build").with_child(Topic::new("Prototype")));
//!
//! assert_eq!(root.title(), Some("Plan"));
//! assert_eq!(root.attached().len(), 2);
//! assert!(root.detached().is_empty());
//! ```

/// A single topic in an outline, with its nested children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    title: Option<String>,
    children: Option<TopicChildren>,
}

/// The child relations of a [`Topic`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicChildren {
    attached: Vec<Topic>,
    detached: Vec<Topic>,
}

impl Topic {
    /// Creates a topic with the given title and no children.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            children: None,
        }
    }

    /// Creates a topic without a title.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Appends an attached child (builder style).
    pub fn with_child(mut self, child: Topic) -> Self {
        self.push_child(child);
        self
    }

    /// Appends a detached child (builder style).
    pub fn with_detached(mut self, child: Topic) -> Self {
        self.children
            .get_or_insert_with(TopicChildren::default)
            .detached
            .push(child);
        self
    }

    /// Appends an attached child.
    pub fn push_child(&mut self, child: Topic) {
        self.children
            .get_or_insert_with(TopicChildren::default)
            .attached
            .push(child);
    }

    /// Returns the title, if one was given.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the attached children in source order.
    ///
    /// A topic without a children list yields an empty slice.
    pub fn attached(&self) -> &[Topic] {
        self.children
            .as_ref()
            .map(|children| children.attached.as_slice())
            .unwrap_or_default()
    }

    /// Returns the detached children in source order.
    pub fn detached(&self) -> &[Topic] {
        self.children
            .as_ref()
            .map(|children| children.detached.as_slice())
            .unwrap_or_default()
    }
}

impl Drop for Topic {
    fn drop(&mut self) {
        let Some(children) = self.children.take() else {
            return;
        };
        // Flattened so deep outlines do not recurse once per level
        let mut pending = children.attached;
        pending.extend(children.detached);
        while let Some(mut topic) = pending.pop() {
            if let Some(children) = topic.children.take() {
                pending.extend(children.attached);
                pending.extend(children.detached);
            }
        }
    }
}
