//! Text rendering definitions for topic labels.
//!
//! This module provides types for configuring label appearance and rendering
//! single-line labels as SVG `<text>` elements.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable label combining content with a [`TextDefinition`]
//! - [`escape_text`] - Escaping of XML reserved characters
//!
//! Labels are always escaped before being embedded in the document, so topic
//! titles containing `&`, `<`, `>` or quotes cannot break the SVG markup.

use std::borrow::Cow;

use svg::node::{Blob, element as svg_element};

use crate::{color::Color, geometry::Point};

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `14` |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "Arial", "monospace")
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 14,
            color: None,
        }
    }
}

/// A renderable single-line label.
///
/// # Examples
///
/// ```
/// # use arbor_core::draw::{Text, TextDefinition};
/// # use arbor_core::geometry::Point;
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Fish & Chips");
///
/// let svg = text.render(Point::new(50.0, 20.0)).to_string();
/// assert!(svg.contains("Fish &amp; Chips"));
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Renders the label centred on `center`.
    pub fn render(&self, center: Point) -> svg_element::Text {
        let mut rendered = svg_element::Text::new("")
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered = rendered
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        rendered.add(Blob::new(escape_text(self.content)))
    }
}

/// Escapes the XML reserved characters `&`, `<`, `>`, `"` and `'`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// # use arbor_core::draw::escape_text;
/// assert_eq!(escape_text("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
