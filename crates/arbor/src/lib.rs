//! Arbor - turns hierarchical text outlines into node-link diagrams.
//!
//! A render call runs one synchronous pipeline:
//!
//! 1. parse the outline text (falling back once to [`normalize`]d text),
//! 2. copy the topic tree into an owned [`Diagram`] ([`TreeAdapter`]),
//! 3. lay it out as a tidy tree ([`LayoutEngine`]),
//! 4. render it to a self-contained SVG document.
//!
//! Nothing is cached between calls.

pub mod config;

mod error;
mod export;
mod layout;
mod normalize;
mod structure;

pub use arbor_core::{color, draw, geometry, topic};
pub use arbor_parser::{OutlineParser, ParseError, StrictParser};

pub use error::ArborError;
pub use layout::LayoutEngine;
pub use normalize::normalize;
pub use structure::{
    Diagram, DiagramNode, ELLIPSIS, Link, Links, MAX_TITLE_CHARS, PLACEHOLDER_TITLE, TreeAdapter,
};

use std::fmt;

use log::{debug, info, trace, warn};

use arbor_core::topic::Topic;

use config::AppConfig;
use export::svg::Svg;

/// Reference text describing the outline syntax and the markdown fallback.
pub const SYNTAX_REFERENCE: &str = include_str!("syntax.md");

/// A successfully parsed outline.
///
/// Besides the topic tree it records which text was actually parsed: the
/// input itself, or its normalized rewrite when the input was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOutline {
    topic: Topic,
    source: String,
    normalized: bool,
}

impl ParsedOutline {
    /// Returns the parsed topic tree.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Returns the outline text the topic tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the input was rejected and its normalized rewrite
    /// was parsed instead.
    pub fn was_normalized(&self) -> bool {
        self.normalized
    }
}

/// Builder for parsing and rendering outline diagrams.
///
/// # Examples
///
/// ```
/// use arbor::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse the outline
/// let outline = builder.parse("Roadmap\n- Discovery\n- Delivery\n  - Beta")
///     .expect("Failed to parse");
///
/// // Render it to SVG
/// let svg = builder.render_svg(&outline)
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
///
/// // Or in one step with the default configuration
/// let svg = DiagramBuilder::default().render("Roadmap\n- Discovery").unwrap();
/// ```
pub struct DiagramBuilder {
    config: AppConfig,
    parser: Box<dyn OutlineParser>,
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl fmt::Debug for DiagramBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DiagramBuilder {
    /// Create a new diagram builder using the built-in [`StrictParser`].
    ///
    /// # Arguments
    ///
    /// * `config` - Layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            parser: Box::new(StrictParser),
        }
    }

    /// Replaces the outline parser (builder style).
    pub fn with_parser(mut self, parser: impl OutlineParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Returns the configuration used for layout and rendering.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse outline text into a topic tree.
    ///
    /// When the parser rejects `source`, the text is rewritten by
    /// [`normalize`] and parsed once more. There is no further retry.
    ///
    /// # Errors
    ///
    /// - [`ArborError::EmptyInput`] if the rewrite leaves nothing to parse.
    /// - [`ArborError::ParseFailure`] if the rewritten text is rejected too;
    ///   it carries the rewritten text as its source.
    pub fn parse(&self, source: &str) -> Result<ParsedOutline, ArborError> {
        info!("Parsing outline");

        let raw_err = match self.parser.parse(source) {
            Ok(topic) => {
                debug!("Outline parsed successfully");
                return Ok(ParsedOutline {
                    topic,
                    source: source.to_string(),
                    normalized: false,
                });
            }
            Err(err) => err,
        };

        warn!(err:% = raw_err; "Outline rejected, retrying with normalized text");
        let normalized = normalize(source);
        if normalized.is_empty() {
            return Err(ArborError::EmptyInput);
        }
        trace!(normalized = normalized.as_str(); "Normalized outline");

        let topic = self
            .parser
            .parse(&normalized)
            .map_err(|err| ArborError::new_parse_error(err, normalized.as_str()))?;

        debug!("Normalized outline parsed successfully");
        Ok(ParsedOutline {
            topic,
            source: normalized,
            normalized: true,
        })
    }

    /// Build and lay out the diagram of a parsed outline.
    pub fn build_diagram(&self, outline: &ParsedOutline) -> Diagram {
        let mut diagram = TreeAdapter::new().adapt(outline.topic());
        LayoutEngine::new(*self.config.layout()).layout(&mut diagram);
        diagram
    }

    /// Render a parsed outline to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] if the style holds an invalid color.
    pub fn render_svg(&self, outline: &ParsedOutline) -> Result<String, ArborError> {
        let diagram = self.build_diagram(outline);
        info!(
            nodes = diagram.node_count(),
            leaves = diagram.leaf_count();
            "Diagram laid out"
        );

        let exporter = Svg::new(*self.config.layout(), self.config.style())?;
        let document = exporter.render_diagram(&diagram)?;

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Parse and render outline text in one step.
    ///
    /// # Errors
    ///
    /// Any error of [`parse`](Self::parse) or [`render_svg`](Self::render_svg).
    pub fn render(&self, source: &str) -> Result<String, ArborError> {
        let outline = self.parse(source)?;
        self.render_svg(&outline)
    }
}
