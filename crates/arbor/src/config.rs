//! Configuration types for outline diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the command-line tool.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing used by the tree layout.
//! - [`StyleConfig`] - Colors, stroke and font of the rendered document.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().horizontal_gap(), 220.0);
//! assert!(config.style().root_fill().is_ok());
//! ```

use serde::Deserialize;

use arbor_core::{color::Color, draw::StrokeCap};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Spacing of the tidy tree layout, in SVG user units.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `padding_x` | 40 | Left and right canvas margin |
/// | `padding_y` | 40 | Top and bottom canvas margin |
/// | `horizontal_gap` | 220 | Distance between the left edges of two depths |
/// | `vertical_gap` | 56 | Distance between the top edges of two neighbouring leaves |
/// | `node_height` | 40 | Height of every node rectangle |
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    padding_x: f32,
    padding_y: f32,
    horizontal_gap: f32,
    vertical_gap: f32,
    node_height: f32,
}

impl LayoutConfig {
    /// Creates a layout configuration with explicit spacing values.
    pub fn new(
        padding_x: f32,
        padding_y: f32,
        horizontal_gap: f32,
        vertical_gap: f32,
        node_height: f32,
    ) -> Self {
        Self {
            padding_x,
            padding_y,
            horizontal_gap,
            vertical_gap,
            node_height,
        }
    }

    pub fn padding_x(&self) -> f32 {
        self.padding_x
    }

    pub fn padding_y(&self) -> f32 {
        self.padding_y
    }

    pub fn horizontal_gap(&self) -> f32 {
        self.horizontal_gap
    }

    pub fn vertical_gap(&self) -> f32 {
        self.vertical_gap
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(40.0, 40.0, 220.0, 56.0, 40.0)
    }
}

const DEFAULT_BACKGROUND: &str = "#f8fafc";
const DEFAULT_ROOT_FILL: &str = "#2563eb";
const DEFAULT_ROOT_STROKE: &str = "#1d4ed8";
const DEFAULT_ROOT_TEXT: &str = "#ffffff";
const DEFAULT_NODE_FILL: &str = "#ffffff";
const DEFAULT_NODE_STROKE: &str = "#94a3b8";
const DEFAULT_NODE_TEXT: &str = "#0f172a";
const DEFAULT_CONNECTOR: &str = "#94a3b8";
const DEFAULT_CONNECTOR_WIDTH: f32 = 2.0;
const DEFAULT_CONNECTOR_CAP: StrokeCap = StrokeCap::Round;
const DEFAULT_CORNER_RADIUS: f32 = 10.0;
const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const DEFAULT_FONT_SIZE: u16 = 14;

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as strings and parsed on access, so an invalid color in a
/// config file is reported when a diagram is rendered. Fields that are not
/// set fall back to the built-in palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    root_fill: Option<String>,
    #[serde(default)]
    root_stroke: Option<String>,
    #[serde(default)]
    root_text: Option<String>,
    #[serde(default)]
    node_fill: Option<String>,
    #[serde(default)]
    node_stroke: Option<String>,
    #[serde(default)]
    node_text: Option<String>,
    #[serde(default)]
    connector_color: Option<String>,
    #[serde(default)]
    connector_width: Option<f32>,
    #[serde(default)]
    connector_cap: Option<String>,
    #[serde(default)]
    corner_radius: Option<f32>,
    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    font_size: Option<u16>,
}

/// Parses a configured color, falling back to `default` when unset.
fn resolve_color(value: Option<&String>, default: &str, name: &str) -> Result<Color, String> {
    let raw = value.map(String::as_str).unwrap_or(default);
    Color::new(raw).map_err(|err| format!("Invalid {name} in config: {err}"))
}

impl StyleConfig {
    /// Returns the canvas background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        resolve_color(
            self.background_color.as_ref(),
            DEFAULT_BACKGROUND,
            "background color",
        )
    }

    pub fn root_fill(&self) -> Result<Color, String> {
        resolve_color(self.root_fill.as_ref(), DEFAULT_ROOT_FILL, "root fill")
    }

    pub fn root_stroke(&self) -> Result<Color, String> {
        resolve_color(self.root_stroke.as_ref(), DEFAULT_ROOT_STROKE, "root stroke")
    }

    pub fn root_text(&self) -> Result<Color, String> {
        resolve_color(self.root_text.as_ref(), DEFAULT_ROOT_TEXT, "root text color")
    }

    pub fn node_fill(&self) -> Result<Color, String> {
        resolve_color(self.node_fill.as_ref(), DEFAULT_NODE_FILL, "node fill")
    }

    pub fn node_stroke(&self) -> Result<Color, String> {
        resolve_color(self.node_stroke.as_ref(), DEFAULT_NODE_STROKE, "node stroke")
    }

    pub fn node_text(&self) -> Result<Color, String> {
        resolve_color(self.node_text.as_ref(), DEFAULT_NODE_TEXT, "node text color")
    }

    pub fn connector_color(&self) -> Result<Color, String> {
        resolve_color(
            self.connector_color.as_ref(),
            DEFAULT_CONNECTOR,
            "connector color",
        )
    }

    /// Returns the connector stroke width.
    pub fn connector_width(&self) -> f32 {
        self.connector_width.unwrap_or(DEFAULT_CONNECTOR_WIDTH)
    }

    /// Returns the line cap of connector curves (`butt`, `round` or `square`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configured cap is not one of the three names.
    pub fn connector_cap(&self) -> Result<StrokeCap, String> {
        match &self.connector_cap {
            Some(raw) => raw
                .parse::<StrokeCap>()
                .map_err(|err| format!("Invalid connector cap in config: {err}")),
            None => Ok(DEFAULT_CONNECTOR_CAP),
        }
    }

    /// Returns the corner radius of node rectangles.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS)
    }

    /// Returns the label font family.
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Returns the label font size.
    pub fn font_size(&self) -> u16 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Sets the background color string (builder style).
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the connector line cap name (builder style).
    pub fn with_connector_cap(mut self, cap: impl Into<String>) -> Self {
        self.connector_cap = Some(cap.into());
        self
    }

    /// Sets the root node fill color string (builder style).
    pub fn with_root_fill(mut self, color: impl Into<String>) -> Self {
        self.root_fill = Some(color.into());
        self
    }
}
