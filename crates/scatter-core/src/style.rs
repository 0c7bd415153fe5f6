// File: crates/scatter-core/src/style.rs
// Summary: Per-label marker styles supplied by the caller.

use std::collections::HashMap;

use skia_safe as skia;

/// How sample markers are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconKind {
    /// Filled dot in the style color.
    #[default]
    Point,
    /// The style's glyph text.
    Text,
    /// The style's pre-rendered image.
    Image,
}

/// Display record for one label. Opaque to the chart apart from draw-time reads.
#[derive(Clone)]
pub struct MarkerStyle {
    pub color: skia::Color,
    pub text: String,
    /// Materialized icon for [`IconKind::Image`]; produced outside the chart.
    pub image: Option<skia::Image>,
}

impl MarkerStyle {
    pub fn new(color: skia::Color, text: impl Into<String>) -> Self {
        Self { color, text: text.into(), image: None }
    }

    pub fn with_image(mut self, image: skia::Image) -> Self {
        self.image = Some(image);
        self
    }
}

impl std::fmt::Debug for MarkerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerStyle")
            .field("color", &self.color)
            .field("text", &self.text)
            .field("image", &self.image.as_ref().map(|i| (i.width(), i.height())))
            .finish()
    }
}

pub type StyleMap = HashMap<String, MarkerStyle>;
