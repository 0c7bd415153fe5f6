// File: crates/scatter-core/src/record.rs
// Summary: Recording backend: captures draw operations per layer instead of rasterizing.
// Used by tests and for headless inspection of what a frame would paint.

use skia_safe as skia;

use crate::draw::{Layer, LayerTarget, Painter, Stroke, TextFormat};
use crate::error::Result;
use crate::geometry::Vec2;

/// One recorded painter call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Opacity(f32),
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    FillCircle { center: Vec2, radius: f64, color: skia::Color },
    StrokeCircle { center: Vec2, radius: f64, stroke: Stroke },
    Glow { center: Vec2, radius: f64, color: skia::Color },
    Text { text: String, anchor: Vec2, format: TextFormat },
    Image { width: i32, height: i32, center: Vec2 },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<DrawOp>,
}

impl RecordingPainter {
    pub fn new() -> Self { Self::default() }

    /// Text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn glows(&self) -> Vec<(Vec2, skia::Color)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Glow { center, color, .. } => Some((center, color)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.ops.push(DrawOp::Opacity(opacity));
    }

    fn polyline(&mut self, points: &[Vec2], stroke: &Stroke) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), stroke: *stroke });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: skia::Color) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeCircle { center, radius, stroke: *stroke });
    }

    fn radial_glow(&mut self, center: Vec2, radius: f64, color: skia::Color) {
        self.ops.push(DrawOp::Glow { center, radius, color });
    }

    fn text(&mut self, text: &str, anchor: Vec2, format: &TextFormat) {
        self.ops.push(DrawOp::Text { text: text.to_string(), anchor, format: *format });
    }

    fn image(&mut self, image: &skia::Image, center: Vec2) {
        self.ops.push(DrawOp::Image { width: image.width(), height: image.height(), center });
    }
}

/// Base + overlay recorders with per-layer paint counters.
#[derive(Clone, Debug, Default)]
pub struct RecordingLayers {
    pub base: RecordingPainter,
    pub overlay: RecordingPainter,
    pub base_paints: usize,
    pub overlay_paints: usize,
}

impl RecordingLayers {
    pub fn new() -> Self { Self::default() }
}

impl LayerTarget for RecordingLayers {
    fn paint(&mut self, layer: Layer, draw: &mut dyn FnMut(&mut dyn Painter) -> Result<()>) -> Result<()> {
        match layer {
            Layer::Base => {
                self.base_paints += 1;
                draw(&mut self.base)
            }
            Layer::Overlay => {
                self.overlay_paints += 1;
                draw(&mut self.overlay)
            }
        }
    }
}
