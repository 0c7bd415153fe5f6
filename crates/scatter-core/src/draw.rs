// File: crates/scatter-core/src/draw.rs
// Summary: Layered draw pipeline (axis frame, markers, halos on the base layer; crosshair on the overlay)
// written against a renderer-agnostic `Painter` capability set.

use bitflags::bitflags;
use skia_safe as skia;

use crate::bounds::Bounds;
use crate::error::{ChartError, Result};
use crate::geometry::{format_number, Vec2};
use crate::options::ChartOptions;
use crate::sample::Sample;
use crate::style::IconKind;
use crate::types::{
    AXIS_DASH, AXIS_LINE_WIDTH, AXIS_NAME_RATIO, AXIS_VALUE_RATIO, GLYPH_MARKER_SIZE, POINT_MARKER_SIZE,
    READOUT_DECIMALS,
};

bitflags! {
    /// Layers a handler invalidated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Repaint: u8 {
        /// Axis frame, markers and halos; needed whenever bounds, hover or selection change.
        const BASE    = 1 << 0;
        /// Pointer crosshair and readout.
        const OVERLAY = 1 << 1;
        const FULL    = Self::BASE.bits() | Self::OVERLAY.bits();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Base,
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign { Left, Center, Right }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign { Top, Middle, Bottom }

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f64,
    /// On/off lengths; `None` draws a solid line.
    pub dash: Option<[f64; 2]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFormat {
    pub size: f64,
    pub color: skia::Color,
    pub align: HAlign,
    pub valign: VAlign,
    /// Degrees, clockwise, about the anchor point.
    pub rotation: f64,
    pub bold: bool,
}

impl TextFormat {
    pub fn new(size: f64, color: skia::Color) -> Self {
        Self { size, color, align: HAlign::Center, valign: VAlign::Middle, rotation: 0.0, bold: true }
    }

    pub fn aligned(mut self, align: HAlign, valign: VAlign) -> Self {
        self.align = align;
        self.valign = valign;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Primitive operations the pipeline needs from a rendering backend.
/// Coordinates are surface pixels, y down.
pub trait Painter {
    /// Reset the layer to fully transparent.
    fn clear(&mut self);
    /// Global opacity multiplied into everything drawn afterwards.
    fn set_opacity(&mut self, opacity: f32);
    fn polyline(&mut self, points: &[Vec2], stroke: &Stroke);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: skia::Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f64, stroke: &Stroke);
    /// Radial gradient from `color` at the center to transparent at `radius`.
    fn radial_glow(&mut self, center: Vec2, radius: f64, color: skia::Color);
    fn text(&mut self, text: &str, anchor: Vec2, format: &TextFormat);
    /// Draw `image` centred on `center`.
    fn image(&mut self, image: &skia::Image, center: Vec2);
}

/// Two-layer render target: a persistent base layer with a transparent overlay
/// composited above it.
pub trait LayerTarget {
    fn paint(&mut self, layer: Layer, draw: &mut dyn FnMut(&mut dyn Painter) -> Result<()>) -> Result<()>;
}

/// Everything one frame needs, borrowed from the chart.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub bounds: &'a Bounds,
    pub samples: &'a [Sample],
    pub options: &'a ChartOptions,
    pub hovered: Option<usize>,
    pub selected: Option<usize>,
    /// Pointer location while it is over the surface.
    pub pointer: Option<Vec2>,
}

/// Full base-layer repaint: clear, axis frame, markers, emphasis.
pub fn draw_base(scene: &Scene<'_>, p: &mut dyn Painter) -> Result<()> {
    p.clear();
    draw_axis(scene, p);

    p.set_opacity(scene.options.transparency);
    let markers = draw_samples(scene, p);
    p.set_opacity(1.0);
    markers?;

    draw_emphasis(scene, p)
}

/// Overlay repaint: clear, then the crosshair if the pointer is over the surface.
pub fn draw_overlay(scene: &Scene<'_>, p: &mut dyn Painter) -> Result<()> {
    p.clear();
    if let Some(pointer) = scene.pointer {
        draw_crosshair(scene, pointer, p);
    }
    Ok(())
}

fn draw_axis(scene: &Scene<'_>, p: &mut dyn Painter) {
    let opts = scene.options;
    let b = scene.bounds;
    let (l, r, t, bt) = (b.pixel.left, b.pixel.right, b.pixel.top, b.pixel.bottom);
    let m = b.margin;
    let size = opts.size as f64;

    p.polyline(
        &[Vec2::new(l, t), Vec2::new(l, bt), Vec2::new(r, bt)],
        &Stroke { color: opts.theme.axis_line, width: AXIS_LINE_WIDTH, dash: Some(AXIS_DASH) },
    );

    if !opts.draw_labels {
        return;
    }

    let color = opts.theme.axis_label;
    let name = TextFormat::new(m * AXIS_NAME_RATIO, color);
    p.text(&opts.axes_labels.0, Vec2::new(size / 2.0, bt + m / 2.0), &name);
    p.text(&opts.axes_labels.1, Vec2::new(l - m / 2.0, size / 2.0), &name.rotated(-90.0));

    let data_min = b.to_data(Vec2::new(l, bt));
    let data_max = b.to_data(Vec2::new(r, t));
    let value = TextFormat::new(m * AXIS_VALUE_RATIO, color);
    let fmt = |v: f64| format_number(v, READOUT_DECIMALS);

    p.text(&fmt(data_min.x), Vec2::new(l, bt), &value.aligned(HAlign::Left, VAlign::Top));
    p.text(&fmt(data_min.y), Vec2::new(l, bt), &value.aligned(HAlign::Left, VAlign::Bottom).rotated(-90.0));
    p.text(&fmt(data_max.x), Vec2::new(r, bt), &value.aligned(HAlign::Right, VAlign::Top));
    p.text(&fmt(data_max.y), Vec2::new(l, t), &value.aligned(HAlign::Right, VAlign::Bottom).rotated(-90.0));
}

fn style_for<'a>(scene: &Scene<'a>, sample: &Sample) -> Result<&'a crate::style::MarkerStyle> {
    scene
        .options
        .styles
        .get(&sample.label)
        .ok_or_else(|| ChartError::MissingStyle { label: sample.label.clone() })
}

fn draw_samples(scene: &Scene<'_>, p: &mut dyn Painter) -> Result<()> {
    for sample in scene.samples {
        let style = style_for(scene, sample)?;
        let at = scene.bounds.to_pixel(sample.point);
        match scene.options.icon {
            IconKind::Point => p.fill_circle(at, POINT_MARKER_SIZE / 2.0, style.color),
            IconKind::Text => {
                let mut glyph = TextFormat::new(GLYPH_MARKER_SIZE, style.color);
                glyph.bold = false;
                p.text(&style.text, at, &glyph);
            }
            IconKind::Image => {
                let image = style
                    .image
                    .as_ref()
                    .ok_or_else(|| ChartError::MissingImage { label: sample.label.clone() })?;
                p.image(image, at);
            }
        }
    }
    Ok(())
}

fn draw_emphasis(scene: &Scene<'_>, p: &mut dyn Painter) -> Result<()> {
    let radius = scene.bounds.margin;
    if let Some(i) = scene.hovered {
        let sample = &scene.samples[i];
        let style = style_for(scene, sample)?;
        p.radial_glow(scene.bounds.to_pixel(sample.point), radius, style.color);
    }
    if let Some(i) = scene.selected.filter(|&s| Some(s) != scene.hovered) {
        let sample = &scene.samples[i];
        p.radial_glow(scene.bounds.to_pixel(sample.point), radius, scene.options.theme.highlight);
    }
    Ok(())
}

fn draw_crosshair(scene: &Scene<'_>, at: Vec2, p: &mut dyn Painter) {
    let b = scene.bounds;
    let ring = b.margin / 4.0;
    let stroke = Stroke { color: scene.options.theme.crosshair, width: 1.0, dash: None };

    // guide lines stop short of the ring around the pointer
    let segments = [
        (Vec2::new(at.x, b.pixel.top), Vec2::new(at.x, at.y - ring)),
        (Vec2::new(at.x, at.y + ring), Vec2::new(at.x, b.pixel.bottom)),
        (Vec2::new(b.pixel.left, at.y), Vec2::new(at.x - ring, at.y)),
        (Vec2::new(at.x + ring, at.y), Vec2::new(b.pixel.right, at.y)),
    ];
    for (from, to) in segments {
        if from.x <= to.x && from.y <= to.y {
            p.polyline(&[from, to], &stroke);
        }
    }
    p.stroke_circle(at, ring, &stroke);

    if scene.options.draw_labels {
        let data = b.to_data(at);
        let readout = format!(
            "({}, {})",
            format_number(data.x, READOUT_DECIMALS),
            format_number(data.y, READOUT_DECIMALS)
        );
        let format = TextFormat::new(b.margin * AXIS_VALUE_RATIO, scene.options.theme.crosshair)
            .aligned(HAlign::Left, VAlign::Bottom);
        p.text(&readout, Vec2::new(at.x + ring, at.y - ring), &format);
    }
}
