// File: crates/scatter-core/src/raster.rs
// Summary: Skia CPU raster backend: painter over a canvas, base + overlay surfaces, composition and PNG/RGBA output.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::draw::{Layer, LayerTarget, Painter, Stroke, TextFormat};
use crate::geometry::Vec2;
use crate::text::TextShaper;
use crate::theme::Theme;

/// `Painter` over a Skia canvas. Opacity is folded into every paint's alpha.
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    opacity: f32,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, opacity: 1.0 }
    }

    fn fade(&self, c: skia::Color) -> skia::Color {
        c.with_a((c.a() as f32 * self.opacity).round() as u8)
    }

    fn stroke_paint(&self, stroke: &Stroke) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width as f32);
        paint.set_color(self.fade(stroke.color));
        if let Some([on, off]) = stroke.dash {
            paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
        }
        paint
    }
}

#[inline]
fn pt(v: Vec2) -> skia::Point {
    skia::Point::new(v.x as f32, v.y as f32)
}

impl Painter for SkiaPainter<'_> {
    fn clear(&mut self) {
        self.canvas.clear(skia::Color::TRANSPARENT);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn polyline(&mut self, points: &[Vec2], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(pt(*first));
        for &p in rest {
            path.line_to(pt(p));
        }
        self.canvas.draw_path(&path, &self.stroke_paint(stroke));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(self.fade(color));
        self.canvas.draw_circle(pt(center), radius as f32, &paint);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, stroke: &Stroke) {
        self.canvas.draw_circle(pt(center), radius as f32, &self.stroke_paint(stroke));
    }

    fn radial_glow(&mut self, center: Vec2, radius: f64, color: skia::Color) {
        let inner = self.fade(color);
        let colors = [inner, inner.with_a(0)];
        let shader = skia::Shader::radial_gradient(
            pt(center),
            radius as f32,
            &colors[..],
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_shader(shader);
        self.canvas.draw_circle(pt(center), radius as f32, &paint);
    }

    fn text(&mut self, text: &str, anchor: Vec2, format: &TextFormat) {
        let color = self.fade(format.color);
        self.shaper.draw_anchored(self.canvas, text, (anchor.x as f32, anchor.y as f32), format, color);
    }

    fn image(&mut self, image: &skia::Image, center: Vec2) {
        let mut paint = skia::Paint::default();
        paint.set_alpha_f(self.opacity);
        let left_top = (
            center.x as f32 - image.width() as f32 / 2.0,
            center.y as f32 - image.height() as f32 / 2.0,
        );
        self.canvas.draw_image(image, left_top, Some(&paint));
    }
}

/// Two transparent raster surfaces (base, overlay) of the chart size,
/// composited over the theme background on present.
pub struct RasterLayers {
    width: i32,
    height: i32,
    background: skia::Color,
    base: skia::Surface,
    overlay: skia::Surface,
    shaper: TextShaper,
}

impl RasterLayers {
    pub fn new(size: u32, theme: &Theme) -> Result<Self> {
        let side = i32::try_from(size).context("surface size does not fit in i32")?;
        let base = skia::surfaces::raster_n32_premul((side, side))
            .ok_or_else(|| anyhow::anyhow!("failed to create base raster surface"))?;
        let overlay = skia::surfaces::raster_n32_premul((side, side))
            .ok_or_else(|| anyhow::anyhow!("failed to create overlay raster surface"))?;
        Ok(Self { width: side, height: side, background: theme.background, base, overlay, shaper: TextShaper::new() })
    }

    /// Background, then base, then overlay, flattened into one image.
    pub fn compose(&mut self) -> Result<skia::Image> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create composition surface"))?;
        let base = self.base.image_snapshot();
        let overlay = self.overlay.image_snapshot();
        let canvas = surface.canvas();
        canvas.clear(self.background);
        canvas.draw_image(&base, (0.0, 0.0), None);
        canvas.draw_image(&overlay, (0.0, 0.0), None);
        Ok(surface.image_snapshot())
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.compose()?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Composited frame as unpremultiplied RGBA8: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let image = self.compose()?;
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !image.read_pixels(&info, pixels.as_mut_slice(), stride, (0, 0), skia::image::CachingHint::Allow) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

impl LayerTarget for RasterLayers {
    fn paint(
        &mut self,
        layer: Layer,
        draw: &mut dyn FnMut(&mut dyn Painter) -> crate::error::Result<()>,
    ) -> crate::error::Result<()> {
        let surface = match layer {
            Layer::Base => &mut self.base,
            Layer::Overlay => &mut self.overlay,
        };
        let mut painter = SkiaPainter::new(surface.canvas(), &self.shaper);
        draw(&mut painter)
    }
}
