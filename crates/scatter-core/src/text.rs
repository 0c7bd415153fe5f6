// File: crates/scatter-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, anchored by alignment and rotated about the anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::draw::{HAlign, TextFormat, VAlign};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Courier first, then common monospace fallbacks
        ts.set_font_families(&["Courier New", "Courier", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that its alignment box touches `anchor`, rotated by
    /// `format.rotation` degrees about the anchor.
    pub fn draw_anchored(&self, canvas: &skia::Canvas, text: &str, anchor: (f32, f32), format: &TextFormat, color: skia::Color) {
        let p = self.layout(text, format.size as f32, color, format.bold);
        let w = p.longest_line();
        let h = p.height();
        let dx = match format.align {
            HAlign::Left => 0.0,
            HAlign::Center => -w / 2.0,
            HAlign::Right => -w,
        };
        let dy = match format.valign {
            VAlign::Top => 0.0,
            VAlign::Middle => -h / 2.0,
            VAlign::Bottom => -h,
        };
        canvas.save();
        canvas.translate(anchor);
        if format.rotation != 0.0 {
            canvas.rotate(format.rotation as f32, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
