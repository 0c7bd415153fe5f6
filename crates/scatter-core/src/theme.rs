// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome and interaction feedback colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Dashed axis frame.
    pub axis_line: skia::Color,
    /// Axis names and corner values.
    pub axis_label: skia::Color,
    /// Pointer guide lines, ring and readout.
    pub crosshair: skia::Color,
    /// Halo color of the selected sample.
    pub highlight: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 211, 211, 211), // lightgrey
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            crosshair: skia::Color::from_argb(255, 30, 120, 240),
            highlight: skia::Color::from_argb(255, 255, 215, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 90, 90, 100),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            highlight: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            axis_line: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),  // base01
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            crosshair: skia::Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
            highlight: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),  // orange
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
