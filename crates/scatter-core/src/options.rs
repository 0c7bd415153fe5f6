// File: crates/scatter-core/src/options.rs
// Summary: Chart configuration record with defaults, chainable setters and validation.

use crate::error::{ChartError, Result};
use crate::style::{IconKind, MarkerStyle, StyleMap};
use crate::theme::Theme;
use crate::types::DEFAULT_SIZE;

#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Edge length of the square drawing surface, in pixels.
    pub size: u32,
    /// Axis names, x then y.
    pub axes_labels: (String, String),
    /// Must cover every label present in the samples.
    pub styles: StyleMap,
    pub icon: IconKind,
    /// Global opacity of sample markers, in `[0, 1]`.
    pub transparency: f32,
    pub theme: Theme,
    /// Disable to skip all text (axis names, corner values, readout).
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            axes_labels: ("x".to_string(), "y".to_string()),
            styles: StyleMap::new(),
            icon: IconKind::Point,
            transparency: 1.0,
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl ChartOptions {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_axes_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.axes_labels = (x.into(), y.into());
        self
    }

    pub fn with_style(mut self, label: impl Into<String>, style: MarkerStyle) -> Self {
        self.styles.insert(label.into(), style);
        self
    }

    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_icon(mut self, icon: IconKind) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    /// Check the values that would otherwise surface as NaN geometry later.
    /// Style coverage is checked lazily at draw time.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ChartError::InvalidOption { name: "size", reason: "must be positive".into() });
        }
        if !(0.0..=1.0).contains(&self.transparency) {
            return Err(ChartError::InvalidOption {
                name: "transparency",
                reason: format!("{} is outside [0, 1]", self.transparency),
            });
        }
        Ok(())
    }

    pub fn margin(&self) -> f64 {
        self.size as f64 * crate::types::MARGIN_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let o = ChartOptions::default();
        assert!(o.validate().is_ok());
        assert_eq!(o.transparency, 1.0);
        assert_eq!(o.margin(), 40.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ChartOptions::default().with_size(0).validate().is_err());
        assert!(ChartOptions::default().with_transparency(1.5).validate().is_err());
        assert!(ChartOptions::default().with_transparency(f32::NAN).validate().is_err());
    }
}
