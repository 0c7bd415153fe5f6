// File: crates/scatter-core/src/bounds.rs
// Summary: Pixel/data bounds pair and the mapping between the two spaces.

use tracing::warn;

use crate::error::{ChartError, Result};
use crate::geometry::{remap_point, Rect, Vec2};
use crate::sample::Sample;
use crate::types::MARGIN_RATIO;

/// Pixel-space plotting area and the data-space rect currently mapped onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Surface inset by `margin` on every side. Fixed for the chart's lifetime.
    pub pixel: Rect,
    /// Live data bounds.
    pub data: Rect,
    pub margin: f64,
}

impl Bounds {
    pub fn new(size: f64, data: Rect) -> Self {
        let margin = size * MARGIN_RATIO;
        Self { pixel: pixel_bounds(size, margin), data, margin }
    }

    #[inline]
    pub fn to_pixel(&self, data_point: Vec2) -> Vec2 {
        remap_point(&self.data, &self.pixel, data_point)
    }

    #[inline]
    pub fn to_data(&self, pixel_point: Vec2) -> Vec2 {
        remap_point(&self.pixel, &self.data, pixel_point)
    }
}

/// Square surface of edge `size` inset by `margin`.
pub fn pixel_bounds(size: f64, margin: f64) -> Rect {
    Rect::new(margin, size - margin, margin, size - margin)
}

/// Tight bounding rect of all sample points (`top` = max y, `bottom` = min y).
///
/// An axis on which every sample shares one coordinate gets a unit span
/// centred on that coordinate so the mapping stays invertible. A span that
/// overflows `f64` is rejected.
pub fn data_extent(samples: &[Sample]) -> Result<Rect> {
    if samples.is_empty() {
        return Err(ChartError::EmptySampleSet);
    }
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in samples {
        if !s.point.is_finite() {
            return Err(ChartError::InvalidOption {
                name: "samples",
                reason: format!("non-finite point ({}, {}) for label '{}'", s.point.x, s.point.y, s.label),
            });
        }
        x_min = x_min.min(s.point.x);
        x_max = x_max.max(s.point.x);
        y_min = y_min.min(s.point.y);
        y_max = y_max.max(s.point.y);
    }
    if !(x_max - x_min).is_finite() || !(y_max - y_min).is_finite() {
        return Err(ChartError::InvalidOption {
            name: "samples",
            reason: format!("extent [{x_min}, {x_max}] x [{y_min}, {y_max}] overflows f64"),
        });
    }
    if x_max - x_min == 0.0 {
        warn!(x = x_min, "degenerate x extent, using unit span");
        x_min -= 0.5;
        x_max += 0.5;
    }
    if y_max - y_min == 0.0 {
        warn!(y = y_min, "degenerate y extent, using unit span");
        y_min -= 0.5;
        y_max += 0.5;
    }
    Ok(Rect::new(x_min, x_max, y_max, y_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_bounds_inset_by_margin() {
        let b = Bounds::new(400.0, Rect::new(0.0, 2.0, 2.0, 0.0));
        assert_eq!(b.margin, 40.0);
        assert_eq!(b.pixel, Rect::new(40.0, 360.0, 40.0, 360.0));
    }

    #[test]
    fn extent_is_tight() {
        let s = vec![Sample::new(0.0, 0.0, "a"), Sample::new(1.0, 1.0, "a"), Sample::new(2.0, 2.0, "b")];
        assert_eq!(data_extent(&s).unwrap(), Rect::new(0.0, 2.0, 2.0, 0.0));
    }

    #[test]
    fn single_point_gets_unit_span() {
        let r = data_extent(&[Sample::new(3.0, -1.0, "a")]).unwrap();
        assert_eq!(r, Rect::new(2.5, 3.5, -0.5, -1.5));
        let b = Bounds::new(100.0, r);
        let p = b.to_pixel(Vec2::new(3.0, -1.0));
        assert!(p.is_finite());
        assert_eq!(p, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn empty_and_non_finite_rejected() {
        assert_eq!(data_extent(&[]), Err(ChartError::EmptySampleSet));
        assert!(matches!(
            data_extent(&[Sample::new(f64::NAN, 0.0, "a")]),
            Err(ChartError::InvalidOption { name: "samples", .. })
        ));
    }

    #[test]
    fn overflowing_span_rejected() {
        let s = vec![Sample::new(-1e308, 0.0, "a"), Sample::new(1e308, 1.0, "a")];
        assert!(matches!(data_extent(&s), Err(ChartError::InvalidOption { name: "samples", .. })));
        let s = vec![Sample::new(0.0, f64::MAX, "a"), Sample::new(1.0, -f64::MAX, "a")];
        assert!(matches!(data_extent(&s), Err(ChartError::InvalidOption { name: "samples", .. })));
    }
}
