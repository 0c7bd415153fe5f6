// File: crates/scatter-core/src/hit.rs
// Summary: Nearest-sample hit testing in pixel space.

use crate::bounds::Bounds;
use crate::geometry::{nearest, Vec2};
use crate::sample::Sample;

/// Nearest sample to a pointer, in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    /// Pixel distance between the pointer and the sample's projected location.
    pub distance: f64,
}

/// Project every sample with the live bounds and return the nearest one.
/// Lowest index wins on ties. O(n) per call.
pub fn nearest_sample(pointer: Vec2, bounds: &Bounds, samples: &[Sample]) -> Option<Hit> {
    let projected: Vec<Vec2> = samples.iter().map(|s| bounds.to_pixel(s.point)).collect();
    nearest(pointer, &projected).map(|(index, distance)| Hit { index, distance })
}

/// Hovered sample under `pointer`, if the nearest one lies strictly closer than half the margin.
pub fn hover_target(pointer: Vec2, bounds: &Bounds, samples: &[Sample]) -> Option<Hit> {
    nearest_sample(pointer, bounds, samples).filter(|h| h.distance < bounds.margin / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn diag() -> (Bounds, Vec<Sample>) {
        let samples = vec![Sample::new(0.0, 0.0, "a"), Sample::new(1.0, 1.0, "b"), Sample::new(2.0, 2.0, "a")];
        (Bounds::new(400.0, Rect::new(0.0, 2.0, 2.0, 0.0)), samples)
    }

    #[test]
    fn exact_location_hits_with_zero_distance() {
        let (b, s) = diag();
        let hit = hover_target(Vec2::new(200.0, 200.0), &b, &s).unwrap();
        assert_eq!(hit, Hit { index: 1, distance: 0.0 });
    }

    #[test]
    fn threshold_is_strict() {
        let (b, s) = diag();
        // 20 px = margin / 2, not close enough
        assert!(hover_target(Vec2::new(220.0, 200.0), &b, &s).is_none());
        assert_eq!(hover_target(Vec2::new(219.0, 200.0), &b, &s).map(|h| h.index), Some(1));
        assert_eq!(nearest_sample(Vec2::new(220.0, 200.0), &b, &s).map(|h| h.index), Some(1));
    }
}
