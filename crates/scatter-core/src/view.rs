// File: crates/scatter-core/src/view.rs
// First-class view state: pan offset, zoom scale, drag tracking and the live bounds derived from them.

use tracing::debug;

use crate::bounds::Bounds;
use crate::geometry::{clamp, remap_point, Rect, Vec2};
use crate::types::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};

/// Persistent pan/zoom knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Data-space translation applied to the default bounds. Unconstrained.
    pub offset: Vec2,
    /// Zoom factor applied about the translated center. Always in `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { offset: Vec2::ZERO, scale: 1.0 }
    }
}

impl ViewState {
    /// Apply one scroll step. Positive `delta` grows the scale (zoom out),
    /// negative shrinks it (zoom in). Zero or non-finite deltas are ignored.
    pub fn zoom_step(&mut self, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let step = self.scale * ZOOM_STEP;
        self.scale = clamp(self.scale + delta.signum() * step, MIN_SCALE, MAX_SCALE);
    }
}

/// Transient pan gesture. `start`/`end` are data-space positions measured
/// against the default bounds, so they do not drift while the view moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub start: Vec2,
    pub end: Vec2,
    /// Offset delta of the gesture in progress (or the last finished one).
    pub delta: Vec2,
    pub dragging: bool,
}

/// Live data bounds as a pure function of the default bounds and the view knobs:
/// translate by `offset`, then scale about the translated rect's center.
pub fn live_bounds(default_data: &Rect, offset: Vec2, scale: f64) -> Rect {
    default_data.translate(offset).scale_about_center(scale)
}

/// Pan/zoom controller. Owns the view knobs, the drag gesture and the bounds
/// they produce.
#[derive(Clone, Debug)]
pub struct Viewport {
    default_data: Rect,
    state: ViewState,
    drag: DragState,
    bounds: Bounds,
}

impl Viewport {
    pub fn new(size: f64, default_data: Rect) -> Self {
        Self {
            default_data,
            state: ViewState::default(),
            drag: DragState::default(),
            bounds: Bounds::new(size, default_data),
        }
    }

    pub fn bounds(&self) -> &Bounds { &self.bounds }
    pub fn default_data(&self) -> &Rect { &self.default_data }
    pub fn state(&self) -> ViewState { self.state }
    pub fn drag(&self) -> &DragState { &self.drag }
    pub fn is_dragging(&self) -> bool { self.drag.dragging }

    /// Map a pixel location against the default (unpanned, unzoomed) data bounds.
    pub fn pixel_to_default_data(&self, pixel: Vec2) -> Vec2 {
        remap_point(&self.bounds.pixel, &self.default_data, pixel)
    }

    /// Scroll zoom. Uses the committed offset even when a drag is in progress.
    pub fn zoom(&mut self, delta: f64) -> f64 {
        self.state.zoom_step(delta);
        self.apply(self.state.offset);
        debug!(delta, scale = self.state.scale, "zoom");
        self.state.scale
    }

    pub fn begin_drag(&mut self, pixel: Vec2) {
        let start = self.pixel_to_default_data(pixel);
        self.drag = DragState { start, end: start, delta: Vec2::ZERO, dragging: true };
    }

    /// Track the pointer during a drag. No-op when no drag is active.
    pub fn drag_to(&mut self, pixel: Vec2) -> bool {
        if !self.drag.dragging {
            return false;
        }
        self.drag.end = self.pixel_to_default_data(pixel);
        self.drag.delta = (self.drag.start - self.drag.end) * self.state.scale;
        self.apply(self.state.offset + self.drag.delta);
        true
    }

    /// Commit the gesture's delta into the persistent offset. The delta itself
    /// is kept so a following click can tell a drag release from a click.
    pub fn end_drag(&mut self) -> bool {
        if !self.drag.dragging {
            return false;
        }
        self.state.offset = self.state.offset + self.drag.delta;
        self.drag.dragging = false;
        // a zoom mid-drag rebuilt the bounds from the old offset
        self.apply(self.state.offset);
        debug!(offset_x = self.state.offset.x, offset_y = self.state.offset.y, "drag committed");
        true
    }

    fn apply(&mut self, offset: Vec2) {
        self.bounds.data = live_bounds(&self.default_data, offset, self.state.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_view() -> Viewport {
        Viewport::new(400.0, Rect::new(0.0, 2.0, 2.0, 0.0))
    }

    #[test]
    fn zoom_steps_follow_current_scale() {
        let mut v = unit_view();
        assert!((v.zoom(-1.0) - 0.95).abs() < 1e-12);
        assert!((v.zoom(1.0) - 0.9975).abs() < 1e-12);
    }

    #[test]
    fn zoom_ignores_zero_and_nan() {
        let mut v = unit_view();
        v.zoom(0.0);
        v.zoom(f64::NAN);
        assert_eq!(v.state().scale, 1.0);
        assert_eq!(v.bounds().data, *v.default_data());
    }

    #[test]
    fn zoom_scales_about_center() {
        let mut v = unit_view();
        v.zoom(-1.0);
        let d = v.bounds().data;
        assert!((d.left - 0.05).abs() < 1e-12);
        assert!((d.right - 1.95).abs() < 1e-12);
        assert!((d.top - 1.95).abs() < 1e-12);
        assert!((d.bottom - 0.05).abs() < 1e-12);
    }

    #[test]
    fn drag_commits_on_release() {
        let mut v = unit_view();
        v.begin_drag(Vec2::new(200.0, 200.0));
        // 160 px right, 160 px up = one data unit on each axis
        assert!(v.drag_to(Vec2::new(360.0, 40.0)));
        assert_eq!(v.drag().delta, Vec2::new(-1.0, -1.0));
        assert_eq!(v.bounds().data, Rect::new(-1.0, 1.0, 1.0, -1.0));
        assert!(v.end_drag());
        assert_eq!(v.state().offset, Vec2::new(-1.0, -1.0));
        assert_eq!(v.drag().delta, Vec2::new(-1.0, -1.0));
        assert_eq!(v.bounds().data, Rect::new(-1.0, 1.0, 1.0, -1.0));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut v = unit_view();
        assert!(!v.end_drag());
        assert!(!v.drag_to(Vec2::new(10.0, 10.0)));
        assert_eq!(v.state(), ViewState::default());
    }
}
