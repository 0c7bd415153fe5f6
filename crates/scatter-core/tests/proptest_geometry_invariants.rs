// File: crates/scatter-core/tests/proptest_geometry_invariants.rs
// Purpose: Property-based invariants for the coordinate mapping, zoom clamping and hover resolution.
//
// 1. Remapping a rect onto itself is the identity.
// 2. Remapping there and back returns the original point.
// 3. Zoom scale stays within its limits for any scroll sequence.
// 4. Nearest-point ties resolve to the lowest index.
// 5. A pointer exactly on a sample always hovers it (or an earlier coincident one).
// 6. Dragging out and back leaves the offset where it started.

use proptest::prelude::*;
use scatter_core::geometry::{nearest, remap_point};
use scatter_core::{ChartOptions, Rect, Sample, ScatterChart, Vec2};

// ── Helpers ─────────────────────────────────────────────────────────────

fn span_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e4f64..1.0e4, 1.0e-2f64..1.0e4).prop_map(|(start, len)| (start, start + len))
}

/// Rects with non-zero spans, in either orientation per axis.
fn rect_strategy() -> impl Strategy<Value = Rect> {
    (span_strategy(), span_strategy(), any::<bool>(), any::<bool>()).prop_map(|((l, r), (b, t), flip_x, flip_y)| {
        let (left, right) = if flip_x { (r, l) } else { (l, r) };
        let (top, bottom) = if flip_y { (b, t) } else { (t, b) };
        Rect::new(left, right, top, bottom)
    })
}

fn point_strategy() -> impl Strategy<Value = Vec2> {
    (-1.0e4f64..1.0e4, -1.0e4f64..1.0e4).prop_map(|(x, y)| Vec2::new(x, y))
}

fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..40).prop_map(|pts| {
        pts.into_iter()
            .enumerate()
            .map(|(i, (x, y))| Sample::new(x, y, if i % 2 == 0 { "even" } else { "odd" }))
            .collect()
    })
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-9 * scale.max(1.0)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Identity remap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remap_onto_self_is_identity(r in rect_strategy(), p in point_strategy()) {
        let q = remap_point(&r, &r, p);
        prop_assert!(close(q.x, p.x, 1.0e4), "x drifted: {:?} -> {:?}", p, q);
        prop_assert!(close(q.y, p.y, 1.0e4), "y drifted: {:?} -> {:?}", p, q);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remap_round_trip(a in rect_strategy(), b in rect_strategy(), p in point_strategy()) {
        let there = remap_point(&a, &b, p);
        let back = remap_point(&b, &a, there);
        // error grows with the span ratio between the two rects
        let ratio = (a.width().abs() / b.width().abs()).max(a.height().abs() / b.height().abs()).max(1.0);
        let tol = 1.0e-7 * ratio * 1.0e4;
        prop_assert!((back.x - p.x).abs() <= tol, "x: {:?} -> {:?} -> {:?}", p, there, back);
        prop_assert!((back.y - p.y).abs() <= tol, "y: {:?} -> {:?} -> {:?}", p, there, back);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Zoom clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scale_stays_clamped(deltas in prop::collection::vec(prop_oneof![Just(-1.0f64), Just(1.0), -50.0f64..50.0], 0..400)) {
        let samples = vec![Sample::new(0.0, 0.0, "a"), Sample::new(1.0, 1.0, "a")];
        let mut chart = ScatterChart::new(samples, ChartOptions::default()).unwrap();
        for d in deltas {
            chart.scroll(d);
            let s = chart.view_state().scale;
            prop_assert!((0.01..=3.0).contains(&s), "scale {} escaped after delta {}", s, d);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Tie-break
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nearest_ties_pick_first(points in prop::collection::vec(point_strategy(), 1..30), dup in any::<prop::sample::Index>(), target in point_strategy()) {
        let mut pts = points;
        let i = dup.index(pts.len());
        pts.push(pts[i]);
        let (idx, d) = nearest(target, &pts).unwrap();
        prop_assert!(idx < pts.len() - 1, "duplicate at the tail must never win");
        for (j, p) in pts.iter().enumerate().take(idx) {
            let dj = (p.x - target.x).hypot(p.y - target.y);
            prop_assert!(dj > d, "earlier index {} is as close ({} <= {})", j, dj, d);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Exact hover
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pointer_on_sample_hovers_it(samples in samples_strategy(), pick in any::<prop::sample::Index>()) {
        let i = pick.index(samples.len());
        let mut chart = ScatterChart::new(samples.clone(), ChartOptions::default()).unwrap();
        let pixel = chart.bounds().to_pixel(samples[i].point);
        chart.pointer_move(pixel);
        let hovered = chart.hovered();
        prop_assert!(hovered.is_some(), "nothing hovered at {:?}", pixel);
        prop_assert!(hovered.unwrap() <= i);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Drag out and back
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_there_and_back_restores_offset(a in (0.0f64..400.0, 0.0f64..400.0), b in (0.0f64..400.0, 0.0f64..400.0), zoom in -20i32..20) {
        let samples = vec![Sample::new(-3.0, 2.0, "a"), Sample::new(5.0, 9.0, "a")];
        let mut chart = ScatterChart::new(samples, ChartOptions::default()).unwrap();
        for _ in 0..zoom.unsigned_abs() {
            chart.scroll(f64::from(zoom.signum()));
        }
        let (a, b) = (Vec2::new(a.0, a.1), Vec2::new(b.0, b.1));
        chart.pointer_down(a);
        chart.pointer_move(b);
        chart.pointer_up(b);
        chart.pointer_down(b);
        chart.pointer_move(a);
        chart.pointer_up(a);
        let off = chart.view_state().offset;
        prop_assert!(off.x.abs() < 1e-9 && off.y.abs() < 1e-9, "offset drifted to {:?}", off);
    }
}
