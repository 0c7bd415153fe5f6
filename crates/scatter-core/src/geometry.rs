// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers shared by data and pixel math.

use std::ops::{Add, Mul, Sub};

/// 2D vector / point. Used for both data-space and pixel-space coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

/// Axis-aligned rectangle described by its four edges.
///
/// The edges carry their own orientation: a data-space rect has `bottom < top`
/// (y grows upward) while a pixel-space rect has `top < bottom` (y grows
/// downward). [`remap_point`] relies on that, so never normalize a rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Signed height, `bottom - top`. Negative for data-space rects.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Move every edge by `offset`.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            right: self.right + offset.x,
            top: self.top + offset.y,
            bottom: self.bottom + offset.y,
        }
    }

    /// Scale every edge about the rect's own center: `edge <- lerp(center, edge, factor)`.
    pub fn scale_about_center(&self, factor: f64) -> Self {
        let c = self.center();
        Self {
            left: lerp(c.x, self.left, factor),
            right: lerp(c.x, self.right, factor),
            top: lerp(c.y, self.top, factor),
            bottom: lerp(c.y, self.bottom, factor),
        }
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]. Divides by zero when `a == b`; callers must make sure
/// the range is not degenerate.
#[inline]
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a)
}

/// Map `p` from `from` into `to`, axis by axis.
pub fn remap_point(from: &Rect, to: &Rect, p: Vec2) -> Vec2 {
    let tx = inv_lerp(from.left, from.right, p.x);
    let ty = inv_lerp(from.top, from.bottom, p.y);
    Vec2::new(lerp(to.left, to.right, tx), lerp(to.top, to.bottom, ty))
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Index of the point closest to `target` together with its distance.
///
/// Ties resolve to the lowest index, so coincident points always report the
/// first one. Returns `None` for an empty slice.
pub fn nearest(target: Vec2, points: &[Vec2]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in points.iter().enumerate() {
        let d = distance(target, p);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

/// Fixed-point formatting, no localization.
pub fn format_number(n: f64, decimals: usize) -> String {
    format!("{n:.decimals$}")
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
