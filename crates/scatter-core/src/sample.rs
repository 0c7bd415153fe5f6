// File: crates/scatter-core/src/sample.rs
// Summary: Sample model: one labeled point in data space.

use crate::geometry::Vec2;

/// A single labeled point. Immutable once handed to a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub point: Vec2,
    /// Category key used to look up the marker style.
    pub label: String,
}

impl Sample {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { point: Vec2::new(x, y), label: label.into() }
    }
}

/// Distinct labels in first-seen order.
pub fn distinct_labels(samples: &[Sample]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for s in samples {
        if !out.contains(&s.label.as_str()) {
            out.push(&s.label);
        }
    }
    out
}
