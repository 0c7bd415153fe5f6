// File: crates/scatter-core/src/types.rs
// Summary: Shared constants (surface size, margins, zoom limits, marker sizes).

/// Default square surface edge, in pixels.
pub const DEFAULT_SIZE: u32 = 400;

/// Margin band reserved for axis chrome, as a fraction of the surface edge.
pub const MARGIN_RATIO: f64 = 0.1;

/// Multiplicative zoom step per scroll event, relative to the current scale.
pub const ZOOM_STEP: f64 = 0.05;
/// Smallest allowed scale (most zoomed in).
pub const MIN_SCALE: f64 = 0.01;
/// Largest allowed scale (most zoomed out).
pub const MAX_SCALE: f64 = 3.0;

/// Diameter of a `Point` marker, in pixels.
pub const POINT_MARKER_SIZE: f64 = 8.0;
/// Font size used for `Text` markers.
pub const GLYPH_MARKER_SIZE: f64 = 26.0;

/// Axis name font size, as a fraction of the margin.
pub const AXIS_NAME_RATIO: f64 = 0.6;
/// Corner min/max value font size, as a fraction of the margin.
pub const AXIS_VALUE_RATIO: f64 = 0.3;
/// Dash pattern of the axis frame (on, off).
pub const AXIS_DASH: [f64; 2] = [5.0, 4.0];
pub const AXIS_LINE_WIDTH: f64 = 2.0;

/// Decimals shown in axis corner labels and the pointer readout.
pub const READOUT_DECIMALS: usize = 2;
