// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter chart, its state machine and rendering backends.

pub mod bounds;
pub mod chart;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod load;
pub mod options;
pub mod raster;
pub mod record;
pub mod sample;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use bounds::Bounds;
pub use chart::{ChartEvent, Handled, ScatterChart, SelectionCallback};
pub use draw::{Layer, LayerTarget, Painter, Repaint};
pub use error::ChartError;
pub use geometry::{Rect, Vec2};
pub use options::ChartOptions;
pub use raster::RasterLayers;
pub use sample::Sample;
pub use style::{IconKind, MarkerStyle, StyleMap};
pub use theme::Theme;
pub use view::{ViewState, Viewport};
