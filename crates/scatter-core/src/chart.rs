// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart: owns viewport and selection state, handles pointer/scroll/click input
// and repaints the requested layers through a `LayerTarget`.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::bounds::{data_extent, Bounds};
use crate::draw::{draw_base, draw_overlay, Layer, LayerTarget, Painter, Repaint, Scene};
use crate::error::{ChartError, Result};
use crate::geometry::Vec2;
use crate::hit::hover_target;
use crate::options::ChartOptions;
use crate::sample::Sample;
use crate::view::{ViewState, Viewport};

/// Called with the new selection (index and sample) whenever a click is processed.
pub type SelectionCallback = Box<dyn FnMut(Option<(usize, &Sample)>)>;

/// Pointer and wheel input, in surface-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp(Vec2),
    PointerLeave,
    /// Wheel delta; positive zooms out, negative zooms in.
    Scroll(f64),
    Click,
}

/// Result of handling an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Handled {
    pub repaint: Repaint,
    /// The host must suppress its own default action (page scroll) for this event.
    pub prevent_default: bool,
}

impl From<Repaint> for Handled {
    fn from(repaint: Repaint) -> Self {
        Self { repaint, prevent_default: false }
    }
}

pub struct ScatterChart {
    samples: Arc<[Sample]>,
    options: ChartOptions,
    viewport: Viewport,
    hovered: Option<usize>,
    selected: Option<usize>,
    pointer: Option<Vec2>,
    on_selection: Option<SelectionCallback>,
}

impl ScatterChart {
    /// Build a chart over `samples`. Fails on an empty sample set or invalid options.
    pub fn new(samples: impl Into<Arc<[Sample]>>, options: ChartOptions) -> Result<Self> {
        options.validate()?;
        let samples = samples.into();
        let default_data = data_extent(&samples)?;
        debug!(
            samples = samples.len(),
            left = default_data.left,
            right = default_data.right,
            top = default_data.top,
            bottom = default_data.bottom,
            "scatter chart created"
        );
        Ok(Self {
            viewport: Viewport::new(options.size as f64, default_data),
            samples,
            options,
            hovered: None,
            selected: None,
            pointer: None,
            on_selection: None,
        })
    }

    pub fn with_selection_callback(
        samples: impl Into<Arc<[Sample]>>,
        options: ChartOptions,
        callback: impl FnMut(Option<(usize, &Sample)>) + 'static,
    ) -> Result<Self> {
        let mut chart = Self::new(samples, options)?;
        chart.set_selection_callback(callback);
        Ok(chart)
    }

    pub fn set_selection_callback(&mut self, callback: impl FnMut(Option<(usize, &Sample)>) + 'static) {
        self.on_selection = Some(Box::new(callback));
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn bounds(&self) -> &Bounds { self.viewport.bounds() }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn view_state(&self) -> ViewState { self.viewport.state() }
    pub fn hovered(&self) -> Option<usize> { self.hovered }
    pub fn selected(&self) -> Option<usize> { self.selected }
    pub fn pointer(&self) -> Option<Vec2> { self.pointer }
    pub fn is_dragging(&self) -> bool { self.viewport.is_dragging() }

    pub fn handle_event(&mut self, event: ChartEvent) -> Handled {
        match event {
            ChartEvent::PointerDown(p) => self.pointer_down(p).into(),
            ChartEvent::PointerMove(p) => self.pointer_move(p).into(),
            ChartEvent::PointerUp(p) => self.pointer_up(p).into(),
            ChartEvent::PointerLeave => self.pointer_leave().into(),
            ChartEvent::Scroll(delta) => self.scroll(delta),
            ChartEvent::Click => self.click().into(),
        }
    }

    /// Start a drag at `pixel`.
    pub fn pointer_down(&mut self, pixel: Vec2) -> Repaint {
        self.pointer = Some(pixel);
        self.viewport.begin_drag(pixel);
        Repaint::empty()
    }

    /// Pan while dragging and refresh hover in every state.
    pub fn pointer_move(&mut self, pixel: Vec2) -> Repaint {
        self.pointer = Some(pixel);
        let mut repaint = Repaint::OVERLAY;
        if self.viewport.drag_to(pixel) {
            repaint |= Repaint::BASE;
        }
        if self.update_hover(pixel) {
            repaint |= Repaint::BASE;
        }
        trace!(x = pixel.x, y = pixel.y, hovered = ?self.hovered, ?repaint, "pointer move");
        repaint
    }

    /// Commit the drag. The live bounds already reflect it, so nothing is repainted.
    pub fn pointer_up(&mut self, pixel: Vec2) -> Repaint {
        self.pointer = Some(pixel);
        self.viewport.end_drag();
        Repaint::empty()
    }

    pub fn pointer_leave(&mut self) -> Repaint {
        self.pointer = None;
        Repaint::OVERLAY
    }

    /// Zoom by one step in the direction of `delta`. Processed even mid-drag.
    pub fn scroll(&mut self, delta: f64) -> Handled {
        self.viewport.zoom(delta);
        Handled { repaint: Repaint::FULL, prevent_default: true }
    }

    /// Toggle/replace the selection with the hovered sample, or clear it when
    /// nothing is hovered. Ignored right after a drag.
    pub fn click(&mut self) -> Repaint {
        if !self.viewport.drag().delta.is_zero() {
            debug!("click suppressed after drag");
            return Repaint::empty();
        }
        self.selected = match self.hovered {
            Some(h) if self.selected == Some(h) => None,
            Some(h) => Some(h),
            None => None,
        };
        debug!(selected = ?self.selected, "selection changed");
        if let Some(cb) = self.on_selection.as_mut() {
            cb(self.selected.map(|i| (i, &self.samples[i])));
        }
        Repaint::FULL
    }

    /// Set the selection directly. Does not invoke the selection callback.
    pub fn select_sample(&mut self, index: Option<usize>) -> Result<Repaint> {
        if let Some(i) = index {
            if i >= self.samples.len() {
                return Err(ChartError::UnknownSample { index: i, len: self.samples.len() });
            }
        }
        self.selected = index;
        debug!(selected = ?self.selected, "selection set");
        Ok(Repaint::FULL)
    }

    /// Paint the layers named by `repaint`.
    pub fn render(&self, repaint: Repaint, target: &mut dyn LayerTarget) -> Result<()> {
        let scene = self.scene();
        if repaint.contains(Repaint::BASE) {
            target.paint(Layer::Base, &mut |p: &mut dyn Painter| draw_base(&scene, p))?;
        }
        if repaint.contains(Repaint::OVERLAY) {
            target.paint(Layer::Overlay, &mut |p: &mut dyn Painter| draw_overlay(&scene, p))?;
        }
        Ok(())
    }

    pub fn render_all(&self, target: &mut dyn LayerTarget) -> Result<()> {
        self.render(Repaint::FULL, target)
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            bounds: self.viewport.bounds(),
            samples: &self.samples,
            options: &self.options,
            hovered: self.hovered,
            selected: self.selected,
            pointer: self.pointer,
        }
    }

    fn update_hover(&mut self, pixel: Vec2) -> bool {
        let next = hover_target(pixel, self.viewport.bounds(), &self.samples).map(|h| h.index);
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }
}
