// File: crates/scatter-window-demo/src/main.rs
// Summary: Interactive windowed demo: winit pointer/wheel input drives ScatterChart, layers are repainted
// on demand and the composited RGBA frame is blitted through softbuffer.

use anyhow::{Context, Result};
use scatter_core::sample::distinct_labels;
use scatter_core::{load, theme, ChartEvent, ChartOptions, MarkerStyle, RasterLayers, Repaint, Sample, ScatterChart, Vec2};
use skia_safe::Color;
use std::num::NonZeroU32;
use tracing::{debug, error, info};
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const PALETTE: [(u8, u8, u8); 4] = [(231, 76, 60), (52, 152, 219), (46, 204, 113), (155, 89, 182)];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Args: [csv path | "-"] [theme]
    let mut args = std::env::args().skip(1);
    let samples = match args.next().filter(|a| a != "-") {
        Some(raw) => load::samples_from_path(&raw)?,
        None => spiral_samples(),
    };
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));

    let mut opts = ChartOptions::default().with_size(640).with_transparency(0.85).with_theme(theme);
    for (i, label) in distinct_labels(&samples).into_iter().enumerate() {
        let (r, g, b) = PALETTE[i % PALETTE.len()];
        opts = opts.with_style(label, MarkerStyle::new(Color::from_rgb(r, g, b), label));
    }
    let size = opts.size;

    let mut chart = ScatterChart::with_selection_callback(samples, opts, |sel| match sel {
        Some((i, s)) => info!(index = i, label = %s.label, x = s.point.x, y = s.point.y, "selected"),
        None => info!("selection cleared"),
    })?;
    let mut layers = RasterLayers::new(size, &chart.options().theme)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Constellation Scatter")
        .with_inner_size(winit::dpi::PhysicalSize::new(size, size))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    // last known pointer position, kept after the cursor leaves so a release
    // outside the window still ends the drag
    let mut last_pos = Vec2::ZERO;
    let mut over_surface = false;
    let mut pending = Repaint::FULL;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let input = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    None
                }
                WindowEvent::CursorMoved { position, .. } => {
                    last_pos = Vec2::new(position.x, position.y);
                    over_surface = true;
                    Some(vec![ChartEvent::PointerMove(last_pos)])
                }
                WindowEvent::CursorLeft { .. } => {
                    over_surface = false;
                    Some(vec![ChartEvent::PointerLeave])
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                    ElementState::Pressed if over_surface => Some(vec![ChartEvent::PointerDown(last_pos)]),
                    ElementState::Pressed => None,
                    // a release over the surface is also a click
                    ElementState::Released if over_surface => {
                        Some(vec![ChartEvent::PointerUp(last_pos), ChartEvent::Click])
                    }
                    ElementState::Released => Some(vec![ChartEvent::PointerUp(last_pos)]),
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports wheel-up as positive; the chart zooms out on positive deltas
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -(y as f64),
                        MouseScrollDelta::PixelDelta(p) => -p.y,
                    };
                    Some(vec![ChartEvent::Scroll(dy)])
                }
                _ => None,
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&chart, &mut layers, &mut surface, pending) {
                    error!("redraw failed: {e:#}");
                }
                pending = Repaint::empty();
                None
            }
            _ => None,
        };

        for ev in input.into_iter().flatten() {
            let handled = chart.handle_event(ev);
            debug!(?ev, repaint = ?handled.repaint, "event");
            pending |= handled.repaint;
        }
        if !pending.is_empty() {
            window.request_redraw();
        }
    });
}

/// Repaint the dirty layers, compose and blit into the window surface.
fn present(
    chart: &ScatterChart,
    layers: &mut RasterLayers,
    surface: &mut softbuffer::Surface,
    repaint: Repaint,
) -> Result<()> {
    chart.render(repaint, layers)?;
    let (rgba, w, h, _) = layers.to_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer expects 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

/// Two interleaved spiral arms.
fn spiral_samples() -> Vec<Sample> {
    (0..120)
        .map(|i| {
            let arm = i % 2;
            let t = (i / 2) as f64 * 0.2;
            let phase = arm as f64 * std::f64::consts::PI;
            let label = if arm == 0 { "inner" } else { "outer" };
            Sample::new(t * (t + phase).cos(), t * (t + phase).sin(), label)
        })
        .collect()
}
