// File: crates/scatter-demo/src/main.rs
// Summary: Demo loads labeled x,y samples from CSV (or built-in clusters), replays hover/click/drag/zoom
// against a scatter chart and writes a PNG after every step.

use anyhow::Result;
use scatter_core::sample::distinct_labels;
use scatter_core::{load, theme, ChartOptions, IconKind, MarkerStyle, RasterLayers, Sample, ScatterChart, StyleMap, Vec2};
use skia_safe::Color;
use std::path::{Path, PathBuf};
use tracing::info;

const PALETTE: [(u8, u8, u8); 6] = [
    (231, 76, 60),
    (52, 152, 219),
    (46, 204, 113),
    (155, 89, 182),
    (241, 196, 15),
    (230, 126, 34),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Args: [csv path | "-"] [theme] [point|text]
    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let theme_name = args.next().unwrap_or_else(|| "light".to_string());
    let icon = match args.next().as_deref() {
        Some("text") => IconKind::Text,
        Some("point") | None => IconKind::Point,
        Some(other) => anyhow::bail!("unknown icon kind '{other}' (expected point or text)"),
    };

    let samples = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            let samples = load::samples_from_path(path)?;
            println!("Loaded {} samples from {}", samples.len(), path.display());
            samples
        }
        None => {
            let samples = builtin_samples();
            println!("Using {} built-in samples", samples.len());
            samples
        }
    };
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; expected x,y,label columns.");
    }

    let styles: StyleMap = distinct_labels(&samples)
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let (r, g, b) = PALETTE[i % PALETTE.len()];
            let glyph = label.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
            (label.to_string(), MarkerStyle::new(Color::from_rgb(r, g, b), glyph))
        })
        .collect();
    let opts = ChartOptions::default()
        .with_size(480)
        .with_axes_labels("x", "y")
        .with_icon(icon)
        .with_transparency(0.8)
        .with_theme(theme::find(&theme_name))
        .with_styles(styles);

    let mut chart = ScatterChart::with_selection_callback(samples, opts, |sel| match sel {
        Some((i, s)) => info!(index = i, label = %s.label, x = s.point.x, y = s.point.y, "selected"),
        None => info!("selection cleared"),
    })?;
    let mut layers = RasterLayers::new(chart.options().size, &chart.options().theme)?;
    let out_dir = PathBuf::from("target/out");

    chart.render_all(&mut layers)?;
    write_frame(&mut layers, &out_dir, "00_initial")?;

    // Hover and select the first sample
    let first = chart.bounds().to_pixel(chart.samples()[0].point);
    let repaint = chart.pointer_move(first);
    chart.render(repaint, &mut layers)?;
    write_frame(&mut layers, &out_dir, "01_hover")?;

    chart.pointer_down(first);
    chart.pointer_up(first);
    let repaint = chart.click();
    chart.render(repaint, &mut layers)?;
    write_frame(&mut layers, &out_dir, "02_selected")?;

    // Pan a quarter of the plot to the right and up
    let quarter = chart.options().size as f64 / 4.0;
    let start = Vec2::new(quarter * 2.0, quarter * 2.0);
    let end = Vec2::new(quarter * 3.0, quarter);
    chart.pointer_down(start);
    for step in 1..=8 {
        let t = step as f64 / 8.0;
        let repaint = chart.pointer_move(start + (end - start) * t);
        chart.render(repaint, &mut layers)?;
    }
    chart.pointer_up(end);
    if chart.click().is_empty() {
        info!("click after drag ignored");
    }
    write_frame(&mut layers, &out_dir, "03_panned")?;

    // Zoom in five notches
    for _ in 0..5 {
        let handled = chart.scroll(-1.0);
        chart.render(handled.repaint, &mut layers)?;
    }
    write_frame(&mut layers, &out_dir, "04_zoomed")?;

    let repaint = chart.pointer_leave();
    chart.render(repaint, &mut layers)?;
    write_frame(&mut layers, &out_dir, "05_left")?;

    let state = chart.view_state();
    info!(scale = state.scale, offset_x = state.offset.x, offset_y = state.offset.y, "session finished");
    Ok(())
}

fn write_frame(layers: &mut RasterLayers, dir: &Path, name: &str) -> Result<()> {
    let out = dir.join(format!("scatter_{name}.png"));
    layers.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Three deterministic clusters.
fn builtin_samples() -> Vec<Sample> {
    let centers = [("red", 1.0, 1.0), ("blue", 3.0, 2.5), ("green", 2.0, 4.0)];
    let mut out = Vec::with_capacity(centers.len() * 20);
    for (ci, &(label, cx, cy)) in centers.iter().enumerate() {
        for k in 0..20 {
            let a = (k as f64) * 2.399_963 + ci as f64;
            let r = 0.15 * ((k + 1) as f64).sqrt();
            out.push(Sample::new(cx + r * a.cos(), cy + r * a.sin(), label));
        }
    }
    out
}
