// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (hovered, selected and panned) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use scatter_core::{ChartOptions, MarkerStyle, RasterLayers, Sample, ScatterChart, Vec2};
use skia_safe::Color;

fn render_bytes() -> Vec<u8> {
    let samples: Vec<Sample> = (0..24)
        .map(|i| {
            let t = i as f64 * 0.4;
            Sample::new(t.cos() * (1.0 + t * 0.2), t.sin() * (1.0 + t * 0.2), if i % 3 == 0 { "a" } else { "b" })
        })
        .collect();
    let opts = ChartOptions::default()
        .with_size(320)
        .with_labels(false) // avoid text nondeterminism across platforms
        .with_transparency(0.8)
        .with_style("a", MarkerStyle::new(Color::from_argb(255, 200, 40, 40), "a"))
        .with_style("b", MarkerStyle::new(Color::from_argb(255, 40, 40, 200), "b"));
    let mut ch = ScatterChart::new(samples, opts).expect("chart");

    ch.pointer_down(Vec2::new(160.0, 160.0));
    ch.pointer_move(Vec2::new(150.0, 170.0));
    ch.pointer_up(Vec2::new(150.0, 170.0));
    ch.scroll(-1.0);
    ch.select_sample(Some(5)).expect("select");
    let target = ch.bounds().to_pixel(ch.samples()[9].point);
    ch.pointer_move(target);

    let mut layers = RasterLayers::new(320, &ch.options().theme).expect("layers");
    ch.render_all(&mut layers).expect("render");
    layers.to_png_bytes().expect("png bytes")
}

#[test]
fn golden_interactive_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("interactive_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
