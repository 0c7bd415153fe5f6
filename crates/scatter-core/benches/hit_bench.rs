use criterion::{criterion_group, criterion_main, Criterion, black_box};
use scatter_core::hit::hover_target;
use scatter_core::{ChartOptions, Sample, ScatterChart, Vec2};

fn build_chart(n: usize) -> ScatterChart {
    let samples: Vec<Sample> = (0..n)
        .map(|i| {
            let x = (i as f64 * 0.618_033_988_75).fract();
            let y = (i as f64 * 0.414_213_562_37).fract();
            Sample::new(x, y, "s")
        })
        .collect();
    ScatterChart::new(samples, ChartOptions::default().with_size(800)).expect("chart")
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_target");
    for &n in &[10_000usize, 100_000usize] {
        let ch = build_chart(n);
        group.bench_function(format!("scan_{n}"), |b| {
            let pointer = Vec2::new(412.0, 377.0);
            b.iter(|| black_box(hover_target(black_box(pointer), ch.bounds(), ch.samples())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hover);
criterion_main!(benches);
