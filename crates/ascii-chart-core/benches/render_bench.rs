use ascii_chart_core::{Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let mut data = Vec::with_capacity(n);
    let mut stamps = Vec::with_capacity(n);
    for i in 0..n {
        data.push((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001) + 100.0);
        stamps.push(format!("2024-01-01 {:02}:{:02}:00", (i / 60) % 24, i % 60));
    }
    Chart::new(Series::new(data).with_labels(stamps))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_to_string");
    for &n in &[100usize, 10_000usize] {
        group.bench_function(format!("samples_{n}"), |b| {
            let ch = build_chart(n);
            let opts = RenderOptions::default();
            b.iter(|| black_box(ch.render_to_string(&opts)));
        });
    }
    for &(w, h) in &[(80usize, 20usize), (240, 60)] {
        group.bench_function(format!("grid_{w}x{h}"), |b| {
            let ch = build_chart(500);
            let opts = RenderOptions::new(w, h);
            b.iter(|| black_box(ch.render_to_string(&opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
