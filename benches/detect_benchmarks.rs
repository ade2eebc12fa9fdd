use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use viola_jones::objdetect::cascades;
use viola_jones::objdetect::{detect, Cascade, DetectionParams};

fn solid_rgba(width: u32, height: u32, value: u8) -> Vec<u8> {
    vec![value; 4 * width as usize * height as usize]
}

/// Surfaces the detector's `log::debug!`/`log::trace!` diagnostics when run
/// with `RUST_LOG=debug`; harmless no-op otherwise.
fn init_logging() {
    let _ = env_logger::try_init();
}

fn bench_detect_by_image_size(c: &mut Criterion) {
    init_logging();
    let cascade = Cascade::new(cascades::FACE).unwrap();
    let params = DetectionParams::default();

    let mut group = c.benchmark_group("detect_by_image_size");
    for &size in &[128u32, 256, 512] {
        let pixels = solid_rgba(size, size, 160);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| detect(black_box(&pixels), size, size, &cascade, &params).unwrap());
        });
    }
    group.finish();
}

fn bench_detect_edge_pruning(c: &mut Criterion) {
    let cascade = Cascade::new(cascades::FACE).unwrap();
    let pixels = solid_rgba(256, 256, 160);

    let mut with_pruning = DetectionParams::default();
    with_pruning.edges_density = 0.2;

    let mut without_pruning = DetectionParams::default();
    without_pruning.edges_density = 0.0;

    let mut group = c.benchmark_group("detect_edge_pruning");
    group.bench_function("with_pruning", |b| {
        b.iter(|| detect(black_box(&pixels), 256, 256, &cascade, &with_pruning).unwrap());
    });
    group.bench_function("without_pruning", |b| {
        b.iter(|| detect(black_box(&pixels), 256, 256, &cascade, &without_pruning).unwrap());
    });
    group.finish();
}

fn bench_detect_scale_factor(c: &mut Criterion) {
    let cascade = Cascade::new(cascades::FACE).unwrap();
    let pixels = solid_rgba(256, 256, 160);

    let mut group = c.benchmark_group("detect_scale_factor");
    for &scale_factor in &[1.1, 1.25, 1.5] {
        let mut params = DetectionParams::default();
        params.scale_factor = scale_factor;
        group.bench_with_input(
            BenchmarkId::from_parameter(scale_factor),
            &scale_factor,
            |b, _| {
                b.iter(|| detect(black_box(&pixels), 256, 256, &cascade, &params).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_detect_by_image_size,
    bench_detect_edge_pruning,
    bench_detect_scale_factor
);
criterion_main!(benches);
