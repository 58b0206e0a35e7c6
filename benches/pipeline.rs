//! Benchmarks for the asset pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use duck_assets::assets::{allies, backgrounds, portraits};
use duck_assets::{composite_over, gaussian_blur, Canvas, Colour, Rect};

fn sky(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height, false);
    canvas.vertical_gradient(
        Rect::new(0, 0, width as i32 - 1, height as i32 - 1),
        Colour::rgb(12, 8, 40),
        Colour::rgb(30, 15, 60),
    );
    canvas
}

// -- Canvas effects --

fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects");

    group.bench_function("gradient_1024x576", |b| b.iter(|| sky(black_box(1024), black_box(576))));

    let base = sky(1024, 576);
    let tint = Canvas::filled(1024, 576, true, Colour::new(123, 47, 247, 60));
    group.bench_function("composite_1024x576", |b| {
        b.iter(|| composite_over(black_box(&base), black_box(&tint)))
    });

    group.bench_function("blur_1024x576", |b| b.iter(|| gaussian_blur(black_box(&base), 1.0)));

    group.finish();
}

// -- Whole generators --

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");
    group.sample_size(20);

    group.bench_function("portrait_darkwing", |b| b.iter(portraits::darkwing));
    group.bench_function("portrait_morgana", |b| b.iter(allies::morgana));
    group.bench_function("title_bg", |b| b.iter(backgrounds::title_bg));

    group.finish();
}

// -- Encoding --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let portrait = portraits::negaduck();
    group.bench_function("png_256x256", |b| b.iter(|| black_box(&portrait).encode_png().unwrap()));

    group.finish();
}

criterion_group!(benches, bench_effects, bench_generators, bench_encoding);
criterion_main!(benches);
