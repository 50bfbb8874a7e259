// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use pictureframe_viewport::{
    Anchor, ImageSize, PixelSize, PointerButton, ViewportController, ViewportEvent,
};

fn fitted(surface: PixelSize, image: (u32, u32)) -> ViewportController {
    let image = ImageSize::new(image.0, image.1).expect("non-zero image");
    ViewportController::with_image(surface, image)
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/wheel_zoom");
    let surface = PixelSize::new(1920, 1080);

    for steps in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter_batched(
                || fitted(surface, (6000, 4000)),
                |mut view| {
                    for i in 0..steps {
                        // Sweep the pointer across the surface while zooming in and out.
                        let position = Point::new((i * 37 % 1920) as f64, (i * 23 % 1080) as f64);
                        let delta = if (i / 8) % 2 == 0 { -1.0 } else { 1.0 };
                        black_box(view.handle(ViewportEvent::Wheel { delta, position }));
                    }
                    black_box(view);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drag_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/drag_pan");
    let surface = PixelSize::new(1280, 720);

    for moves in [64usize, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter_batched(
                || {
                    let mut view = fitted(surface, (8000, 6000));
                    view.original();
                    let _ = view.take_response();
                    view
                },
                |mut view| {
                    let _ = view.handle(ViewportEvent::PointerDown {
                        position: Point::new(640.0, 360.0),
                        button: PointerButton::Primary,
                    });
                    for i in 0..moves {
                        let t = i as f64 * 0.05;
                        let position = Point::new(640.0 + 300.0 * t.sin(), 360.0 + 200.0 * t.cos());
                        black_box(view.handle(ViewportEvent::PointerDrag { position }));
                    }
                    black_box(view);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/resize");

    // Fitted views re-fit on every resize; zoomed views re-clamp around the center.
    for (name, zoomed) in [("fitted", false), ("zoomed", true)] {
        group.bench_function(name, |b| {
            let mut view = fitted(PixelSize::new(800, 600), (4000, 3000));
            if zoomed {
                view.apply_zoom(2.0, Anchor::Center);
            }
            let mut i = 0_u32;
            b.iter(|| {
                i = i.wrapping_add(1);
                view.set_surface_size(PixelSize::new(600 + i % 640, 400 + i % 480));
                black_box(view.take_response());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wheel_zoom, bench_drag_pan, bench_resize);
criterion_main!(benches);
