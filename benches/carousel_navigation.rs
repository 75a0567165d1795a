// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation.
//!
//! Measures the performance of:
//! - Planning and committing a single step
//! - A full lap around the roster in each direction
//! - Rejected clicks while a transition is in flight

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use timeright_reel::application::CarouselNavigator;
use timeright_reel::domain::carousel::SurfaceBounds;

const SURFACE: f32 = 1440.0;

fn bounds() -> SurfaceBounds {
    SurfaceBounds::from_width(SURFACE)
}

/// Benchmark a plan/commit cycle in both directions.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    for (name, x) in [("step_forward", SURFACE - 1.0), ("step_backward", 1.0)] {
        group.bench_function(name, |b| {
            let mut navigator = CarouselNavigator::new((0..8).collect::<Vec<u32>>());
            b.iter(|| {
                if let Some(plan) = navigator.on_interact(black_box(x), bounds()).plan().copied() {
                    let _ = black_box(navigator.complete_transition(&plan));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark a full lap for several roster sizes.
fn bench_full_lap(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_lap");

    for len in [2usize, 8, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut navigator = CarouselNavigator::new((0..len).collect::<Vec<_>>());
                for _ in 0..len {
                    if let Some(plan) = navigator.on_interact(SURFACE, bounds()).plan().copied() {
                        let _ = navigator.complete_transition(&plan);
                    }
                }
                black_box(navigator.state().copied());
            });
        });
    }

    group.finish();
}

/// Benchmark the lock path: clicks swallowed during an animation.
fn bench_swallowed_clicks(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let mut navigator = CarouselNavigator::new((0..8).collect::<Vec<u32>>());
    let _ = navigator.on_interact(SURFACE, bounds());

    group.bench_function("swallowed_click", |b| {
        b.iter(|| black_box(navigator.on_interact(black_box(10.0), bounds())));
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_full_lap, bench_swallowed_clicks);
criterion_main!(benches);
