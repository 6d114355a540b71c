// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for strip hit testing and gesture-session throughput.
//!
//! The hit tester runs on every pointer move, so its cost bounds how cheap a
//! drag across the strip can be. The synthetic strips mirror common reaction
//! counts (a handful of icons) plus a deliberately oversized one.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use overreact_config::{Reaction, ReactionsConfig, ReactionsConfigBuilder};
use overreact_gesture::GestureTracker;
use overreact_strip::{StripLayout, StripMetrics};

fn config(n: u32) -> ReactionsConfig<u32> {
    ReactionsConfigBuilder::new((0..n).map(Reaction::new))
        .reaction_size(40.0)
        .horizontal_margin(16.0)
        .build()
        .expect("valid")
}

fn layout(n: u32) -> StripLayout {
    StripMetrics::new(&config(n)).layout(Point::ZERO)
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for n in [3_u32, 6, 16] {
        let layout = layout(n);
        let inside = layout.rects()[(n as usize) / 2].center();
        let in_gap = Point::new(layout.rects()[0].x1 + 1.0, inside.y);
        let outside = Point::new(-100.0, -100.0);

        group.bench_function(format!("inside/{n}"), |b| {
            b.iter(|| black_box(layout.locate(black_box(inside))));
        });
        group.bench_function(format!("gap/{n}"), |b| {
            b.iter(|| black_box(layout.locate(black_box(in_gap))));
        });
        group.bench_function(format!("outside/{n}"), |b| {
            b.iter(|| black_box(layout.locate(black_box(outside))));
        });
    }
    group.finish();
}

fn bench_gesture_sweep(c: &mut Criterion) {
    // A full session: press, sweep across the whole strip, release.
    let layout = layout(6);
    let y = layout.rects()[0].center().y;
    let xs: Vec<f64> = (0..64)
        .map(|i| {
            let t = f64::from(i) / 63.0;
            layout.bounds().x0 + t * layout.bounds().width()
        })
        .collect();

    c.bench_function("gesture_sweep/6x64", |b| {
        b.iter_batched(
            GestureTracker::new,
            |mut tracker| {
                tracker.on_down();
                for &x in &xs {
                    let hit = layout.locate(Point::new(x, y));
                    black_box(tracker.on_move(hit));
                }
                black_box(tracker.on_up(layout.locate(Point::new(xs[63], y))))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_locate, bench_gesture_sweep);
criterion_main!(benches);
