// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Line, Rect, Size};
use linemark_geom::{intersects, intersects_exact};
use linemark_select::generate::{ShapeConfig, ShapeGenerator};
use linemark_select::{LineStore, Marquee, SelectionTracker};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn gen_lines(count: usize, seed: u64) -> Vec<Line> {
    let generator = ShapeGenerator::new(ShapeConfig {
        canvas: Size::new(2000.0, 2000.0),
        ..Default::default()
    })
    .expect("valid config");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        out.extend(generator.shape(&mut rng));
    }
    out.truncate(count);
    out
}

fn bench_predicates(c: &mut Criterion) {
    let lines = gen_lines(10_000, 0xCAFE_F00D_DEAD_BEEF);
    let rect = Rect::new(500.0, 500.0, 1300.0, 1100.0);
    let mut group = c.benchmark_group("predicate");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("intersects", |b| {
        b.iter(|| {
            lines
                .iter()
                .filter(|l| intersects(black_box(**l), black_box(rect)))
                .count()
        });
    });
    group.bench_function("intersects_exact", |b| {
        b.iter(|| {
            lines
                .iter()
                .filter(|l| intersects_exact(black_box(**l), black_box(rect)))
                .count()
        });
    });
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_drag");
    for &n in &[1_000usize, 10_000] {
        let mut store = LineStore::new();
        let _ = store.extend(gen_lines(n, 0xBADC_F00D_1234_5678));
        // 32 pointer moves growing the marquee diagonally across the canvas.
        let steps: Vec<_> = (1..=32_u32).map(|i| f64::from(i) * 60.0).collect();
        group.throughput(Throughput::Elements((n * steps.len()) as u64));
        group.bench_function(format!("drag_n{}", n), |b| {
            b.iter_batched(
                SelectionTracker::new,
                |mut tracker| {
                    let mut m = Marquee::new((10.0, 10.0).into());
                    let mut changes = 0;
                    for &s in &steps {
                        m.drag_to((s, s).into());
                        changes += tracker.update(m.rect(), store.iter()).len();
                    }
                    changes += tracker.clear().len();
                    black_box(changes)
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("repeat_same_rect_n{}", n), |b| {
            let rect = Rect::new(200.0, 200.0, 1200.0, 1200.0);
            let mut tracker = SelectionTracker::new();
            let _ = tracker.update(rect, store.iter());
            b.iter(|| black_box(tracker.update(rect, store.iter()).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predicates, bench_drag);
criterion_main!(benches);
