// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

//! Linear predicate scan versus an `rstar` envelope prefilter followed by the
//! same predicate.

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Line, Point, Rect};
use linemark_geom::{intersects, segment_bounds};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

type Entry = GeomWithData<Rectangle<[f64; 2]>, usize>;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_short_lines(count: usize, extent: f64, max_len: f64) -> Vec<Line> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    (0..count)
        .map(|_| {
            let p0 = Point::new(rng.next_f64() * extent, rng.next_f64() * extent);
            let d = (rng.next_f64() - 0.5) * max_len;
            let e = (rng.next_f64() - 0.5) * max_len;
            Line::new(p0, Point::new(p0.x + d, p0.y + e))
        })
        .collect()
}

fn to_entries(lines: &[Line]) -> Vec<Entry> {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let b = segment_bounds(*l);
            GeomWithData::new(Rectangle::from_corners([b.x0, b.y0], [b.x1, b.y1]), i)
        })
        .collect()
}

fn bench_prefilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_prefilter_compare");
    let query = Rect::new(400.0, 400.0, 600.0, 700.0);
    for &n in &[10_000usize, 100_000] {
        let lines = gen_short_lines(n, 2000.0, 40.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                lines
                    .iter()
                    .filter(|l| intersects(**l, black_box(query)))
                    .count()
            });
        });

        let tree = RTree::bulk_load(to_entries(&lines));
        group.bench_function(format!("rstar_prefilter_query_n{}", n), |b| {
            let env = AABB::from_corners([query.x0, query.y0], [query.x1, query.y1]);
            b.iter(|| {
                tree.locate_in_envelope_intersecting(&black_box(env))
                    .filter(|e| intersects(lines[e.data], query))
                    .count()
            });
        });

        group.bench_function(format!("rstar_build_n{}", n), |b| {
            b.iter_batched(
                || to_entries(&lines),
                |entries| black_box(RTree::bulk_load(entries).size()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prefilter);
criterion_main!(benches);
