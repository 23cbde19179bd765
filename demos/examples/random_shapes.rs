// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate random shapes on worker threads, merge them into a canvas while a
//! marquee drag is active, and report the selection changes.
//!
//! Generation is independent per thread; merging into the canvas happens on
//! the main thread, one batch at a time.
//!
//! Run:
//! - `RUST_LOG=linemark_select=debug cargo run -p linemark_demos --example random_shapes`

use std::thread;

use kurbo::{Point, Size};
use linemark_geom::intersects_exact;
use linemark_select::generate::{ShapeConfig, ShapeGenerator};
use linemark_select::{Canvas, DrawingMode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

const WORKERS: u64 = 4;
const SHAPES_PER_WORKER: usize = 25;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let generator = ShapeGenerator::new(ShapeConfig {
        canvas: Size::new(1024.0, 768.0),
        ..Default::default()
    })
    .expect("valid shape config");

    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Selecting);
    canvas
        .begin_selection(Point::new(200.0, 150.0))
        .expect("selecting mode");
    let _ = canvas.drag_to(Point::new(600.0, 500.0));

    let handles: Vec<_> = (0..WORKERS)
        .map(|seed| {
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                generator.batch(&mut rng, SHAPES_PER_WORKER)
            })
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let lines = handle.join().expect("generator thread panicked");
        let (ids, events) = canvas.add_lines(lines);
        println!(
            "worker {worker}: merged {} lines, {} newly selected",
            ids.len(),
            events.iter().filter(|e| e.is_selected()).count()
        );
    }

    let rect = canvas.selection_rect().expect("drag in progress");
    let clipped = canvas
        .lines()
        .iter()
        .filter(|(_, l)| intersects_exact(*l, rect))
        .count();
    println!(
        "{} of {} lines selected by {:?} ({} by clipping)",
        canvas.selection().len(),
        canvas.lines().len(),
        rect,
        clipped
    );

    let cleared = canvas.clear();
    println!("cleared canvas, {} lines deselected", cleared.len());
}
