// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw a triangle point by point, then drag a marquee over it.
//!
//! Prints the selection events produced at each pointer move.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p linemark_demos --example marquee_drag`

use kurbo::Point;
use linemark_select::{Canvas, DrawingMode, SelectionEvent};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut canvas = Canvas::new();

    // Triangle with its base at the top, closed with a final segment.
    for p in [(100.0, 400.0), (400.0, 400.0), (250.0, 600.0)] {
        canvas
            .place_point(Point::from(p))
            .expect("distinct points in placing mode");
    }
    let _ = canvas.close_shape().expect("placing mode");
    tracing::info!(lines = canvas.lines().len(), "triangle drawn");
    println!("== Lines ==");
    for (id, line) in canvas.lines().iter() {
        println!("  {:?}: {:?} -> {:?}", id, line.p0, line.p1);
    }

    canvas.set_mode(DrawingMode::Selecting);
    canvas
        .begin_selection(Point::new(150.0, 100.0))
        .expect("selecting mode");

    for corner in [(300.0, 300.0), (300.0, 450.0), (700.0, 700.0), (700.0, 700.0)] {
        let events = canvas.drag_to(Point::from(corner));
        println!(
            "== Drag to {:?} (rect {:?}) ==\n  {:?}",
            corner,
            canvas.selection_rect(),
            events
        );
    }
    assert_eq!(canvas.selection().len(), 3);

    let released = canvas.end_selection();
    println!("== Release ==\n  {:?}", released);
    assert!(released.iter().all(|e| matches!(e, SelectionEvent::Removed(_))));
    assert!(canvas.selection().is_empty());
}
