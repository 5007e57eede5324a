//! Render an ASCII containment grid for the flat-top octagon.
//!
//! Usage:
//!   cargo run -p polycontain --example scan_grid
//!   Pass `ccw` to feed the same octagon counterclockwise:
//!   cargo run -p polycontain --example scan_grid -- ccw
//!
//! `#` marks points on or inside the polygon, `.` points outside.

use nalgebra::Vector2;
use polycontain::ConvexPolygon;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default().with_target(false).init();
    let ccw = std::env::args().nth(1).is_some_and(|a| a == "ccw");
    let mut ring = vec![
        Vector2::new(-2.0, 5.0),
        Vector2::new(2.0, 5.0),
        Vector2::new(4.0, 2.0),
        Vector2::new(3.0, -1.0),
        Vector2::new(2.0, -4.0),
        Vector2::new(-1.0, -5.0),
        Vector2::new(-3.0, -2.0),
        Vector2::new(-3.0, 2.0),
    ];
    if ccw {
        ring.reverse();
    }
    let poly = match ConvexPolygon::new(ring) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("scan_grid: {e}");
            return;
        }
    };
    tracing::info!(n = poly.len(), clockwise = poly.is_clockwise(), "scan");
    let mut inside = 0usize;
    for j in (-12..=12).rev() {
        let y = j as f64 * 0.5;
        let row: String = (-10..=10)
            .map(|i| {
                let p = Vector2::new(i as f64 * 0.5, y);
                if poly.is_on_polygon(p) {
                    inside += 1;
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{y:>5.1} {row}");
    }
    tracing::info!(inside, "done");
}
