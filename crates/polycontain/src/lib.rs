//! Point-in-convex-polygon containment via two y-monotone chains.
//!
//! Layout
//! - `polygon`: `ConvexPolygon`, chain derivation, side classification, the
//!   per-chain narrowing test and the top-level query.
//! - `hull`: monotone-chain convex hull (used by the sampler).
//! - `rand`: reproducible random convex polygons for tests and benchmarks.
//! - `cfg`: tolerance constants.
//!
//! Precondition policy
//! - Inputs are assumed to be simple convex polygons with a consistent vertex
//!   order (CW or CCW). Only `< 3` vertices is rejected; everything else that
//!   is degenerate (collinear, repeated vertices) yields unspecified booleans.

pub mod cfg;
pub mod hull;
pub mod polygon;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use polygon::{ConvexPolygon, PolygonError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::BOUNDARY_EPS;
    pub use crate::polygon::{
        classify_edge, classify_side, ChainSplit, ConvexPolygon, EdgeClass, PolygonError, Side,
    };
    pub use crate::rand::{draw_convex_polygon, RadialCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed shoelace area of a closed vertex ring.
/// Positive for counterclockwise order, negative for clockwise, zero if degenerate.
pub fn signed_area(vertices: &[Vec2<f64>]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn area_sign_follows_orientation() {
        let ccw = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!((signed_area(&ccw) - 2.0).abs() < 1e-12);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!((signed_area(&cw) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn area_degenerate_is_zero() {
        assert_eq!(signed_area(&[vector![0.0, 0.0], vector![1.0, 1.0]]), 0.0);
        let line = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(signed_area(&line).abs() < 1e-12);
    }
}
