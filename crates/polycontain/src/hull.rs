//! Andrew's monotone chain convex hull.
//!
//! Used by the random sampler to turn jittered point clouds into rings that
//! satisfy `ConvexPolygon`'s precondition (convex, no collinear triples).

use nalgebra::Vector2;

use crate::cfg::HULL_TURN_EPS;

/// Convex hull in counterclockwise order, starting at the lowest-x (then lowest-y) point.
///
/// Near-collinear turns (`cross <= HULL_TURN_EPS`) are dropped. Returns `None`
/// when fewer than three hull vertices remain.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if sorted.len() < 3 {
        return None;
    }
    // Each half ends on the other's first point; drop that shared endpoint.
    let mut ring = half_hull(sorted.iter());
    ring.pop();
    let mut upper = half_hull(sorted.iter().rev());
    upper.pop();
    ring.append(&mut upper);
    (ring.len() >= 3).then_some(ring)
}

/// One half of the hull: keeps only strict left turns along `sweep`.
fn half_hull<'a>(sweep: impl Iterator<Item = &'a Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut stack: Vec<Vector2<f64>> = Vec::new();
    for &p in sweep {
        while let [.., a, b] = stack.as_slice() {
            if cross(*a, *b, p) > HULL_TURN_EPS {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

/// z-component of `(b − a) × (c − a)`; positive for a left turn.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_with_interior_and_edge_points() {
        let points = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.5, 0.0], // on an edge, dropped
            vector![1.0, 1.0],
            vector![0.5, 0.5], // interior, dropped
            vector![0.0, 1.0],
        ];
        let hull = convex_hull(&points).unwrap();
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0]
            ]
        );
        assert!(crate::signed_area(&hull) > 0.0);
    }

    #[test]
    fn collinear_and_tiny_inputs_have_no_hull() {
        assert!(convex_hull(&[vector![0.0, 0.0], vector![1.0, 1.0]]).is_none());
        let line = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(convex_hull(&line).is_none());
    }
}
