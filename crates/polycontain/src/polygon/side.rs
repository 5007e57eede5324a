//! Side classification of a point against a single chain edge.
//!
//! With `d = q2 − q1`, the point's horizontal offset from the edge line at its
//! own height is `p.x − x_line = ((p.x − q1.x)·d.y − (p.y − q1.y)·d.x) / d.y`.
//! Only the sign of the numerator (flipped by the sign of `d.y`) is used, so no
//! division happens: endpoints give an exact zero, and small-integer or dyadic
//! inputs classify exactly.

use nalgebra::Vector2;

use super::types::{EdgeClass, Side};

/// Classify `p` against the line through `q1 → q2` at height `p.y`.
///
/// A horizontal edge has no dividing x; it is treated as its x-extent:
/// `Left` before it, `Right` past it, `Inline` on it.
#[inline]
pub fn classify_side(p: Vector2<f64>, q1: Vector2<f64>, q2: Vector2<f64>) -> Side {
    classify_side_eps(p, q1, q2, 0.0)
}

/// Classify `p` against one chain edge, handling horizontal edges.
///
/// Horizontal edges yield `Rim` when `p.x` lies in `[min(q1.x,q2.x), max(q1.x,q2.x)]`
/// and `Off` otherwise; the point's height is not checked here because the
/// chain narrowing only reaches a horizontal edge when `p.y` equals its y.
#[inline]
pub fn classify_edge(p: Vector2<f64>, q1: Vector2<f64>, q2: Vector2<f64>) -> EdgeClass {
    classify_edge_eps(p, q1, q2, 0.0)
}

pub(crate) fn classify_edge_eps(
    p: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
    eps: f64,
) -> EdgeClass {
    if q1.y == q2.y {
        return match extent_side(p.x, q1.x, q2.x, eps) {
            Side::Inline => EdgeClass::Rim,
            _ => EdgeClass::Off,
        };
    }
    EdgeClass::Side(classify_side_eps(p, q1, q2, eps))
}

/// `eps` is horizontal slack: `|p.x − x_line| <= eps` counts as `Inline`.
pub(crate) fn classify_side_eps(
    p: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
    eps: f64,
) -> Side {
    let d = q2 - q1;
    if d.y == 0.0 {
        return extent_side(p.x, q1.x, q2.x, eps);
    }
    if d.x == 0.0 {
        return compare(p.x - q1.x, eps);
    }
    // cross · sign(d.y) = (p.x − x_line)·|d.y|
    let cross = (p.x - q1.x) * d.y - (p.y - q1.y) * d.x;
    let offset = if d.y > 0.0 { cross } else { -cross };
    compare(offset, eps * d.y.abs())
}

#[inline]
fn compare(offset: f64, slack: f64) -> Side {
    if offset < -slack {
        Side::Left
    } else if offset > slack {
        Side::Right
    } else {
        Side::Inline
    }
}

/// Position of `x` relative to the closed interval spanned by `a` and `b`.
#[inline]
fn extent_side(x: f64, a: f64, b: f64, eps: f64) -> Side {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if x < lo - eps {
        Side::Left
    } else if x > hi + eps {
        Side::Right
    } else {
        Side::Inline
    }
}
