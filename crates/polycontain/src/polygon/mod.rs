//! Convex polygon containment (two monotone chains + binary narrowing).
//!
//! Purpose
//! - Answer "is this point on or inside the polygon?" in O(log n) without
//!   allocating, for a vertex ring that is assumed convex and consistently ordered.
//!
//! Model
//! - Split the ring at the top (max y) and bottom (min y) vertices into a right
//!   chain (top → bottom) and a left chain (bottom → top). For clockwise rings
//!   these are the forward arcs `top..=bottom` and `bottom..=top`; for
//!   counterclockwise rings the roles swap and each arc is read backwards.
//! - Narrow each chain to the edge bracketing `p.y` and classify `p` against it.
//!   Inside iff the point is on the interior side of both edges, or on a
//!   horizontal rim edge.
//!
//! Assumptions and conventions
//! - No convexity or ordering checks; degenerate rings give unspecified booleans.
//! - The exact query compares floats without slack; `is_on_polygon_eps` widens
//!   every comparison by `eps` (horizontal slack, y snapped onto the chain range).

mod chains;
mod side;
mod types;

use nalgebra::Vector2;

use chains::{narrow, ChainKind, ChainView};

pub use chains::ChainSplit;
pub use side::{classify_edge, classify_side};
pub use types::{EdgeClass, PolygonError, Side};

/// Convex polygon given by its vertex ring (CW or CCW).
///
/// Invariants:
/// - `vertices.len() >= 3` (checked by `new`).
/// - `split` and `clockwise` are derived from `vertices` once; the polygon is
///   read-only afterwards, so it can be shared across threads freely.
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    vertices: Vec<Vector2<f64>>,
    split: ChainSplit,
    clockwise: bool,
}

impl ConvexPolygon {
    /// Build from an ordered vertex ring. Only the vertex count is checked.
    ///
    /// Orientation comes from the sign of the shoelace area; a zero area (collinear
    /// input, outside the contract) is treated as clockwise.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, PolygonError> {
        let split = match ChainSplit::of(&vertices) {
            Some(s) if vertices.len() >= 3 => s,
            _ => {
                return Err(PolygonError::TooFewVertices {
                    count: vertices.len(),
                })
            }
        };
        let clockwise = crate::signed_area(&vertices) <= 0.0;
        tracing::debug!(
            n = vertices.len(),
            top = split.top,
            bottom = split.bottom,
            clockwise,
            "convex polygon"
        );
        Ok(Self {
            vertices,
            split,
            clockwise,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Index of the first vertex with maximal y.
    #[inline]
    pub fn top(&self) -> usize {
        self.split.top
    }

    /// Index of the first vertex with minimal y.
    #[inline]
    pub fn bottom(&self) -> usize {
        self.split.bottom
    }

    /// Right boundary, ordered top → bottom.
    pub fn right_chain(&self) -> Vec<Vector2<f64>> {
        self.chain(ChainKind::Right).to_vec()
    }

    /// Left boundary, ordered bottom → top.
    pub fn left_chain(&self) -> Vec<Vector2<f64>> {
        self.chain(ChainKind::Left).to_vec()
    }

    /// True iff `p` lies inside the polygon or on its boundary (exact comparisons).
    #[inline]
    pub fn is_on_polygon(&self, p: Vector2<f64>) -> bool {
        self.query(p, 0.0)
    }

    /// Membership with slack `eps >= 0` (boundary band widened by `eps`).
    ///
    /// Use this for points that were computed to lie on the boundary, where
    /// rounding may push them a few ulps outside; `eps = 0` equals `is_on_polygon`.
    pub fn is_on_polygon_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let eps = eps.max(0.0);
        self.query(self.snap_to_y_range(p, eps), eps)
    }

    fn chain(&self, kind: ChainKind) -> ChainView<'_> {
        let n = self.vertices.len();
        let descending = self.split.top_to_bottom(n);
        let ascending = self.split.bottom_to_top(n);
        match (kind, self.clockwise) {
            (ChainKind::Right, true) => ChainView::new(&self.vertices, descending, false),
            (ChainKind::Left, true) => ChainView::new(&self.vertices, ascending, false),
            // CCW: the forward top→bottom arc runs down the left boundary.
            (ChainKind::Right, false) => ChainView::new(&self.vertices, ascending, true),
            (ChainKind::Left, false) => ChainView::new(&self.vertices, descending, true),
        }
    }

    fn query(&self, p: Vector2<f64>, eps: f64) -> bool {
        let right = narrow(&self.chain(ChainKind::Right), ChainKind::Right, p, eps);
        let left = narrow(&self.chain(ChainKind::Left), ChainKind::Left, p, eps);
        let on_rim = right.is_some_and(EdgeClass::is_rim) || left.is_some_and(EdgeClass::is_rim);
        let inside = right.is_some_and(|c| ChainKind::Right.accepts(c))
            && left.is_some_and(|c| ChainKind::Left.accepts(c));
        tracing::trace!(x = p.x, y = p.y, ?right, ?left, on_rim, inside, "query");
        inside || on_rim
    }

    /// Pull `p.y` onto `[bottom.y, top.y]` when it sits within `eps` outside.
    fn snap_to_y_range(&self, p: Vector2<f64>, eps: f64) -> Vector2<f64> {
        let top_y = self.vertices[self.split.top].y;
        let bottom_y = self.vertices[self.split.bottom].y;
        let y = if p.y > top_y && p.y <= top_y + eps {
            top_y
        } else if p.y < bottom_y && p.y >= bottom_y - eps {
            bottom_y
        } else {
            p.y
        };
        Vector2::new(p.x, y)
    }
}

impl TryFrom<Vec<Vector2<f64>>> for ConvexPolygon {
    type Error = PolygonError;

    fn try_from(vertices: Vec<Vector2<f64>>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}
