//! Classification results and the constructor error.
//!
//! - `Side`: where a point sits relative to an edge's line at its own height.
//! - `EdgeClass`: `Side` plus the horizontal-edge outcomes (`Rim`, `Off`).
//! - `PolygonError`: the single precondition the constructor enforces.

use std::fmt;

/// Horizontal position of a point relative to a non-horizontal edge line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Inline,
}

/// Outcome of classifying a point against one chain edge.
///
/// Horizontal edges have no left/right split: the point either lies on the
/// edge's x-extent (`Rim`, i.e. on the polygon's top or bottom boundary) or
/// it does not (`Off`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    Side(Side),
    Rim,
    Off,
}

impl EdgeClass {
    #[inline]
    pub fn is_rim(self) -> bool {
        matches!(self, EdgeClass::Rim)
    }
}

/// Errors surfaced by `ConvexPolygon::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon needs at least three vertices.
    TooFewVertices { count: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewVertices { count } => {
                write!(f, "convex polygon needs at least 3 vertices (got {count})")
            }
        }
    }
}

impl std::error::Error for PolygonError {}
