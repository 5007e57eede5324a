//! Monotone chain split and the per-chain narrowing test.
//!
//! A chain is a borrowed arc of the vertex ring (`ChainView`), optionally read
//! backwards, so queries never copy vertices. The narrowing walks an inclusive
//! index range `[lo, hi]` exactly like a recursive halving on `c[..=mid]` /
//! `c[mid..]` would, until a single edge brackets the point's height.

use nalgebra::Vector2;

use super::side::classify_edge_eps;
use super::types::{EdgeClass, Side};

/// Indices of the top (max y) and bottom (min y) vertices.
///
/// Ties keep the first occurrence in vertex order: a later vertex replaces the
/// current extreme only when strictly greater (top) or strictly less (bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainSplit {
    pub top: usize,
    pub bottom: usize,
}

impl ChainSplit {
    /// Scan `vertices` once; `None` for an empty slice.
    pub fn of(vertices: &[Vector2<f64>]) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        let mut top = 0usize;
        let mut bottom = 0usize;
        for (i, v) in vertices.iter().enumerate() {
            if v.y > vertices[top].y {
                top = i;
            } else if v.y < vertices[bottom].y {
                bottom = i;
            }
        }
        Some(Self { top, bottom })
    }

    /// Span from `top` forward to `bottom` (wrapping), both ends included.
    #[inline]
    pub(crate) fn top_to_bottom(&self, n: usize) -> Span {
        Span {
            start: self.top,
            len: (self.bottom + n - self.top) % n + 1,
        }
    }

    /// Span from `bottom` forward to `top` (wrapping), both ends included.
    #[inline]
    pub(crate) fn bottom_to_top(&self, n: usize) -> Span {
        Span {
            start: self.bottom,
            len: (self.top + n - self.bottom) % n + 1,
        }
    }
}

/// Contiguous (cyclic) index range of the vertex ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub len: usize,
}

/// Read-only view of a chain over the vertex ring.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChainView<'a> {
    ring: &'a [Vector2<f64>],
    span: Span,
    reversed: bool,
}

impl<'a> ChainView<'a> {
    #[inline]
    pub(crate) fn new(ring: &'a [Vector2<f64>], span: Span, reversed: bool) -> Self {
        Self {
            ring,
            span,
            reversed,
        }
    }

    /// Whole slice, front to back (no wrap).
    #[cfg(test)]
    pub(crate) fn linear(verts: &'a [Vector2<f64>]) -> Self {
        Self::new(
            verts,
            Span {
                start: 0,
                len: verts.len(),
            },
            false,
        )
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.span.len
    }

    #[inline]
    pub(crate) fn at(&self, i: usize) -> Vector2<f64> {
        let k = if self.reversed {
            self.span.len - 1 - i
        } else {
            i
        };
        self.ring[(self.span.start + k) % self.ring.len()]
    }

    pub(crate) fn to_vec(self) -> Vec<Vector2<f64>> {
        (0..self.len()).map(|i| self.at(i)).collect()
    }
}

/// Which boundary a chain represents, and therefore which side is interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChainKind {
    /// Runs top → bottom; the interior lies to its left.
    Right,
    /// Runs bottom → top; the interior lies to its right.
    Left,
}

impl ChainKind {
    /// Whether the final edge classification puts the point on the interior side
    /// (or on the rim).
    #[inline]
    pub(crate) fn accepts(self, class: EdgeClass) -> bool {
        match (self, class) {
            (_, EdgeClass::Rim) => true,
            (_, EdgeClass::Off) => false,
            (_, EdgeClass::Side(Side::Inline)) => true,
            (ChainKind::Right, EdgeClass::Side(s)) => s == Side::Left,
            (ChainKind::Left, EdgeClass::Side(s)) => s == Side::Right,
        }
    }

    /// `p.y` falls into `c[lo..=mid]`.
    #[inline]
    fn in_first_half(self, y: f64, first: f64, mid: f64) -> bool {
        match self {
            ChainKind::Right => y <= first && y > mid,
            ChainKind::Left => y >= first && y <= mid,
        }
    }

    /// `p.y` falls into `c[mid..=hi]`.
    #[inline]
    fn in_second_half(self, y: f64, mid: f64, last: f64) -> bool {
        match self {
            ChainKind::Right => y <= mid && y >= last,
            ChainKind::Left => y > mid && y <= last,
        }
    }
}

/// Narrow `chain` to the edge bracketing `p.y` and classify `p` against it.
///
/// Returns `None` when `p.y` lies outside the chain's y-range (or the chain has
/// fewer than two vertices). The bracket pairs `<=`/`>` and `<=`/`>=` (mirrored
/// for `Left`) split every level's y-range into two halves without gap or overlap.
pub(crate) fn narrow(
    chain: &ChainView<'_>,
    kind: ChainKind,
    p: Vector2<f64>,
    eps: f64,
) -> Option<EdgeClass> {
    if chain.len() < 2 {
        return None;
    }
    let mut lo = 0usize;
    let mut hi = chain.len() - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo + 1) / 2;
        let (first, m, last) = (chain.at(lo).y, chain.at(mid).y, chain.at(hi).y);
        if kind.in_first_half(p.y, first, m) {
            hi = mid;
        } else if kind.in_second_half(p.y, m, last) {
            lo = mid;
        } else {
            return None;
        }
    }
    Some(classify_edge_eps(p, chain.at(lo), chain.at(hi), eps))
}
