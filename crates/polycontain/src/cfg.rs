//! Tolerance defaults (internal policy, exported for callers).
//!
//! Policy
//! - The exact query (`is_on_polygon`) uses no tolerance at all; these values
//!   only feed the `_eps` variant and the test suite.

/// Suggested slack for points that were computed to lie on the boundary
/// (edge interpolation, transformed vertices) at O(1) coordinate scales.
pub const BOUNDARY_EPS: f64 = 1e-9;

/// Minimum |cross| for the hull to keep a turn; smaller turns count as collinear.
pub(crate) const HULL_TURN_EPS: f64 = 1e-12;
