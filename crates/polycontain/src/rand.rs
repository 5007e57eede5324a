//! Random convex polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Reproducible convex rings for property tests and benchmarks of the
//!   containment query, in either orientation and with any starting vertex.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, then orient and rotate the ring.
//! - A replay token `(seed, index)` is the whole RNG seed, so every draw can be
//!   regenerated from the pair alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::convex_hull;
use crate::polygon::ConvexPolygon;

/// Sampler configuration for jittered rings around `center`.
///
/// Vertex `k` sits at angle `phase + k·2π/n` (shifted by up to
/// `angle_jitter_frac` of the spacing) and radius `base_radius·(1 ± radial_jitter)`.
/// `n` is drawn uniformly from `min_vertices..=max_vertices` (at least 3).
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub angle_jitter_frac: f64,
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Hull order is counterclockwise; `true` reverses it.
    pub clockwise: bool,
    /// Start the ring at a random vertex instead of the hull's leftmost one.
    pub random_start: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            clockwise: true,
            random_start: true,
        }
    }
}

impl RadialCfg {
    fn vertex_count<R: Rng>(&self, rng: &mut R) -> usize {
        let lo = self.min_vertices.max(3);
        rng.gen_range(lo..=self.max_vertices.max(lo))
    }
}

/// `(seed, index)` pair naming one draw of a reproducible stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Both halves go into the 32-byte seed verbatim, so distinct tokens never share a stream.
    pub fn to_std_rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw a random convex polygon around `cfg.center`.
///
/// Returns `None` only if the hull collapses below three vertices, which the
/// clamped jitter makes practically impossible for `n >= 3`.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<ConvexPolygon> {
    let mut rng = tok.to_std_rng();
    let ring = draw_ring(cfg, &mut rng)?;
    ConvexPolygon::new(ring).ok()
}

/// Same as [`draw_convex_polygon`] but returns the raw vertex ring.
pub fn draw_ring<R: Rng>(cfg: RadialCfg, rng: &mut R) -> Option<Vec<Vector2<f64>>> {
    let n = cfg.vertex_count(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let mut ring = convex_hull(&pts)?;
    if cfg.clockwise {
        ring.reverse();
    }
    if cfg.random_start {
        let k = rng.gen_range(0..ring.len());
        ring.rotate_left(k);
    }
    Some(ring)
}

/// Axis-aligned bounds `(min, max)` of a vertex ring.
pub fn bounds(ring: &[Vector2<f64>]) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let first = *ring.first()?;
    Some(ring.iter().fold((first, first), |(lo, hi), p| {
        (
            Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
