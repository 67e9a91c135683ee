//! Radial net around a centroid.
//!
//! The net is the centroid plus `rings` concentric rings; ring `j` (1-based)
//! has radius `j·Δ` and `points_per_ring` points at angles `i·2π/P`, `i = 0..P`.
//! Output is a pure function of `(centroid, cfg)`.

use std::f64::consts::TAU;

use crate::error::{CoreError, Result};
use crate::point_set::{Marker, PointSet};
use crate::vector::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCfg {
    pub rings: usize,
    pub points_per_ring: usize,
    pub radius_increment: f64,
    /// Side of the centered net marker.
    pub marker_size: u32,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self::for_city_count(30)
    }
}

impl MeshCfg {
    /// Net sized from the city count: `n` rings of `2n` points, 50 apart.
    /// At least one point per ring, so `n = 0` still validates.
    pub fn for_city_count(n: usize) -> Self {
        Self {
            rings: n,
            points_per_ring: n.saturating_mul(2).max(1),
            radius_increment: 50.0,
            marker_size: 5,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.points_per_ring == 0 {
            return Err(CoreError::invalid("points_per_ring must be >= 1"));
        }
        if !(self.radius_increment.is_finite() && self.radius_increment > 0.0) {
            return Err(CoreError::invalid("radius_increment must be finite and > 0"));
        }
        if self
            .rings
            .checked_mul(self.points_per_ring)
            .and_then(|n| n.checked_add(1))
            .is_none()
        {
            return Err(CoreError::invalid("rings * points_per_ring overflows usize"));
        }
        Ok(())
    }

    /// Expected point count before any coordinate coincidence: `1 + R·P`.
    /// Saturates for configs that `validate` rejects.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.rings
            .saturating_mul(self.points_per_ring)
            .saturating_add(1)
    }
}

/// Ring points only (no centroid), in ring-major, angle-minor order.
pub fn ring_points(centroid: Point, cfg: &MeshCfg) -> Result<Vec<Point>> {
    cfg.validate()?;
    let step = TAU / cfg.points_per_ring as f64;
    let mut out = Vec::with_capacity(cfg.rings * cfg.points_per_ring);
    for j in 1..=cfg.rings {
        let radius = j as f64 * cfg.radius_increment;
        for i in 0..cfg.points_per_ring {
            let theta = i as f64 * step;
            out.push(Point::xy(
                centroid.x() + radius * theta.cos(),
                centroid.y() + radius * theta.sin(),
            ));
        }
    }
    Ok(out)
}

/// Full net: centroid plus every ring point, each with a centered marker.
pub fn radial_mesh(centroid: Point, cfg: &MeshCfg) -> Result<PointSet> {
    let rings = ring_points(centroid, cfg)?;
    let mut net = PointSet::with_capacity(rings.len() + 1);
    net.insert(centroid, Marker::centered(centroid, cfg.marker_size));
    for p in rings {
        net.insert(p, Marker::centered(p, cfg.marker_size));
    }
    tracing::debug!(
        rings = cfg.rings,
        per_ring = cfg.points_per_ring,
        points = net.len(),
        "radial_mesh"
    );
    Ok(net)
}
