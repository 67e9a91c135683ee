//! Random city placement inside a viewport.
//!
//! Model
//! - `count` points drawn uniformly from `[0, coverage·width] × [0, coverage·height]`.
//!   The coverage factor keeps a margin so corner markers stay on screen.
//! - The caller owns the RNG; there is no process-wide seed. `scatter_seeded`
//!   is the reproducible entry point.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, Result};
use crate::point_set::{Marker, PointSet};
use crate::vector::Point;

/// Drawable area supplied by the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(CoreError::invalid("viewport must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CoreError::invalid("viewport must have positive size"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    /// Side of the square city marker, anchored at its top-left corner.
    pub marker_size: u32,
    /// Fraction of the viewport used for placement, in (0, 1].
    pub coverage: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 30,
            marker_size: 8,
            coverage: 0.99,
        }
    }
}

impl ScatterCfg {
    pub fn validate(&self) -> Result<()> {
        if !(self.coverage > 0.0 && self.coverage <= 1.0) {
            return Err(CoreError::invalid("coverage must lie in (0, 1]"));
        }
        Ok(())
    }
}

/// Draw cities. Coincident draws collapse into one entry, so the result may
/// hold fewer than `cfg.count` points.
pub fn scatter_cities<R: Rng>(
    rng: &mut R,
    cfg: &ScatterCfg,
    viewport: Viewport,
) -> Result<PointSet> {
    cfg.validate()?;
    viewport.validate()?;
    let max_x = viewport.width * cfg.coverage;
    let max_y = viewport.height * cfg.coverage;
    let mut cities = PointSet::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        let p = Point::xy(rng.gen_range(0.0..=max_x), rng.gen_range(0.0..=max_y));
        cities.insert(p, Marker::at_corner(p, cfg.marker_size));
    }
    tracing::debug!(requested = cfg.count, placed = cities.len(), "scatter_cities");
    Ok(cities)
}

/// Same as [`scatter_cities`] with a fresh `StdRng` from `seed`.
pub fn scatter_seeded(cfg: &ScatterCfg, viewport: Viewport, seed: u64) -> Result<PointSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    scatter_cities(&mut rng, cfg, viewport)
}
