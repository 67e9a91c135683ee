//! Closed tours by polar sort around a centroid.
//!
//! Model
//! - Each point gets a `PolarKey`: angle `atan2(dy, dx)` in (−π, π] and radius
//!   `|p − c|`, measured from the centroid `c`.
//! - Order by angle; keys whose angle lies within `angle_eps` of the first key
//!   of their run count as collinear and are ordered by radius instead.
//! - The tour is closed: the last stop connects back to the first.
//!
//! Ordering detail
//! - A pairwise "equal within eps" comparator is not transitive, so sorting
//!   with it is ill-defined. We sort totally by (angle, radius, x, y), then cut
//!   the sequence into runs anchored at each run's smallest angle and re-sort
//!   every run by (radius, angle, x, y). The result is independent of the hash
//!   order of the input set.
//! - Runs do not wrap across the ±π seam.

use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::error::{CoreError, Result};
use crate::nearest::nearest_point;
use crate::point_set::PointSet;
use crate::vector::Point;

pub const DEFAULT_ANGLE_EPS: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourCfg {
    /// Angular tolerance below which two keys are treated as collinear.
    pub angle_eps: f64,
}

impl Default for TourCfg {
    fn default() -> Self {
        Self {
            angle_eps: DEFAULT_ANGLE_EPS,
        }
    }
}

impl TourCfg {
    pub fn validate(&self) -> Result<()> {
        if !(self.angle_eps.is_finite() && self.angle_eps >= 0.0) {
            return Err(CoreError::invalid("angle_eps must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Where a point's polar key is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolarAnchor {
    /// At the point itself.
    #[default]
    Point,
    /// At the net point nearest to it.
    NearestNet,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarKey {
    pub point: Point,
    pub angle: f64,
    pub radius: f64,
}

impl PolarKey {
    #[inline]
    pub fn around(point: Point, centroid: Point) -> Self {
        Self::measured_at(point, point, centroid)
    }

    /// Key for `point` using the polar coordinates of `at`.
    pub fn measured_at(point: Point, at: Point, centroid: Point) -> Self {
        let d = at - centroid;
        Self {
            point,
            angle: polar_angle(d.x(), d.y()),
            radius: d.norm(),
        }
    }
}

/// `atan2` folded into (−π, π].
#[inline]
pub fn polar_angle(dx: f64, dy: f64) -> f64 {
    let a = dy.atan2(dx);
    if a <= -PI {
        PI
    } else {
        a
    }
}

#[inline]
fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y()))
}

/// Sort keys in tour order (see module docs).
pub fn sort_polar(keys: &mut [PolarKey], angle_eps: f64) {
    keys.sort_by(|a, b| {
        a.angle
            .total_cmp(&b.angle)
            .then(a.radius.total_cmp(&b.radius))
            .then_with(|| cmp_xy(&a.point, &b.point))
    });
    let mut start = 0;
    while start < keys.len() {
        let head = keys[start].angle;
        let mut end = start + 1;
        while end < keys.len() && keys[end].angle - head < angle_eps {
            end += 1;
        }
        if end - start > 1 {
            keys[start..end].sort_by(|a, b| {
                a.radius
                    .total_cmp(&b.radius)
                    .then(a.angle.total_cmp(&b.angle))
                    .then_with(|| cmp_xy(&a.point, &b.point))
            });
        }
        start = end;
    }
}

/// Closed visiting order over a point set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tour {
    stops: Vec<Point>,
}

impl Tour {
    pub fn from_stops(stops: Vec<Point>) -> Self {
        Self { stops }
    }

    #[inline]
    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consecutive pairs including the closing edge `last → first`.
    /// A tour of fewer than two stops has no edges.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.stops.len() < 2 {
            0
        } else {
            self.stops.len()
        };
        (0..n).map(move |i| (self.stops[i], self.stops[(i + 1) % n]))
    }

    /// Perimeter of the closed polygon.
    pub fn length(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(&b)).sum()
    }

    /// Predecessor and successor of `p` on the cycle.
    pub fn neighbors(&self, p: &Point) -> Option<(Point, Point)> {
        let n = self.stops.len();
        if n < 2 {
            return None;
        }
        let i = self.stops.iter().position(|q| q == p)?;
        Some((self.stops[(i + n - 1) % n], self.stops[(i + 1) % n]))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PolarTourBuilder {
    cfg: TourCfg,
}

impl PolarTourBuilder {
    pub fn new(cfg: TourCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Tour over `points` around `centroid` (or their own centroid when `None`).
    pub fn build<P>(&self, points: &PointSet<P>, centroid: Option<Point>) -> Result<Tour> {
        if points.is_empty() {
            return Ok(Tour::default());
        }
        let c = match centroid {
            Some(c) => c,
            None => points.centroid()?,
        };
        let keys = points.points().map(|p| PolarKey::around(p, c)).collect();
        Ok(self.finish(keys))
    }

    /// Like [`build`](Self::build), but each key is measured at the point's
    /// nearest net point. Points without a net partner keep their own key.
    pub fn build_anchored<P, Q>(
        &self,
        points: &PointSet<P>,
        net: &PointSet<Q>,
        centroid: Option<Point>,
    ) -> Result<Tour> {
        if points.is_empty() {
            return Ok(Tour::default());
        }
        let c = match centroid {
            Some(c) => c,
            None => points.centroid()?,
        };
        let keys = points
            .points()
            .map(|p| {
                let at = nearest_point(p, net).unwrap_or(p);
                PolarKey::measured_at(p, at, c)
            })
            .collect();
        Ok(self.finish(keys))
    }

    fn finish(&self, mut keys: Vec<PolarKey>) -> Tour {
        sort_polar(&mut keys, self.cfg.angle_eps);
        Tour::from_stops(keys.into_iter().map(|k| k.point).collect())
    }
}

/// Default-tolerance tour around the set's own centroid.
pub fn polar_tour<P>(points: &PointSet<P>) -> Result<Tour> {
    PolarTourBuilder::default().build(points, None)
}
