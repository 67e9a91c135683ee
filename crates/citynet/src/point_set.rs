//! Point sets keyed by exact coordinates.
//!
//! - `Marker`: axis-aligned box the renderer fills for a point. The core only
//!   builds it; pixel semantics belong to the collaborator.
//! - `PointSet`: `Point → payload` map. Re-inserting a coordinate overwrites its
//!   payload. Iteration order is unspecified; callers needing an order sort.

use std::collections::hash_map::{self, HashMap};

use crate::error::{CoreError, Result};
use crate::vector::Point;

/// Integer pixel box `(x, y, w, h)`; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Marker {
    /// Square whose top-left corner sits on `p` (city style).
    #[inline]
    pub fn at_corner(p: Point, size: u32) -> Self {
        Self {
            x: p.x() as i32,
            y: p.y() as i32,
            w: size,
            h: size,
        }
    }

    /// Square centered on `p` (net style).
    #[inline]
    pub fn centered(p: Point, size: u32) -> Self {
        let half = (size / 2) as i32;
        Self {
            x: p.x() as i32 - half,
            y: p.y() as i32 - half,
            w: size,
            h: size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PointSet<P = Marker> {
    entries: HashMap<Point, P>,
}

impl<P> Default for PointSet<P> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<P> PointSet<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(n),
        }
    }

    /// Insert or overwrite. Returns the payload previously stored at `point`.
    pub fn insert(&mut self, point: Point, payload: P) -> Option<P> {
        self.entries.insert(point, payload)
    }

    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.entries.contains_key(point)
    }

    #[inline]
    pub fn get(&self, point: &Point) -> Option<&P> {
        self.entries.get(point)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Point, P> {
        self.entries.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.entries.keys().copied()
    }

    pub fn payloads(&self) -> impl Iterator<Item = &P> + '_ {
        self.entries.values()
    }

    /// Arithmetic mean of the keys. Recomputed on every call.
    ///
    /// Sums in coordinate order, so the result does not depend on hash order.
    pub fn centroid(&self) -> Result<Point> {
        let mut pts: Vec<Point> = self.points().collect();
        pts.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
        centroid_of(pts)
    }
}

/// Mean of a sequence of points; `EmptySet` for an empty sequence.
pub fn centroid_of(points: impl IntoIterator<Item = Point>) -> Result<Point> {
    let (sum, n) = points
        .into_iter()
        .fold((Point::zeros(), 0usize), |(s, n), p| (s + p, n + 1));
    if n == 0 {
        return Err(CoreError::EmptySet { what: "centroid" });
    }
    Ok(Point::from(*sum.as_svector() / n as f64))
}

impl<P> FromIterator<(Point, P)> for PointSet<P> {
    fn from_iter<I: IntoIterator<Item = (Point, P)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<P> Extend<(Point, P)> for PointSet<P> {
    fn extend<I: IntoIterator<Item = (Point, P)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, P> IntoIterator for &'a PointSet<P> {
    type Item = (&'a Point, &'a P);
    type IntoIter = hash_map::Iter<'a, Point, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
