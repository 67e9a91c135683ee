//! Nearest-point lookup by linear scan.
//!
//! A candidate equal to the query is skipped. Ties keep the first candidate
//! seen; over a `PointSet` that order is hash order, so ties are not
//! reproducible across sets built differently.

use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::point_set::PointSet;
use crate::vector::Point;

/// Closest candidate other than `query`, with its distance.
pub fn nearest_with_distance(
    query: Point,
    candidates: impl IntoIterator<Item = Point>,
) -> Result<(Point, f64)> {
    let mut best: Option<(Point, f64)> = None;
    for p in candidates {
        if p == query {
            continue;
        }
        let d = query.distance(&p);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((p, d)),
        }
    }
    best.ok_or(CoreError::NoCandidates)
}

/// Closest point of `set` to `query`, excluding `query` itself.
pub fn nearest_point<P>(query: Point, set: &PointSet<P>) -> Result<Point> {
    nearest_with_distance(query, set.points()).map(|(p, _)| p)
}

/// Map every point of `from` to its nearest point in `onto`.
///
/// Points with no eligible partner (only possible when `onto` holds nothing
/// but that point) are left out.
pub fn snap_to_net<A, B>(from: &PointSet<A>, onto: &PointSet<B>) -> HashMap<Point, Point> {
    from.points()
        .filter_map(|p| nearest_point(p, onto).ok().map(|q| (p, q)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(points: &[(f64, f64)]) -> PointSet<()> {
        points.iter().map(|&(x, y)| (Point::xy(x, y), ())).collect()
    }

    #[test]
    fn picks_closest() {
        let s = set(&[(0.0, 0.0), (5.0, 5.0), (1.0, 1.0)]);
        let q = Point::xy(2.0, 2.0);
        assert_eq!(nearest_point(q, &s), Ok(Point::xy(1.0, 1.0)));
    }

    #[test]
    fn skips_self() {
        let s = set(&[(0.0, 0.0), (3.0, 4.0)]);
        let q = Point::xy(0.0, 0.0);
        let (p, d) = nearest_with_distance(q, s.points()).unwrap();
        assert_eq!(p, Point::xy(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn only_self_is_no_candidates() {
        let s = set(&[(1.0, 1.0)]);
        assert_eq!(
            nearest_point(Point::xy(1.0, 1.0), &s),
            Err(CoreError::NoCandidates)
        );
        let empty = set(&[]);
        assert_eq!(
            nearest_point(Point::zeros(), &empty),
            Err(CoreError::NoCandidates)
        );
    }

    #[test]
    fn first_of_ties_wins_in_scan_order() {
        let q = Point::zeros();
        let cands = [Point::xy(1.0, 0.0), Point::xy(0.0, 1.0), Point::xy(-1.0, 0.0)];
        let (p, _) = nearest_with_distance(q, cands).unwrap();
        assert_eq!(p, Point::xy(1.0, 0.0));
    }

    #[test]
    fn snap_maps_each_point() {
        let cities = set(&[(0.1, 0.0), (9.0, 9.5)]);
        let net = set(&[(0.0, 0.0), (10.0, 10.0), (5.0, 5.0)]);
        let snapped = snap_to_net(&cities, &net);
        assert_eq!(snapped.len(), 2);
        assert_eq!(snapped[&Point::xy(0.1, 0.0)], Point::xy(0.0, 0.0));
        assert_eq!(snapped[&Point::xy(9.0, 9.5)], Point::xy(10.0, 10.0));
    }
}
