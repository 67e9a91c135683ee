//! Undirected point graph stored as per-endpoint neighbor lists.
//!
//! `connect(a, b)` appends `b` to `a`'s list and `a` to `b`'s list. Nothing is
//! deduplicated: repeated connects add repeated entries, and `connect(a, a)`
//! appends `a` to its own list twice. Edges are never removed.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::tour::Tour;
use crate::vector::Point;

#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    adj: HashMap<Point, Vec<Point>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect consecutive tour stops, including the closing edge.
    pub fn from_tour(tour: &Tour) -> Self {
        let mut g = Self::new();
        for p in tour.stops() {
            g.add_point(*p);
        }
        for (a, b) in tour.edges() {
            g.connect(a, b);
        }
        g
    }

    /// Ensure `p` has a (possibly empty) neighbor list.
    pub fn add_point(&mut self, p: Point) {
        self.adj.entry(p).or_default();
    }

    pub fn connect(&mut self, a: Point, b: Point) {
        self.adj.entry(a).or_default().push(b);
        self.adj.entry(b).or_default().push(a);
    }

    /// Neighbors of `p` in insertion order; empty if `p` is unknown.
    pub fn neighbors(&self, p: &Point) -> &[Point] {
        self.adj.get(p).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.adj.contains_key(p)
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.adj.len()
    }

    /// Stored half-edges; twice the number of `connect` calls.
    pub fn half_edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    /// Every stored `(point, neighbor)` half-edge. An undirected edge shows up
    /// once from each endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.adj
            .iter()
            .flat_map(|(p, ns)| ns.iter().map(move |q| (*p, *q)))
    }

    /// Each distinct undirected edge once, as `(lo, hi)` in coordinate order,
    /// sorted. This is what a renderer draws.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut out: Vec<(Point, Point)> = self
            .edges()
            .filter(|(a, b)| xy_cmp(a, b) != Ordering::Greater)
            .collect();
        out.sort_by(|(a0, a1), (b0, b1)| xy_cmp(a0, b0).then_with(|| xy_cmp(a1, b1)));
        out.dedup();
        out
    }
}

fn xy_cmp(a: &Point, b: &Point) -> Ordering {
    a.x().total_cmp(&b.x()).then_with(|| a.y().total_cmp(&b.y()))
}
