//! One generation pass and the per-frame draw list.
//!
//! `Scene` runs the whole pipeline once: scatter cities, take their centroid,
//! build the net, snap cities to the net, order the tour, record its edges.
//! `Frame` is what a renderer consumes: filled markers and line segments.
//! Empty inputs are logged and leave the corresponding layers empty.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::graph::AdjacencyGraph;
use crate::mesh::{radial_mesh, MeshCfg};
use crate::nearest::snap_to_net;
use crate::point_set::{Marker, PointSet};
use crate::scatter::{scatter_cities, ScatterCfg, Viewport};
use crate::tour::{PolarAnchor, PolarTourBuilder, Tour, TourCfg};
use crate::vector::Point;

#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub scatter: ScatterCfg,
    pub mesh: MeshCfg,
    pub tour: TourCfg,
    pub anchor: PolarAnchor,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self::for_city_count(ScatterCfg::default().count)
    }
}

impl SceneCfg {
    /// Defaults with `n` cities and a net sized to match.
    pub fn for_city_count(n: usize) -> Self {
        Self {
            scatter: ScatterCfg {
                count: n,
                ..ScatterCfg::default()
            },
            mesh: MeshCfg::for_city_count(n),
            tour: TourCfg::default(),
            anchor: PolarAnchor::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.scatter.validate()?;
        self.mesh.validate()?;
        self.tour.validate()
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub viewport: Viewport,
    pub cities: PointSet,
    /// `None` when there are no cities.
    pub centroid: Option<Point>,
    pub net: PointSet,
    /// City → nearest net point.
    pub nearest_net: HashMap<Point, Point>,
    pub tour: Tour,
    pub graph: AdjacencyGraph,
}

impl Scene {
    pub fn generate<R: Rng>(rng: &mut R, cfg: &SceneCfg, viewport: Viewport) -> Result<Self> {
        cfg.validate()?;
        let cities = scatter_cities(rng, &cfg.scatter, viewport)?;
        Self::from_cities(cities, cfg, viewport)
    }

    pub fn generate_seeded(cfg: &SceneCfg, viewport: Viewport, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng, cfg, viewport)
    }

    /// Run the pipeline on an existing city set.
    pub fn from_cities(cities: PointSet, cfg: &SceneCfg, viewport: Viewport) -> Result<Self> {
        cfg.validate()?;
        let centroid = match cities.centroid() {
            Ok(c) => Some(c),
            Err(err) => {
                tracing::warn!(%err, "no points available to calculate the centroid");
                None
            }
        };
        let net = match centroid {
            Some(c) => radial_mesh(c, &cfg.mesh)?,
            None => PointSet::new(),
        };
        let nearest_net = snap_to_net(&cities, &net);
        let builder = PolarTourBuilder::new(cfg.tour)?;
        let tour = match cfg.anchor {
            PolarAnchor::Point => builder.build(&cities, centroid)?,
            PolarAnchor::NearestNet => builder.build_anchored(&cities, &net, centroid)?,
        };
        let graph = AdjacencyGraph::from_tour(&tour);
        tracing::info!(
            cities = cities.len(),
            net = net.len(),
            stops = tour.len(),
            tour_length = tour.length(),
            "scene generated"
        );
        Ok(Self {
            viewport,
            cities,
            centroid,
            net,
            nearest_net,
            tour,
            graph,
        })
    }

    /// Draw list for one frame. Missing cities skip everything; a missing net
    /// skips the net and the graph segments.
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::default();
        if self.cities.is_empty() {
            tracing::warn!("no cities to draw");
            return frame;
        }
        frame.city_markers = self.cities.payloads().copied().collect();
        if self.net.is_empty() {
            tracing::warn!("no net to draw");
            return frame;
        }
        frame.net_markers = self.net.payloads().copied().collect();
        frame.segments = self.graph.segments();
        frame
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub city_markers: Vec<Marker>,
    pub net_markers: Vec<Marker>,
    pub segments: Vec<(Point, Point)>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.city_markers.is_empty() && self.net_markers.is_empty() && self.segments.is_empty()
    }
}
