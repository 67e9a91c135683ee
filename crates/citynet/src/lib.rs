//! City scatter, radial net, and polar tours in 2D.
//!
//! Pipeline
//! - `scatter`: random cities inside a viewport.
//! - `mesh`: concentric rings ("net") around the cities' centroid.
//! - `nearest`: nearest-point lookup (cities → net).
//! - `tour`: closed tour by angle-then-radius sort around the centroid.
//! - `graph`: undirected adjacency lists for drawn connections.
//! - `scene`: runs the pipeline and emits a `Frame` for a renderer.
//!
//! Rendering itself is not part of this crate; callers draw `Frame`s.

pub mod error;
pub mod graph;
pub mod mesh;
pub mod nearest;
pub mod point_set;
pub mod scatter;
pub mod scene;
pub mod tour;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{CoreError, Result};
pub use vector::{FixedVector, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{CoreError, Result};
    pub use crate::graph::AdjacencyGraph;
    pub use crate::mesh::{radial_mesh, ring_points, MeshCfg};
    pub use crate::nearest::{nearest_point, nearest_with_distance, snap_to_net};
    pub use crate::point_set::{centroid_of, Marker, PointSet};
    pub use crate::scatter::{scatter_cities, scatter_seeded, ScatterCfg, Viewport};
    pub use crate::scene::{Frame, Scene, SceneCfg};
    pub use crate::tour::{
        polar_tour, sort_polar, PolarAnchor, PolarKey, PolarTourBuilder, Tour, TourCfg,
        DEFAULT_ANGLE_EPS,
    };
    pub use crate::vector::{FixedVector, Point};
}
