use anyhow::{Context, Result};
use citynet::prelude::{
    radial_mesh, MeshCfg, Point, PointSet, PolarAnchor, Scene, SceneCfg, Viewport,
    DEFAULT_ANGLE_EPS,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::write_sidecar;

#[derive(Parser)]
#[command(name = "citynet-cli")]
#[command(about = "Scatter cities, build the radial net, and emit the polar tour")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a scene and write it as JSON (stdout if --out is omitted)
    Scene {
        #[command(flatten)]
        args: SceneArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the radial net around a given centroid
    Mesh {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cx: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cy: f64,
        #[arg(long, default_value_t = 1)]
        rings: usize,
        #[arg(long, default_value_t = 4)]
        per_ring: usize,
        #[arg(long, default_value_t = 50.0)]
        radius_increment: f64,
    },
    /// Print version and code revision
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AnchorArg {
    Point,
    NearestNet,
}

impl From<AnchorArg> for PolarAnchor {
    fn from(a: AnchorArg) -> Self {
        match a {
            AnchorArg::Point => PolarAnchor::Point,
            AnchorArg::NearestNet => PolarAnchor::NearestNet,
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
struct SceneArgs {
    #[arg(long, default_value_t = 30)]
    cities: usize,
    /// Ring count; defaults to the city count
    #[arg(long)]
    rings: Option<usize>,
    /// Points per ring; defaults to twice the city count
    #[arg(long)]
    per_ring: Option<usize>,
    #[arg(long, default_value_t = 50.0)]
    radius_increment: f64,
    #[arg(long, default_value_t = 0.99)]
    coverage: f64,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    #[arg(long, default_value_t = DEFAULT_ANGLE_EPS)]
    angle_eps: f64,
    #[arg(long, value_enum, default_value_t = AnchorArg::Point)]
    anchor: AnchorArg,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl SceneArgs {
    fn to_cfg(&self) -> (SceneCfg, Viewport) {
        let mut cfg = SceneCfg::for_city_count(self.cities);
        cfg.scatter.coverage = self.coverage;
        if let Some(r) = self.rings {
            cfg.mesh.rings = r;
        }
        if let Some(p) = self.per_ring {
            cfg.mesh.points_per_ring = p;
        }
        cfg.mesh.radius_increment = self.radius_increment;
        cfg.tour.angle_eps = self.angle_eps;
        cfg.anchor = self.anchor.into();
        let viewport = Viewport {
            width: self.width,
            height: self.height,
        };
        (cfg, viewport)
    }

    fn params_json(&self, cfg: &SceneCfg) -> serde_json::Value {
        serde_json::json!({
            "cities": cfg.scatter.count,
            "coverage": cfg.scatter.coverage,
            "viewport": [self.width, self.height],
            "rings": cfg.mesh.rings,
            "per_ring": cfg.mesh.points_per_ring,
            "radius_increment": cfg.mesh.radius_increment,
            "angle_eps": cfg.tour.angle_eps,
            "anchor": format!("{:?}", self.anchor),
        })
    }
}

type Xy = [f64; 2];

#[derive(Serialize)]
struct SceneDoc {
    viewport: Xy,
    centroid: Option<Xy>,
    tour_length: f64,
    cities: Vec<Xy>,
    net: Vec<Xy>,
    tour: Vec<Xy>,
    segments: Vec<[Xy; 2]>,
}

impl SceneDoc {
    fn from_scene(scene: &Scene) -> Self {
        let frame = scene.frame();
        Self {
            viewport: [scene.viewport.width, scene.viewport.height],
            centroid: scene.centroid.map(|c| c.to_array()),
            tour_length: scene.tour.length(),
            cities: sorted_xy(&scene.cities),
            net: sorted_xy(&scene.net),
            tour: scene.tour.stops().iter().map(Point::to_array).collect(),
            segments: frame
                .segments
                .iter()
                .map(|(a, b)| [a.to_array(), b.to_array()])
                .collect(),
        }
    }
}

// Stable output order for hash-ordered sets.
fn sorted_xy<P>(set: &PointSet<P>) -> Vec<Xy> {
    let mut v: Vec<Xy> = set.points().map(|p| p.to_array()).collect();
    v.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    v
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Scene { args, out } => scene(&args, out.as_deref()),
        Action::Mesh {
            cx,
            cy,
            rings,
            per_ring,
            radius_increment,
        } => mesh(Point::xy(cx, cy), rings, per_ring, radius_increment),
        Action::Report => report(),
    }
}

fn scene(args: &SceneArgs, out: Option<&Path>) -> Result<()> {
    let (cfg, viewport) = args.to_cfg();
    tracing::info!(cities = args.cities, seed = args.seed, "scene");
    let scene = Scene::generate_seeded(&cfg, viewport, args.seed)?;
    let doc = SceneDoc::from_scene(&scene);
    let body = serde_json::to_vec_pretty(&doc)?;
    match out {
        None => println!("{}", String::from_utf8_lossy(&body)),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, &body).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = write_sidecar(path, args.seed, args.params_json(&cfg))?;
            tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote scene");
        }
    }
    Ok(())
}

fn mesh(centroid: Point, rings: usize, per_ring: usize, radius_increment: f64) -> Result<()> {
    let cfg = MeshCfg {
        rings,
        points_per_ring: per_ring,
        radius_increment,
        ..MeshCfg::default()
    };
    tracing::info!(%centroid, rings, per_ring, radius_increment, "mesh");
    let net = radial_mesh(centroid, &cfg)?;
    println!("{}", serde_json::to_string_pretty(&sorted_xy(&net))?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "crate_version": citynet::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(cities: usize) -> SceneArgs {
        SceneArgs {
            cities,
            rings: Some(2),
            per_ring: Some(6),
            radius_increment: 40.0,
            coverage: 0.9,
            width: 300.0,
            height: 200.0,
            angle_eps: DEFAULT_ANGLE_EPS,
            anchor: AnchorArg::Point,
            seed: 17,
        }
    }

    #[test]
    fn args_map_onto_cfg() {
        let (cfg, vp) = args(10).to_cfg();
        assert_eq!(cfg.scatter.count, 10);
        assert_eq!(cfg.mesh.rings, 2);
        assert_eq!(cfg.mesh.points_per_ring, 6);
        assert_eq!(cfg.anchor, PolarAnchor::Point);
        assert_eq!(vp.width, 300.0);
    }

    #[test]
    fn doc_lists_closed_tour() {
        let a = args(8);
        let (cfg, vp) = a.to_cfg();
        let scene = Scene::generate_seeded(&cfg, vp, a.seed).unwrap();
        let doc = SceneDoc::from_scene(&scene);
        assert_eq!(doc.cities.len(), 8);
        assert_eq!(doc.net.len(), 1 + 2 * 6);
        assert_eq!(doc.tour.len(), 8);
        assert_eq!(doc.segments.len(), 8);
        for (i, a) in doc.tour.iter().enumerate() {
            let b = doc.tour[(i + 1) % doc.tour.len()];
            assert!(doc.segments.iter().any(|s| *s == [*a, b] || *s == [b, *a]));
        }
    }

    #[test]
    fn scene_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("scene.json");
        scene(&args(5), Some(out.as_path())).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["tour"].as_array().unwrap().len(), 5);
        let sidecar = out.with_file_name("scene.provenance.json");
        let prov: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["seed"], 17);
        assert_eq!(prov["params"]["cities"], 5);
    }

    #[test]
    fn invalid_args_surface_as_errors() {
        let mut a = args(5);
        a.coverage = 1.5;
        assert!(scene(&a, None).is_err());
    }
}
