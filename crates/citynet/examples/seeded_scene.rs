//! Seeded scene probe.
//!
//! Generates one scene with the default configuration, then prints the tour
//! and timings for the pipeline stages. Useful for eyeballing tour quality
//! without a renderer.

use std::time::Instant;

use citynet::prelude::*;

fn main() {
    let cfg = SceneCfg::default();
    let viewport = Viewport::default();

    let start = Instant::now();
    let scene = Scene::generate_seeded(&cfg, viewport, 2024).expect("default scene is valid");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    let frame = scene.frame();
    println!(
        "cities={} net={} segments={}",
        scene.cities.len(),
        scene.net.len(),
        frame.segments.len()
    );
    if let Some(c) = scene.centroid {
        println!("centroid={c}");
    }
    println!("tour_length={:.3}", scene.tour.length());
    println!("scene_time_ms={elapsed:.3}");
    for (i, p) in scene.tour.stops().iter().enumerate() {
        let key = PolarKey::around(*p, scene.centroid.unwrap_or_else(Point::zeros));
        println!("{i:>3} {p} angle={:.4} radius={:.2}", key.angle, key.radius);
    }
}
